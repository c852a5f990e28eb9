use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::student::config::IdentifierConfig;
use crate::student::error::StudentError;
use crate::student::error::StudentError::{
    Database, EmailAlreadyRegistered, IdentifierConflict, UnknownStudent,
};
use crate::student::identifier::allocate_identifier;
use crate::tools::validation::{
    LONG_TEXT_MAX_LENGTH, SHORT_TEXT_MAX_LENGTH, Validate, ValidationError, non_blank,
    optional_phone, optional_text, require_email, require_text,
};
use diesel::SqliteConnection;
use dto::student::{ApplicationStatus, Student, StudentApplication, StudentToLookUp};

const MAX_YEAR_OF_STUDY: i32 = 10;

impl Validate for StudentApplication {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("first_name", self.first_name(), SHORT_TEXT_MAX_LENGTH)?;
        require_text("last_name", self.last_name(), SHORT_TEXT_MAX_LENGTH)?;
        require_email("email", self.email())?;
        optional_phone("phone", self.phone().as_deref())?;
        require_text("department", self.department(), SHORT_TEXT_MAX_LENGTH)?;
        if let Some(year_of_study) = self.year_of_study() {
            if !(1..=MAX_YEAR_OF_STUDY).contains(year_of_study) {
                return Err(ValidationError::new(
                    "year_of_study",
                    &format!("must be between 1 and {MAX_YEAR_OF_STUDY}"),
                ));
            }
        }
        optional_text("motivation", self.motivation().as_deref(), LONG_TEXT_MAX_LENGTH)
    }
}

/// Trim every field, lowercase the email address and drop blank optional fields,
/// so that stored values (and the email uniqueness) don't depend on how the form was typed.
fn normalize(application: &StudentApplication) -> StudentApplication {
    StudentApplication::new(
        application.first_name().trim().to_owned(),
        application.last_name().trim().to_owned(),
        application.email().trim().to_lowercase(),
        non_blank(application.phone().as_deref()).map(str::to_owned),
        application.department().trim().to_owned(),
        *application.year_of_study(),
        non_blank(application.motivation().as_deref()).map(str::to_owned),
    )
}

/// Register a new membership application.
/// The student is created as pending, with a freshly allocated identifier.
pub fn create_student(
    connection: &mut SqliteConnection,
    config: &IdentifierConfig,
    application: &StudentApplication,
) -> Result<Student, StudentError> {
    application.validate()?;
    let application = normalize(application);

    if dao::student::email_exists(connection, application.email())? {
        debug!("Email already registered [email: {}]", application.email());
        return Err(EmailAlreadyRegistered);
    }

    let identifier = allocate_identifier(connection, config)?;
    persist_student(connection, &identifier, &application)
}

/// Write the student with an identifier allocated beforehand.
/// Losing the race against a concurrent application is reported as [IdentifierConflict].
fn persist_student(
    connection: &mut SqliteConnection,
    identifier: &str,
    application: &StudentApplication,
) -> Result<Student, StudentError> {
    dao::student::insert(connection, identifier, application).map_err(|error| {
        if error.is_unique_violation_on("student.identifier") {
            warn!("Student identifier taken by a concurrent application [identifier: {identifier}]");
            IdentifierConflict(identifier.to_owned())
        } else if error.is_unique_violation_on("student.email") {
            EmailAlreadyRegistered
        } else {
            Database(error)
        }
    })
}

/// Tell a student where their application stands.
/// Both the identifier and the email address have to match.
pub fn look_up_status(
    connection: &mut SqliteConnection,
    student_to_look_up: &StudentToLookUp,
) -> Result<ApplicationStatus, StudentError> {
    let student = find_matching_student(connection, student_to_look_up)?.ok_or(UnknownStudent)?;

    Ok(ApplicationStatus::from(&student))
}

/// The student owning this identifier, provided the email address matches as well.
pub fn find_matching_student(
    connection: &mut SqliteConnection,
    student_to_look_up: &StudentToLookUp,
) -> Result<Option<Student>, DatabaseError> {
    let student =
        dao::student::find_by_identifier(connection, student_to_look_up.identifier().trim())?;

    Ok(student.filter(|student| {
        student
            .email()
            .eq_ignore_ascii_case(student_to_look_up.email().trim())
    }))
}
