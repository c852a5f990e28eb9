use super::{Result, into_dtos};
use crate::database::model::now;
use crate::database::model::student::{NewStudent, Student};
use crate::database::schema::student::dsl;
use crate::student::identifier::IdentifierStore;
use diesel::prelude::*;
use dto::student::StudentApplication;
use dto::student_status::StudentStatus;

pub fn count_all(connection: &mut SqliteConnection) -> Result<i64> {
    let count = dsl::student.count().get_result(connection)?;

    Ok(count)
}

pub fn count_by_status(connection: &mut SqliteConnection, status: StudentStatus) -> Result<i64> {
    let count = dsl::student
        .filter(dsl::status.eq(status.as_str()))
        .count()
        .get_result(connection)?;

    Ok(count)
}

pub fn identifier_exists(connection: &mut SqliteConnection, identifier: &str) -> Result<bool> {
    let exists = diesel::select(diesel::dsl::exists(
        dsl::student.filter(dsl::identifier.eq(identifier)),
    ))
    .get_result(connection)?;

    Ok(exists)
}

pub fn email_exists(connection: &mut SqliteConnection, email: &str) -> Result<bool> {
    let exists = diesel::select(diesel::dsl::exists(
        dsl::student.filter(dsl::email.eq(email)),
    ))
    .get_result(connection)?;

    Ok(exists)
}

/// Persist a new student with the given identifier.
/// The application is expected to be validated and normalized already.
/// Any uniqueness violation (identifier or email) is reported as is.
pub fn insert(
    connection: &mut SqliteConnection,
    identifier: &str,
    application: &StudentApplication,
) -> Result<dto::student::Student> {
    let new_student = NewStudent {
        identifier,
        first_name: application.first_name(),
        last_name: application.last_name(),
        email: application.email(),
        phone: application.phone().as_deref(),
        department: application.department(),
        year_of_study: *application.year_of_study(),
        motivation: application.motivation().as_deref(),
        status: StudentStatus::Pending.as_str(),
        created_at: now(),
    };

    let student = diesel::insert_into(dsl::student)
        .values(&new_student)
        .returning(Student::as_returning())
        .get_result(connection)?;
    debug!("Inserted student [identifier: {identifier}]");

    dto::student::Student::try_from(student)
}

pub fn retrieve_all(
    connection: &mut SqliteConnection,
    status: Option<StudentStatus>,
) -> Result<Vec<dto::student::Student>> {
    let mut query = dsl::student.select(Student::as_select()).into_boxed();
    if let Some(status) = status {
        query = query.filter(dsl::status.eq(status.as_str()));
    }
    let results = query.order(dsl::id.asc()).load(connection)?;

    into_dtos(results)
}

pub fn find(connection: &mut SqliteConnection, id: i32) -> Result<Option<dto::student::Student>> {
    let result = dsl::student
        .find(id)
        .select(Student::as_select())
        .first(connection)
        .optional()?;

    result.map(dto::student::Student::try_from).transpose()
}

pub fn find_by_identifier(
    connection: &mut SqliteConnection,
    identifier: &str,
) -> Result<Option<dto::student::Student>> {
    let result = dsl::student
        .filter(dsl::identifier.eq(identifier))
        .select(Student::as_select())
        .first(connection)
        .optional()?;

    result.map(dto::student::Student::try_from).transpose()
}

/// Return the updated student, or `None` if there is no student with this id.
pub fn update_status(
    connection: &mut SqliteConnection,
    id: i32,
    status: StudentStatus,
) -> Result<Option<dto::student::Student>> {
    let result = diesel::update(dsl::student.find(id))
        .set(dsl::status.eq(status.as_str()))
        .returning(Student::as_returning())
        .get_result(connection)
        .optional()?;
    debug!("Updated student status [id: {id}, status: {status}]");

    result.map(dto::student::Student::try_from).transpose()
}

/// Return the number of deleted students: 0 or 1.
pub fn delete(connection: &mut SqliteConnection, id: i32) -> Result<usize> {
    let count = diesel::delete(dsl::student.find(id)).execute(connection)?;

    Ok(count)
}

impl IdentifierStore for SqliteConnection {
    fn count_students(&mut self) -> Result<i64> {
        count_all(self)
    }

    fn identifier_exists(&mut self, identifier: &str) -> Result<bool> {
        identifier_exists(self, identifier)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::database::with_temp_database;
    use crate::database::error::DatabaseError::UniqueViolation;
    use dto::student::tests::{
        application_with_email, jon_doe_application, jonette_snow_application,
    };

    /// Insert a student the way the application flow would, with a caller-chosen identifier.
    pub fn insert_student(
        connection: &mut SqliteConnection,
        identifier: &str,
        application: &StudentApplication,
    ) -> dto::student::Student {
        insert(connection, identifier, application).unwrap()
    }

    pub fn insert_approved_student(
        connection: &mut SqliteConnection,
        identifier: &str,
        application: &StudentApplication,
    ) -> dto::student::Student {
        let student = insert_student(connection, identifier, application);
        update_status(connection, *student.id(), StudentStatus::Approved)
            .unwrap()
            .unwrap()
    }

    mod insert {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let application = jon_doe_application();

                let student = insert(&mut connection, "STU-001", &application).unwrap();

                assert_eq!("STU-001", student.identifier());
                assert_eq!(application.email(), student.email());
                assert_eq!(application.phone(), student.phone());
                assert_eq!(&StudentStatus::Pending, student.status());
                assert_eq!(Some(student.clone()), find(&mut connection, *student.id()).unwrap());
            })
        }

        /// Two requests allocated the same identifier: the second write must be rejected.
        #[test]
        fn fail_when_identifier_is_taken() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                insert_student(&mut connection, "STU-001", &jon_doe_application());

                let error =
                    insert(&mut connection, "STU-001", &jonette_snow_application()).unwrap_err();

                assert!(matches!(error, UniqueViolation(_)));
                assert!(error.is_unique_violation_on("student.identifier"));
                assert_eq!(1, count_all(&mut connection).unwrap());
            })
        }

        #[test]
        fn fail_when_email_is_taken() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                insert_student(&mut connection, "STU-001", &jon_doe_application());

                let error =
                    insert(&mut connection, "STU-002", &jon_doe_application()).unwrap_err();

                assert!(error.is_unique_violation_on("student.email"));
            })
        }
    }

    mod lookups {
        use super::*;

        #[test]
        fn count_and_exists() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                assert_eq!(0, count_all(&mut connection).unwrap());
                assert!(!identifier_exists(&mut connection, "STU-001").unwrap());

                insert_student(&mut connection, "STU-001", &jon_doe_application());

                assert_eq!(1, count_all(&mut connection).unwrap());
                assert!(identifier_exists(&mut connection, "STU-001").unwrap());
                assert!(!identifier_exists(&mut connection, "STU-002").unwrap());
                assert!(email_exists(&mut connection, "jon.doe@email.com").unwrap());
                assert!(!email_exists(&mut connection, "someone@email.com").unwrap());
            })
        }

        #[test]
        fn find_by_identifier_success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let student = insert_student(&mut connection, "STU-007", &jon_doe_application());

                assert_eq!(
                    Some(student),
                    find_by_identifier(&mut connection, "STU-007").unwrap()
                );
                assert_eq!(None, find_by_identifier(&mut connection, "STU-008").unwrap());
            })
        }
    }

    mod retrieve_all {
        use super::*;

        #[test]
        fn filter_by_status() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let pending = insert_student(&mut connection, "STU-001", &jon_doe_application());
                let approved = insert_approved_student(
                    &mut connection,
                    "STU-002",
                    &jonette_snow_application(),
                );

                assert_eq!(
                    vec![pending.clone(), approved.clone()],
                    retrieve_all(&mut connection, None).unwrap()
                );
                assert_eq!(
                    vec![pending],
                    retrieve_all(&mut connection, Some(StudentStatus::Pending)).unwrap()
                );
                assert_eq!(
                    vec![approved],
                    retrieve_all(&mut connection, Some(StudentStatus::Approved)).unwrap()
                );
                assert_eq!(
                    1,
                    count_by_status(&mut connection, StudentStatus::Approved).unwrap()
                );
            })
        }
    }

    mod update_status {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let student = insert_student(&mut connection, "STU-001", &jon_doe_application());

                let updated = update_status(&mut connection, *student.id(), StudentStatus::Rejected)
                    .unwrap()
                    .unwrap();

                assert_eq!(&StudentStatus::Rejected, updated.status());
                assert_eq!(student.identifier(), updated.identifier());
            })
        }

        #[test]
        fn none_when_unknown() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                assert_eq!(
                    None,
                    update_status(&mut connection, 42, StudentStatus::Approved).unwrap()
                );
            })
        }
    }

    mod delete {
        use super::*;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                let student = insert_student(
                    &mut connection,
                    "STU-001",
                    &application_with_email("other@email.com"),
                );

                assert_eq!(1, delete(&mut connection, *student.id()).unwrap());
                assert_eq!(0, delete(&mut connection, *student.id()).unwrap());
                assert_eq!(None, find(&mut connection, *student.id()).unwrap());
            })
        }
    }
}
