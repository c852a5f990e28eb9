use crate::database::dao;
use crate::student::error::StudentError;
use crate::student::error::StudentError::Export;
use diesel::SqliteConnection;
use dto::student::Student;
use dto::student_status::StudentStatus;
use serde::Serialize;

const EXPORT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct StudentRow<'a> {
    identifier: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    department: &'a str,
    year_of_study: Option<i32>,
    status: &'static str,
    created_at: String,
}

impl<'a> From<&'a Student> for StudentRow<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            identifier: student.identifier(),
            first_name: student.first_name(),
            last_name: student.last_name(),
            email: student.email(),
            phone: student.phone().as_deref(),
            department: student.department(),
            year_of_study: *student.year_of_study(),
            status: student.status().as_str(),
            created_at: student
                .created_at()
                .format(EXPORT_DATE_TIME_FORMAT)
                .to_string(),
        }
    }
}

/// Students as a CSV document with a header row, optionally restricted to one status.
pub fn export_students(
    connection: &mut SqliteConnection,
    status: Option<StudentStatus>,
) -> Result<String, StudentError> {
    let students = dao::student::retrieve_all(connection, status)?;
    write_csv(&students)
}

fn write_csv(students: &[Student]) -> Result<String, StudentError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(vec![]);
    for student in students {
        writer
            .serialize(StudentRow::from(student))
            .map_err(|error| Export(error.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| Export(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Export(error.to_string()))
}
