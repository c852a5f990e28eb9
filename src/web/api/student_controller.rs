use crate::admin::credentials::AdminSession;
use crate::database::{DatabasePool, dao};
use crate::student::application;
use crate::student::config::IdentifierConfig;
use crate::student::export::export_students as export_students_as_csv;
use crate::web::error::ApiError;
use dto::student::{ApplicationStatus, Student, StudentApplication, StudentStatusUpdate, StudentToLookUp};
use dto::student_status::StudentStatus;
use rocket::State;
use rocket::http::{ContentType, Status};
use rocket::serde::json::Json;

const UNKNOWN_STUDENT: &str = "This student doesn't exist.";

/// Register a membership application.
/// The student is created as pending, with an identifier allocated by the server.
#[post("/students", format = "application/json", data = "<application>")]
pub async fn create_student(
    pool: &State<DatabasePool>,
    config: &State<IdentifierConfig>,
    application: Json<StudentApplication>,
) -> Result<(Status, Json<Student>), ApiError> {
    let mut connection = pool.get()?;
    let student = application::create_student(&mut connection, config, &application)?;
    info!(
        "Student application received [identifier: {}]",
        student.identifier()
    );

    Ok((Status::Created, Json(student)))
}

#[post("/students/status", format = "application/json", data = "<student_to_look_up>")]
pub async fn look_up_status(
    pool: &State<DatabasePool>,
    student_to_look_up: Json<StudentToLookUp>,
) -> Result<Json<ApplicationStatus>, ApiError> {
    let mut connection = pool.get()?;
    let status = application::look_up_status(&mut connection, &student_to_look_up)?;

    Ok(Json(status))
}

#[get("/admin/students?<status>")]
pub async fn list_students(
    pool: &State<DatabasePool>,
    status: Option<&str>,
    _session: AdminSession,
) -> Result<Json<Vec<Student>>, ApiError> {
    let status = status.map(str::parse::<StudentStatus>).transpose()?;
    let mut connection = pool.get()?;
    let students = dao::student::retrieve_all(&mut connection, status)?;

    Ok(Json(students))
}

#[get("/admin/students/<id>", rank = 2)]
pub async fn get_student(
    pool: &State<DatabasePool>,
    id: i32,
    _session: AdminSession,
) -> Result<Json<Student>, ApiError> {
    let mut connection = pool.get()?;
    let student = dao::student::find(&mut connection, id)?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_STUDENT))?;

    Ok(Json(student))
}

#[put("/admin/students/<id>/status", format = "application/json", data = "<update>")]
pub async fn update_student_status(
    pool: &State<DatabasePool>,
    id: i32,
    update: Json<StudentStatusUpdate>,
    session: AdminSession,
) -> Result<Json<Student>, ApiError> {
    let mut connection = pool.get()?;
    let student = dao::student::update_status(&mut connection, id, *update.status())?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_STUDENT))?;
    info!(
        "Student status updated [identifier: {}, status: {}, admin: {}]",
        student.identifier(),
        student.status(),
        session.login()
    );

    Ok(Json(student))
}

#[delete("/admin/students/<id>")]
pub async fn delete_student(
    pool: &State<DatabasePool>,
    id: i32,
    _session: AdminSession,
) -> Result<Status, ApiError> {
    let mut connection = pool.get()?;
    match dao::student::delete(&mut connection, id)? {
        0 => Err(ApiError::not_found(UNKNOWN_STUDENT)),
        _ => Ok(Status::NoContent),
    }
}

#[get("/admin/students/export?<status>")]
pub async fn export_students(
    pool: &State<DatabasePool>,
    status: Option<&str>,
    _session: AdminSession,
) -> Result<(ContentType, String), ApiError> {
    let status = status.map(str::parse::<StudentStatus>).transpose()?;
    let mut connection = pool.get()?;
    let csv = export_students_as_csv(&mut connection, status)?;

    Ok((ContentType::CSV, csv))
}
