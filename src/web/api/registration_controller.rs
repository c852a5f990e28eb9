use crate::admin::credentials::AdminSession;
use crate::database::{DatabasePool, dao};
use crate::registration;
use crate::web::error::ApiError;
use dto::registration::{RegisteredStudent, RegistrationConfirmation};
use dto::student::StudentToLookUp;
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

/// Register an approved member for an event.
/// The confirmation holds the group links of the event.
#[post(
    "/events/<event_id>/registrations",
    format = "application/json",
    data = "<student_to_look_up>"
)]
pub async fn register(
    pool: &State<DatabasePool>,
    event_id: i32,
    student_to_look_up: Json<StudentToLookUp>,
) -> Result<(Status, Json<RegistrationConfirmation>), ApiError> {
    let mut connection = pool.get()?;
    let confirmation = registration::register(&mut connection, event_id, &student_to_look_up)?;

    Ok((Status::Created, Json(confirmation)))
}

#[get("/admin/events/<event_id>/registrations")]
pub async fn list_registrations(
    pool: &State<DatabasePool>,
    event_id: i32,
    _session: AdminSession,
) -> Result<Json<Vec<RegisteredStudent>>, ApiError> {
    let mut connection = pool.get()?;
    dao::event::find(&mut connection, event_id)?
        .ok_or_else(|| ApiError::not_found("This event doesn't exist."))?;
    let registered_students = dao::registration::retrieve_for_event(&mut connection, event_id)?;

    Ok(Json(registered_students))
}

#[delete("/admin/registrations/<id>")]
pub async fn delete_registration(
    pool: &State<DatabasePool>,
    id: i32,
    _session: AdminSession,
) -> Result<Status, ApiError> {
    let mut connection = pool.get()?;
    match dao::registration::delete(&mut connection, id)? {
        0 => Err(ApiError::not_found("This registration doesn't exist.")),
        _ => Ok(Status::NoContent),
    }
}
