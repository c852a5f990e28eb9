use crate::admin::credentials::AdminSession;
use crate::database::{DatabasePool, dao};
use crate::tools::validation::Validate;
use crate::web::error::ApiError;
use dto::event::{Event, EventInput};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

const UNKNOWN_EVENT: &str = "This event doesn't exist.";

/// Events sorted by start date. With `upcoming=true`, past events are left out.
#[get("/events?<upcoming>")]
pub async fn list_events(
    pool: &State<DatabasePool>,
    upcoming: Option<bool>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let mut connection = pool.get()?;
    let events = dao::event::retrieve_all(&mut connection, upcoming.unwrap_or(false))?;

    Ok(Json(events))
}

#[get("/events/<id>")]
pub async fn get_event(pool: &State<DatabasePool>, id: i32) -> Result<Json<Event>, ApiError> {
    let mut connection = pool.get()?;
    let event = dao::event::find(&mut connection, id)?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_EVENT))?;

    Ok(Json(event))
}

#[post("/admin/events", format = "application/json", data = "<input>")]
pub async fn create_event(
    pool: &State<DatabasePool>,
    input: Json<EventInput>,
    session: AdminSession,
) -> Result<(Status, Json<Event>), ApiError> {
    input.validate()?;
    let mut connection = pool.get()?;
    let event = dao::event::insert(&mut connection, &input)?;
    info!(
        "Event created [id: {}, title: {}, admin: {}]",
        event.id(),
        event.title(),
        session.login()
    );

    Ok((Status::Created, Json(event)))
}

/// Replace every writable field of the event.
#[put("/admin/events/<id>", format = "application/json", data = "<input>")]
pub async fn update_event(
    pool: &State<DatabasePool>,
    id: i32,
    input: Json<EventInput>,
    _session: AdminSession,
) -> Result<Json<Event>, ApiError> {
    input.validate()?;
    let mut connection = pool.get()?;
    let event = dao::event::update(&mut connection, id, &input)?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_EVENT))?;

    Ok(Json(event))
}

/// Registrations and group links of the event are deleted as well.
#[delete("/admin/events/<id>")]
pub async fn delete_event(
    pool: &State<DatabasePool>,
    id: i32,
    session: AdminSession,
) -> Result<Status, ApiError> {
    let mut connection = pool.get()?;
    match dao::event::delete(&mut connection, id)? {
        0 => Err(ApiError::not_found(UNKNOWN_EVENT)),
        _ => {
            info!("Event deleted [id: {id}, admin: {}]", session.login());
            Ok(Status::NoContent)
        }
    }
}
