use crate::admin::credentials::AdminSession;
use crate::database::{DatabasePool, dao};
use crate::tools::validation::Validate;
use crate::web::error::ApiError;
use dto::group_link::{GroupLink, GroupLinkInput};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

const UNKNOWN_EVENT: &str = "This event doesn't exist.";

#[get("/admin/events/<event_id>/group-links")]
pub async fn list_group_links(
    pool: &State<DatabasePool>,
    event_id: i32,
    _session: AdminSession,
) -> Result<Json<Vec<GroupLink>>, ApiError> {
    let mut connection = pool.get()?;
    dao::event::find(&mut connection, event_id)?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_EVENT))?;
    let group_links = dao::group_link::retrieve_for_event(&mut connection, event_id)?;

    Ok(Json(group_links))
}

#[post(
    "/admin/events/<event_id>/group-links",
    format = "application/json",
    data = "<input>"
)]
pub async fn create_group_link(
    pool: &State<DatabasePool>,
    event_id: i32,
    input: Json<GroupLinkInput>,
    _session: AdminSession,
) -> Result<(Status, Json<GroupLink>), ApiError> {
    input.validate()?;
    let mut connection = pool.get()?;
    dao::event::find(&mut connection, event_id)?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_EVENT))?;
    let group_link = dao::group_link::insert(&mut connection, event_id, &input)?;

    Ok((Status::Created, Json(group_link)))
}

#[delete("/admin/group-links/<id>")]
pub async fn delete_group_link(
    pool: &State<DatabasePool>,
    id: i32,
    _session: AdminSession,
) -> Result<Status, ApiError> {
    let mut connection = pool.get()?;
    match dao::group_link::delete(&mut connection, id)? {
        0 => Err(ApiError::not_found("This group link doesn't exist.")),
        _ => Ok(Status::NoContent),
    }
}
