use crate::admin::credentials::AdminSession;
use crate::database::{DatabasePool, dao};
use crate::tools::validation::Validate;
use crate::web::error::ApiError;
use dto::committee_member::{CommitteeMember, CommitteeMemberInput};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

const UNKNOWN_MEMBER: &str = "This committee member doesn't exist.";

#[get("/committee")]
pub async fn list_committee(
    pool: &State<DatabasePool>,
) -> Result<Json<Vec<CommitteeMember>>, ApiError> {
    let mut connection = pool.get()?;
    let members = dao::committee_member::retrieve_all(&mut connection)?;

    Ok(Json(members))
}

#[post("/admin/committee", format = "application/json", data = "<input>")]
pub async fn create_committee_member(
    pool: &State<DatabasePool>,
    input: Json<CommitteeMemberInput>,
    _session: AdminSession,
) -> Result<(Status, Json<CommitteeMember>), ApiError> {
    input.validate()?;
    let mut connection = pool.get()?;
    let member = dao::committee_member::insert(&mut connection, &input)?;

    Ok((Status::Created, Json(member)))
}

#[put("/admin/committee/<id>", format = "application/json", data = "<input>")]
pub async fn update_committee_member(
    pool: &State<DatabasePool>,
    id: i32,
    input: Json<CommitteeMemberInput>,
    _session: AdminSession,
) -> Result<Json<CommitteeMember>, ApiError> {
    input.validate()?;
    let mut connection = pool.get()?;
    let member = dao::committee_member::update(&mut connection, id, &input)?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_MEMBER))?;

    Ok(Json(member))
}

#[delete("/admin/committee/<id>")]
pub async fn delete_committee_member(
    pool: &State<DatabasePool>,
    id: i32,
    _session: AdminSession,
) -> Result<Status, ApiError> {
    let mut connection = pool.get()?;
    match dao::committee_member::delete(&mut connection, id)? {
        0 => Err(ApiError::not_found(UNKNOWN_MEMBER)),
        _ => Ok(Status::NoContent),
    }
}
