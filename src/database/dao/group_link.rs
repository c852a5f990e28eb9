use super::{Result, into_dtos};
use crate::database::model::group_link::{GroupLink, NewGroupLink};
use crate::database::model::now;
use crate::database::schema::group_link::dsl;
use diesel::prelude::*;
use dto::group_link::GroupLinkInput;

pub fn insert(
    connection: &mut SqliteConnection,
    event_id: i32,
    input: &GroupLinkInput,
) -> Result<dto::group_link::GroupLink> {
    let new_group_link = NewGroupLink {
        event_id,
        platform: input.platform().trim(),
        url: input.url().trim(),
        created_at: now(),
    };

    let group_link = diesel::insert_into(dsl::group_link)
        .values(&new_group_link)
        .returning(GroupLink::as_returning())
        .get_result(connection)?;
    debug!(
        "Inserted group link [event_id: {event_id}, platform: {}]",
        input.platform()
    );

    dto::group_link::GroupLink::try_from(group_link)
}

pub fn retrieve_for_event(
    connection: &mut SqliteConnection,
    event_id: i32,
) -> Result<Vec<dto::group_link::GroupLink>> {
    let results = dsl::group_link
        .filter(dsl::event_id.eq(event_id))
        .order(dsl::id.asc())
        .select(GroupLink::as_select())
        .load(connection)?;

    into_dtos(results)
}

pub fn delete(connection: &mut SqliteConnection, id: i32) -> Result<usize> {
    let count = diesel::delete(dsl::group_link.find(id)).execute(connection)?;

    Ok(count)
}
