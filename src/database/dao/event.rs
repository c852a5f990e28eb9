use super::{Result, into_dtos};
use crate::database::model::event::{Event, EventChanges, NewEvent};
use crate::database::model::{format_date_time, now};
use crate::database::schema::event::dsl;
use diesel::prelude::*;
use dto::event::EventInput;

pub fn count_all(connection: &mut SqliteConnection) -> Result<i64> {
    let count = dsl::event.count().get_result(connection)?;

    Ok(count)
}

pub fn count_upcoming(connection: &mut SqliteConnection) -> Result<i64> {
    let count = dsl::event
        .filter(dsl::starts_at.ge(now()))
        .count()
        .get_result(connection)?;

    Ok(count)
}

pub fn insert(connection: &mut SqliteConnection, input: &EventInput) -> Result<dto::event::Event> {
    let new_event = NewEvent {
        title: input.title().trim(),
        description: input.description(),
        location: input.location().trim(),
        starts_at: format_date_time(input.starts_at()),
        image_url: input.image_url().as_deref(),
        registration_open: *input.registration_open(),
        created_at: now(),
    };

    let event = diesel::insert_into(dsl::event)
        .values(&new_event)
        .returning(Event::as_returning())
        .get_result(connection)?;
    debug!("Inserted event [title: {}]", input.title());

    dto::event::Event::try_from(event)
}

/// Return the updated event, or `None` if there is no event with this id.
pub fn update(
    connection: &mut SqliteConnection,
    id: i32,
    input: &EventInput,
) -> Result<Option<dto::event::Event>> {
    let changes = EventChanges {
        title: input.title().trim(),
        description: input.description(),
        location: input.location().trim(),
        starts_at: format_date_time(input.starts_at()),
        image_url: input.image_url().as_deref(),
        registration_open: *input.registration_open(),
    };

    let result = diesel::update(dsl::event.find(id))
        .set(&changes)
        .returning(Event::as_returning())
        .get_result(connection)
        .optional()?;
    debug!("Updated event [id: {id}]");

    result.map(dto::event::Event::try_from).transpose()
}

/// Registrations and group links of the event go along with it.
pub fn delete(connection: &mut SqliteConnection, id: i32) -> Result<usize> {
    let count = diesel::delete(dsl::event.find(id)).execute(connection)?;
    debug!("Deleted event [id: {id}, count: {count}]");

    Ok(count)
}

pub fn find(connection: &mut SqliteConnection, id: i32) -> Result<Option<dto::event::Event>> {
    let result = dsl::event
        .find(id)
        .select(Event::as_select())
        .first(connection)
        .optional()?;

    result.map(dto::event::Event::try_from).transpose()
}

/// Events sorted by start date, soonest first.
/// With `upcoming_only`, events that already started are left out.
pub fn retrieve_all(
    connection: &mut SqliteConnection,
    upcoming_only: bool,
) -> Result<Vec<dto::event::Event>> {
    let mut query = dsl::event.select(Event::as_select()).into_boxed();
    if upcoming_only {
        query = query.filter(dsl::starts_at.ge(now()));
    }
    let results = query
        .order((dsl::starts_at.asc(), dsl::id.asc()))
        .load(connection)?;

    into_dtos(results)
}
