use crate::database::error::DatabaseError;
use crate::database::model::parse_date_time;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::event)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Event {
    id: i32,
    title: String,
    description: String,
    location: String,
    starts_at: String,
    image_url: Option<String>,
    registration_open: bool,
    created_at: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::event)]
pub(crate) struct NewEvent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub starts_at: String,
    pub image_url: Option<&'a str>,
    pub registration_open: bool,
    pub created_at: String,
}

/// Columns an admin can rewrite. Updates are full replacements,
/// hence `None` clears the image rather than leaving it untouched.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = crate::database::schema::event)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct EventChanges<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub starts_at: String,
    pub image_url: Option<&'a str>,
    pub registration_open: bool,
}

impl TryFrom<Event> for dto::event::Event {
    type Error = DatabaseError;

    fn try_from(value: Event) -> Result<Self, Self::Error> {
        Ok(dto::event::Event::new(
            value.id,
            value.title,
            value.description,
            value.location,
            parse_date_time(&value.starts_at)?,
            value.image_url,
            value.registration_open,
            parse_date_time(&value.created_at)?,
        ))
    }
}
