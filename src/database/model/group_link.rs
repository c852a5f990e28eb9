use crate::database::error::DatabaseError;
use crate::database::model::parse_date_time;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::group_link)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct GroupLink {
    id: i32,
    event_id: i32,
    platform: String,
    url: String,
    created_at: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::group_link)]
pub(crate) struct NewGroupLink<'a> {
    pub event_id: i32,
    pub platform: &'a str,
    pub url: &'a str,
    pub created_at: String,
}

impl TryFrom<GroupLink> for dto::group_link::GroupLink {
    type Error = DatabaseError;

    fn try_from(value: GroupLink) -> Result<Self, Self::Error> {
        Ok(dto::group_link::GroupLink::new(
            value.id,
            value.event_id,
            value.platform,
            value.url,
            parse_date_time(&value.created_at)?,
        ))
    }
}
