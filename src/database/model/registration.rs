use crate::database::error::DatabaseError;
use crate::database::model::parse_date_time;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::registration)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Registration {
    id: i32,
    student_id: i32,
    event_id: i32,
    created_at: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::registration)]
pub(crate) struct NewRegistration {
    pub student_id: i32,
    pub event_id: i32,
    pub created_at: String,
}

impl Registration {
    pub(crate) fn id(&self) -> i32 {
        self.id
    }

    pub(crate) fn created_at(&self) -> Result<chrono::NaiveDateTime, DatabaseError> {
        parse_date_time(&self.created_at)
    }
}

impl TryFrom<Registration> for dto::registration::Registration {
    type Error = DatabaseError;

    fn try_from(value: Registration) -> Result<Self, Self::Error> {
        Ok(dto::registration::Registration::new(
            value.id,
            value.student_id,
            value.event_id,
            parse_date_time(&value.created_at)?,
        ))
    }
}
