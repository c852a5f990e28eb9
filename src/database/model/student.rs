use crate::database::error::DatabaseError;
use crate::database::model::parse_date_time;
use diesel::prelude::*;
use dto::student_status::StudentStatus;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::student)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Student {
    id: i32,
    identifier: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    department: String,
    year_of_study: Option<i32>,
    motivation: Option<String>,
    status: String,
    created_at: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::student)]
pub(crate) struct NewStudent<'a> {
    pub identifier: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub department: &'a str,
    pub year_of_study: Option<i32>,
    pub motivation: Option<&'a str>,
    pub status: &'a str,
    pub created_at: String,
}

impl TryFrom<Student> for dto::student::Student {
    type Error = DatabaseError;

    fn try_from(value: Student) -> Result<Self, Self::Error> {
        Ok(dto::student::Student::new(
            value.id,
            value.identifier,
            value.first_name,
            value.last_name,
            value.email,
            value.phone,
            value.department,
            value.year_of_study,
            value.motivation,
            StudentStatus::from_str(&value.status)?,
            parse_date_time(&value.created_at)?,
        ))
    }
}
