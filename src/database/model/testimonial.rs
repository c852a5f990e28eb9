use crate::database::error::DatabaseError;
use crate::database::model::parse_date_time;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::testimonial)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Testimonial {
    id: i32,
    author_name: String,
    author_role: Option<String>,
    content: String,
    approved: bool,
    created_at: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::database::schema::testimonial)]
pub(crate) struct NewTestimonial<'a> {
    pub author_name: &'a str,
    pub author_role: Option<&'a str>,
    pub content: &'a str,
    pub approved: bool,
    pub created_at: String,
}

impl TryFrom<Testimonial> for dto::testimonial::Testimonial {
    type Error = DatabaseError;

    fn try_from(value: Testimonial) -> Result<Self, Self::Error> {
        Ok(dto::testimonial::Testimonial::new(
            value.id,
            value.author_name,
            value.author_role,
            value.content,
            value.approved,
            parse_date_time(&value.created_at)?,
        ))
    }
}
