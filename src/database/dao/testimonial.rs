use super::{Result, into_dtos};
use crate::database::model::now;
use crate::database::model::testimonial::{NewTestimonial, Testimonial};
use crate::database::schema::testimonial::dsl;
use diesel::prelude::*;
use dto::testimonial::TestimonialSubmission;

pub fn count_pending(connection: &mut SqliteConnection) -> Result<i64> {
    let count = dsl::testimonial
        .filter(dsl::approved.eq(false))
        .count()
        .get_result(connection)?;

    Ok(count)
}

/// Submissions wait for an admin approval before being shown.
pub fn insert(
    connection: &mut SqliteConnection,
    submission: &TestimonialSubmission,
) -> Result<dto::testimonial::Testimonial> {
    let new_testimonial = NewTestimonial {
        author_name: submission.author_name().trim(),
        author_role: submission
            .author_role()
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty()),
        content: submission.content().trim(),
        approved: false,
        created_at: now(),
    };

    let testimonial = diesel::insert_into(dsl::testimonial)
        .values(&new_testimonial)
        .returning(Testimonial::as_returning())
        .get_result(connection)?;
    debug!("Inserted testimonial [author: {}]", submission.author_name());

    dto::testimonial::Testimonial::try_from(testimonial)
}

/// Most recent first.
pub fn retrieve_all(
    connection: &mut SqliteConnection,
    approved_only: bool,
) -> Result<Vec<dto::testimonial::Testimonial>> {
    let mut query = dsl::testimonial.select(Testimonial::as_select()).into_boxed();
    if approved_only {
        query = query.filter(dsl::approved.eq(true));
    }
    let results = query
        .order((dsl::created_at.desc(), dsl::id.desc()))
        .load(connection)?;

    into_dtos(results)
}

pub fn set_approval(
    connection: &mut SqliteConnection,
    id: i32,
    approved: bool,
) -> Result<Option<dto::testimonial::Testimonial>> {
    let result = diesel::update(dsl::testimonial.find(id))
        .set(dsl::approved.eq(approved))
        .returning(Testimonial::as_returning())
        .get_result(connection)
        .optional()?;
    debug!("Set testimonial approval [id: {id}, approved: {approved}]");

    result.map(dto::testimonial::Testimonial::try_from).transpose()
}

pub fn delete(connection: &mut SqliteConnection, id: i32) -> Result<usize> {
    let count = diesel::delete(dsl::testimonial.find(id)).execute(connection)?;

    Ok(count)
}
