use crate::admin::credentials::AdminSession;
use crate::database::{DatabasePool, dao};
use crate::tools::validation::Validate;
use crate::web::error::ApiError;
use dto::testimonial::{Testimonial, TestimonialApproval, TestimonialSubmission};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;

const UNKNOWN_TESTIMONIAL: &str = "This testimonial doesn't exist.";

/// Approved testimonials only, most recent first.
#[get("/testimonials")]
pub async fn list_testimonials(
    pool: &State<DatabasePool>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let mut connection = pool.get()?;
    let testimonials = dao::testimonial::retrieve_all(&mut connection, true)?;

    Ok(Json(testimonials))
}

/// Submissions are kept hidden until an admin approves them.
#[post("/testimonials", format = "application/json", data = "<submission>")]
pub async fn submit_testimonial(
    pool: &State<DatabasePool>,
    submission: Json<TestimonialSubmission>,
) -> Result<(Status, Json<Testimonial>), ApiError> {
    submission.validate()?;
    let mut connection = pool.get()?;
    let testimonial = dao::testimonial::insert(&mut connection, &submission)?;

    Ok((Status::Created, Json(testimonial)))
}

#[get("/admin/testimonials")]
pub async fn list_all_testimonials(
    pool: &State<DatabasePool>,
    _session: AdminSession,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let mut connection = pool.get()?;
    let testimonials = dao::testimonial::retrieve_all(&mut connection, false)?;

    Ok(Json(testimonials))
}

#[put(
    "/admin/testimonials/<id>/approval",
    format = "application/json",
    data = "<approval>"
)]
pub async fn set_testimonial_approval(
    pool: &State<DatabasePool>,
    id: i32,
    approval: Json<TestimonialApproval>,
    _session: AdminSession,
) -> Result<Json<Testimonial>, ApiError> {
    let mut connection = pool.get()?;
    let testimonial = dao::testimonial::set_approval(&mut connection, id, *approval.approved())?
        .ok_or_else(|| ApiError::not_found(UNKNOWN_TESTIMONIAL))?;

    Ok(Json(testimonial))
}

#[delete("/admin/testimonials/<id>")]
pub async fn delete_testimonial(
    pool: &State<DatabasePool>,
    id: i32,
    _session: AdminSession,
) -> Result<Status, ApiError> {
    let mut connection = pool.get()?;
    match dao::testimonial::delete(&mut connection, id)? {
        0 => Err(ApiError::not_found(UNKNOWN_TESTIMONIAL)),
        _ => Ok(Status::NoContent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::with_temp_database;
    use crate::web::api::tests::{admin_cookie, build_client};
    use dto::testimonial::tests::{anonymous_submission, happy_member_submission};
    use rocket::tokio::runtime::Runtime;

    #[test]
    fn should_publish_testimonial_once_approved() {
        async fn test(pool: DatabasePool) {
            let client = build_client(
                pool,
                routes![
                    list_testimonials,
                    submit_testimonial,
                    list_all_testimonials,
                    set_testimonial_approval
                ],
            )
            .await;

            let response = client
                .post("/api/testimonials")
                .json(&happy_member_submission())
                .dispatch()
                .await;
            assert_eq!(Status::Created, response.status());
            let testimonial = response.into_json::<Testimonial>().await.unwrap();
            assert!(!*testimonial.approved());

            let response = client.get("/api/testimonials").dispatch().await;
            assert!(
                response
                    .into_json::<Vec<Testimonial>>()
                    .await
                    .unwrap()
                    .is_empty()
            );

            let response = client
                .get("/api/admin/testimonials")
                .cookie(admin_cookie())
                .dispatch()
                .await;
            assert_eq!(
                vec![testimonial.clone()],
                response.into_json::<Vec<Testimonial>>().await.unwrap()
            );

            let response = client
                .put(format!("/api/admin/testimonials/{}/approval", testimonial.id()))
                .cookie(admin_cookie())
                .json(&TestimonialApproval::new(true))
                .dispatch()
                .await;
            assert_eq!(Status::Ok, response.status());
            let approved = response.into_json::<Testimonial>().await.unwrap();
            assert!(*approved.approved());

            let response = client.get("/api/testimonials").dispatch().await;
            assert_eq!(
                vec![approved],
                response.into_json::<Vec<Testimonial>>().await.unwrap()
            );
        }
        with_temp_database(|pool| Runtime::new().unwrap().block_on(test(pool)));
    }

    #[test]
    fn should_refuse_empty_testimonial() {
        async fn test(pool: DatabasePool) {
            let client = build_client(pool, routes![submit_testimonial]).await;
            let submission = TestimonialSubmission::new("Jon".to_owned(), None, "  ".to_owned());

            let response = client
                .post("/api/testimonials")
                .json(&submission)
                .dispatch()
                .await;

            assert_eq!(Status::BadRequest, response.status());
        }
        with_temp_database(|pool| Runtime::new().unwrap().block_on(test(pool)));
    }

    #[test]
    fn should_delete_testimonial() {
        async fn test(pool: DatabasePool) {
            let client =
                build_client(pool, routes![submit_testimonial, delete_testimonial]).await;
            let response = client
                .post("/api/testimonials")
                .json(&anonymous_submission())
                .dispatch()
                .await;
            let testimonial = response.into_json::<Testimonial>().await.unwrap();

            let response = client
                .delete(format!("/api/admin/testimonials/{}", testimonial.id()))
                .dispatch()
                .await;
            assert_eq!(Status::Unauthorized, response.status());

            let response = client
                .delete(format!("/api/admin/testimonials/{}", testimonial.id()))
                .cookie(admin_cookie())
                .dispatch()
                .await;
            assert_eq!(Status::NoContent, response.status());

            let response = client
                .delete(format!("/api/admin/testimonials/{}", testimonial.id()))
                .cookie(admin_cookie())
                .dispatch()
                .await;
            assert_eq!(Status::NotFound, response.status());
        }
        with_temp_database(|pool| Runtime::new().unwrap().block_on(test(pool)));
    }
}
