use crate::database::{DatabasePool, dao};
use crate::tools::{log_error_and_return, log_message_and_return};
use rocket::http::Status;
use rocket::{Request, State};
use rocket_dyn_templates::{Template, context};

#[get("/")]
pub async fn index(pool: &State<DatabasePool>) -> Result<Template, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let events = dao::event::retrieve_all(&mut connection, true).map_err(
        log_message_and_return("Can't load upcoming events", Status::InternalServerError),
    )?;
    let committee = dao::committee_member::retrieve_all(&mut connection).map_err(
        log_message_and_return("Can't load committee", Status::InternalServerError),
    )?;
    let testimonials = dao::testimonial::retrieve_all(&mut connection, true).map_err(
        log_message_and_return("Can't load testimonials", Status::InternalServerError),
    )?;

    Ok(Template::render(
        "index",
        context! {
            title: "Welcome",
            events: events,
            committee: committee,
            testimonials: testimonials,
        },
    ))
}

/// Every event, past ones included.
#[get("/events")]
pub async fn list_events(pool: &State<DatabasePool>) -> Result<Template, Status> {
    let mut connection = pool
        .get()
        .map_err(log_error_and_return(Status::InternalServerError))?;
    let events = dao::event::retrieve_all(&mut connection, false)
        .map_err(log_error_and_return(Status::InternalServerError))?;

    Ok(Template::render(
        "events",
        context! {
            title: "Events",
            events: events,
        },
    ))
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: "Page not found",
            uri: req.uri()
        },
    )
}
