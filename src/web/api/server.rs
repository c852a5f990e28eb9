use crate::admin::config::build_admin_config;
use crate::student::config::build_identifier_config;
use crate::web::api::{
    admin_controller, api_catcher, committee_controller, event_controller, group_link_controller,
    registration_controller, student_controller, testimonial_controller,
};
use crate::web::server::Server;
use crate::web::session_storage::SessionStorage;
use rocket::{Build, Rocket};
use std::sync::Mutex;

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let identifier_config = build_identifier_config();
        info!(
            "Student identifiers configured [prefix: {}, padding: {}, max_attempts: {}]",
            identifier_config.prefix(),
            identifier_config.padding(),
            identifier_config.max_attempts()
        );

        rocket_build
            .manage(identifier_config)
            .manage(build_admin_config())
            .manage(Mutex::new(SessionStorage::default()))
            .mount(
                "/api/",
                routes![
                    student_controller::create_student,
                    student_controller::look_up_status,
                    student_controller::list_students,
                    student_controller::get_student,
                    student_controller::update_student_status,
                    student_controller::delete_student,
                    student_controller::export_students,
                    event_controller::list_events,
                    event_controller::get_event,
                    event_controller::create_event,
                    event_controller::update_event,
                    event_controller::delete_event,
                    registration_controller::register,
                    registration_controller::list_registrations,
                    registration_controller::delete_registration,
                    group_link_controller::list_group_links,
                    group_link_controller::create_group_link,
                    group_link_controller::delete_group_link,
                    committee_controller::list_committee,
                    committee_controller::create_committee_member,
                    committee_controller::update_committee_member,
                    committee_controller::delete_committee_member,
                    testimonial_controller::list_testimonials,
                    testimonial_controller::submit_testimonial,
                    testimonial_controller::list_all_testimonials,
                    testimonial_controller::set_testimonial_approval,
                    testimonial_controller::delete_testimonial,
                    admin_controller::login,
                    admin_controller::logout,
                    admin_controller::dashboard,
                ],
            )
            .register("/api/", catchers![api_catcher])
    }
}
