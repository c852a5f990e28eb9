use crate::database::dao;
use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::{
    AlreadyRegistered, Database, RegistrationClosed, StudentNotApproved, UnknownEvent,
    UnknownStudent,
};
use crate::student::application::find_matching_student;
use chrono::{NaiveDateTime, Utc};
use diesel::SqliteConnection;
use dto::registration::RegistrationConfirmation;
use dto::student::StudentToLookUp;
use dto::student_status::StudentStatus;

pub(crate) mod error;

/// Register an approved member for an event still open to registrations.
/// The confirmation is the only place where group links of the event are given away.
pub fn register(
    connection: &mut SqliteConnection,
    event_id: i32,
    student_to_look_up: &StudentToLookUp,
) -> Result<RegistrationConfirmation, RegistrationError> {
    register_at(
        connection,
        event_id,
        student_to_look_up,
        Utc::now().naive_utc(),
    )
}

fn register_at(
    connection: &mut SqliteConnection,
    event_id: i32,
    student_to_look_up: &StudentToLookUp,
    now: NaiveDateTime,
) -> Result<RegistrationConfirmation, RegistrationError> {
    let event = dao::event::find(connection, event_id)?.ok_or(UnknownEvent)?;
    if !event.accepts_registrations(now) {
        return Err(RegistrationClosed);
    }

    let student = find_matching_student(connection, student_to_look_up)?.ok_or(UnknownStudent)?;
    if student.status() != &StudentStatus::Approved {
        debug!(
            "Student is not approved [identifier: {}, status: {}]",
            student.identifier(),
            student.status()
        );
        return Err(StudentNotApproved);
    }

    let registration = dao::registration::insert(connection, *student.id(), *event.id())
        .map_err(|error| {
            if error.is_unique_violation_on("registration.student_id") {
                AlreadyRegistered
            } else {
                Database(error)
            }
        })?;
    let group_links = dao::group_link::retrieve_for_event(connection, *event.id())?;
    info!(
        "Student registered for event [identifier: {}, event_id: {}]",
        student.identifier(),
        event.id()
    );

    Ok(RegistrationConfirmation::new(
        registration,
        student.identifier().clone(),
        group_links,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::dao::event::tests::insert_event;
    use crate::database::dao::student::tests::{insert_approved_student, insert_student};
    use crate::database::with_temp_database;
    use dto::event::tests::{
        closed_event_input, in_days, past_event_input, upcoming_event_input,
    };
    use dto::group_link::tests::{discord_link, whatsapp_link};
    use dto::student::tests::{jon_doe_application, jonette_snow_application};

    fn jon_doe() -> StudentToLookUp {
        StudentToLookUp::new("STU-001".to_owned(), "jon.doe@email.com".to_owned())
    }

    #[test]
    fn should_register_approved_student() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            let student =
                insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            let whatsapp = dao::group_link::insert(&mut connection, *event.id(), &whatsapp_link())
                .unwrap();
            let discord =
                dao::group_link::insert(&mut connection, *event.id(), &discord_link()).unwrap();

            let confirmation = register(&mut connection, *event.id(), &jon_doe()).unwrap();

            assert_eq!("STU-001", confirmation.identifier());
            assert_eq!(student.id(), confirmation.registration().student_id());
            assert_eq!(event.id(), confirmation.registration().event_id());
            assert_eq!(&vec![whatsapp, discord], confirmation.group_links());
        })
    }

    #[test]
    fn should_match_email_case_insensitively() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            insert_approved_student(&mut connection, "STU-001", &jon_doe_application());

            let student_to_look_up =
                StudentToLookUp::new(" STU-001 ".to_owned(), "Jon.Doe@Email.com".to_owned());

            assert!(register(&mut connection, *event.id(), &student_to_look_up).is_ok());
        })
    }

    #[test]
    fn should_fail_on_unknown_event() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            insert_approved_student(&mut connection, "STU-001", &jon_doe_application());

            assert_eq!(Err(UnknownEvent), register(&mut connection, 42, &jon_doe()));
        })
    }

    #[test]
    fn should_fail_on_closed_or_past_event() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            let closed = insert_event(&mut connection, &closed_event_input());
            let past = insert_event(&mut connection, &past_event_input());

            assert_eq!(
                Err(RegistrationClosed),
                register(&mut connection, *closed.id(), &jon_doe())
            );
            assert_eq!(
                Err(RegistrationClosed),
                register(&mut connection, *past.id(), &jon_doe())
            );
        })
    }

    #[test]
    fn should_fail_once_event_started() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            let event = insert_event(&mut connection, &upcoming_event_input());

            let result = register_at(&mut connection, *event.id(), &jon_doe(), in_days(31));

            assert_eq!(Err(RegistrationClosed), result);
        })
    }

    #[test]
    fn should_fail_on_mismatching_email() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            let student_to_look_up =
                StudentToLookUp::new("STU-001".to_owned(), "jonette.snow@email.com".to_owned());

            assert_eq!(
                Err(UnknownStudent),
                register(&mut connection, *event.id(), &student_to_look_up)
            );
        })
    }

    #[test]
    fn should_fail_on_pending_student() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            insert_student(&mut connection, "STU-001", &jon_doe_application());

            assert_eq!(
                Err(StudentNotApproved),
                register(&mut connection, *event.id(), &jon_doe())
            );
        })
    }

    #[test]
    fn should_fail_on_second_registration() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            insert_approved_student(&mut connection, "STU-002", &jonette_snow_application());
            register(&mut connection, *event.id(), &jon_doe()).unwrap();

            assert_eq!(
                Err(AlreadyRegistered),
                register(&mut connection, *event.id(), &jon_doe())
            );
            assert_eq!(1, dao::registration::count_all(&mut connection).unwrap());
        })
    }
}
