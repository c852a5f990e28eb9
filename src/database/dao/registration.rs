use super::Result;
use crate::database::model::now;
use crate::database::model::registration::{NewRegistration, Registration};
use crate::database::model::student::Student;
use crate::database::schema::{registration, student};
use diesel::prelude::*;
use dto::registration::RegisteredStudent;

pub fn count_all(connection: &mut SqliteConnection) -> Result<i64> {
    let count = registration::table.count().get_result(connection)?;

    Ok(count)
}

/// Registering twice for the same event is reported as a uniqueness violation.
pub fn insert(
    connection: &mut SqliteConnection,
    student_id: i32,
    event_id: i32,
) -> Result<dto::registration::Registration> {
    let new_registration = NewRegistration {
        student_id,
        event_id,
        created_at: now(),
    };

    let registration = diesel::insert_into(registration::table)
        .values(&new_registration)
        .returning(Registration::as_returning())
        .get_result(connection)?;
    debug!("Inserted registration [student_id: {student_id}, event_id: {event_id}]");

    dto::registration::Registration::try_from(registration)
}

/// Students registered for the event, in registration order.
pub fn retrieve_for_event(
    connection: &mut SqliteConnection,
    event_id: i32,
) -> Result<Vec<RegisteredStudent>> {
    let rows = registration::table
        .inner_join(student::table)
        .filter(registration::event_id.eq(event_id))
        .order(registration::id.asc())
        .select((Registration::as_select(), Student::as_select()))
        .load::<(Registration, Student)>(connection)?;

    rows.into_iter()
        .map(|(registration, student)| {
            Ok(RegisteredStudent::new(
                registration.id(),
                registration.created_at()?,
                dto::student::Student::try_from(student)?,
            ))
        })
        .collect()
}

pub fn delete(connection: &mut SqliteConnection, id: i32) -> Result<usize> {
    let count = diesel::delete(registration::table.find(id)).execute(connection)?;
    debug!("Deleted registration [id: {id}, count: {count}]");

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::dao;
    use crate::database::dao::event::tests::insert_event;
    use crate::database::dao::student::tests::insert_approved_student;
    use crate::database::error::DatabaseError::ForeignKeyViolation;
    use crate::database::with_temp_database;
    use dto::event::tests::upcoming_event_input;
    use dto::student::tests::{jon_doe_application, jonette_snow_application};

    #[test]
    fn should_insert_and_retrieve_registrations() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            let jon = insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            let jonette =
                insert_approved_student(&mut connection, "STU-002", &jonette_snow_application());

            let first = insert(&mut connection, *jonette.id(), *event.id()).unwrap();
            let second = insert(&mut connection, *jon.id(), *event.id()).unwrap();

            let registered = retrieve_for_event(&mut connection, *event.id()).unwrap();
            assert_eq!(
                vec![
                    RegisteredStudent::new(*first.id(), *first.created_at(), jonette),
                    RegisteredStudent::new(*second.id(), *second.created_at(), jon),
                ],
                registered
            );
            assert_eq!(2, count_all(&mut connection).unwrap());
        })
    }

    #[test]
    fn should_refuse_duplicate_registration() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            let jon = insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            insert(&mut connection, *jon.id(), *event.id()).unwrap();

            let error = insert(&mut connection, *jon.id(), *event.id()).unwrap_err();

            assert!(error.is_unique_violation_on("registration.student_id"));
        })
    }

    #[test]
    fn should_refuse_registration_to_unknown_event() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let jon = insert_approved_student(&mut connection, "STU-001", &jon_doe_application());

            let result = insert(&mut connection, *jon.id(), 42);

            assert!(matches!(result, Err(ForeignKeyViolation(_))));
        })
    }

    #[test]
    fn should_delete_registrations_along_with_event_or_student() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            let jon = insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            let jonette =
                insert_approved_student(&mut connection, "STU-002", &jonette_snow_application());
            insert(&mut connection, *jon.id(), *event.id()).unwrap();
            insert(&mut connection, *jonette.id(), *event.id()).unwrap();

            dao::student::delete(&mut connection, *jon.id()).unwrap();
            assert_eq!(1, count_all(&mut connection).unwrap());

            dao::event::delete(&mut connection, *event.id()).unwrap();
            assert_eq!(0, count_all(&mut connection).unwrap());
        })
    }

    #[test]
    fn should_delete_registration() {
        with_temp_database(|pool| {
            let mut connection = pool.get().unwrap();
            let event = insert_event(&mut connection, &upcoming_event_input());
            let jon = insert_approved_student(&mut connection, "STU-001", &jon_doe_application());
            let registration = insert(&mut connection, *jon.id(), *event.id()).unwrap();

            assert_eq!(1, delete(&mut connection, *registration.id()).unwrap());
            assert_eq!(0, delete(&mut connection, *registration.id()).unwrap());
            assert!(retrieve_for_event(&mut connection, *event.id()).unwrap().is_empty());
        })
    }
}
