use crate::student_status::StudentStatus;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Student {
    id: i32,
    identifier: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    department: String,
    year_of_study: Option<i32>,
    motivation: Option<String>,
    status: StudentStatus,
    created_at: NaiveDateTime,
}

impl Student {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        identifier: String,
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        department: String,
        year_of_study: Option<i32>,
        motivation: Option<String>,
        status: StudentStatus,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            identifier,
            first_name,
            last_name,
            email,
            phone,
            department,
            year_of_study,
            motivation,
            status,
            created_at,
        }
    }
}

/// What a prospective member fills in on the membership form.
/// The identifier and the status are never part of it: both are decided by the server.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct StudentApplication {
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    department: String,
    year_of_study: Option<i32>,
    motivation: Option<String>,
}

impl StudentApplication {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        department: String,
        year_of_study: Option<i32>,
        motivation: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone,
            department,
            year_of_study,
            motivation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct StudentStatusUpdate {
    status: StudentStatus,
}

impl StudentStatusUpdate {
    pub fn new(status: StudentStatus) -> Self {
        Self { status }
    }
}

/// Proof of identity used by public endpoints: the identifier alone is guessable,
/// so the email address has to match as well.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct StudentToLookUp {
    identifier: String,
    email: String,
}

impl StudentToLookUp {
    pub fn new(identifier: String, email: String) -> Self {
        Self { identifier, email }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct ApplicationStatus {
    identifier: String,
    status: StudentStatus,
}

impl ApplicationStatus {
    pub fn new(identifier: String, status: StudentStatus) -> Self {
        Self { identifier, status }
    }
}

impl From<&Student> for ApplicationStatus {
    fn from(student: &Student) -> Self {
        Self::new(student.identifier.clone(), student.status)
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn jon_doe_application() -> StudentApplication {
        StudentApplication::new(
            "Jon".to_owned(),
            "Doe".to_owned(),
            "jon.doe@email.com".to_owned(),
            Some("+33 6 12 34 56 78".to_owned()),
            "Computer science".to_owned(),
            Some(2),
            Some("I like clubs.".to_owned()),
        )
    }

    pub fn jonette_snow_application() -> StudentApplication {
        StudentApplication::new(
            "Jonette".to_owned(),
            "Snow".to_owned(),
            "jonette.snow@email.com".to_owned(),
            None,
            "Mathematics".to_owned(),
            None,
            None,
        )
    }

    /// Same application, another email address.
    pub fn application_with_email(email: &str) -> StudentApplication {
        StudentApplication {
            email: email.to_owned(),
            ..jon_doe_application()
        }
    }

    #[test]
    fn should_build_application_status_from_student() {
        let student = Student::new(
            1,
            "STU-001".to_owned(),
            "Jon".to_owned(),
            "Doe".to_owned(),
            "jon.doe@email.com".to_owned(),
            None,
            "Computer science".to_owned(),
            None,
            None,
            StudentStatus::Approved,
            NaiveDateTime::default(),
        );

        assert_eq!(
            ApplicationStatus::new("STU-001".to_owned(), StudentStatus::Approved),
            ApplicationStatus::from(&student)
        );
    }
}
