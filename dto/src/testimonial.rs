use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Testimonial {
    id: i32,
    author_name: String,
    author_role: Option<String>,
    content: String,
    approved: bool,
    created_at: NaiveDateTime,
}

impl Testimonial {
    pub fn new(
        id: i32,
        author_name: String,
        author_role: Option<String>,
        content: String,
        approved: bool,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            author_name,
            author_role,
            content,
            approved,
            created_at,
        }
    }
}

/// Testimonials are submitted by anyone but only shown once approved.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct TestimonialSubmission {
    author_name: String,
    author_role: Option<String>,
    content: String,
}

impl TestimonialSubmission {
    pub fn new(author_name: String, author_role: Option<String>, content: String) -> Self {
        Self {
            author_name,
            author_role,
            content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct TestimonialApproval {
    approved: bool,
}

impl TestimonialApproval {
    pub fn new(approved: bool) -> Self {
        Self { approved }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn happy_member_submission() -> TestimonialSubmission {
        TestimonialSubmission::new(
            "Jon Doe".to_owned(),
            Some("Member since 2023".to_owned()),
            "Best club on campus.".to_owned(),
        )
    }

    pub fn anonymous_submission() -> TestimonialSubmission {
        TestimonialSubmission::new(
            "Jonette".to_owned(),
            None,
            "Great events every month.".to_owned(),
        )
    }
}
