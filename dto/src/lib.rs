pub mod committee_member;
pub mod dashboard;
pub mod event;
pub mod group_link;
pub mod registration;
pub mod student;
pub mod student_status;
pub mod testimonial;
