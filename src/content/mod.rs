//! Field checks on what admins and visitors submit besides membership applications.

use crate::tools::validation::{
    LONG_TEXT_MAX_LENGTH, SHORT_TEXT_MAX_LENGTH, Validate, ValidationError, optional_email,
    optional_text, optional_url, require_text, require_url,
};
use dto::committee_member::CommitteeMemberInput;
use dto::event::EventInput;
use dto::group_link::GroupLinkInput;
use dto::testimonial::TestimonialSubmission;

const TESTIMONIAL_MAX_LENGTH: usize = 1000;

impl Validate for EventInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", self.title(), SHORT_TEXT_MAX_LENGTH)?;
        optional_text("description", Some(self.description()), LONG_TEXT_MAX_LENGTH)?;
        require_text("location", self.location(), SHORT_TEXT_MAX_LENGTH)?;
        optional_url("image_url", self.image_url().as_deref())
    }
}

impl Validate for CommitteeMemberInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", self.name(), SHORT_TEXT_MAX_LENGTH)?;
        require_text("role", self.role(), SHORT_TEXT_MAX_LENGTH)?;
        optional_text("bio", self.bio().as_deref(), LONG_TEXT_MAX_LENGTH)?;
        optional_url("image_url", self.image_url().as_deref())?;
        optional_email("email", self.email().as_deref())?;
        if *self.display_order() < 0 {
            return Err(ValidationError::new("display_order", "must not be negative"));
        }

        Ok(())
    }
}

impl Validate for TestimonialSubmission {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("author_name", self.author_name(), SHORT_TEXT_MAX_LENGTH)?;
        optional_text("author_role", self.author_role().as_deref(), SHORT_TEXT_MAX_LENGTH)?;
        require_text("content", self.content(), TESTIMONIAL_MAX_LENGTH)
    }
}

impl Validate for GroupLinkInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("platform", self.platform(), SHORT_TEXT_MAX_LENGTH)?;
        require_url("url", self.url())
    }
}
