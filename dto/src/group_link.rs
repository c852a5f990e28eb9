use chrono::NaiveDateTime;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A link to the group chat of an event (WhatsApp, Discord...).
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct GroupLink {
    id: i32,
    event_id: i32,
    platform: String,
    url: String,
    created_at: NaiveDateTime,
}

impl GroupLink {
    pub fn new(
        id: i32,
        event_id: i32,
        platform: String,
        url: String,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            event_id,
            platform,
            url,
            created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct GroupLinkInput {
    platform: String,
    url: String,
}

impl GroupLinkInput {
    pub fn new(platform: String, url: String) -> Self {
        Self { platform, url }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub fn whatsapp_link() -> GroupLinkInput {
        GroupLinkInput::new(
            "WhatsApp".to_owned(),
            "https://chat.whatsapp.com/AbCdEf123".to_owned(),
        )
    }

    pub fn discord_link() -> GroupLinkInput {
        GroupLinkInput::new(
            "Discord".to_owned(),
            "https://discord.gg/club".to_owned(),
        )
    }
}
