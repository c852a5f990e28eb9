use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct CommitteeMember {
    id: i32,
    name: String,
    role: String,
    bio: Option<String>,
    image_url: Option<String>,
    email: Option<String>,
    display_order: i32,
}

impl CommitteeMember {
    pub fn new(
        id: i32,
        name: String,
        role: String,
        bio: Option<String>,
        image_url: Option<String>,
        email: Option<String>,
        display_order: i32,
    ) -> Self {
        Self {
            id,
            name,
            role,
            bio,
            image_url,
            email,
            display_order,
        }
    }
}

impl PartialOrd for CommitteeMember {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Committee members are displayed by their order first, then alphabetically.
impl Ord for CommitteeMember {
    fn cmp(&self, other: &Self) -> Ordering {
        self.display_order
            .cmp(&other.display_order)
            .then(self.name.cmp(&other.name))
            .then(self.id.cmp(&other.id))
    }
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct CommitteeMemberInput {
    name: String,
    role: String,
    bio: Option<String>,
    image_url: Option<String>,
    email: Option<String>,
    display_order: i32,
}

impl CommitteeMemberInput {
    pub fn new(
        name: String,
        role: String,
        bio: Option<String>,
        image_url: Option<String>,
        email: Option<String>,
        display_order: i32,
    ) -> Self {
        Self {
            name,
            role,
            bio,
            image_url,
            email,
            display_order,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub fn president() -> CommitteeMemberInput {
        CommitteeMemberInput::new(
            "Alice Bob".to_owned(),
            "President".to_owned(),
            Some("Founded the club.".to_owned()),
            None,
            Some("president@club.org".to_owned()),
            1,
        )
    }

    pub fn treasurer() -> CommitteeMemberInput {
        CommitteeMemberInput::new(
            "Carl Dean".to_owned(),
            "Treasurer".to_owned(),
            None,
            None,
            None,
            2,
        )
    }

    fn member(id: i32, name: &str, display_order: i32) -> CommitteeMember {
        CommitteeMember::new(
            id,
            name.to_owned(),
            "".to_owned(),
            None,
            None,
            None,
            display_order,
        )
    }

    #[parameterized(
        members = {
        (member(1, "Alice", 1), member(2, "Bob", 2)),
        (member(1, "Bob", 1), member(2, "Alice", 1)),
        (member(1, "Alice", 3), member(2, "Alice", 3)),
        },
        expected_result = {
        Ordering::Less,
        Ordering::Greater,
        Ordering::Less,
        }
    )]
    fn should_sort_committee_members(
        members: (CommitteeMember, CommitteeMember),
        expected_result: Ordering,
    ) {
        let (member1, member2) = members;
        assert_eq!(Some(expected_result), member1.partial_cmp(&member2));
    }
}
