use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Where a membership application stands.
/// Every student starts as [StudentStatus::Pending] until an admin reviews the application.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Pending => "pending",
            StudentStatus::Approved => "approved",
            StudentStatus::Rejected => "rejected",
        }
    }
}

impl Display for StudentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownStudentStatus(pub String);

impl Display for UnknownStudentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown student status [status: {}]", self.0)
    }
}

impl FromStr for StudentStatus {
    type Err = UnknownStudentStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Ok(StudentStatus::Pending),
            "approved" => Ok(StudentStatus::Approved),
            "rejected" => Ok(StudentStatus::Rejected),
            _ => Err(UnknownStudentStatus(value.to_owned())),
        }
    }
}
