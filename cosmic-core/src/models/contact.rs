//! General inquiries from the contact page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{non_blank, required, ValidationError};

/// Subject used when the form leaves it out
pub const DEFAULT_SUBJECT: &str = "Contact Form";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    /// `name`, `email` and `message` are required; phone and subject default.
    pub fn normalize(self) -> Result<NewContactMessage, ValidationError> {
        Ok(NewContactMessage {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            phone: non_blank(self.phone).unwrap_or_default(),
            subject: non_blank(self.subject).unwrap_or_else(|| DEFAULT_SUBJECT.to_owned()),
            message: required(self.message, "message")?,
        })
    }
}

/// Inquiry lifecycle, changed only by the admin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "archived" => Ok(Self::Archived),
            _ => Err(ValidationError::InvalidVariant {
                field: "status",
                value: s.to_owned(),
            }),
        }
    }
}
