//! Client-side lead form validation
//!
//! Rules: name of at least 2 characters, an email of the shape
//! `local@domain.tld`, and a message of at least 10 characters. Phone is free
//! text and optional; an empty phone is sent as absent.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Minimum name length in characters
pub const MIN_NAME_CHARS: usize = 2;

/// Minimum message length in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A field of the lead form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Visitor name
    Name,
    /// Contact email
    Email,
    /// Optional phone number
    Phone,
    /// Project description
    Message,
}

impl Field {
    /// Label used in messages
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }
}

/// Raw form input as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    /// Visitor name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Optional phone number (empty when not provided)
    pub phone: String,
    /// Project description
    pub message: String,
}

impl LeadForm {
    /// Read one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Overwrite one field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Whether every field is empty
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
    }

    /// Check all rules and build the payload on success
    pub fn validate(&self) -> Result<LeadSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.name.trim().chars().count() < MIN_NAME_CHARS {
            errors.insert(Field::Name, "Name must be at least 2 characters");
        }
        if !is_valid_email(self.email.trim()) {
            errors.insert(Field::Email, "Invalid email address");
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(Field::Message, "Message must be at least 10 characters");
        }

        if errors.is_empty() {
            Ok(self.to_submission())
        } else {
            Err(errors)
        }
    }

    /// Build the payload without checking any rule (forms without client validation)
    pub fn to_submission(&self) -> LeadSubmission {
        let phone = self.phone.trim();
        LeadSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: self.message.trim().to_string(),
        }
    }
}

/// JSON body posted to the form endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    /// Visitor name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Project description
    pub message: String,
}

/// Field-level validation failures, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    /// Record a failure for `field`, replacing an earlier one
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Failure message for `field`, if any
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop the failure recorded for `field`
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Whether no field failed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate failures in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "- {}: {message}", field.label())?;
            first = false;
        }
        Ok(())
    }
}

/// Whether `email` has the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
