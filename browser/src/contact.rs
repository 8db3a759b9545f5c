//! Contact request form. Submission is simulated and never leaves the client.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use log::info;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Comments,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Comments => "comments",
        };
        f.write_str(name)
    }
}

/// Per-field validation messages. Only failing fields appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub full_name: String,
    pub email: String,
    pub listing_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub comments: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{8,}$").expect("valid phone regex"))
}

impl ContactForm {
    pub fn check_field(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::FullName if self.full_name.trim().chars().count() < 3 => {
                Some("Must be at least 3 characters.")
            }
            Field::Email if !email_pattern().is_match(&self.email) => {
                Some("Please enter a valid email address.")
            }
            Field::Phone if !phone_pattern().is_match(&self.phone) => {
                Some("Must contain at least 8 digits and only numbers.")
            }
            Field::Comments if self.comments.trim().chars().count() < 10 => {
                Some("Must be at least 10 characters.")
            }
            _ => None,
        }
    }

    /// Checks every field; a failure in one never hides another.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors: BTreeMap<Field, &'static str> =
            [Field::FullName, Field::Email, Field::Phone, Field::Comments]
                .into_iter()
                .filter_map(|field| self.check_field(field).map(|msg| (field, msg)))
                .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(FieldErrors(errors))
        }
    }

    /// Validates, then clears the form. Nothing is sent anywhere.
    pub fn submit(&mut self, listing_id: Option<i64>) -> Result<Receipt, FieldErrors> {
        self.validate()?;
        let submitted = std::mem::take(self);
        info!(
            "Contact request accepted for listing {:?} (not delivered)",
            listing_id
        );
        Ok(Receipt {
            full_name: submitted.full_name.trim().to_string(),
            email: submitted.email,
            listing_id,
        })
    }
}
