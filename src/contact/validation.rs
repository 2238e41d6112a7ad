//! Field-level validation for the contact form.
//!
//! Errors are data, not failures: a submission maps to a sparse set of
//! per-field messages, and an empty set means the form may be sent. The email
//! and phone checks are intentionally permissive; they gate obvious typos,
//! not deliverability.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw contact form values, mutated field-by-field as the visitor types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Identifies one input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

/// Sparse field-to-message mapping. Only failing fields appear; an empty set
/// is the single source of truth for "the form is valid".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors {
    entries: BTreeMap<FormField, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Drops the message for one field, leaving the others untouched.
    pub fn clear(&mut self, field: FormField) {
        self.entries.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validates a submission and returns the failing fields.
///
/// Total over all inputs; the submission itself is never modified.
pub fn validate(input: &ContactSubmission) -> FormErrors {
    let mut errors = FormErrors::default();

    if input.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }

    if input.email.trim().is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !has_email_shape(&input.email) {
        errors.insert(FormField::Email, "Please enter a valid email");
    }

    if input.phone.trim().is_empty() {
        errors.insert(FormField::Phone, "Phone number is required");
    } else if digit_count(&input.phone) != 10 {
        errors.insert(
            FormField::Phone,
            "Please enter a valid 10-digit phone number",
        );
    }

    let message = input.message.trim();
    if message.is_empty() {
        errors.insert(FormField::Message, "Message is required");
    } else if message.chars().count() < 10 {
        errors.insert(FormField::Message, "Message must be at least 10 characters");
    }

    errors
}

/// Loose shape check: one `@` with non-empty, whitespace-free segments on
/// either side, and a dot inside the domain with characters around it.
fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(index, byte)| byte == b'.' && index > 0 && index + 1 < domain.len())
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}
