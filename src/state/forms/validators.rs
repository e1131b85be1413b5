//! Field validators for the contact form
//!
//! Each validator is a pure function of the raw field value. Rules run in a
//! fixed order and the first failing rule's message is returned.

use super::field::{ContactField, FieldMap};
use regex::Regex;
use std::sync::LazyLock;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 50;
const EMAIL_MAX_CHARS: usize = 100;
const MESSAGE_MIN_CHARS: usize = 10;
const MESSAGE_MAX_CHARS: usize = 1000;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\x{FEFF}'-]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Outcome of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty exactly when `valid` is true
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Whitespace as browsers trim it: Unicode whitespace plus the BOM
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Strip leading and trailing blank characters
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank_char)
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_name(name: &str) -> ValidationResult {
    let trimmed = trim_blank(name);

    if trimmed.is_empty() {
        return ValidationResult::fail("Name is required");
    }
    if char_len(trimmed) < NAME_MIN_CHARS {
        return ValidationResult::fail("Name must be at least 2 characters");
    }
    if char_len(trimmed) > NAME_MAX_CHARS {
        return ValidationResult::fail("Name must be less than 50 characters");
    }
    // Character check runs against the raw value
    if !NAME_PATTERN.is_match(name) {
        return ValidationResult::fail("Name contains invalid characters");
    }

    ValidationResult::ok()
}

/// Validate an email address.
///
/// The format check runs before the length check, so an over-long address
/// that is also malformed reports the format error.
pub fn validate_email(email: &str) -> ValidationResult {
    if trim_blank(email).is_empty() {
        return ValidationResult::fail("Email is required");
    }
    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::fail("Please enter a valid email address");
    }
    if char_len(email) > EMAIL_MAX_CHARS {
        return ValidationResult::fail("Email is too long");
    }

    ValidationResult::ok()
}

pub fn validate_message(message: &str) -> ValidationResult {
    let trimmed = trim_blank(message);

    if trimmed.is_empty() {
        return ValidationResult::fail("Message is required");
    }
    if char_len(trimmed) < MESSAGE_MIN_CHARS {
        return ValidationResult::fail("Message must be at least 10 characters");
    }
    if char_len(trimmed) > MESSAGE_MAX_CHARS {
        return ValidationResult::fail("Message must be less than 1000 characters");
    }

    ValidationResult::ok()
}

/// Run the validator that belongs to `field`
pub fn validate_field(field: ContactField, value: &str) -> ValidationResult {
    match field {
        ContactField::Name => validate_name(value),
        ContactField::Email => validate_email(value),
        ContactField::Message => validate_message(value),
    }
}

/// True when no field carries an error message
pub fn is_form_valid(errors: &FieldMap<String>) -> bool {
    errors.values().all(|error| error.is_empty())
}
