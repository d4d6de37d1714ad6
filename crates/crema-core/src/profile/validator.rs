//! Profile form validation.
//!
//! Pure and deterministic: every call checks all three fields
//! independently in one pass and returns a freshly built result, so no
//! stale error can survive from a previous submit attempt.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::model::ProfileDraft;

/// Letters (Latin or Arabic script) and spaces only, 3 to 40 characters.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Latin}\p{Arabic} ]{3,40}$").expect("hardcoded name pattern")
});

/// `local@domain.tld`: at least one character before the `@`, a domain
/// containing a dot, and a TLD of two or more letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("hardcoded email pattern")
});

/// Exactly 11 digits, no separators or country-code symbol.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("hardcoded phone pattern"));

/// The editable profile fields, keyed in validation results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
}

/// Why a field failed validation.
///
/// An empty field always yields `Required`; a non-empty field that fails
/// its pattern yields `InvalidFormat`. The two never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// The field is empty (after trimming).
    Required,
    /// The field has content that does not match the required shape.
    InvalidFormat,
}

impl FieldError {
    /// Translation key for the inline error message.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Required => "validation.required",
            Self::InvalidFormat => "validation.invalid_format",
        }
    }
}

/// Outcome of one validation pass over a draft.
///
/// Built fresh on every call to [`validate`]; contains an entry only for
/// failing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: BTreeMap<ProfileField, FieldError>,
}

impl ValidationResult {
    /// True iff all three fields passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Per-field errors; empty when the draft is valid.
    pub fn errors(&self) -> &BTreeMap<ProfileField, FieldError> {
        &self.errors
    }

    /// The error for one field, if it failed.
    pub fn error_for(&self, field: ProfileField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }
}

/// Validates a draft, checking all three fields independently.
pub fn validate(draft: &ProfileDraft) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if let Some(error) = check_name(&draft.name) {
        errors.insert(ProfileField::Name, error);
    }
    if let Some(error) = check_email(&draft.email) {
        errors.insert(ProfileField::Email, error);
    }
    if let Some(error) = check_phone(&draft.phone) {
        errors.insert(ProfileField::Phone, error);
    }

    ValidationResult { errors }
}

fn check_name(name: &str) -> Option<FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Some(FieldError::InvalidFormat);
    }
    None
}

fn check_email(email: &str) -> Option<FieldError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Some(FieldError::InvalidFormat);
    }
    None
}

fn check_phone(phone: &str) -> Option<FieldError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    if !PHONE_PATTERN.is_match(trimmed) {
        return Some(FieldError::InvalidFormat);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, phone: &str) -> ProfileDraft {
        ProfileDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_all_empty_yields_required_for_all_fields() {
        let result = validate(&draft("", "", ""));
        assert!(!result.is_valid());
        assert_eq!(result.error_for(ProfileField::Name), Some(FieldError::Required));
        assert_eq!(result.error_for(ProfileField::Email), Some(FieldError::Required));
        assert_eq!(result.error_for(ProfileField::Phone), Some(FieldError::Required));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let result = validate(&draft("   ", " ", "\t"));
        assert_eq!(result.error_for(ProfileField::Name), Some(FieldError::Required));
        assert_eq!(result.error_for(ProfileField::Email), Some(FieldError::Required));
        assert_eq!(result.error_for(ProfileField::Phone), Some(FieldError::Required));
    }

    #[test]
    fn test_valid_draft() {
        let result = validate(&draft("Ahmed Ali", "a@b.com", "01012345678"));
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_arabic_name_is_valid() {
        let result = validate(&draft("أحمد علي", "ahmed@crema.app", "01012345678"));
        assert!(result.is_valid());
    }

    #[test]
    fn test_invalid_email_and_phone() {
        let result = validate(&draft("Ahmed Ali", "not-an-email", "123"));
        assert!(!result.is_valid());
        assert_eq!(result.error_for(ProfileField::Name), None);
        assert_eq!(
            result.error_for(ProfileField::Email),
            Some(FieldError::InvalidFormat)
        );
        assert_eq!(
            result.error_for(ProfileField::Phone),
            Some(FieldError::InvalidFormat)
        );
    }

    #[test]
    fn test_name_with_digits_is_invalid_format_not_required() {
        let result = validate(&draft("Ahmed 99", "a@b.com", "01012345678"));
        assert_eq!(
            result.error_for(ProfileField::Name),
            Some(FieldError::InvalidFormat)
        );
    }

    #[test]
    fn test_name_length_bounds() {
        // Two characters: below the minimum.
        assert_eq!(
            validate(&draft("Al", "a@b.com", "01012345678"))
                .error_for(ProfileField::Name),
            Some(FieldError::InvalidFormat)
        );
        // Exactly three characters passes.
        assert!(validate(&draft("Ali", "a@b.com", "01012345678")).is_valid());
        // Exactly forty characters passes.
        let name_40 = "A".repeat(40);
        assert!(validate(&draft(&name_40, "a@b.com", "01012345678")).is_valid());
        // Forty-one characters fails.
        let name_41 = "A".repeat(41);
        assert_eq!(
            validate(&draft(&name_41, "a@b.com", "01012345678"))
                .error_for(ProfileField::Name),
            Some(FieldError::InvalidFormat)
        );
    }

    #[test]
    fn test_email_shapes() {
        let valid = ["a@b.com", "first.last@shop.example.org", "x@y.co"];
        for email in valid {
            assert!(
                validate(&draft("Ahmed Ali", email, "01012345678")).is_valid(),
                "expected '{email}' to be valid"
            );
        }
        let invalid = ["@b.com", "a@b", "a@b.c", "a b@c.com", "plain"];
        for email in invalid {
            assert_eq!(
                validate(&draft("Ahmed Ali", email, "01012345678"))
                    .error_for(ProfileField::Email),
                Some(FieldError::InvalidFormat),
                "expected '{email}' to be rejected"
            );
        }
    }

    #[test]
    fn test_phone_must_be_exactly_eleven_digits() {
        for phone in ["0101234567", "010123456789", "+2001012345", "010-1234567"] {
            assert_eq!(
                validate(&draft("Ahmed Ali", "a@b.com", phone))
                    .error_for(ProfileField::Phone),
                Some(FieldError::InvalidFormat),
                "expected '{phone}' to be rejected"
            );
        }
        assert!(validate(&draft("Ahmed Ali", "a@b.com", "01012345678")).is_valid());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let d = draft("Ahmed Ali", "not-an-email", "123");
        assert_eq!(validate(&d), validate(&d));
    }

    #[test]
    fn test_error_message_keys() {
        assert_eq!(FieldError::Required.message_key(), "validation.required");
        assert_eq!(
            FieldError::InvalidFormat.message_key(),
            "validation.invalid_format"
        );
    }
}
