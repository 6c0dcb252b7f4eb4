//! Contact form payload and validation rules.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a contact form submission.
///
/// Every field is optional on the wire so that an absent field, `null`
/// and an empty string are all rejected as missing by [`ContactForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Preferred rental date, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Preferred start time, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Reason a submission was rejected. The message is returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Invalid phone number format")]
    InvalidPhone,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Invalid email format")]
    InvalidEmail,
}

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Greek numbers: ten digits with an optional +30 / 0030 / 30 country code.
fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| Regex::new(r"^(\+30|0030|30)?[0-9]{10}$").expect("valid phone regex"))
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

impl ContactForm {
    /// Check the submission. Rules run in a fixed order and the first
    /// failure is reported.
    pub fn validate(&self) -> Result<(), ContactError> {
        let (Some(name), Some(phone), Some(message)) = (
            non_empty(&self.name),
            non_empty(&self.phone),
            non_empty(&self.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        if name.trim().chars().count() < MIN_NAME_CHARS {
            return Err(ContactError::NameTooShort);
        }

        if !phone_regex().is_match(&normalize_phone(phone)) {
            return Err(ContactError::InvalidPhone);
        }

        if message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return Err(ContactError::MessageTooShort);
        }

        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            if !email_regex().is_match(email) {
                return Err(ContactError::InvalidEmail);
            }
        }

        Ok(())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Phone number with all whitespace removed.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactForm {
        ContactForm {
            name: Some("Νίκος".into()),
            phone: Some("6978277120".into()),
            email: None,
            message: Some("Θα θέλαμε το Lobster 23 για το Σάββατο.".into()),
            date: Some("2026-07-04".into()),
            time: None,
        }
    }

    #[test]
    fn test_valid_submission() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_missing_required_fields() {
        for form in [
            ContactForm { name: Some(String::new()), ..valid() },
            ContactForm { phone: None, ..valid() },
            ContactForm { message: Some(String::new()), ..valid() },
        ] {
            assert_eq!(form.validate(), Err(ContactError::MissingFields));
        }
    }

    #[test]
    fn test_missing_fields_checked_before_other_rules() {
        let form = ContactForm {
            name: Some("A".into()),
            message: None,
            ..valid()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_name_is_trimmed_before_length_check() {
        let form = ContactForm { name: Some("  Ν  ".into()), ..valid() };
        assert_eq!(form.validate(), Err(ContactError::NameTooShort));

        let form = ContactForm { name: Some("Νί".into()), ..valid() };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_phone_formats() {
        for phone in ["6978277120", "+306978277120", "00306978277120", "306978277120", "697 827 7120", "+30 697 827 7120"] {
            let form = ContactForm { phone: Some(phone.into()), ..valid() };
            assert_eq!(form.validate(), Ok(()), "{phone}");
        }
        for phone in ["697827712", "69782771201", "+446978277120", "697-827-7120", "abcdefghij"] {
            let form = ContactForm { phone: Some(phone.into()), ..valid() };
            assert_eq!(form.validate(), Err(ContactError::InvalidPhone), "{phone}");
        }
    }

    #[test]
    fn test_message_length_after_trim() {
        let form = ContactForm { message: Some("   short    ".into()), ..valid() };
        assert_eq!(form.validate(), Err(ContactError::MessageTooShort));

        let form = ContactForm { message: Some("ten chars!".into()), ..valid() };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_optional_email() {
        let form = ContactForm { email: Some(String::new()), ..valid() };
        assert_eq!(form.validate(), Ok(()));

        let form = ContactForm { email: Some("nikos@example.gr".into()), ..valid() };
        assert_eq!(form.validate(), Ok(()));

        for email in ["nikos", "nikos@example", "nik os@example.gr", "@example.gr"] {
            let form = ContactForm { email: Some(email.into()), ..valid() };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn test_deserialize_with_absent_fields() {
        let form: ContactForm = serde_json::from_str(r#"{"name":"Maria"}"#).unwrap();
        assert_eq!(form.phone, None);
        assert_eq!(form.email, None);
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let form: ContactForm = serde_json::from_str(
            r#"{"name":null,"phone":"6978277120","message":"Long enough message"}"#,
        )
        .unwrap();
        assert_eq!(form.name, None);
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ContactError::MissingFields.to_string(), "Missing required fields");
        assert_eq!(ContactError::InvalidEmail.to_string(), "Invalid email format");
    }
}
