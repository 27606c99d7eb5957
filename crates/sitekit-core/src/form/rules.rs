//! Per-field validity rules
//!
//! Each rule is a stateless predicate over the current field value.

use crate::text;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Digits, `+`, `-`, parentheses and spaces only
    static ref PHONE_PATTERN: Regex = Regex::new(r"^[0-9+()\- ]+$").unwrap();

    /// The WHATWG "valid e-mail address" grammar used by `<input type=email>`
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

/// MIME types accepted for attachments
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];

/// Filename extensions accepted for attachments (compared lowercase)
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".pdf"];

/// Why a field is currently invalid
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("name is blank")]
    NameRequired,
    #[error("no gender selected")]
    GenderRequired,
    #[error("email is blank")]
    EmailRequired,
    #[error("email is malformed")]
    EmailFormat,
    #[error("phone contains disallowed characters")]
    PhoneFormat,
    #[error("no category selected")]
    CategoryRequired,
    #[error("message is blank")]
    MessageRequired,
    #[error("attachment type not allowed")]
    AttachmentType,
}

/// Result of running a single field rule
pub type FieldResult = Result<(), FieldError>;

/// A file picked in the attachment input (never uploaded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    /// Declared MIME type, empty when the browser could not tell
    pub mime_type: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    text::trim(value).is_empty()
}

/// Host-side equivalent of the browser's `type=email` validity check
pub fn is_well_formed_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// An attachment passes if either its MIME type or its extension is allowed
pub fn is_allowed_file(file: &Attachment) -> bool {
    if ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return true;
    }
    let name = file.name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

pub fn validate_name(value: &str) -> FieldResult {
    if is_blank(value) {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

pub fn validate_gender(selected: Option<&str>) -> FieldResult {
    match selected {
        Some(_) => Ok(()),
        None => Err(FieldError::GenderRequired),
    }
}

/// Validate the email field
///
/// `native_valid` is the browser's own verdict when available; without it
/// the WHATWG grammar is applied to the trimmed value.
pub fn validate_email(value: &str, native_valid: Option<bool>) -> FieldResult {
    let value = text::trim(value);
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    let valid = native_valid.unwrap_or_else(|| is_well_formed_email(value));
    if !valid {
        return Err(FieldError::EmailFormat);
    }
    Ok(())
}

/// Phone is optional; when present it must match the phone pattern
pub fn validate_phone(value: &str) -> FieldResult {
    let value = text::trim(value);
    if value.is_empty() || PHONE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::PhoneFormat)
    }
}

/// The placeholder option has an empty value
pub fn validate_category(value: &str) -> FieldResult {
    if value.is_empty() {
        return Err(FieldError::CategoryRequired);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> FieldResult {
    if is_blank(value) {
        return Err(FieldError::MessageRequired);
    }
    Ok(())
}

pub fn validate_attachment(file: Option<&Attachment>) -> FieldResult {
    match file {
        Some(file) if !is_allowed_file(file) => Err(FieldError::AttachmentType),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_email_examples() {
        assert_eq!(validate_email("user@example.com", None), Ok(()));
        assert_eq!(validate_email("user@", None), Err(FieldError::EmailFormat));
        assert_eq!(validate_email("", None), Err(FieldError::EmailRequired));
        assert_eq!(validate_email("   ", None), Err(FieldError::EmailRequired));
    }

    #[test]
    fn test_email_prefers_native_verdict() {
        assert_eq!(
            validate_email("user@example.com", Some(false)),
            Err(FieldError::EmailFormat)
        );
        assert_eq!(validate_email("odd@host", Some(true)), Ok(()));
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_well_formed_email("a.b+tag@sub.example.co.jp"));
        assert!(is_well_formed_email("user@localhost"));
        assert!(!is_well_formed_email("no-at-sign"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("user@-example.com"));
        assert!(!is_well_formed_email("user@exa mple.com"));
    }

    #[test]
    fn test_phone_examples() {
        assert_eq!(validate_phone(""), Ok(()));
        assert_eq!(validate_phone("+1 (555) 123-4567"), Ok(()));
        assert_eq!(validate_phone("03-1234-5678"), Ok(()));
        assert_eq!(validate_phone("abc-123"), Err(FieldError::PhoneFormat));
        assert_eq!(validate_phone("090.1234.5678"), Err(FieldError::PhoneFormat));
    }

    #[test]
    fn test_phone_is_trimmed() {
        assert_eq!(validate_phone("  0120 000 000  "), Ok(()));
        assert_eq!(validate_phone("   "), Ok(()));
    }

    #[test]
    fn test_attachment_extension_is_case_insensitive() {
        let file = Attachment::new("photo.JPG", "");
        assert!(is_allowed_file(&file));
        assert_eq!(validate_attachment(Some(&file)), Ok(()));
    }

    #[test]
    fn test_attachment_mime_alone_is_enough() {
        let file = Attachment::new("scan", "application/pdf");
        assert!(is_allowed_file(&file));
    }

    #[test]
    fn test_attachment_allowed_mime_overrides_extension() {
        let file = Attachment::new("doc.txt", "application/pdf");
        assert!(is_allowed_file(&file));
        assert_eq!(validate_attachment(Some(&file)), Ok(()));
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        assert_eq!(validate_name("\u{FEFF}"), Err(FieldError::NameRequired));
        assert_eq!(validate_message(" \u{FEFF}\n"), Err(FieldError::MessageRequired));
        assert_eq!(validate_email("\u{FEFF}", None), Err(FieldError::EmailRequired));
        assert_eq!(
            validate_email("\u{FEFF}user@example.com", None),
            Ok(())
        );
        assert_eq!(validate_phone("\u{FEFF}03-1234-5678"), Ok(()));
    }

    #[test]
    fn test_attachment_disallowed_extension() {
        assert!(!is_allowed_file(&Attachment::new("doc.txt", "")));
        assert!(!is_allowed_file(&Attachment::new("doc.txt", "text/plain")));
        assert_eq!(
            validate_attachment(Some(&Attachment::new("doc.txt", "text/plain"))),
            Err(FieldError::AttachmentType)
        );
    }

    #[test]
    fn test_attachment_is_optional() {
        assert_eq!(validate_attachment(None), Ok(()));
    }

    #[test]
    fn test_category_placeholder() {
        assert_eq!(validate_category(""), Err(FieldError::CategoryRequired));
        assert_eq!(validate_category("general"), Ok(()));
    }

    #[test]
    fn test_gender_selection() {
        assert_eq!(validate_gender(None), Err(FieldError::GenderRequired));
        assert_eq!(validate_gender(Some("female")), Ok(()));
    }

    proptest! {
        /// Property: whitespace-only name and message are invalid
        #[test]
        fn whitespace_only_text_is_invalid(spaces in "[ \t\n\r]{0,12}") {
            prop_assert_eq!(validate_name(&spaces), Err(FieldError::NameRequired));
            prop_assert_eq!(validate_message(&spaces), Err(FieldError::MessageRequired));
        }

        /// Property: any non-whitespace content makes name and message valid
        #[test]
        fn non_blank_text_is_valid(
            pad in "[ \t]{0,4}",
            body in "[a-zA-Z0-9あ-ん]{1,20}",
        ) {
            let value = format!("{pad}{body}{pad}");
            prop_assert_eq!(validate_name(&value), Ok(()));
            prop_assert_eq!(validate_message(&value), Ok(()));
        }
    }
}
