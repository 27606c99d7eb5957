//! Contact form validation
//!
//! The form never transmits anything. Submission shows a local status line
//! and resets the form; confirmation shows a plain-text preview.
//!
//! The binding layer reads the controls into a `FormValues` snapshot, asks
//! `FormValidator` what to do, and writes the results back to the DOM.

pub mod counter;
pub mod messages;
pub mod rules;
pub mod validator;

pub use counter::{CharCounter, CounterState};
pub use messages::{Locale, Messages};
pub use rules::{Attachment, FieldError, FieldResult};
pub use validator::{
    AttachmentChange, ConfirmOutcome, FormValidator, SubmitOutcome, ValidationReport,
};

/// The validated form controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Gender,
    Email,
    Phone,
    Category,
    Message,
    Attachment,
}

impl FieldId {
    /// All fields in display and validation order
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Gender,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Category,
        FieldId::Message,
        FieldId::Attachment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Gender => "gender",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Category => "category",
            FieldId::Message => "message",
            FieldId::Attachment => "attachment",
        }
    }
}

/// Snapshot of the form controls at the time of an event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    /// Value of the checked gender radio, if any
    pub gender: Option<String>,
    pub email: String,
    /// The email input's own `checkValidity()` result, when read from a browser
    pub email_native_valid: Option<bool>,
    pub phone: String,
    pub category: String,
    pub message: String,
    pub attachment: Option<Attachment>,
}
