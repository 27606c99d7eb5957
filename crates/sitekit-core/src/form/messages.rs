//! User-facing text for the contact form

use super::rules::FieldError;
use serde::{Deserialize, Serialize};

/// Language of the form's user-facing text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese, as shipped on the site
    #[default]
    Ja,
    En,
}

/// Text catalog for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Inline error shown next to a field
    pub fn error_text(&self, error: FieldError) -> &'static str {
        match (self.locale, error) {
            (Locale::Ja, FieldError::NameRequired) => "名前を入力してください",
            (Locale::Ja, FieldError::GenderRequired) => "性別を選択してください",
            (Locale::Ja, FieldError::EmailRequired) => "メールアドレスを入力してください",
            (Locale::Ja, FieldError::EmailFormat) => "メール形式が正しくありません",
            (Locale::Ja, FieldError::PhoneFormat) => "電話番号の形式が正しくありません",
            (Locale::Ja, FieldError::CategoryRequired) => "種別を選択してください",
            (Locale::Ja, FieldError::MessageRequired) => "内容を入力してください",
            (Locale::Ja, FieldError::AttachmentType) => "対応していないファイル形式です",
            (Locale::En, FieldError::NameRequired) => "Please enter your name",
            (Locale::En, FieldError::GenderRequired) => "Please select a gender",
            (Locale::En, FieldError::EmailRequired) => "Please enter your email address",
            (Locale::En, FieldError::EmailFormat) => "The email address is not valid",
            (Locale::En, FieldError::PhoneFormat) => "The phone number is not valid",
            (Locale::En, FieldError::CategoryRequired) => "Please select a category",
            (Locale::En, FieldError::MessageRequired) => "Please enter a message",
            (Locale::En, FieldError::AttachmentType) => "This file type is not supported",
        }
    }

    /// Status line shown after an accepted (never transmitted) submission
    pub fn submitted(&self) -> &'static str {
        match self.locale {
            Locale::Ja => "内容は送信されません。",
            Locale::En => "Your message was not sent.",
        }
    }

    /// Placeholder for an empty attachment selection
    pub fn no_file(&self) -> &'static str {
        match self.locale {
            Locale::Ja => "未選択",
            Locale::En => "No file selected",
        }
    }

    /// Placeholder for an unselected gender in the summary
    pub fn unselected(&self) -> &'static str {
        match self.locale {
            Locale::Ja => "未選択",
            Locale::En => "Not selected",
        }
    }

    /// Placeholder for an empty optional text field in the summary
    pub fn not_entered(&self) -> &'static str {
        match self.locale {
            Locale::Ja => "未入力",
            Locale::En => "Not entered",
        }
    }

    /// Character counter label
    pub fn remaining(&self, remaining: usize) -> String {
        match self.locale {
            Locale::Ja => format!("残り {} 文字", remaining),
            Locale::En => format!("{} characters left", remaining),
        }
    }

    /// Summary line labels in display order
    pub(crate) fn summary_labels(&self) -> SummaryLabels {
        match self.locale {
            Locale::Ja => SummaryLabels {
                name: "名前",
                gender: "性別",
                email: "メール",
                phone: "電話",
                category: "種別",
                message: "内容",
                attachment: "添付",
            },
            Locale::En => SummaryLabels {
                name: "Name",
                gender: "Gender",
                email: "Email",
                phone: "Phone",
                category: "Category",
                message: "Message",
                attachment: "Attachment",
            },
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

pub(crate) struct SummaryLabels {
    pub name: &'static str,
    pub gender: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub category: &'static str,
    pub message: &'static str,
    pub attachment: &'static str,
}
