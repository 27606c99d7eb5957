//! Aggregate validation, simulated submission and confirmation

use super::counter::{CharCounter, CounterState};
use super::messages::Messages;
use super::rules::{self, Attachment, FieldError, FieldResult};
use super::{FieldId, FormValues};
use crate::text;
use tracing::{debug, info};

/// Outcome of every field rule, in `FieldId::ALL` order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<(FieldId, FieldResult)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, result)| result.is_ok())
    }

    /// Every field with its result, valid ones included, so stale errors
    /// can be cleared
    pub fn outcomes(&self) -> &[(FieldId, FieldResult)] {
        &self.outcomes
    }

    pub fn errors(&self) -> impl Iterator<Item = (FieldId, FieldError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|(field, result)| result.err().map(|e| (*field, e)))
    }

    pub fn get(&self, field: FieldId) -> Option<FieldResult> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, result)| *result)
    }
}

/// Result of the submit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid: show the status text, mark success, reset the form
    Accepted {
        report: ValidationReport,
        status: &'static str,
        counter: CounterState,
        attachment_display: &'static str,
    },
    /// At least one field invalid: only inline errors change
    Rejected { report: ValidationReport },
}

impl SubmitOutcome {
    pub fn report(&self) -> &ValidationReport {
        match self {
            SubmitOutcome::Accepted { report, .. } | SubmitOutcome::Rejected { report } => report,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Result of the confirm action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// All fields valid: show `summary` in a blocking dialog
    Preview {
        report: ValidationReport,
        summary: String,
    },
    Rejected {
        report: ValidationReport,
    },
}

impl ConfirmOutcome {
    pub fn report(&self) -> &ValidationReport {
        match self {
            ConfirmOutcome::Preview { report, .. } | ConfirmOutcome::Rejected { report } => report,
        }
    }
}

/// What to do after the attachment input changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentChange {
    /// Text for the filename display
    pub display: String,
    /// Empty the file input's selection
    pub clear_selection: bool,
    /// `Err` shows the error, `Ok` clears it
    pub result: FieldResult,
}

/// Rule application for one contact form
#[derive(Debug, Clone)]
pub struct FormValidator {
    messages: Messages,
    counter: CharCounter,
}

impl FormValidator {
    pub fn new(messages: Messages, counter: CharCounter) -> Self {
        Self { messages, counter }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn counter(&self) -> &CharCounter {
        &self.counter
    }

    /// Run a single field's rule
    pub fn validate_field(&self, field: FieldId, values: &FormValues) -> FieldResult {
        let result = match field {
            FieldId::Name => rules::validate_name(&values.name),
            FieldId::Gender => rules::validate_gender(values.gender.as_deref()),
            FieldId::Email => rules::validate_email(&values.email, values.email_native_valid),
            FieldId::Phone => rules::validate_phone(&values.phone),
            FieldId::Category => rules::validate_category(&values.category),
            FieldId::Message => rules::validate_message(&values.message),
            FieldId::Attachment => rules::validate_attachment(values.attachment.as_ref()),
        };
        if let Err(error) = result {
            debug!(field = field.as_str(), %error, "field invalid");
        }
        result
    }

    /// Run every rule; none is skipped even after a failure
    pub fn validate_all(&self, values: &FormValues) -> ValidationReport {
        let outcomes = FieldId::ALL
            .iter()
            .map(|field| (*field, self.validate_field(*field, values)))
            .collect();
        ValidationReport { outcomes }
    }

    /// Simulated submission; nothing is ever sent anywhere
    pub fn submit(&self, values: &FormValues) -> SubmitOutcome {
        let report = self.validate_all(values);
        if !report.is_valid() {
            info!(errors = report.errors().count(), "submit rejected");
            return SubmitOutcome::Rejected { report };
        }
        info!("submit accepted locally");
        SubmitOutcome::Accepted {
            report,
            status: self.messages.submitted(),
            counter: self.counter.initial(),
            attachment_display: self.messages.no_file(),
        }
    }

    /// Validate, then build the plain-text preview
    pub fn confirm(&self, values: &FormValues) -> ConfirmOutcome {
        let report = self.validate_all(values);
        if !report.is_valid() {
            return ConfirmOutcome::Rejected { report };
        }
        ConfirmOutcome::Preview {
            report,
            summary: self.summary(values),
        }
    }

    /// Plain-text preview of the would-be submission
    pub fn summary(&self, values: &FormValues) -> String {
        let labels = self.messages.summary_labels();
        let gender = values
            .gender
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or(self.messages.unselected());
        let phone = text::trim(&values.phone);
        let phone = if phone.is_empty() {
            self.messages.not_entered()
        } else {
            phone
        };
        let attachment = values
            .attachment
            .as_ref()
            .map(|file| file.name.as_str())
            .unwrap_or(self.messages.no_file());

        [
            format!("{}: {}", labels.name, text::trim(&values.name)),
            format!("{}: {}", labels.gender, gender),
            format!("{}: {}", labels.email, text::trim(&values.email)),
            format!("{}: {}", labels.phone, phone),
            format!("{}: {}", labels.category, values.category),
            format!("{}: {}", labels.message, values.message),
            format!("{}: {}", labels.attachment, attachment),
        ]
        .join("\n")
    }

    /// React to a new file selection
    pub fn attachment_changed(&self, file: Option<&Attachment>) -> AttachmentChange {
        match file {
            Some(file) if !rules::is_allowed_file(file) => {
                debug!(name = %file.name, mime = %file.mime_type, "rejecting attachment");
                AttachmentChange {
                    display: self.messages.no_file().to_string(),
                    clear_selection: true,
                    result: Err(FieldError::AttachmentType),
                }
            }
            Some(file) => AttachmentChange {
                display: file.name.clone(),
                clear_selection: false,
                result: Ok(()),
            },
            None => AttachmentChange {
                display: self.messages.no_file().to_string(),
                clear_selection: false,
                result: Ok(()),
            },
        }
    }

    /// Counter state for the current message value
    pub fn count(&self, message: &str) -> CounterState {
        self.counter.update(message)
    }

    /// Label text for a counter state
    pub fn counter_label(&self, state: CounterState) -> String {
        self.messages.remaining(state.remaining)
    }
}
