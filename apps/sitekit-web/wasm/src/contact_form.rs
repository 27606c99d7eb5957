//! Contact form wiring
//!
//! Reads the controls into a `FormValues` snapshot on every event, lets
//! `FormValidator` decide, and writes errors, counter and status back.
//! Nothing is ever sent over the network.

use crate::dom::{self, DomResultExt};
use crate::log;
use sitekit_core::form::{
    Attachment, CharCounter, ConfirmOutcome, CounterState, FieldId, FieldResult, FormValidator,
    FormValues, Messages, SubmitOutcome, ValidationReport,
};
use sitekit_core::{text, FormConfig, SiteError};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

const ARIA_INVALID: &str = "aria-invalid";

/// A validated control and the element showing its error
struct FieldBinding {
    /// Receives `aria-invalid`
    input: Element,
    error: Element,
}

/// Element handles and rules for one contact form
pub struct ContactForm {
    document: Document,
    config: FormConfig,
    validator: FormValidator,
    form: HtmlFormElement,
    status: Element,
    name: HtmlInputElement,
    email: HtmlInputElement,
    phone: HtmlInputElement,
    category: HtmlSelectElement,
    message: HtmlTextAreaElement,
    counter: Element,
    attachment: HtmlInputElement,
    attachment_name: Element,
    fields: HashMap<FieldId, FieldBinding>,
}

impl ContactForm {
    /// Look up every control the form needs
    ///
    /// Returns `Ok(None)` when the page has no contact form at all.
    pub fn find(document: &Document, config: &FormConfig) -> Result<Option<Self>, SiteError> {
        if document.get_element_by_id(&config.form_id).is_none() {
            return Ok(None);
        }

        let gender_input = document
            .query_selector(&format!("input[name=\"{}\"]", config.gender_name))
            .dom()?
            .ok_or_else(|| {
                SiteError::MissingElement(format!("input[name=\"{}\"]", config.gender_name))
            })?;

        let message: HtmlTextAreaElement = dom::by_id(document, &config.message_id)?;
        let counter = CharCounter::from_attribute(message.get_attribute("maxlength").as_deref());

        let mut fields = HashMap::new();
        for (field, input) in [
            (FieldId::Name, dom::by_id::<Element>(document, &config.name_id)?),
            (FieldId::Gender, gender_input),
            (FieldId::Email, dom::by_id(document, &config.email_id)?),
            (FieldId::Phone, dom::by_id(document, &config.phone_id)?),
            (FieldId::Category, dom::by_id(document, &config.category_id)?),
            (FieldId::Message, message.clone().unchecked_into()),
            (FieldId::Attachment, dom::by_id(document, &config.attachment_id)?),
        ] {
            let error = dom::by_id(document, &config.error_id(field.as_str()))?;
            fields.insert(field, FieldBinding { input, error });
        }

        Ok(Some(Self {
            document: document.clone(),
            config: config.clone(),
            validator: FormValidator::new(Messages::new(config.locale), counter),
            form: dom::by_id(document, &config.form_id)?,
            status: dom::by_id(document, &config.status_id)?,
            name: dom::by_id(document, &config.name_id)?,
            email: dom::by_id(document, &config.email_id)?,
            phone: dom::by_id(document, &config.phone_id)?,
            category: dom::by_id(document, &config.category_id)?,
            message,
            counter: dom::by_id(document, &config.counter_id)?,
            attachment: dom::by_id(document, &config.attachment_id)?,
            attachment_name: dom::by_id(document, &config.attachment_name_id)?,
            fields,
        }))
    }

    /// Wire all listeners and draw the initial counter
    pub fn attach(self) -> Result<Rc<Self>, SiteError> {
        let this = Rc::new(self);

        for (field, target) in [
            (FieldId::Name, this.name.clone().unchecked_into::<Element>()),
            (FieldId::Email, this.email.clone().unchecked_into()),
            (FieldId::Message, this.message.clone().unchecked_into()),
        ] {
            let form = Rc::clone(&this);
            listen(&target, "blur", move |_| {
                form.validate_one(field);
                Ok(())
            })?;
        }

        let form = Rc::clone(&this);
        listen(&this.message, "input", move |_| form.update_counter())?;

        let form = Rc::clone(&this);
        listen(&this.attachment, "change", move |_| form.on_attachment_change())?;

        let form = Rc::clone(&this);
        listen(&this.form, "submit", move |event| form.on_submit(&event))?;

        if let Some(button) = this.document.get_element_by_id(&this.config.confirm_button_id) {
            let form = Rc::clone(&this);
            listen(&button, "click", move |_| form.on_confirm())?;
        } else {
            log::debug("confirm button not found; preview disabled");
        }

        this.update_counter()?;
        Ok(this)
    }

    /// Snapshot of the controls as they are right now
    pub fn values(&self) -> FormValues {
        self.read_values(true)
    }

    /// Read the controls; the email input's own validity is only asked for
    /// when `check_email` is set and the field has content, since
    /// `checkValidity()` fires an `invalid` event on failure
    fn read_values(&self, check_email: bool) -> FormValues {
        let gender = self
            .document
            .query_selector(&format!(
                "input[name=\"{}\"]:checked",
                self.config.gender_name
            ))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value());

        let email = self.email.value();
        let email_native_valid = (check_email && !text::trim(&email).is_empty())
            .then(|| self.email.check_validity());

        FormValues {
            name: self.name.value(),
            gender,
            email,
            email_native_valid,
            phone: self.phone.value(),
            category: self.category.value(),
            message: self.message.value(),
            attachment: self.selected_file(),
        }
    }

    fn selected_file(&self) -> Option<Attachment> {
        self.attachment
            .files()
            .and_then(|files| files.get(0))
            .map(|file| Attachment::new(file.name(), file.type_()))
    }

    fn validate_one(&self, field: FieldId) {
        let values = self.read_values(field == FieldId::Email);
        let result = self.validator.validate_field(field, &values);
        self.show(field, result);
    }

    /// Set or clear a field's inline error
    fn show(&self, field: FieldId, result: FieldResult) {
        let Some(binding) = self.fields.get(&field) else {
            return;
        };
        let outcome = match result {
            Ok(()) => {
                binding.error.set_text_content(Some(""));
                binding.input.remove_attribute(ARIA_INVALID)
            }
            Err(error) => {
                binding
                    .error
                    .set_text_content(Some(self.validator.messages().error_text(error)));
                binding.input.set_attribute(ARIA_INVALID, "true")
            }
        };
        if let Err(e) = outcome {
            log::warn(&format!(
                "could not update {} error state: {}",
                field.as_str(),
                dom::describe(&e)
            ));
        }
    }

    fn show_report(&self, report: &ValidationReport) {
        for (field, result) in report.outcomes() {
            self.show(*field, *result);
        }
    }

    fn draw_counter(&self, state: CounterState) -> Result<(), SiteError> {
        self.counter
            .set_text_content(Some(&self.validator.counter_label(state)));
        self.counter
            .class_list()
            .toggle_with_force(&self.config.limit_class, state.at_limit)
            .dom()?;
        Ok(())
    }

    fn update_counter(&self) -> Result<(), SiteError> {
        self.draw_counter(self.validator.count(&self.message.value()))
    }

    fn on_attachment_change(&self) -> Result<(), SiteError> {
        let change = self.validator.attachment_changed(self.selected_file().as_ref());
        if change.clear_selection {
            self.attachment.set_value("");
        }
        self.attachment_name.set_text_content(Some(&change.display));
        self.show(FieldId::Attachment, change.result);
        Ok(())
    }

    fn reset_status(&self) -> Result<(), SiteError> {
        self.status.set_text_content(Some(""));
        self.status
            .class_list()
            .remove_1(&self.config.success_class)
            .dom()
    }

    fn on_submit(&self, event: &Event) -> Result<(), SiteError> {
        event.prevent_default();
        self.reset_status()?;

        let outcome = self.validator.submit(&self.values());
        self.show_report(outcome.report());

        if let SubmitOutcome::Accepted {
            status,
            attachment_display,
            ..
        } = outcome
        {
            self.status.set_text_content(Some(status));
            self.status
                .class_list()
                .add_1(&self.config.success_class)
                .dom()?;
            self.form.reset();
            self.update_counter()?;
            self.attachment_name
                .set_text_content(Some(attachment_display));
        }
        Ok(())
    }

    fn on_confirm(&self) -> Result<(), SiteError> {
        let outcome = self.validator.confirm(&self.values());
        self.show_report(outcome.report());

        if let ConfirmOutcome::Preview { summary, .. } = outcome {
            web_sys::window()
                .ok_or_else(|| SiteError::MissingElement("window".to_string()))?
                .alert_with_message(&summary)
                .dom()?;
        }
        Ok(())
    }
}

/// Register a page-lifetime listener whose errors are logged, not thrown
fn listen<F>(target: &Element, kind: &'static str, mut handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) -> Result<(), SiteError> + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Err(e) = handler(event) {
            log::warn(&format!("{} handler failed: {}", kind, e));
        }
    }) as Box<dyn FnMut(_)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .dom()?;
    closure.forget();
    Ok(())
}
