//! Page behavior configuration
//!
//! Every field has a default matching the markup the site ships with, so an
//! empty JSON object (or no configuration at all) attaches the stock
//! behaviors. Pages with different class names or ids can override just the
//! fields they need.

use crate::error::ConfigError;
use crate::form::Locale;
use serde::{Deserialize, Serialize};

/// Top-level configuration for all attached behaviors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Drag-to-scroll carousels
    pub drag: DragConfig,
    /// Contact form validation
    pub form: FormConfig,
    /// Table of contents generation
    pub toc: TocConfig,
}

impl SiteConfig {
    /// Parse configuration from a JSON string
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range
    ///
    /// # Example
    ///
    /// ```
    /// use sitekit_core::config::SiteConfig;
    ///
    /// let config = SiteConfig::from_json(r#"{ "drag": { "click_threshold": 8.0 } }"#).unwrap();
    /// assert_eq!(config.drag.click_threshold, 8.0);
    /// assert_eq!(config.drag.container_selector, ".cards");
    /// ```
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot constrain on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drag.click_threshold.is_finite() || self.drag.click_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "drag.click_threshold",
                reason: format!(
                    "must be a non-negative number, got {}",
                    self.drag.click_threshold
                ),
            });
        }
        if self.drag.container_selector.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "drag.container_selector",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Drag-scroll settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// CSS selector for scrollable card containers
    pub container_selector: String,
    /// Class toggled on a container while it is being dragged
    pub dragging_class: String,
    /// Displacement (CSS px) above which a trailing click is swallowed
    pub click_threshold: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            container_selector: ".cards".to_string(),
            dragging_class: "is-dragging".to_string(),
            click_threshold: crate::drag::DEFAULT_CLICK_THRESHOLD,
        }
    }
}

/// Contact form element ids and class names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub status_id: String,
    pub confirm_button_id: String,
    pub name_id: String,
    /// `name` attribute shared by the gender radio buttons
    pub gender_name: String,
    pub email_id: String,
    pub phone_id: String,
    pub category_id: String,
    pub message_id: String,
    pub counter_id: String,
    pub attachment_id: String,
    pub attachment_name_id: String,
    /// Suffix appended to a field id to find its error element
    pub error_suffix: String,
    pub success_class: String,
    pub limit_class: String,
    /// Language of error, status and summary text
    pub locale: Locale,
}

impl FormConfig {
    /// Id of the error element for a field id (`name` -> `name-error`)
    pub fn error_id(&self, field_id: &str) -> String {
        format!("{}{}", field_id, self.error_suffix)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            status_id: "form-status".to_string(),
            confirm_button_id: "confirmBtn".to_string(),
            name_id: "name".to_string(),
            gender_name: "gender".to_string(),
            email_id: "email".to_string(),
            phone_id: "phone".to_string(),
            category_id: "category".to_string(),
            message_id: "message".to_string(),
            counter_id: "message-count".to_string(),
            attachment_id: "attachment".to_string(),
            attachment_name_id: "attachment-name".to_string(),
            error_suffix: "-error".to_string(),
            success_class: "is-success".to_string(),
            limit_class: "is-limit".to_string(),
            locale: Locale::default(),
        }
    }
}

/// Table of contents selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Marker element identifying the note layout
    pub layout_selector: String,
    pub main_selector: String,
    pub aside_selector: String,
    pub section_selector: String,
    /// Class on the generated `<ol>`
    pub list_class: String,
    /// Class on `<li>` items for level-3 headings
    pub sub_item_class: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            layout_selector: ".note-layout".to_string(),
            main_selector: "main".to_string(),
            aside_selector: "aside".to_string(),
            section_selector: "section".to_string(),
            list_class: "sidebar__ol".to_string(),
            sub_item_class: "toc-h3".to_string(),
        }
    }
}
