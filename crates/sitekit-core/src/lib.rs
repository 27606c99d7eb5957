//! Page behaviors for the static site
//!
//! This crate holds the DOM-free logic behind the site's client-side
//! enhancements; `sitekit-wasm` wires it to the live document.
//!
//! - `drag`: drag-to-scroll state machine for card lists
//! - `form`: contact form rules, counter, submit and confirm
//! - `toc`: table of contents extraction and rendering
//! - `text`: browser-compatible trimming

pub mod config;
pub mod drag;
pub mod error;
pub mod form;
pub mod text;
pub mod toc;

pub use config::{DragConfig, FormConfig, SiteConfig, TocConfig};
pub use drag::{ClickDecision, DragEffect, DragSession, DragState, PointerInput};
pub use error::{ConfigError, SiteError};
pub use form::{FieldId, FormValidator, FormValues};
pub use toc::{HeadingLevel, HeadingRecord, PageOutline, SectionOutline, TocPlan};
