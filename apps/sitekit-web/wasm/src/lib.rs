//! WASM bindings for the site's page behaviors
//!
//! Attaches the three independent enhancements to the live document:
//! drag-to-scroll card lists, the contact form's validation, and the note
//! page table of contents. All decisions are made in `sitekit-core`; this
//! crate only reads the DOM, calls into it, and writes the results back.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { attach, attachWithConfig } from './pkg/sitekit_wasm.js';
//!
//! await init();
//! attach();
//!
//! // or, with overrides
//! attachWithConfig(JSON.stringify({ drag: { click_threshold: 8 } }));
//!
//! // rebuild the TOC later, optionally with the same overrides
//! generateTableOfContents(JSON.stringify({ toc: { aside_selector: '.toc' } }));
//! ```
//!
//! Loading the module attaches nothing; a page opts in by calling `attach`
//! or `attachWithConfig` exactly once.

pub mod contact_form;
pub mod dom;
pub mod drag_scroll;
pub mod log;
pub mod toc;

use dom::DomResultExt;
use sitekit_core::{SiteConfig, SiteError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

pub use contact_form::ContactForm;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    log::debug("module initialized");
}

/// Get the library version
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Attach every behavior with the default configuration
#[wasm_bindgen]
pub fn attach() -> Result<(), JsValue> {
    attach_site(SiteConfig::default()).map_err(dom::to_js_error)
}

/// Attach every behavior with a JSON configuration
///
/// Fields left out of the JSON keep their defaults.
#[wasm_bindgen(js_name = attachWithConfig)]
pub fn attach_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(config_json)
        .map_err(|e| dom::to_js_error(SiteError::from(e)))?;
    attach_site(config).map_err(dom::to_js_error)
}

/// Run the table of contents builder now
///
/// Takes the same optional JSON configuration as `attachWithConfig`; only
/// its `toc` section is used. Returns whether the side region was rewritten.
#[wasm_bindgen(js_name = generateTableOfContents)]
pub fn generate_table_of_contents(config_json: Option<String>) -> Result<bool, JsValue> {
    let config = match config_json {
        Some(json) => SiteConfig::from_json(&json)
            .map_err(|e| dom::to_js_error(SiteError::from(e)))?,
        None => SiteConfig::default(),
    };
    let document = dom::document().map_err(dom::to_js_error)?;
    toc::generate(&document, &config.toc).map_err(dom::to_js_error)
}

/// Attach the behaviors; a failure in one is logged and the others still run
fn attach_site(config: SiteConfig) -> Result<(), SiteError> {
    let document = dom::document()?;

    match drag_scroll::attach_all(&document, &config.drag) {
        Ok(count) => log::debug(&format!("drag scroll attached to {} container(s)", count)),
        Err(e) => log::error(&format!("drag scroll: {}", e)),
    }

    let form = ContactForm::find(&document, &config.form)
        .and_then(|form| form.map(ContactForm::attach).transpose());
    match form {
        Ok(Some(_)) => log::info("contact form attached"),
        Ok(None) => log::debug("no contact form on this page"),
        Err(e) => log::error(&format!("contact form: {}", e)),
    }

    schedule_toc(&document, config)
}

/// Build the TOC once the document has finished parsing
fn schedule_toc(document: &Document, config: SiteConfig) -> Result<(), SiteError> {
    if !dom::is_loading(document) {
        run_toc(document, &config);
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::once(Box::new(move |_event: web_sys::Event| {
        run_toc(&target, &config);
    }) as Box<dyn FnOnce(_)>);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .dom()?;
    on_ready.forget();
    Ok(())
}

fn run_toc(document: &Document, config: &SiteConfig) {
    match toc::generate(document, &config.toc) {
        Ok(true) => log::debug("table of contents generated"),
        Ok(false) => {}
        Err(e) => log::error(&format!("table of contents: {}", e)),
    }
}
