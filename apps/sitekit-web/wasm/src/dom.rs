//! Thin helpers over `web-sys` lookups

use sitekit_core::SiteError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList};

/// Map `JsValue` errors from DOM calls into `SiteError`
pub trait DomResultExt<T> {
    fn dom(self) -> Result<T, SiteError>;
}

impl<T> DomResultExt<T> for Result<T, JsValue> {
    fn dom(self) -> Result<T, SiteError> {
        self.map_err(|e| SiteError::Dom(describe(&e)))
    }
}

/// Best-effort text for a thrown JS value
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn to_js_error(error: SiteError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// The current window's document
pub fn document() -> Result<Document, SiteError> {
    web_sys::window()
        .ok_or_else(|| SiteError::MissingElement("window".to_string()))?
        .document()
        .ok_or_else(|| SiteError::MissingElement("document".to_string()))
}

/// Look up an element by id and cast it to the expected type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::UnexpectedElement(format!("#{}", id)))
}

/// Elements of a `NodeList`, skipping non-element nodes
pub fn elements<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Whether the document is still parsing
pub fn is_loading(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .map(|state| state == "loading")
        .unwrap_or(false)
}

/// Whether `element` is, or sits inside, a hyperlink
pub fn is_within_link(element: &Element) -> bool {
    matches!(element.closest("a"), Ok(Some(_)))
}
