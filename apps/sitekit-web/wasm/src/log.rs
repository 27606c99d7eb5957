//! Console logging
//!
//! Messages are prefixed with the crate name so they can be filtered in
//! browser devtools.

use web_sys::console;

const PREFIX: &str = "[sitekit]";

pub fn debug(message: &str) {
    console::debug_1(&format!("{} {}", PREFIX, message).into());
}

pub fn info(message: &str) {
    console::log_1(&format!("{} {}", PREFIX, message).into());
}

pub fn warn(message: &str) {
    console::warn_1(&format!("{} {}", PREFIX, message).into());
}

pub fn error(message: &str) {
    console::error_1(&format!("{} {}", PREFIX, message).into());
}
