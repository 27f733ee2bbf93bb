// Typed errors with thiserror. Surface meaningful messages to JS.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Crawl editor error types.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Catalog response could not be parsed: {0}")]
    Parse(String),

    #[error("Missing element #{0}")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl CrawlError {
    /// Wrap a DOM-side `JsValue` failure.
    pub fn dom(value: JsValue) -> Self {
        CrawlError::Dom(describe(&value))
    }

    /// Wrap a `fetch`-side `JsValue` failure.
    pub fn transport(value: JsValue) -> Self {
        CrawlError::Transport(describe(&value))
    }
}

impl From<serde_json::Error> for CrawlError {
    fn from(err: serde_json::Error) -> Self {
        CrawlError::Parse(err.to_string())
    }
}

impl From<CrawlError> for JsValue {
    fn from(err: CrawlError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Thrown `Error` objects carry their text in `message`; anything else is stringified.
fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
