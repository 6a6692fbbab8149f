//! API Errors
//!
//! Failures of a backend request, as seen from the browser.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    pub(crate) fn network(url: &str, err: JsValue) -> Self {
        Self::Network {
            url: url.to_string(),
            message: js_message(&err),
        }
    }

    pub(crate) fn decode(url: &str, message: impl ToString) -> Self {
        Self::Decode {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

/// Best-effort text of a thrown JS value
fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
