//! Page Configuration
//!
//! Read once at start-up from the hosting page and provided via context.
//!
//! - `<meta name="api-base" content="https://host/api">` overrides the API prefix
//! - `<body data-view="apollo|pharmeasy|comparison">` selects the page controller

use leptos::prelude::*;

/// API prefix used when the page does not override it
pub const DEFAULT_API_BASE: &str = "/api";

/// Which page controller to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Apollo,
    Pharmeasy,
    Comparison,
}

impl View {
    /// Unknown or missing values fall back to the comparison page
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("apollo") => View::Apollo,
            Some("pharmeasy") => View::Pharmeasy,
            _ => View::Comparison,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub view: View,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            view: View::Comparison,
        }
    }
}

impl AppConfig {
    pub fn new(api_base: Option<&str>, view: Option<&str>) -> Self {
        Self {
            api_base: normalize_api_base(api_base),
            view: View::from_attr(view),
        }
    }

    /// Read `<meta name="api-base">` and `<body data-view>` from the live document
    pub fn from_document() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let api_base = document
            .query_selector("meta[name='api-base']")
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"));
        let view = document.body().and_then(|body| body.get_attribute("data-view"));
        Self::new(api_base.as_deref(), view.as_deref())
    }

    /// Join an endpoint path onto the API prefix
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

/// Get the app config from context
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

fn normalize_api_base(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}
