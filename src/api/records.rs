//! Raw Record Endpoints
//!
//! Scraped source tables, rendered as-is.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Record;
use super::get_json;

/// Scraped source table exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Apollo,
    Pharmeasy,
}

impl RecordSource {
    pub fn path(self) -> &'static str {
        match self {
            RecordSource::Apollo => "apollo",
            RecordSource::Pharmeasy => "pharmeasy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RecordSource::Apollo => "Apollo Pharmacy",
            RecordSource::Pharmeasy => "PharmEasy",
        }
    }

    /// Console log prefix
    pub fn tag(self) -> &'static str {
        match self {
            RecordSource::Apollo => "[APOLLO]",
            RecordSource::Pharmeasy => "[PHARMEASY]",
        }
    }
}

pub async fn list_records(config: &AppConfig, source: RecordSource) -> Result<Vec<Record>, ApiError> {
    get_json(&config.endpoint(source.path())).await
}
