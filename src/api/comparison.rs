//! Comparison Endpoints
//!
//! `/api/create_and_update` serves filtered reads, single upserts and bulk
//! upserts. Each use gets its own wrapper here.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{BestPriceUpdate, ComparisonItem, ResetRequest};
use super::{post_json, post_unit};

/// Unreserved characters stay literal in the query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build `<base>/create_and_update?filter_by=<filter>`
pub fn comparison_url(config: &AppConfig, filter: &str) -> String {
    format!(
        "{}?filter_by={}",
        config.endpoint("create_and_update"),
        utf8_percent_encode(filter, QUERY_VALUE)
    )
}

pub fn reset_url(config: &AppConfig) -> String {
    config.endpoint("reset-entry")
}

// ========================
// Commands
// ========================

/// Filtered read; the backend also seeds its combined table on this call
pub async fn fetch_comparison(config: &AppConfig, filter: &str) -> Result<Vec<ComparisonItem>, ApiError> {
    post_json::<(), _>(&comparison_url(config, filter), None).await
}

/// Upsert one row's best price
pub async fn save_best_price(
    config: &AppConfig,
    filter: &str,
    update: &BestPriceUpdate,
) -> Result<Vec<ComparisonItem>, ApiError> {
    post_json(&comparison_url(config, filter), Some(update)).await
}

/// Upsert every row in one request
pub async fn save_all(
    config: &AppConfig,
    filter: &str,
    updates: &[BestPriceUpdate],
) -> Result<Vec<ComparisonItem>, ApiError> {
    post_json(&comparison_url(config, filter), Some(updates)).await
}

/// Clear the best price/offer override of one row. The answer body is not used.
pub async fn reset_entry(config: &AppConfig, name: &str, brand: &str) -> Result<(), ApiError> {
    post_unit(&reset_url(config), &ResetRequest { name, brand }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_carried_in_query() {
        let config = AppConfig::default();
        assert_eq!(
            comparison_url(&config, "discount"),
            "/api/create_and_update?filter_by=discount"
        );
    }

    #[test]
    fn filter_is_percent_encoded() {
        let config = AppConfig::default();
        assert_eq!(
            comparison_url(&config, "price&x=1 y"),
            "/api/create_and_update?filter_by=price%26x%3D1%20y"
        );
    }

    #[test]
    fn reset_goes_to_its_own_endpoint() {
        let config = AppConfig::new(Some("http://localhost:8000/api"), None);
        assert_eq!(reset_url(&config), "http://localhost:8000/api/reset-entry");
    }
}
