//! Frontend Models
//!
//! Data structures matching the backend's JSON responses and request bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of a raw scraped table (`/api/apollo`, `/api/pharmeasy`).
///
/// The schema is not fixed by the client; key order follows the response.
pub type Record = Map<String, Value>;

/// One row of the comparison table (matches backend `combined_data`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub source: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub discount: Option<Value>,
    #[serde(default)]
    pub best_price: Option<f64>,
    #[serde(default)]
    pub best_offer: Option<Value>,
}

/// Body for a single or bulk best-price upsert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPriceUpdate {
    pub name: String,
    pub brand: String,
    pub best_price: Option<f64>,
}

/// Body for clearing a best-price override
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetRequest<'a> {
    pub name: &'a str,
    pub brand: &'a str,
}

/// Sort keys understood by `/api/create_and_update` (value, label)
pub const FILTER_OPTIONS: &[(&str, &str)] = &[
    ("price", "Lowest price"),
    ("discount", "Highest discount"),
];

/// Filter used before the user touches the selection control
pub const DEFAULT_FILTER: &str = "price";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_item_tolerates_missing_and_null_fields() {
        let item: ComparisonItem = serde_json::from_str(
            r#"{"name":"Panadol","brand":"GSK","price":"₹30","best_price":null}"#,
        )
        .unwrap();
        assert_eq!(item.name, "Panadol");
        assert_eq!(item.price, Some(Value::String("₹30".into())));
        assert_eq!(item.best_price, None);
        assert_eq!(item.best_offer, None);
        assert_eq!(item.source, None);
    }

    #[test]
    fn update_serializes_null_best_price() {
        let body = BestPriceUpdate {
            name: "Panadol".into(),
            brand: "GSK".into(),
            best_price: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"Panadol","brand":"GSK","best_price":null}"#
        );
    }

    #[test]
    fn reset_request_carries_only_identity() {
        let body = ResetRequest { name: "Crocin", brand: "Haleon" };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"Crocin","brand":"Haleon"}"#
        );
    }
}
