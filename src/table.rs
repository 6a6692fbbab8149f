//! Table Utilities
//!
//! Pure helpers behind the rendered tables: column derivation, cell text,
//! input identifiers and best-price parsing.

use serde_json::Value;

use crate::models::{BestPriceUpdate, Record};

/// Header labels of the comparison table
pub const COMPARISON_HEADERS: &[&str] = &[
    "Name",
    "Brand",
    "Source",
    "Price",
    "Discount",
    "Best Price",
    "Best Offer",
    "Action",
];

/// Columns of a record table: keys of the first record, in response order
pub fn derive_columns(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default()
}

/// Cell texts of one record, aligned with `columns`
pub fn record_cells(record: &Record, columns: &[String]) -> Vec<String> {
    columns.iter().map(|key| cell_text(record.get(key))).collect()
}

/// Text a browser shows after assigning `value` to `textContent`
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(js_number).unwrap_or_default()
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Like [`cell_text`], but blank for falsy values (`null`, `""`, `0`, `false`)
pub fn text_or_blank(value: Option<&Value>) -> String {
    let falsy = match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan()),
        _ => false,
    };
    if falsy { String::new() } else { cell_text(value) }
}

/// Initial text of a best-price input; blank when unset
pub fn best_price_text(best_price: Option<f64>) -> String {
    best_price.map(js_number).unwrap_or_default()
}

/// Shortest number text the way JS prints it: `5.0` -> `5`, exponent form
/// below 1e-6 and from 1e21 up (`1e-7`, `1e+21`)
fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent >= 21 {
        format!("{}e+{}", mantissa, exponent)
    } else if exponent <= -7 {
        format!("{}e{}", mantissa, exponent)
    } else {
        value.to_string()
    }
}

/// DOM id of a row's best-price input: `input-<name>-<brand>`,
/// whitespace runs replaced by `_`
pub fn input_id(name: &str, brand: &str) -> String {
    format!("input-{}-{}", underscore_whitespace(name), underscore_whitespace(brand))
}

fn underscore_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Parse an input value the way `parseFloat` does: longest numeric prefix
/// after leading whitespace. Blank, non-numeric and non-finite input give `None`.
pub fn parse_best_price(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        // Infinity cannot travel as JSON
        return None;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build the bulk-save payload from (name, brand, input value) per rendered row.
/// Rows whose trimmed name or brand is empty are skipped.
pub fn collect_updates<'a, I>(rows: I) -> Vec<BestPriceUpdate>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    rows.into_iter()
        .filter_map(|(name, brand, input)| {
            let (name, brand) = (name.trim(), brand.trim());
            if name.is_empty() || brand.is_empty() {
                return None;
            }
            Some(BestPriceUpdate {
                name: name.to_string(),
                brand: brand.to_string(),
                best_price: parse_best_price(input),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_columns_follow_first_record() {
        let data = records(json!([
            {"name": "dolo 650", "price": "₹30", "discount": "10% off"},
            {"name": "crocin", "price": "₹25", "discount": null},
            {"name": "calpol", "price": 18.5, "discount": "5% off"},
        ]));

        let columns = derive_columns(&data);
        assert_eq!(columns, vec!["name", "price", "discount"]);
        assert_eq!(columns.len(), data[0].len());

        let rows: Vec<_> = data.iter().map(|r| record_cells(r, &columns)).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["crocin", "₹25", ""]);
        assert_eq!(rows[2], vec!["calpol", "18.5", "5% off"]);
    }

    #[test]
    fn test_empty_response_has_no_columns() {
        assert!(derive_columns(&[]).is_empty());
    }

    #[test]
    fn test_missing_key_renders_blank() {
        let data = records(json!([{"a": 1, "b": 2}, {"a": 3}]));
        let columns = derive_columns(&data);
        assert_eq!(record_cells(&data[1], &columns), vec!["3", ""]);
    }

    #[test]
    fn test_cell_text_matches_browser_conversion() {
        assert_eq!(cell_text(Some(&json!(5.0))), "5");
        assert_eq!(cell_text(Some(&json!(5.5))), "5.5");
        assert_eq!(cell_text(Some(&json!(-3))), "-3");
        assert_eq!(cell_text(Some(&json!(true))), "true");
        assert_eq!(cell_text(Some(&json!(null))), "");
        assert_eq!(cell_text(None), "");
        assert_eq!(cell_text(Some(&json!([1, 2]))), "[1,2]");
    }

    #[test]
    fn test_cell_text_uses_exponent_form_at_extremes() {
        assert_eq!(cell_text(Some(&json!(1e-7))), "1e-7");
        assert_eq!(cell_text(Some(&json!(-2.5e-8))), "-2.5e-8");
        assert_eq!(cell_text(Some(&json!(1e21))), "1e+21");
        assert_eq!(cell_text(Some(&json!(1.5e22))), "1.5e+22");
        assert_eq!(cell_text(Some(&json!(0.000001))), "0.000001");
        assert_eq!(cell_text(Some(&json!(1e20))), "100000000000000000000");
        assert_eq!(best_price_text(Some(-0.0)), "0");
    }

    #[test]
    fn test_falsy_values_blank() {
        assert_eq!(text_or_blank(Some(&json!(0))), "");
        assert_eq!(text_or_blank(Some(&json!(""))), "");
        assert_eq!(text_or_blank(Some(&json!(false))), "");
        assert_eq!(text_or_blank(None), "");
        assert_eq!(text_or_blank(Some(&json!("Apollo"))), "Apollo");
        assert_eq!(text_or_blank(Some(&json!(12.75))), "12.75");
    }

    #[test]
    fn test_best_price_text() {
        assert_eq!(best_price_text(None), "");
        assert_eq!(best_price_text(Some(0.0)), "0");
        assert_eq!(best_price_text(Some(5.5)), "5.5");
    }

    #[test]
    fn test_input_id_replaces_whitespace_runs() {
        assert_eq!(input_id("Panadol", "GSK"), "input-Panadol-GSK");
        assert_eq!(input_id("dolo  650 mg", "Micro Labs"), "input-dolo_650_mg-Micro_Labs");
        assert_eq!(input_id("a\tb", "c\n d"), "input-a_b-c_d");
    }

    #[test]
    fn test_parse_best_price_like_parse_float() {
        assert_eq!(parse_best_price("5.50"), Some(5.5));
        assert_eq!(parse_best_price("  12"), Some(12.0));
        assert_eq!(parse_best_price("7x"), Some(7.0));
        assert_eq!(parse_best_price(".5"), Some(0.5));
        assert_eq!(parse_best_price("3."), Some(3.0));
        assert_eq!(parse_best_price("-2.5e1"), Some(-25.0));
        assert_eq!(parse_best_price("1e"), Some(1.0));
        assert_eq!(parse_best_price(""), None);
        assert_eq!(parse_best_price("abc"), None);
        assert_eq!(parse_best_price("."), None);
        assert_eq!(parse_best_price("-"), None);
        assert_eq!(parse_best_price("Infinity"), None);
    }

    #[test]
    fn test_collect_updates_skips_rows_without_identity() {
        let rows = vec![
            ("Panadol", "GSK", "5.50"),
            ("", "GSK", "1"),
            ("Crocin", "   ", "2"),
            (" Dolo 650 ", "Micro Labs", ""),
        ];
        let updates = collect_updates(rows);
        assert_eq!(
            updates,
            vec![
                BestPriceUpdate { name: "Panadol".into(), brand: "GSK".into(), best_price: Some(5.5) },
                BestPriceUpdate { name: "Dolo 650".into(), brand: "Micro Labs".into(), best_price: None },
            ]
        );
    }

    #[test]
    fn test_collect_updates_empty_when_no_rows() {
        assert!(collect_updates(Vec::<(&str, &str, &str)>::new()).is_empty());
    }
}
