use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use urlencoding::{decode, encode};

use crate::models::InvoiceFilters;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Encode key/value pairs into a query string, skipping absent and
/// empty values. Pair order is preserved so encodings are deterministic.
pub fn build_query(params: &[(&str, Option<String>)]) -> String {
    let query_parts: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", encode(key), encode(v)))
        })
        .collect();

    if query_parts.is_empty() {
        String::new()
    } else {
        format!("?{}", query_parts.join("&"))
    }
}

fn format_number(value: f64) -> String {
    // f64's Display already drops a redundant trailing ".0" (0.0 -> "0").
    value.to_string()
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_date(value: &str) -> Option<String> {
    time::Date::parse(value, DATE_FORMAT)
        .ok()
        .map(|_| value.to_string())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl InvoiceFilters {
    /// Canonical parameter order. A field that is `None` is left out
    /// entirely; the codec never emits empty-valued parameters. A `0`
    /// amount bound is present and survives encoding.
    pub fn to_query_params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("invoice_number", self.invoice_number.clone()),
            ("status", self.status.clone()),
            ("active", self.active.map(|v| v.to_string())),
            ("date_from", self.date_from.clone()),
            ("date_to", self.date_to.clone()),
            ("min_amount", self.min_amount.map(format_number)),
            ("max_amount", self.max_amount.map(format_number)),
            ("page", self.page.map(|v| v.to_string())),
            // Out-of-set per_page values pass through unchanged; the
            // backend clamps.
            ("per_page", self.per_page.map(|v| v.to_string())),
        ]
    }

    pub fn to_query_string(&self) -> String {
        build_query(&self.to_query_params())
    }

    /// Inverse of `to_query_string`. Every field has a total parser:
    /// values that fail to parse for their field's type are treated as
    /// absent rather than rejected. Unknown keys are ignored.
    pub fn from_query_str(query: &str) -> Self {
        let mut filters = InvoiceFilters::default();

        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            let Some((key, raw_value)) = pair.split_once('=') else {
                continue;
            };
            let Ok(value) = decode(raw_value) else {
                continue;
            };
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }

            match key {
                "invoice_number" => filters.invoice_number = non_empty(value),
                "status" => filters.status = non_empty(value),
                "active" => filters.active = parse_bool(value),
                "date_from" => filters.date_from = parse_date(value),
                "date_to" => filters.date_to = parse_date(value),
                "min_amount" => filters.min_amount = parse_number(value),
                "max_amount" => filters.max_amount = parse_number(value),
                "page" => filters.page = value.parse::<u32>().ok().filter(|p| *p >= 1),
                "per_page" => filters.per_page = value.parse::<u32>().ok(),
                _ => {}
            }
        }

        filters
    }
}
