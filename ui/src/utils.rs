use chrono::{NaiveDate, NaiveDateTime, Utc};
use wasm_bindgen::JsCast;

use crate::models::{Amount, Invoice};

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let prefix = date_str.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

pub fn format_date(date_str: &str) -> String {
    parse_date(date_str)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

pub fn format_datetime(date_str: &str) -> String {
    let trimmed = date_str.trim_end_matches('Z');
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    format_date(date_str)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_currency(amount: f64, currency: &str) -> String {
    let symbol = match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);

    match symbol {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, frac_part),
        None => format!("{}{} {}.{}", sign, currency, grouped, frac_part),
    }
}

pub fn display_amount(invoice: &Invoice) -> String {
    match &invoice.amount {
        Amount::Formatted(text) => text.clone(),
        Amount::Raw(value) => format_currency(*value, invoice.currency.as_deref().unwrap_or("USD")),
    }
}

/// Badge class per status label; total, unknown labels included.
pub fn status_color(status: &str) -> &'static str {
    match status {
        "Current" => "status-current",
        "Paid" => "status-paid",
        "Overdue" => "status-overdue",
        "Cancelled" => "status-cancelled",
        "Pending" => "status-pending",
        _ => "status-unknown",
    }
}

pub fn status_icon(status: &str) -> &'static str {
    match status {
        "Current" => "clock",
        "Paid" => "check-circle",
        "Overdue" => "exclamation-triangle",
        "Cancelled" => "x-circle",
        "Pending" => "hourglass",
        _ => "question-mark-circle",
    }
}

pub fn today_date() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Hand the exported bytes to the browser as a file download.
pub fn trigger_csv_download(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "Failed to build blob".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Failed to create anchor".to_string())?
        .dyn_into()
        .map_err(|_| "Failed to create anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or_else(|| "No body".to_string())?;
    body.append_child(&anchor)
        .map_err(|_| "Failed to attach anchor".to_string())?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}
