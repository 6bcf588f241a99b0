use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::constants::*;
use crate::models::{Amount, Invoice};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

fn parse_date(value: &str) -> Option<time::Date> {
    // Accept bare dates and full ISO-8601 timestamps by reading the date
    // prefix.
    let prefix = value.get(..10)?;
    time::Date::parse(prefix, DATE_FORMAT).ok()
}

/// ISO date to `dd/mm/yyyy`. Unparseable input is echoed back unchanged,
/// never an error.
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{:02}/{:02}/{:04}",
            date.day(),
            u8::from(date.month()),
            date.year()
        ),
        None => value.to_string(),
    }
}

/// ISO date or timestamp to `yyyy-mm-dd`.
pub fn format_date_ymd(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.to_string(),
        None => value.to_string(),
    }
}

/// ISO timestamp to `dd/mm/yyyy HH:MM`; date-only input renders without a
/// time part, anything unparseable is echoed back.
pub fn format_datetime(value: &str) -> String {
    let trimmed = value.trim_end_matches('Z');
    if let Ok(dt) = time::PrimitiveDateTime::parse(trimmed, DATETIME_FORMAT) {
        return format!(
            "{:02}/{:02}/{:04} {:02}:{:02}",
            dt.day(),
            u8::from(dt.month()),
            dt.year(),
            dt.hour(),
            dt.minute()
        );
    }
    format_date(value)
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
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

/// Two-decimal amount with thousands grouping. Known codes render their
/// symbol, anything else renders as a code prefix (`MXN 1,234.50`).
pub fn format_currency(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);

    match currency_symbol(currency) {
        Some(symbol) => format!("{}{}{}.{}", sign, symbol, grouped, frac_part),
        None => format!("{}{} {}.{}", sign, currency, grouped, frac_part),
    }
}

/// CSS class for a status badge. Total over all strings: unrecognized
/// labels get the unknown class.
pub fn status_color(status: &str) -> &'static str {
    match status {
        STATUS_CURRENT => "status-current",
        STATUS_PAID => "status-paid",
        STATUS_OVERDUE => "status-overdue",
        STATUS_CANCELLED => "status-cancelled",
        STATUS_PENDING => "status-pending",
        _ => "status-unknown",
    }
}

/// Icon name for a status badge, with the same total fallback.
pub fn status_icon(status: &str) -> &'static str {
    match status {
        STATUS_CURRENT => "clock",
        STATUS_PAID => "check-circle",
        STATUS_OVERDUE => "exclamation-triangle",
        STATUS_CANCELLED => "x-circle",
        STATUS_PENDING => "hourglass",
        _ => "question-mark-circle",
    }
}

impl Invoice {
    /// Display string for the amount column, covering both backend
    /// representations.
    pub fn display_amount(&self) -> String {
        match &self.amount {
            Amount::Formatted(text) => text.clone(),
            Amount::Raw(value) => {
                format_currency(*value, self.currency.as_deref().unwrap_or("USD"))
            }
        }
    }
}
