use invoice_web_server::constants::{ALLOWED_PER_PAGE, DEFAULT_PER_PAGE};
use invoice_web_server::models::InvoiceFilters;
use invoice_web_server::query::build_query;

fn full_filters() -> InvoiceFilters {
    InvoiceFilters {
        invoice_number: Some("INV-2024-001".to_string()),
        status: Some("Overdue".to_string()),
        active: Some(true),
        date_from: Some("2024-01-01".to_string()),
        date_to: Some("2024-06-30".to_string()),
        min_amount: Some(100.5),
        max_amount: Some(5000.0),
        page: Some(2),
        per_page: Some(25),
    }
}

#[test]
fn test_encode_status_and_per_page_exactly() {
    let filters = InvoiceFilters {
        status: Some("Paid".to_string()),
        per_page: Some(DEFAULT_PER_PAGE),
        ..Default::default()
    };

    assert_eq!(filters.to_query_string(), "?status=Paid&per_page=15");
}

#[test]
fn test_encode_empty_filters_yields_empty_string() {
    assert_eq!(InvoiceFilters::default().to_query_string(), "");
}

#[test]
fn test_encode_never_emits_empty_values() {
    let filters = InvoiceFilters {
        invoice_number: Some(String::new()),
        status: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(filters.to_query_string(), "");
}

#[test]
fn test_build_query_preserves_insertion_order() {
    let query = build_query(&[
        ("b", Some("2".to_string())),
        ("a", Some("1".to_string())),
        ("skipped", None),
        ("c", Some("3".to_string())),
    ]);

    assert_eq!(query, "?b=2&a=1&c=3");
}

#[test]
fn test_encode_percent_escapes_values() {
    let filters = InvoiceFilters {
        invoice_number: Some("INV 001&more".to_string()),
        ..Default::default()
    };

    assert_eq!(filters.to_query_string(), "?invoice_number=INV%20001%26more");
}

#[test]
fn test_zero_amount_is_preserved() {
    let filters = InvoiceFilters {
        min_amount: Some(0.0),
        ..Default::default()
    };

    assert_eq!(filters.to_query_string(), "?min_amount=0");

    let decoded = InvoiceFilters::from_query_str("min_amount=0");
    assert_eq!(decoded.min_amount, Some(0.0));
}

#[test]
fn test_active_serializes_as_literal_booleans() {
    let filters = InvoiceFilters {
        active: Some(false),
        ..Default::default()
    };
    assert_eq!(filters.to_query_string(), "?active=false");

    let filters = InvoiceFilters {
        active: Some(true),
        ..Default::default()
    };
    assert_eq!(filters.to_query_string(), "?active=true");
}

#[test]
fn test_round_trip_reconstructs_non_empty_fields() {
    let filters = full_filters();
    let decoded = InvoiceFilters::from_query_str(&filters.to_query_string());

    assert_eq!(decoded, filters);
}

#[test]
fn test_round_trip_with_escaped_invoice_number() {
    let filters = InvoiceFilters {
        invoice_number: Some("A/B 100%".to_string()),
        ..Default::default()
    };
    let decoded = InvoiceFilters::from_query_str(&filters.to_query_string());

    assert_eq!(decoded.invoice_number.as_deref(), Some("A/B 100%"));
}

#[test]
fn test_decode_treats_unparseable_values_as_absent() {
    let decoded = InvoiceFilters::from_query_str(
        "page=abc&per_page=many&min_amount=cheap&max_amount=NaN&active=banana&date_from=202&date_to=yesterday",
    );

    assert_eq!(decoded, InvoiceFilters::default());
}

#[test]
fn test_decode_rejects_page_zero() {
    let decoded = InvoiceFilters::from_query_str("page=0");
    assert_eq!(decoded.page, None);
}

#[test]
fn test_per_page_outside_allowed_set_passes_through() {
    // The backend clamps; the codec does not.
    assert!(!ALLOWED_PER_PAGE.contains(&999));
    let decoded = InvoiceFilters::from_query_str("per_page=999");
    assert_eq!(decoded.per_page, Some(999));

    let filters = InvoiceFilters {
        per_page: Some(999),
        ..Default::default()
    };
    assert_eq!(filters.to_query_string(), "?per_page=999");
}

#[test]
fn test_decode_ignores_unknown_keys_and_empty_values() {
    let decoded = InvoiceFilters::from_query_str("?foo=bar&status=&invoice_number=INV-7");

    assert_eq!(decoded.status, None);
    assert_eq!(decoded.invoice_number.as_deref(), Some("INV-7"));
}

#[test]
fn test_decode_accepts_leading_question_mark() {
    let decoded = InvoiceFilters::from_query_str("?status=Paid&per_page=15");

    assert_eq!(decoded.status.as_deref(), Some("Paid"));
    assert_eq!(decoded.per_page, Some(15));
}

#[test]
fn test_decode_validates_date_fields() {
    let decoded = InvoiceFilters::from_query_str("date_from=2024-02-30&date_to=2024-03-01");

    assert_eq!(decoded.date_from, None);
    assert_eq!(decoded.date_to.as_deref(), Some("2024-03-01"));
}
