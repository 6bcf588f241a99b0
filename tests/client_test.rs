mod common;

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, RawQuery},
    http::{StatusCode, header},
    routing::get,
};
use common::{invoice_json, list_json, spawn_backend, unreachable_backend};
use invoice_web_server::client::{ApiClient, ApiError};
use invoice_web_server::models::InvoiceFilters;

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(reqwest::Client::new(), base_url)
}

#[tokio::test]
async fn test_list_invoices_success() -> anyhow::Result<()> {
    let body = list_json(
        vec![invoice_json(1, "INV-1", "Paid", 100.0, "2024-01-01", true)],
        1,
        1,
        1,
        15,
    );
    let app = Router::new().route(
        "/invoices",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    let backend = spawn_backend(app).await?;

    let response = client_for(&backend)
        .list_invoices(&InvoiceFilters::default())
        .await?;

    assert_eq!(response.invoices.len(), 1);
    assert_eq!(response.invoices[0].invoice_number, "INV-1");
    assert_eq!(response.pagination.total_count, 1);
    Ok(())
}

#[tokio::test]
async fn test_list_invoices_sends_encoded_filters() -> anyhow::Result<()> {
    let captured: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let captured_handler = captured.clone();
    let app = Router::new().route(
        "/invoices",
        get(move |RawQuery(query): RawQuery| {
            let captured = captured_handler.clone();
            async move {
                *captured.lock().unwrap() = query;
                Json(list_json(vec![], 1, 0, 0, 15))
            }
        }),
    );
    let backend = spawn_backend(app).await?;

    let filters = InvoiceFilters {
        status: Some("Paid".to_string()),
        per_page: Some(15),
        ..Default::default()
    };
    client_for(&backend).list_invoices(&filters).await?;

    let sent = captured.lock().unwrap().clone();
    assert_eq!(sent.as_deref(), Some("status=Paid&per_page=15"));
    Ok(())
}

#[tokio::test]
async fn test_get_invoice_success() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/invoices/{number}",
        get(|Path(number): Path<String>| async move {
            Json(invoice_json(9, &number, "Current", 55.0, "2024-05-01", true))
        }),
    );
    let backend = spawn_backend(app).await?;

    let invoice = client_for(&backend).get_invoice("INV-9").await?;

    assert_eq!(invoice.invoice_number, "INV-9");
    assert_eq!(invoice.status, "Current");
    Ok(())
}

#[tokio::test]
async fn test_get_invoice_404_surfaces_not_found() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/invoices/{number}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"message": "Invoice not found"})),
            )
        }),
    );
    let backend = spawn_backend(app).await?;

    let error = client_for(&backend)
        .get_invoice("X-404")
        .await
        .expect_err("lookup should fail");

    match error {
        ApiError::NotFound(ref number) => assert_eq!(number, "X-404"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(error.status(), Some(404));
    Ok(())
}

#[tokio::test]
async fn test_http_error_carries_field_error_map() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/invoices",
        get(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({
                    "message": "Validation failed",
                    "errors": {"min_amount": ["must be a number"]}
                })),
            )
        }),
    );
    let backend = spawn_backend(app).await?;

    let error = client_for(&backend)
        .list_invoices(&InvoiceFilters::default())
        .await
        .expect_err("list should fail");

    match error {
        ApiError::Http {
            status,
            message,
            field_errors,
        } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Validation failed");
            assert_eq!(
                field_errors.get("min_amount"),
                Some(&vec!["must be a number".to_string()])
            );
        }
        other => panic!("expected Http, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_http_error_with_unparseable_body_degrades_gracefully() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/invoices",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let backend = spawn_backend(app).await?;

    let error = client_for(&backend)
        .list_invoices(&InvoiceFilters::default())
        .await
        .expect_err("list should fail");

    match error {
        ApiError::Http {
            status,
            message,
            field_errors,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP error! status: 500");
            assert!(field_errors.is_empty());
        }
        other => panic!("expected Http, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_success_with_wrong_shape_surfaces_decode_error() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/invoices",
        get(|| async { Json(serde_json::json!({"data": [], "meta": {}})) }),
    );
    let backend = spawn_backend(app).await?;

    let error = client_for(&backend)
        .list_invoices(&InvoiceFilters::default())
        .await
        .expect_err("legacy envelope must not parse");

    assert!(matches!(error, ApiError::Decode(_)));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_surfaces_network_error() -> anyhow::Result<()> {
    let backend = unreachable_backend().await?;

    let error = client_for(&backend)
        .list_invoices(&InvoiceFilters::default())
        .await
        .expect_err("nothing is listening");

    assert!(matches!(error, ApiError::Network(_)));
    assert_eq!(error.status(), None);
    Ok(())
}

#[tokio::test]
async fn test_export_returns_backend_bytes_unmodified() -> anyhow::Result<()> {
    let csv = "invoice_number,status,amount\nINV-1,Paid,100.00\n";
    let app = Router::new().route(
        "/invoices/export",
        get(move || async move { ([(header::CONTENT_TYPE, "text/csv")], csv) }),
    );
    let backend = spawn_backend(app).await?;

    let bytes = client_for(&backend)
        .export_csv(&InvoiceFilters::default())
        .await?;

    assert_eq!(bytes, csv.as_bytes());
    Ok(())
}

#[tokio::test]
async fn test_export_failure_is_typed_not_a_panic() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/invoices/export",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream gone") }),
    );
    let backend = spawn_backend(app).await?;

    let error = client_for(&backend)
        .export_csv(&InvoiceFilters::default())
        .await
        .expect_err("export should fail");

    match error {
        ApiError::Http { status, .. } => assert_eq!(status, 502),
        other => panic!("expected Http, got {:?}", other),
    }
    Ok(())
}
