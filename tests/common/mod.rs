use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use tower::util::ServiceExt;

use invoice_web_server::{AppState, Config, router};

/// Serve a stub backend router on an ephemeral port; returns its base URL.
#[allow(dead_code)]
pub async fn spawn_backend(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{}", addr))
}

/// Reserve an address nothing listens on, for unreachable-backend tests.
#[allow(dead_code)]
pub async fn unreachable_backend() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

/// Proxy app wired to the given backend.
#[allow(dead_code)]
pub fn proxy_app(backend_url: &str) -> Router {
    router(AppState::new(Config::for_backend(backend_url)))
}

/// Drive a router with a single GET and collect the full response.
#[allow(dead_code)]
pub async fn send_get(app: &Router, uri: &str) -> anyhow::Result<(StatusCode, HeaderMap, Vec<u8>)> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| anyhow::anyhow!("Failed to build request: {}", e))?;

    let response = app
        .clone()
        .oneshot(request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to execute request: {}", e))?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read response body: {}", e))?;

    Ok((status, headers, body.to_vec()))
}

#[allow(dead_code)]
pub fn invoice_json(
    id: i64,
    number: &str,
    status: &str,
    amount: f64,
    issue_date: &str,
    active: bool,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "invoice_number": number,
        "status": status,
        "amount": amount,
        "currency": "USD",
        "issue_date": issue_date,
        "due_date": "2024-12-31",
        "active": active,
    })
}

#[allow(dead_code)]
pub fn list_json(
    invoices: Vec<serde_json::Value>,
    current_page: u32,
    total_pages: u32,
    total_count: u64,
    per_page: u32,
) -> serde_json::Value {
    serde_json::json!({
        "invoices": invoices,
        "pagination": {
            "current_page": current_page,
            "total_pages": total_pages,
            "total_count": total_count,
            "per_page": per_page,
        }
    })
}
