use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::{error, info};
use reqwest::header::ACCEPT;

use crate::AppState;
use crate::constants::*;
use crate::models::ProxyErrorBody;

/// GET /api/invoices — forwards the incoming query string verbatim and
/// re-emits the backend's JSON body unchanged.
pub async fn list_invoices(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let path = format!("/invoices{}", query_suffix(query));
    match forward(&state, &path, "application/json").await {
        Ok(response) => passthrough(response, "application/json", &[]).await,
        Err(details) => proxy_failure(ERR_FETCH_INVOICES, details),
    }
}

/// GET /api/invoices/{number} — single-record lookup by business key.
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_number): Path<String>,
) -> Response {
    let path = format!("/invoices/{}", invoice_number);
    match forward(&state, &path, "application/json").await {
        Ok(response) => passthrough(response, "application/json", &[]).await,
        Err(details) => proxy_failure(ERR_FETCH_INVOICE, details),
    }
}

/// GET /api/invoices/export — raw CSV pass-through with an attachment
/// filename carrying the current date.
pub async fn export_invoices(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let path = format!("/invoices/export{}", query_suffix(query));
    match forward(&state, &path, "text/csv").await {
        Ok(response) => {
            let disposition = format!(
                "attachment; filename=\"{}_{}.csv\"",
                EXPORT_FILENAME_PREFIX,
                time::OffsetDateTime::now_utc().date()
            );
            passthrough(
                response,
                "text/csv",
                &[(header::CONTENT_DISPOSITION, disposition)],
            )
            .await
        }
        Err(details) => proxy_failure(ERR_EXPORT_INVOICES, details),
    }
}

fn query_suffix(query: Option<String>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("?{}", q),
        _ => String::new(),
    }
}

/// Issue the forwarded request. Network errors and non-2xx backend replies
/// are collapsed into a plain details string; the proxy does not
/// distinguish backend error kinds.
async fn forward(
    state: &AppState,
    path_and_query: &str,
    accept: &str,
) -> Result<reqwest::Response, String> {
    let url = format!("{}{}", state.config.backend_url, path_and_query);
    info!("Proxying request to {}", url);

    let response = state
        .http
        .get(&url)
        .header(ACCEPT, accept)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!(
            "Backend responded with status: {}",
            response.status().as_u16()
        ));
    }

    Ok(response)
}

/// Re-emit the backend response: same status, same body bytes, the
/// backend's content type (falling back to the expected one), plus any
/// extra headers the route adds.
async fn passthrough(
    response: reqwest::Response,
    default_content_type: &str,
    extra_headers: &[(header::HeaderName, String)],
) -> Response {
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::OK);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(default_content_type)
        .to_string();

    let body = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => return proxy_failure("Failed to read backend response", e.to_string()),
    };

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type);
    for (name, value) in extra_headers {
        builder = builder.header(name, value.as_str());
    }

    builder
        .body(axum::body::Body::from(body))
        .unwrap_or_else(|e| proxy_failure("Failed to build response", e.to_string()))
}

/// Fixed failure envelope: HTTP 500 with `{error, details}` regardless of
/// the underlying failure's real status.
fn proxy_failure(error_message: &str, details: String) -> Response {
    error!("{}: {}", error_message, details);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ProxyErrorBody {
            error: error_message.to_string(),
            details,
        }),
    )
        .into_response()
}
