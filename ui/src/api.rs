use urlencoding::encode;
use wasm_bindgen::JsCast;

use crate::models::*;

/// Same-origin proxy exposed by the invoice web server.
const API_BASE: &str = "http://localhost:3001/api";

/// Failure kinds the views can render specifically. Every request funnels
/// into this; nothing throws past it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    NotFound(String),
    Decode(String),
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(details) => {
                format!("Could not reach the invoice service: {}", details)
            }
            ApiError::Http { message, .. } => message.clone(),
            ApiError::NotFound(number) => format!("Invoice '{}' not found", number),
            ApiError::Decode(details) => {
                format!("Unexpected response from the invoice service: {}", details)
            }
        }
    }
}

fn build_query_params(params: &[(&str, Option<String>)]) -> String {
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

async fn fetch(url: &str, accept: &str) -> Result<web_sys::Response, ApiError> {
    use web_sys::{RequestInit, RequestMode};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let headers =
        web_sys::Headers::new().map_err(|_| ApiError::Network("Failed to create headers".into()))?;
    headers
        .set("Accept", accept)
        .map_err(|_| ApiError::Network("Failed to set header".into()))?;
    opts.set_headers(&headers);

    let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".into()))?;
    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|_| ApiError::Network("Failed to create request".into()))?;

    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::Network("Fetch failed".into()))?;

    resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("Invalid response".into()))
}

/// Build an `Http` error from a non-ok response, parsing the JSON body
/// best-effort for a message. A body that is not JSON degrades to the
/// generic status message.
async fn error_from_response(resp: web_sys::Response) -> ApiError {
    let status = resp.status();
    let body: ErrorBody = match resp.json() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .ok()
            .and_then(|value| serde_wasm_bindgen::from_value(value).ok())
            .unwrap_or_default(),
        Err(_) => ErrorBody::default(),
    };

    let message = body
        .message
        .or(body.error)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status));

    ApiError::Http { status, message }
}

async fn parse_json<T: serde::de::DeserializeOwned>(resp: web_sys::Response) -> Result<T, ApiError> {
    let json = wasm_bindgen_futures::JsFuture::from(
        resp.json()
            .map_err(|_| ApiError::Decode("Failed to get json".into()))?,
    )
    .await
    .map_err(|_| ApiError::Decode("Failed to parse json".into()))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

// Invoice API

pub async fn get_invoices(filters: &InvoiceFilters) -> Result<InvoiceListResponse, ApiError> {
    let query = build_query_params(&filters.to_query_params());
    let url = format!("{}/invoices{}", API_BASE, query);

    let resp = fetch(&url, "application/json").await?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    parse_json(resp).await
}

pub async fn get_invoice(invoice_number: &str) -> Result<Invoice, ApiError> {
    let url = format!("{}/invoices/{}", API_BASE, encode(invoice_number));

    let resp = fetch(&url, "application/json").await?;
    if resp.status() == 404 {
        return Err(ApiError::NotFound(invoice_number.to_string()));
    }
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }
    parse_json(resp).await
}

/// Fetch the CSV export as raw bytes; the caller turns them into a file
/// download.
pub async fn export_invoices(filters: &InvoiceFilters) -> Result<Vec<u8>, ApiError> {
    let query = build_query_params(&filters.to_query_params());
    let url = format!("{}/invoices/export{}", API_BASE, query);

    let resp = fetch(&url, "text/csv").await?;
    if !resp.ok() {
        return Err(error_from_response(resp).await);
    }

    let buffer = wasm_bindgen_futures::JsFuture::from(
        resp.array_buffer()
            .map_err(|_| ApiError::Decode("Failed to read export body".into()))?,
    )
    .await
    .map_err(|_| ApiError::Decode("Failed to read export body".into()))?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
