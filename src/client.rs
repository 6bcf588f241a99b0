use std::collections::HashMap;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use thiserror::Error;

use crate::models::{BackendErrorBody, Invoice, InvoiceFilters, InvoiceListResponse};

/// Normalized failure shape for every backend interaction. Callers match on
/// the kind; nothing below this ever reaches them as a panic or a raw
/// reqwest error.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not reach the invoice service: {0}")]
    Network(String),

    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        field_errors: HashMap<String, Vec<String>>,
    },

    #[error("Invoice '{0}' not found")]
    NotFound(String),

    #[error("Unexpected response from the invoice service: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

/// Direct client for the invoice backend. One request per operation, no
/// retries, no caching.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_invoices(
        &self,
        filters: &InvoiceFilters,
    ) -> Result<InvoiceListResponse, ApiError> {
        let url = format!("{}/invoices{}", self.base_url, filters.to_query_string());
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        response
            .json::<InvoiceListResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_invoice(&self, invoice_number: &str) -> Result<Invoice, ApiError> {
        let url = format!(
            "{}/invoices/{}",
            self.base_url,
            urlencoding::encode(invoice_number)
        );
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(network_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(invoice_number.to_string()));
        }
        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        response
            .json::<Invoice>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch the CSV export for the given filters. The bytes are returned
    /// exactly as the backend sent them; saving them to a file is the
    /// caller's job.
    pub async fn export_csv(&self, filters: &InvoiceFilters) -> Result<Vec<u8>, ApiError> {
        let url = format!(
            "{}/invoices/export{}",
            self.base_url,
            filters.to_query_string()
        );
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "text/csv")
            .send()
            .await
            .map_err(network_error)?;

        if !response.status().is_success() {
            return Err(http_error(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

fn network_error(error: reqwest::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

/// Turn a non-2xx response into `ApiError::Http`. The body is parsed
/// best-effort: a non-JSON body degrades to an empty field-error map, it
/// never raises a second error.
async fn http_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body: BackendErrorBody = match response.json().await {
        Ok(body) => body,
        Err(_) => BackendErrorBody::default(),
    };

    ApiError::Http {
        status,
        message: body
            .message
            .unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        field_errors: body.errors.unwrap_or_default(),
    }
}
