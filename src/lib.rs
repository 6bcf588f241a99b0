pub mod client;
pub mod config;
pub mod constants;
pub mod format;
pub mod models;
pub mod proxy;
pub mod query;
pub mod sort;

use axum::{Router, response::Html, routing::get};

pub use crate::client::{ApiClient, ApiError};
pub use crate::config::Config;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Shared outbound HTTP client for the proxy routes.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

/// The proxy surface. Layers (CORS) are added at assembly time so tests can
/// drive the bare router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/invoices", get(proxy::list_invoices))
        .route("/api/invoices/export", get(proxy::export_invoices))
        .route("/api/invoices/{number}", get(proxy::get_invoice))
        .with_state(state)
}

async fn root() -> Html<&'static str> {
    Html("<h1>Invoice Web Server</h1><p>Proxy ready</p>")
}
