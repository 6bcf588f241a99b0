use serde::{Deserialize, Serialize};

/// Invoice ids have been observed as integers and as strings depending on
/// the backend build; accept both.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InvoiceId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceId::Int(id) => write!(f, "{}", id),
            InvoiceId::Str(id) => write!(f, "{}", id),
        }
    }
}

/// Monetary amount as the backend sends it: a raw number, or a string the
/// backend already formatted for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Raw(f64),
    Formatted(String),
}

impl Amount {
    /// Numeric value when one can be recovered. Pre-formatted strings only
    /// parse when they are plain decimals.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Amount::Raw(value) => Some(*value),
            Amount::Formatted(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    /// Lifecycle label owned by the backend; matched against the known
    /// table, never validated here.
    pub status: String,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub issue_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Sparse set of list constraints. `None` means unconstrained and is never
/// serialized into the query string.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct InvoiceFilters {
    pub invoice_number: Option<String>,
    pub status: Option<String>,
    pub active: Option<bool>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub per_page: u32,
}

/// Canonical list envelope. The legacy `data`/`meta`/`links` shape is not
/// supported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
    pub pagination: Pagination,
}

/// Fixed failure envelope emitted by the proxy layer, regardless of what
/// went wrong on the way to the backend.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProxyErrorBody {
    pub error: String,
    pub details: String,
}

/// Shape of a backend JSON error body, parsed best-effort.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<std::collections::HashMap<String, Vec<String>>>,
}
