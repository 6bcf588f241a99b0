use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 15;
pub const PER_PAGE_OPTIONS: [u32; 5] = [5, 10, 15, 25, 50];

/// Backends have shipped invoice ids as integers and as strings; accept
/// both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
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

/// Raw number or a display string the backend already formatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Amount {
    Raw(f64),
    Formatted(String),
}

impl Amount {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Amount::Raw(value) => Some(*value),
            Amount::Formatted(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub status: String,
    pub amount: Amount,
    #[serde(default)]
    pub currency: Option<String>,
    pub issue_date: String,
    #[serde(default)]
    pub due_date: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// `None` means unconstrained; such fields never reach the query string.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
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

impl InvoiceFilters {
    pub fn default_page_size() -> Self {
        Self {
            per_page: Some(DEFAULT_PER_PAGE),
            ..Default::default()
        }
    }

    pub fn to_query_params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("invoice_number", self.invoice_number.clone()),
            ("status", self.status.clone()),
            ("active", self.active.map(|v| v.to_string())),
            ("date_from", self.date_from.clone()),
            ("date_to", self.date_to.clone()),
            ("min_amount", self.min_amount.map(|v| v.to_string())),
            ("max_amount", self.max_amount.map(|v| v.to_string())),
            ("page", self.page.map(|v| v.to_string())),
            ("per_page", self.per_page.map(|v| v.to_string())),
        ]
    }

    /// Anything beyond the default page size counts as an active filter.
    pub fn has_active_filters(&self) -> bool {
        self.invoice_number.is_some()
            || self.status.is_some()
            || self.active.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
            || self.min_amount.is_some()
            || self.max_amount.is_some()
            || self.per_page.map(|p| p != DEFAULT_PER_PAGE).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
    pub pagination: Pagination,
}

/// Error body as sent either by the backend (`message`/`errors`) or by the
/// proxy (`error`/`details`); all fields best-effort.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}
