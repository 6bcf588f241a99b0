// Server configuration
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "3001";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000/api/v1";
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";

// Pagination
pub const DEFAULT_PER_PAGE: u32 = 15;
pub const ALLOWED_PER_PAGE: [u32; 5] = [5, 10, 15, 25, 50];

// Invoice lifecycle labels known to the display layer. The backend owns the
// label set; anything else falls back to the unknown-status mapping.
pub const STATUS_CURRENT: &str = "Current";
pub const STATUS_PAID: &str = "Paid";
pub const STATUS_OVERDUE: &str = "Overdue";
pub const STATUS_CANCELLED: &str = "Cancelled";
pub const STATUS_PENDING: &str = "Pending";

// Export
pub const EXPORT_FILENAME_PREFIX: &str = "invoices";

// Error messages
pub const ERR_FETCH_INVOICES: &str = "Failed to fetch invoices";
pub const ERR_FETCH_INVOICE: &str = "Failed to fetch invoice";
pub const ERR_EXPORT_INVOICES: &str = "Failed to export invoices";
