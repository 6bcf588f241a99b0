use dioxus::prelude::*;

use crate::components::{Overlay, StatusBadge};
use crate::models::Invoice;
use crate::utils::{display_amount, format_date, format_datetime};

#[component]
fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        div { class: "detail-row",
            span { class: "detail-label", "{label}" }
            span { class: "detail-value", "{value}" }
        }
    }
}

/// Read-only detail view for a single fetched invoice.
#[component]
pub fn InvoiceDetail(invoice: Invoice, on_close: EventHandler<()>) -> Element {
    rsx! {
        Overlay { title: format!("Invoice {}", invoice.invoice_number), on_close,
            div { class: "invoice-detail",
                div { class: "detail-row",
                    span { class: "detail-label", "Status" }
                    StatusBadge { status: invoice.status.clone() }
                }
                DetailRow { label: "Amount", value: display_amount(&invoice) }
                DetailRow { label: "Issue date", value: format_date(&invoice.issue_date) }
                if let Some(due_date) = invoice.due_date.as_ref() {
                    DetailRow { label: "Due date", value: format_date(due_date) }
                }
                DetailRow {
                    label: "Active",
                    value: if invoice.active { "Yes" } else { "No" }.to_string(),
                }
                if let Some(name) = invoice.customer_name.as_ref() {
                    DetailRow { label: "Customer", value: name.clone() }
                }
                if let Some(email) = invoice.customer_email.as_ref() {
                    DetailRow { label: "Email", value: email.clone() }
                }
                if let Some(description) = invoice.description.as_ref() {
                    DetailRow { label: "Description", value: description.clone() }
                }
                if let Some(created_at) = invoice.created_at.as_ref() {
                    DetailRow { label: "Created", value: format_datetime(created_at) }
                }
                if let Some(updated_at) = invoice.updated_at.as_ref() {
                    DetailRow { label: "Updated", value: format_datetime(updated_at) }
                }
            }
        }
    }
}
