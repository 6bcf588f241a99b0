use std::cmp::Ordering;

use dioxus::prelude::*;

use crate::components::StatusBadge;
use crate::models::{Amount, Invoice, InvoiceListResponse};
use crate::utils::{display_amount, format_date};

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortField {
    Number,
    Status,
    Amount,
    IssueDate,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortDirection {
    Asc,
    Desc,
}

fn compare_amounts(a: &Amount, b: &Amount) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_by(a: &Invoice, b: &Invoice, field: SortField) -> Ordering {
    match field {
        SortField::Number => a.invoice_number.cmp(&b.invoice_number),
        SortField::Status => a.status.cmp(&b.status),
        SortField::Amount => compare_amounts(&a.amount, &b.amount),
        SortField::IssueDate => a.issue_date.cmp(&b.issue_date),
        SortField::Active => a.active.cmp(&b.active),
    }
}

/// Results table. Sorting reorders the fetched page only; it never issues
/// a request or moves pagination.
#[component]
pub fn InvoiceTable(
    data: InvoiceListResponse,
    on_page_change: EventHandler<u32>,
    on_view: EventHandler<String>,
    on_export: EventHandler<()>,
) -> Element {
    let mut sort_field = use_signal(|| SortField::IssueDate);
    let mut sort_direction = use_signal(|| SortDirection::Desc);

    let mut handle_sort = move |field: SortField| {
        if sort_field() == field {
            let flipped = match sort_direction() {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
            sort_direction.set(flipped);
        } else {
            sort_field.set(field);
            sort_direction.set(SortDirection::Asc);
        }
    };

    let sort_marker = move |field: SortField| -> &'static str {
        if sort_field() != field {
            return "";
        }
        match sort_direction() {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    };

    // Stable sort keeps the fetched order for equal keys.
    let mut sorted = data.invoices.clone();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort_field());
        match sort_direction() {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let number_marker = sort_marker(SortField::Number);
    let status_marker = sort_marker(SortField::Status);
    let amount_marker = sort_marker(SortField::Amount);
    let issue_date_marker = sort_marker(SortField::IssueDate);
    let active_marker = sort_marker(SortField::Active);

    let pagination = data.pagination.clone();
    let from = (pagination.current_page as u64 - 1) * pagination.per_page as u64 + 1;
    let to = (pagination.current_page as u64 * pagination.per_page as u64)
        .min(pagination.total_count);
    let prev_page = pagination.current_page.saturating_sub(1);
    let next_page = pagination.current_page + 1;

    rsx! {
        div { class: "invoice-table",
            div { class: "table-header",
                div {
                    h3 { "Invoices ({pagination.total_count})" }
                    p { class: "table-summary",
                        "Showing {from}-{to} of {pagination.total_count} results"
                    }
                }
                button {
                    class: "primary",
                    onclick: move |_| on_export.call(()),
                    "Export CSV"
                }
            }

            table {
                thead {
                    tr {
                        th { onclick: move |_| handle_sort(SortField::Number),
                            "Number{number_marker}"
                        }
                        th { onclick: move |_| handle_sort(SortField::Status),
                            "Status{status_marker}"
                        }
                        th { onclick: move |_| handle_sort(SortField::Amount),
                            "Amount{amount_marker}"
                        }
                        th { onclick: move |_| handle_sort(SortField::IssueDate),
                            "Issue date{issue_date_marker}"
                        }
                        th { onclick: move |_| handle_sort(SortField::Active),
                            "Active{active_marker}"
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    for invoice in sorted {
                        {
                            let number = invoice.invoice_number.clone();
                            rsx! {
                                tr { key: "{invoice.invoice_number}",
                                    td { class: "invoice-number", "{invoice.invoice_number}" }
                                    td {
                                        StatusBadge { status: invoice.status.clone() }
                                    }
                                    td { class: "amount", "{display_amount(&invoice)}" }
                                    td { "{format_date(&invoice.issue_date)}" }
                                    td {
                                        span {
                                            class: if invoice.active { "flag active" } else { "flag inactive" },
                                            if invoice.active { "Yes" } else { "No" }
                                        }
                                    }
                                    td {
                                        button {
                                            class: "btn-text",
                                            onclick: move |_| on_view.call(number.clone()),
                                            "View"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if pagination.total_pages > 1 {
                div { class: "table-pagination",
                    span { "Page {pagination.current_page} of {pagination.total_pages}" }
                    div { class: "pagination-buttons",
                        button {
                            disabled: pagination.current_page == 1,
                            onclick: move |_| on_page_change.call(prev_page),
                            "Previous"
                        }
                        button {
                            disabled: pagination.current_page == pagination.total_pages,
                            onclick: move |_| on_page_change.call(next_page),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
