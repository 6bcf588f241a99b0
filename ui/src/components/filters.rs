use dioxus::prelude::*;

use crate::models::{InvoiceFilters, DEFAULT_PER_PAGE, PER_PAGE_OPTIONS};

const STATUS_OPTIONS: [&str; 5] = ["Current", "Paid", "Overdue", "Cancelled", "Pending"];

fn text_field(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn number_field(value: &str) -> Option<f64> {
    // Unparseable input counts as unconstrained, it never blocks a search.
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn bool_field(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Filter form. Owns its input state as raw strings; values are coerced
/// to the typed filter set only on submit.
#[component]
pub fn SearchFilters(
    disabled: bool,
    on_search: EventHandler<InvoiceFilters>,
    on_reset: EventHandler<()>,
) -> Element {
    let mut invoice_number = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut active = use_signal(String::new);
    let mut date_from = use_signal(String::new);
    let mut date_to = use_signal(String::new);
    let mut min_amount = use_signal(String::new);
    let mut max_amount = use_signal(String::new);
    let mut per_page = use_signal(|| DEFAULT_PER_PAGE.to_string());
    let mut expanded = use_signal(|| false);

    let build_filters = move || InvoiceFilters {
        invoice_number: text_field(invoice_number()),
        status: text_field(status()),
        active: bool_field(&active()),
        date_from: text_field(date_from()),
        date_to: text_field(date_to()),
        min_amount: number_field(&min_amount()),
        max_amount: number_field(&max_amount()),
        page: None,
        per_page: per_page().trim().parse().ok(),
    };

    let handle_submit = move |e: Event<FormData>| {
        e.prevent_default();
        on_search.call(build_filters());
    };

    let handle_reset = move |_| {
        invoice_number.set(String::new());
        status.set(String::new());
        active.set(String::new());
        date_from.set(String::new());
        date_to.set(String::new());
        min_amount.set(String::new());
        max_amount.set(String::new());
        per_page.set(DEFAULT_PER_PAGE.to_string());
        on_reset.call(());
    };

    let has_active_filters = build_filters().has_active_filters();

    rsx! {
        div { class: "search-filters",
            div { class: "filters-header",
                h2 { "Search Filters" }
                button {
                    class: "btn-text",
                    r#type: "button",
                    onclick: move |_| expanded.set(!expanded()),
                    if expanded() { "Hide advanced filters" } else { "Show advanced filters" }
                }
            }

            form { onsubmit: handle_submit,
                div { class: "filter-row",
                    div { class: "filter-group",
                        label { "Invoice number" }
                        input {
                            r#type: "text",
                            placeholder: "e.g. INV-2024-001",
                            value: "{invoice_number}",
                            oninput: move |e| invoice_number.set(e.value()),
                            disabled,
                        }
                    }

                    div { class: "filter-group",
                        label { "Status" }
                        select {
                            value: "{status}",
                            onchange: move |e| status.set(e.value()),
                            disabled,
                            option { value: "", "All statuses" }
                            for label in STATUS_OPTIONS {
                                option { value: label, "{label}" }
                            }
                        }
                    }

                    div { class: "filter-group",
                        label { "Active" }
                        select {
                            value: "{active}",
                            onchange: move |e| active.set(e.value()),
                            disabled,
                            option { value: "", "All" }
                            option { value: "true", "Active only" }
                            option { value: "false", "Inactive only" }
                        }
                    }
                }

                if expanded() {
                    div { class: "filter-row advanced",
                        div { class: "filter-group",
                            label { "Date from" }
                            input {
                                r#type: "date",
                                value: "{date_from}",
                                onchange: move |e| date_from.set(e.value()),
                                disabled,
                            }
                        }

                        div { class: "filter-group",
                            label { "Date to" }
                            input {
                                r#type: "date",
                                value: "{date_to}",
                                onchange: move |e| date_to.set(e.value()),
                                disabled,
                            }
                        }

                        div { class: "filter-group",
                            label { "Min amount" }
                            input {
                                r#type: "number",
                                step: "0.01",
                                placeholder: "0.00",
                                value: "{min_amount}",
                                oninput: move |e| min_amount.set(e.value()),
                                disabled,
                            }
                        }

                        div { class: "filter-group",
                            label { "Max amount" }
                            input {
                                r#type: "number",
                                step: "0.01",
                                placeholder: "0.00",
                                value: "{max_amount}",
                                oninput: move |e| max_amount.set(e.value()),
                                disabled,
                            }
                        }

                        div { class: "filter-group",
                            label { "Per page" }
                            select {
                                value: "{per_page}",
                                onchange: move |e| per_page.set(e.value()),
                                disabled,
                                for size in PER_PAGE_OPTIONS {
                                    option { value: "{size}", "{size}" }
                                }
                            }
                        }
                    }
                }

                div { class: "filter-actions",
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled,
                        if disabled { "Searching..." } else { "Search" }
                    }
                    if has_active_filters {
                        button {
                            r#type: "button",
                            onclick: handle_reset,
                            "Clear"
                        }
                        span { class: "filters-active", "Filters active" }
                    }
                }
            }
        }
    }
}
