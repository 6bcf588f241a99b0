use dioxus::prelude::*;

use crate::api;
use crate::components::{InvoiceDetail, InvoiceTable, SearchFilters};
use crate::models::{Invoice, InvoiceFilters, InvoiceListResponse};
use crate::utils::{today_date, trigger_csv_download};

/// List screen and its state machine: idle until the first fetch, then
/// loading/loaded/error driven by the signals below. Detail lookup and
/// export run independently and never disturb the list state.
#[component]
pub fn InvoicesView() -> Element {
    let mut filters = use_signal(InvoiceFilters::default_page_size);
    let mut response = use_signal(|| None::<InvoiceListResponse>);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut selected = use_signal(|| None::<Invoice>);
    let mut request_seq = use_signal(|| 0u64);

    let mut load = move |new_filters: InvoiceFilters| {
        filters.set(new_filters.clone());
        let token = request_seq() + 1;
        request_seq.set(token);
        loading.set(true);
        error.set(None);
        spawn(async move {
            let result = api::get_invoices(&new_filters).await;
            // A newer request owns the state now; drop this response.
            if request_seq() != token {
                return;
            }
            match result {
                Ok(list) => response.set(Some(list)),
                // Failed fetches keep the previous page on screen under
                // the banner.
                Err(e) => error.set(Some(e.message())),
            }
            loading.set(false);
        });
    };

    // Initial fetch
    use_effect(move || {
        load(InvoiceFilters::default_page_size());
    });

    let handle_search = move |new_filters: InvoiceFilters| load(new_filters);
    let handle_reset = move |_| load(InvoiceFilters::default_page_size());

    let handle_page_change = move |page: u32| {
        let mut next = filters();
        next.page = Some(page);
        load(next);
    };

    let handle_view = move |invoice_number: String| {
        spawn(async move {
            match api::get_invoice(&invoice_number).await {
                Ok(invoice) => selected.set(Some(invoice)),
                // The detail view stays closed; not-found gets its own
                // message through ApiError.
                Err(e) => notice.set(Some(e.message())),
            }
        });
    };

    let handle_export = move |_| {
        let current = filters();
        spawn(async move {
            match api::export_invoices(&current).await {
                Ok(bytes) => {
                    let filename = format!("invoices_{}.csv", today_date());
                    match trigger_csv_download(&bytes, &filename) {
                        Ok(()) => notice.set(Some("Export complete".to_string())),
                        Err(e) => notice.set(Some(e)),
                    }
                }
                Err(e) => notice.set(Some(e.message())),
            }
        });
    };

    rsx! {
        SearchFilters {
            disabled: loading(),
            on_search: handle_search,
            on_reset: handle_reset,
        }

        if let Some(message) = notice() {
            div { class: "notice",
                span { "{message}" }
                button {
                    class: "btn-text",
                    onclick: move |_| notice.set(None),
                    "Dismiss"
                }
            }
        }

        if let Some(message) = error() {
            div { class: "error-banner", "{message}" }
        }

        if loading() {
            div { class: "loading", "Loading..." }
        } else if let Some(list) = response() {
            if list.invoices.is_empty() {
                div { class: "empty-state",
                    p { class: "empty-title", "No invoices found" }
                    p { "Try adjusting the search filters" }
                }
            } else {
                InvoiceTable {
                    data: list,
                    on_page_change: handle_page_change,
                    on_view: handle_view,
                    on_export: handle_export,
                }
            }
        }

        if let Some(invoice) = selected() {
            InvoiceDetail {
                invoice,
                on_close: move |_| selected.set(None),
            }
        }
    }
}
