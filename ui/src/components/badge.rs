use dioxus::prelude::*;

use crate::utils::{status_color, status_icon};

/// Colored pill for an invoice status. Total over any label the backend
/// sends; unknown labels render with the fallback style.
#[component]
pub fn StatusBadge(status: String) -> Element {
    rsx! {
        span { class: "status-badge {status_color(&status)}",
            span { class: "icon icon-{status_icon(&status)}" }
            "{status}"
        }
    }
}
