mod api;
mod components;
mod models;
mod utils;
mod views;

use dioxus::prelude::*;

use views::InvoicesView;

fn main() {
    dioxus::launch(App);
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Invoice Browser" }
                span { class: "app-subtitle", "Connected to /api" }
            }
            main { class: "app-main",
                InvoicesView {}
            }
        }
    }
}
