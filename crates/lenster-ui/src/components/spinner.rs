//! Loading spinner

use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "status", "aria-label": "Loading" }
    }
}
