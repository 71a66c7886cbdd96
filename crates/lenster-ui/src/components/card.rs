//! Card container

use dioxus::prelude::*;

#[component]
pub fn Card(children: Element, #[props(default)] class: Option<String>) -> Element {
    let class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("card {}", extra),
        _ => "card".to_string(),
    };

    rsx! {
        div { class: "{class}", {children} }
    }
}

#[component]
pub fn CardBody(children: Element) -> Element {
    rsx! {
        div { class: "card-body", {children} }
    }
}
