//! Button Components

use dioxus::prelude::*;

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = "button".to_string())]
    pub button_type: String,
}

/// Brand-colored action button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         onclick: move |_| save(),
///         "Save"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "btn btn-primary",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}
