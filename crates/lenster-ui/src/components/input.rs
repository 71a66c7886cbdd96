//! Form Field Components
//!
//! Labelled text inputs and textareas with an inline error line.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Text shown before the field (e.g. `https://`)
    #[props(default)]
    pub prefix: Option<String>,
    /// Validation message, rendered below the field
    #[props(default)]
    pub error: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text field
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let field_class = field_class(props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            div { class: "input-row",
                if let Some(prefix) = &props.prefix {
                    span { class: "input-prefix", "{prefix}" }
                }
                input {
                    id: "{props.id}",
                    class: "{field_class}",
                    r#type: "text",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    oninput: move |e| props.oninput.call(e.value()),
                }
            }
            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub error: Option<String>,
}

/// Multi-line text field
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let field_class = format!("{} textarea", field_class(props.error.is_some()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "{field_class}",
                rows: "4",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { class: "input-error", "{error}" }
            }
        }
    }
}

fn field_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field invalid"
    } else {
        "input-field"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_marker_class() {
        assert_eq!(field_class(false), "input-field");
        assert_eq!(field_class(true), "input-field invalid");
    }
}
