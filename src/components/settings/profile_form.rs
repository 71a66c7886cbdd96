//! Profile details form
//!
//! Edits a `ProfileDraft`. Saving validates the draft and prepares the
//! metadata document; signing and submitting it is left to the wallet.

use dioxus::prelude::*;
use lenster_core::{DraftField, FieldError, ProfileDraft, ProfileRecord};
use lenster_ui::{Button, Card, CardBody, Input, TextArea};

fn error_for(errors: &[FieldError], field: DraftField) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.to_string())
}

#[component]
pub fn ProfileForm(profile: ProfileRecord) -> Element {
    let mut draft = use_signal(|| ProfileDraft::from_record(&profile));
    let mut errors: Signal<Vec<FieldError>> = use_signal(Vec::new);
    let mut saved = use_signal(|| false);

    let profile_id = profile.id.clone();
    let save = move |_: ()| {
        saved.set(false);
        let current = draft.read().clone();
        match current.validate() {
            Ok(()) => {
                errors.set(Vec::new());
                let metadata = current.to_metadata();
                match serde_json::to_string(&metadata) {
                    Ok(json) => {
                        tracing::info!(profile = %profile_id, metadata = %json, "Profile metadata prepared");
                        saved.set(true);
                    }
                    Err(e) => tracing::error!(error = %e, "Failed to encode profile metadata"),
                }
            }
            Err(field_errors) => {
                tracing::debug!(count = field_errors.len(), "Profile draft rejected");
                errors.set(field_errors);
            }
        }
    };

    let current = draft();
    let errs = errors();

    rsx! {
        Card {
            CardBody {
                form { class: "profile-form", onsubmit: move |e| e.prevent_default(),
                    Input {
                        id: "profile-id".to_string(),
                        label: "Profile Id".to_string(),
                        value: profile.id.clone(),
                        oninput: move |_| {},
                        disabled: true,
                    }
                    Input {
                        id: "name".to_string(),
                        label: "Name".to_string(),
                        value: current.name.clone(),
                        oninput: move |s| draft.write().name = s,
                        placeholder: "Gavin".to_string(),
                        error: error_for(&errs, DraftField::Name),
                    }
                    Input {
                        id: "location".to_string(),
                        label: "Location".to_string(),
                        value: current.location.clone(),
                        oninput: move |s| draft.write().location = s,
                        placeholder: "Miami".to_string(),
                        error: error_for(&errs, DraftField::Location),
                    }
                    Input {
                        id: "website".to_string(),
                        label: "Website".to_string(),
                        value: current.website.clone(),
                        oninput: move |s| draft.write().website = s,
                        placeholder: "https://hooli.com".to_string(),
                        error: error_for(&errs, DraftField::Website),
                    }
                    Input {
                        id: "twitter".to_string(),
                        label: "Twitter".to_string(),
                        prefix: "https://twitter.com/".to_string(),
                        value: current.twitter.clone(),
                        oninput: move |s| draft.write().twitter = s,
                        placeholder: "gavin".to_string(),
                        error: error_for(&errs, DraftField::Twitter),
                    }
                    TextArea {
                        id: "bio".to_string(),
                        label: "Bio".to_string(),
                        value: current.bio.clone(),
                        oninput: move |s| draft.write().bio = s,
                        placeholder: "Tell us something about you!".to_string(),
                        error: error_for(&errs, DraftField::Bio),
                    }
                    div { class: "form-actions",
                        if saved() {
                            span { class: "form-saved", "Ready to sign" }
                        }
                        Button { onclick: save, button_type: "submit".to_string(), "Save" }
                    }
                }
            }
        }
    }
}
