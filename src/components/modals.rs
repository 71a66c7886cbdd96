//! Modals opened from the drawer

use dioxus::prelude::*;
use lenster_core::{format_handle, get_avatar};
use lenster_ui::{Button, CloseButton, Input};

use crate::context::{use_config, use_global_modal, use_session, GlobalModal};

/// Renders whichever modal is open, if any
#[component]
pub fn GlobalModals() -> Element {
    let mut modal = use_global_modal();

    let Some(open) = modal() else {
        return rsx! {};
    };
    let title = match open {
        GlobalModal::SwitchProfile => "Switch profile",
        GlobalModal::Status => "Set status",
        GlobalModal::Invites => "Invites",
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                div { class: "modal-header",
                    h3 { "{title}" }
                    CloseButton { onclick: move |_| modal.set(None) }
                }
                div { class: "modal-body",
                    {match open {
                        GlobalModal::SwitchProfile => rsx! { SwitchProfiles {} },
                        GlobalModal::Status => rsx! { StatusForm {} },
                        GlobalModal::Invites => rsx! {
                            p { "Invite friends to Lens once invites are available for your profile." }
                        },
                    }}
                }
            }
        }
    }
}

#[component]
fn SwitchProfiles() -> Element {
    let config = use_config();
    let mut session = use_session();
    let mut modal = use_global_modal();

    let rows: Vec<(String, String, String, bool)> = {
        let session = session.read();
        let rows = session
            .profiles
            .iter()
            .map(|p| {
                (
                    p.id.clone(),
                    get_avatar(Some(p), &config.ipfs_gateway),
                    format_handle(Some(&p.handle)),
                    session.current_id() == Some(p.id.as_str()),
                )
            })
            .collect();
        rows
    };

    rsx! {
        ul { class: "profile-switcher",
            for (id, avatar, handle, active) in rows {
                li { key: "{id}",
                    button {
                        class: if active { "switch-item active" } else { "switch-item" },
                        onclick: {
                            let id = id.clone();
                            move |_| {
                                if let Err(e) = session.write().switch_profile(&id) {
                                    tracing::error!(error = %e, "Failed to switch profile");
                                }
                                modal.set(None);
                            }
                        },
                        img { class: "switch-avatar", src: "{avatar}" }
                        span { "@{handle}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusForm() -> Element {
    let mut status = use_signal(String::new);
    let mut modal = use_global_modal();

    rsx! {
        Input {
            id: "status".to_string(),
            value: status(),
            oninput: move |s| status.set(s),
            label: "What's happening?".to_string(),
            placeholder: "\u{1F680} Shipping".to_string(),
        }
        Button {
            disabled: status.read().trim().is_empty(),
            onclick: move |_| {
                tracing::info!(status = %status.read(), "Status set");
                modal.set(None);
            },
            "Save"
        }
    }
}
