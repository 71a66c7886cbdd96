//! Settings Pages
//!
//! The profile tab fetches the acting profile and mounts the profile form plus
//! exactly one picture editor. The fetch is a component-scoped task: leaving
//! the page or switching profiles cancels it.

use dioxus::prelude::*;
use lenster_core::{initial_view, load_profile_settings, PictureEditor, SettingsTab, SettingsView};
use lenster_ui::{Card, CardBody};

use crate::components::settings::{NftPicture, ProfileForm, SettingsSidebar, StandardPicture};
use crate::components::{Custom404, Custom500, PageLoading};
use crate::context::{use_profile_source, use_session};

/// Profile settings page
#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let source = use_profile_source();

    let session_id = use_memo(move || session.read().current_id().map(str::to_string));
    let mut view = use_signal(|| initial_view(session_id.peek().as_deref()));
    let mut pending: Signal<Option<Task>> = use_signal(|| None);

    // Refetch whenever the acting profile changes
    use_effect(move || {
        let id = session_id();
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
        view.set(initial_view(id.as_deref()));
        if id.is_none() {
            return;
        }

        let source = source.clone();
        let task = spawn(async move {
            let resolved = load_profile_settings(source.as_ref(), id.as_deref()).await;
            view.set(resolved);
            pending.set(None);
        });
        pending.set(Some(task));
    });

    let current = view();
    match current {
        SettingsView::NotFound => rsx! { Custom404 {} },
        SettingsView::Failed(_) => rsx! { Custom500 {} },
        SettingsView::Loading => rsx! { PageLoading { message: "Loading settings".to_string() } },
        SettingsView::Ready { ref profile, .. } => {
            let editor = match current.picture_editor() {
                Some(PictureEditor::Nft) => rsx! { NftPicture { profile: profile.clone() } },
                Some(PictureEditor::Standard) | None => {
                    rsx! { StandardPicture { profile: profile.clone() } }
                }
            };
            rsx! {
                div { class: "grid-layout",
                    aside { class: "grid-four",
                        SettingsSidebar { current: SettingsTab::Profile }
                    }
                    section { class: "grid-eight",
                        ProfileForm { key: "{profile.id}", profile: profile.clone() }
                        Card {
                            CardBody { {editor} }
                        }
                    }
                }
            }
        }
    }
}

/// Remaining settings tabs
#[component]
pub fn SettingsSection(tab: String) -> Element {
    let session = use_session();

    let Some(tab) = SettingsTab::from_slug(&tab).filter(|t| *t != SettingsTab::Profile) else {
        return rsx! { Custom404 {} };
    };
    if !session.read().is_signed_in() {
        return rsx! { Custom404 {} };
    }

    rsx! {
        div { class: "grid-layout",
            aside { class: "grid-four",
                SettingsSidebar { current: tab }
            }
            section { class: "grid-eight",
                Card {
                    CardBody {
                        h2 { "{tab.title()}" }
                        p { class: "muted", "Managed with your wallet on lenster.xyz." }
                    }
                }
            }
        }
    }
}
