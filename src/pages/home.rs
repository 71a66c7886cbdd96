//! Home page

use dioxus::prelude::*;
use lenster_core::format_handle;

use crate::app::Route;
use crate::context::{use_drawer, use_session};

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let drawer = use_drawer();
    let handle = session
        .read()
        .current
        .as_ref()
        .map(|p| format_handle(Some(&p.handle)));

    rsx! {
        section { class: "home",
            h1 { class: "page-title", "Lenster" }
            p { class: "tagline", "A decentralized, and permissionless social media app built with Lens Protocol." }
            if let Some(handle) = handle {
                p { "Welcome back, " strong { "@{handle}" } }
                div { class: "home-actions",
                    Link { to: Route::UserProfile { handle: handle.clone() }, class: "btn btn-primary", "Your profile" }
                    Link { to: Route::Settings {}, class: "btn btn-secondary", "Settings" }
                }
            } else {
                p { class: "muted", "Start with --profiles id:handle to sign in." }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| drawer.open(),
                "Open menu"
            }
        }
    }
}
