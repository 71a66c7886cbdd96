//! Navigation Bar Component
//!
//! Top bar with the app title, the acting profile's avatar and the button
//! opening the mobile drawer.

use dioxus::prelude::*;
use lenster_core::{format_handle, get_avatar};

use crate::app::Route;
use crate::context::{use_config, use_drawer, use_session, use_ui_modes, UiModes};

#[component]
pub fn Navbar() -> Element {
    let config = use_config();
    let session = use_session();
    let drawer = use_drawer();
    let modes = use_ui_modes();

    let current = session.read().current.clone();
    let avatar = get_avatar(current.as_ref(), &config.ipfs_gateway);
    let handle = format_handle(current.as_ref().map(|p| p.handle.as_str()));
    let UiModes {
        mod_mode,
        staff_mode,
        ..
    } = modes();

    rsx! {
        header { class: "navbar",
            button {
                class: "navbar-menu",
                r#type: "button",
                "aria-label": "Open menu",
                onclick: move |_| drawer.open(),
                if current.is_some() {
                    img { class: "navbar-avatar", src: "{avatar}", alt: "{handle}" }
                } else {
                    span { class: "navbar-burger", "\u{2630}" }
                }
            }
            Link { to: Route::Home {}, class: "navbar-title", "Lenster" }
            div { class: "navbar-badges",
                if mod_mode {
                    span { class: "badge badge-mod", "mod" }
                }
                if staff_mode {
                    span { class: "badge badge-staff", "staff" }
                }
            }
        }
    }
}
