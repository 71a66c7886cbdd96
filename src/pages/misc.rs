//! Pages reachable from the drawer whose content is served elsewhere

use dioxus::prelude::*;
use lenster_core::FeatureFlag;

use crate::components::Custom404;
use crate::context::{use_config, use_session, use_ui_modes};

#[component]
fn ComingSoon(title: String, body: String) -> Element {
    rsx! {
        section { class: "simple-page",
            h2 { "{title}" }
            p { class: "muted", "{body}" }
        }
    }
}

#[component]
pub fn Communities() -> Element {
    let config = use_config();
    if !config.features.is_enabled(FeatureFlag::Communities) {
        return rsx! { Custom404 {} };
    }
    rsx! {
        ComingSoon { title: "Communities".to_string(), body: "Communities you joined show up here.".to_string() }
    }
}

#[component]
pub fn Bookmarks() -> Element {
    rsx! {
        ComingSoon { title: "Bookmarks".to_string(), body: "Publications you bookmark show up here.".to_string() }
    }
}

/// Moderation queue; gardeners only, checked against the current session
#[component]
pub fn Moderation() -> Element {
    let config = use_config();
    let session = use_session();
    let modes = use_ui_modes();

    if !config.roles.is_gardener(session.read().current_id()) {
        return rsx! { Custom404 {} };
    }
    let body = if modes.read().mod_mode {
        "Mod mode is on. Reports appear here as they arrive."
    } else {
        "Turn on mod mode from the menu to review reports."
    };
    rsx! {
        ComingSoon { title: "Moderation".to_string(), body: body.to_string() }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        ComingSoon { title: "Contact".to_string(), body: "Reach the team at support@lenster.xyz.".to_string() }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "No route");
    rsx! { Custom404 {} }
}
