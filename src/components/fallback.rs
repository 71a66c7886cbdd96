//! Full-page fallbacks: loading, not found, server error

use dioxus::prelude::*;
use lenster_ui::Spinner;

use crate::app::Route;

#[component]
pub fn PageLoading(message: String) -> Element {
    rsx! {
        div { class: "page-loading",
            Spinner {}
            p { class: "page-loading-message", "{message}" }
        }
    }
}

/// Shown for missing resources, including a missing session
#[component]
pub fn Custom404() -> Element {
    rsx! {
        div { class: "page-fallback",
            h1 { class: "fallback-code", "404" }
            p { "Oops, Lost\u{2026}" }
            p { class: "fallback-hint", "This page could not be found." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Go to home" }
        }
    }
}

/// Shown when a page's data could not be fetched
#[component]
pub fn Custom500() -> Element {
    rsx! {
        div { class: "page-fallback",
            h1 { class: "fallback-code", "500" }
            p { "Looks like something went wrong!" }
            p { class: "fallback-hint",
                "We track these errors automatically, but if the problem persists feel free to contact us."
            }
        }
    }
}
