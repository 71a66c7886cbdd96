use dioxus::prelude::*;
use lenster_core::SettingsTab;

use crate::app::Route;

fn tab_route(tab: SettingsTab) -> Route {
    match tab {
        SettingsTab::Profile => Route::Settings {},
        other => Route::SettingsSection {
            tab: other.slug().to_string(),
        },
    }
}

/// Settings navigation
#[component]
pub fn SettingsSidebar(current: SettingsTab) -> Element {
    rsx! {
        nav { class: "settings-sidebar",
            for tab in SettingsTab::ALL {
                Link {
                    key: "{tab.title()}",
                    to: tab_route(tab),
                    class: if tab == current { "sidebar-item active" } else { "sidebar-item" },
                    "{tab.title()}"
                }
            }
        }
    }
}
