use dioxus::prelude::*;
use lenster_core::Session;

use crate::components::{Custom500, GlobalModals, MobileDrawerMenu, Navbar};
use crate::context::{self, use_drawer, use_ui_modes, DrawerState, GlobalModal, UiModes};
use crate::pages::{
    Bookmarks, Communities, Contact, Home, Moderation, PageNotFound, Settings, SettingsSection,
    UserProfile,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home feed
/// - `/u/:handle` - Public profile
/// - `/settings` - Profile settings
/// - `/settings/:tab` - Other settings tabs
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/u/:handle")]
        UserProfile { handle: String },
        #[route("/settings")]
        Settings {},
        #[route("/settings/:tab")]
        SettingsSection { tab: String },
        #[route("/communities")]
        Communities {},
        #[route("/bookmarks")]
        Bookmarks {},
        #[route("/mod")]
        Moderation {},
        #[route("/contact")]
        Contact {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Owns the session, drawer, display-mode and modal state and provides them
/// to every page.
#[component]
pub fn App() -> Element {
    let session = use_signal(|| {
        context::startup()
            .map(|s| Session::sign_in(s.profiles.clone()))
            .unwrap_or_default()
    });
    let drawer = DrawerState(use_signal(|| false));
    let modes = use_signal(UiModes::default);
    let modal: Signal<Option<GlobalModal>> = use_signal(|| None);

    use_context_provider(|| session);
    use_context_provider(|| drawer);
    use_context_provider(|| modes);
    use_context_provider(|| modal);

    let Some(startup) = context::startup() else {
        tracing::error!("Lenster started without startup state");
        return rsx! {
            style { {GLOBAL_STYLES} }
            Custom500 {}
        };
    };
    use_context_provider(|| startup.config.clone());
    use_context_provider(|| startup.source.clone());

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Frame around every page: top bar, drawer overlay and modals
#[component]
fn Shell() -> Element {
    let drawer = use_drawer();
    let modes = use_ui_modes();
    let class = if modes.read().dark { "app dark" } else { "app" };

    rsx! {
        div { class: "{class}",
            Navbar {}
            if drawer.is_open() {
                MobileDrawerMenu { on_close: move |_| drawer.close() }
            }
            GlobalModals {}
            main { class: "page", Outlet::<Route> {} }
        }
    }
}
