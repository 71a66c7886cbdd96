//! Mobile Drawer Component
//!
//! Full-screen navigation overlay. The entries come from
//! `lenster_core::compose_menu`; this component only renders them and hands
//! each activation's action to the collaborator owning it.

use dioxus::prelude::*;
use lenster_core::{compose_menu, NavAction, NavContext, NavEntry, NavEntryKind, NavSectionKind};
use lenster_ui::CloseButton;

use crate::app::Route;
use crate::context::{use_config, use_global_modal, use_session, use_ui_modes, GlobalModal};

#[derive(Props, Clone, PartialEq)]
pub struct MobileDrawerMenuProps {
    /// Dismisses the drawer; invoked on every entry activation
    pub on_close: EventHandler<()>,
}

/// Mobile drawer menu
///
/// Sections, top to bottom: identity, account, primary, support, session,
/// version footer.
#[component]
pub fn MobileDrawerMenu(props: MobileDrawerMenuProps) -> Element {
    let config = use_config();
    let mut session = use_session();
    let mut modes = use_ui_modes();
    let mut modal = use_global_modal();
    let navigator = use_navigator();

    let menu = {
        let session = session.read();
        let ctx = NavContext {
            session: session.current.as_ref(),
            profile_count: session.profile_count(),
            flags: &config.features,
            roles: &config.roles,
            app_version: &config.app_version,
            ipfs_gateway: &config.ipfs_gateway,
        };
        compose_menu(&ctx)
    };

    let mut dispatch = move |action: NavAction| match action {
        NavAction::Navigate(path) => match path.parse::<Route>() {
            Ok(route) => {
                navigator.push(route);
            }
            Err(e) => tracing::warn!(path = %path, error = %e, "Unroutable drawer link"),
        },
        NavAction::OpenExternal(url) => tracing::debug!(url, "Opening external link"),
        NavAction::SwitchProfile => modal.set(Some(GlobalModal::SwitchProfile)),
        NavAction::OpenStatus => modal.set(Some(GlobalModal::Status)),
        NavAction::OpenInvites => modal.set(Some(GlobalModal::Invites)),
        NavAction::ToggleTheme => {
            let mut m = modes.write();
            m.dark = !m.dark;
        }
        NavAction::Logout => {
            session.write().sign_out();
            navigator.push(Route::Home {});
        }
        NavAction::ToggleModMode => {
            let mut m = modes.write();
            m.mod_mode = !m.mod_mode;
            tracing::info!(enabled = m.mod_mode, "Mod mode toggled");
        }
        NavAction::ToggleStaffMode => {
            let mut m = modes.write();
            m.staff_mode = !m.staff_mode;
            tracing::info!(enabled = m.staff_mode, "Staff mode toggled");
        }
        NavAction::None => {}
    };

    let on_close = props.on_close;
    let identity = menu.identity.clone();
    let identity_menu = menu.clone();

    rsx! {
        div { class: "mobile-drawer",
            div { class: "drawer-close",
                CloseButton { onclick: move |_| on_close.call(()) }
            }
            div { class: "drawer-body",
                for section in menu.sections.iter().cloned() {
                    if section.kind == NavSectionKind::Identity {
                        button {
                            key: "identity",
                            class: "drawer-identity",
                            onclick: {
                                let menu = identity_menu.clone();
                                move |_| {
                                    let action = menu.activate(NavEntryKind::Identity, || on_close.call(()));
                                    dispatch(action);
                                }
                            },
                            img {
                                class: "drawer-avatar",
                                src: "{identity.avatar}",
                                alt: "{identity.handle}",
                            }
                            div {
                                span { class: "drawer-muted", "Logged in as" }
                                div { class: "drawer-handle", "@{identity.handle}" }
                            }
                        }
                    } else if section.kind == NavSectionKind::Footer {
                        div { key: "footer", class: "drawer-version",
                            for entry in section.entries.iter() {
                                span { key: "{entry.label}", "{entry.label}" }
                            }
                        }
                    } else {
                        div { key: "{section.kind:?}", class: "drawer-section",
                            div { class: "divider" }
                            for entry in section.entries.iter().cloned() {
                                DrawerItem {
                                    key: "{entry.label}",
                                    entry: entry.clone(),
                                    onactivate: {
                                        let menu = menu.clone();
                                        move |_| {
                                            let action = menu.activate(entry.kind, || on_close.call(()));
                                            dispatch(action);
                                        }
                                    },
                                }
                                if section.kind.rows_divided() {
                                    div { class: "divider" }
                                }
                            }
                            if !section.kind.rows_divided() {
                                div { class: "divider" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DrawerItem(entry: NavEntry, onactivate: EventHandler<()>) -> Element {
    match entry.action {
        NavAction::OpenExternal(url) => rsx! {
            a {
                class: "drawer-item",
                href: "{url}",
                target: "_blank",
                rel: "noreferrer noopener",
                onclick: move |_| onactivate.call(()),
                "{entry.label}"
            }
        },
        _ => rsx! {
            button {
                class: "drawer-item",
                r#type: "button",
                onclick: move |_| onactivate.call(()),
                "{entry.label}"
            }
        },
    }
}
