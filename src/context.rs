//! Application context for Lenster.
//!
//! `main` stores the configuration, the signed-in profiles and the API client
//! once; `App` turns them into signals and provides them to every component.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let session = use_session();
//! let drawer = use_drawer();
//! drawer.close();
//! ```

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use lenster_core::{AppConfig, ProfileSource, ProfileSummary, Session};

/// Profile source shared by all pages
pub type SharedProfileSource = Arc<dyn ProfileSource>;

/// Startup state handed from `main` to the UI
pub struct Startup {
    pub config: AppConfig,
    pub profiles: Vec<ProfileSummary>,
    pub source: SharedProfileSource,
}

static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Record startup state. Later calls are ignored.
pub fn init(startup: Startup) {
    if STARTUP.set(startup).is_err() {
        tracing::warn!("Startup state already initialized");
    }
}

pub fn startup() -> Option<&'static Startup> {
    STARTUP.get()
}

/// Visibility of the mobile drawer. Owned by `App`.
#[derive(Clone, Copy, PartialEq)]
pub struct DrawerState(pub Signal<bool>);

impl DrawerState {
    pub fn is_open(&self) -> bool {
        (self.0)()
    }

    pub fn open(&self) {
        let mut signal = self.0;
        signal.set(true);
    }

    pub fn close(&self) {
        let mut signal = self.0;
        signal.set(false);
    }
}

/// Display toggles driven from the drawer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiModes {
    pub dark: bool,
    pub mod_mode: bool,
    pub staff_mode: bool,
}

/// Modals the drawer can open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalModal {
    SwitchProfile,
    Status,
    Invites,
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

pub fn use_profile_source() -> SharedProfileSource {
    use_context::<SharedProfileSource>()
}

/// Hook to access the session.
///
/// Components only read it; login state changes go through the drawer
/// actions handled in `App`'s subtree.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

pub fn use_drawer() -> DrawerState {
    use_context::<DrawerState>()
}

pub fn use_ui_modes() -> Signal<UiModes> {
    use_context::<Signal<UiModes>>()
}

pub fn use_global_modal() -> Signal<Option<GlobalModal>> {
    use_context::<Signal<Option<GlobalModal>>>()
}
