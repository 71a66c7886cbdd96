//! Lenster Core Library
//!
//! Non-visual logic of the Lenster client for the Lens social graph.
//!
//! ## Overview
//!
//! - **Session**: the acting profile and the profiles it may switch to
//! - **Navigation**: the mobile drawer, composed from a declarative table of
//!   entries gated by feature flags and role predicates
//! - **Profile settings**: GraphQL fetch of the acting profile and the view
//!   state deciding which picture editor to mount
//!
//! ## Quick Start
//!
//! ```ignore
//! use lenster_core::{compose_menu, load_profile_settings, AppConfig, LensClient, NavContext};
//!
//! let config = AppConfig::default();
//! let client = LensClient::new(&config)?;
//!
//! let view = load_profile_settings(&client, session.current_id()).await;
//! let menu = compose_menu(&NavContext {
//!     session: session.current.as_ref(),
//!     profile_count: session.profile_count(),
//!     flags: &config.features,
//!     roles: &config.roles,
//!     app_version: &config.app_version,
//!     ipfs_gateway: &config.ipfs_gateway,
//! });
//! ```

pub mod client;
pub mod config;
pub mod draft;
pub mod error;
pub mod flags;
pub mod format;
pub mod nav;
pub mod profile;
pub mod roles;
pub mod session;
pub mod settings;

// Re-exports
pub use client::{LensClient, ProfileSource, PROFILE_SETTINGS_QUERY};
pub use config::AppConfig;
pub use draft::{DraftField, FieldError, ProfileDraft, ProfileMetadata};
pub use error::{LensterError, Result};
pub use flags::{FeatureFlag, FeatureFlags};
pub use format::{format_handle, get_avatar, sanitize_display_name};
pub use nav::{
    compose_menu, DrawerMenu, IdentitySummary, NavAction, NavContext, NavEntry, NavEntryKind,
    NavSection, NavSectionKind,
};
pub use profile::{Attribute, Picture, ProfileRecord};
pub use roles::RoleDirectory;
pub use session::{ProfileSummary, Session};
pub use settings::{initial_view, load_profile_settings, PictureEditor, SettingsTab, SettingsView};
