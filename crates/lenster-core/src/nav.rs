//! Navigation Drawer - Role- and flag-gated menu composition
//!
//! The drawer is described by a fixed table mapping every entry to the
//! section it lives in and the predicate deciding whether it is shown.
//! `compose_menu` evaluates the table against the current session on every
//! call; nothing is cached, so a role revoked between renders disappears on
//! the next one.
//!
//! ## Usage
//!
//! ```ignore
//! let menu = compose_menu(&NavContext { .. });
//! for section in &menu.sections {
//!     for entry in &section.entries {
//!         // render entry, on click:
//!         let action = menu.activate(entry.kind, || drawer.set(false));
//!     }
//! }
//! ```

use crate::flags::{FeatureFlag, FeatureFlags};
use crate::format::{format_handle, get_avatar};
use crate::roles::RoleDirectory;
use crate::session::ProfileSummary;

pub const REPORT_BUG_URL: &str = "https://github.com/lensterxyz/lenster/issues/new/choose";

/// Drawer sections, in render order
#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub enum NavSectionKind {
    /// Avatar and handle of the acting profile
    Identity,
    /// Profile switcher and status
    Account,
    Primary,
    Support,
    /// Logout and privileged mode toggles
    Session,
    /// Application version
    Footer,
}

impl NavSectionKind {
    /// Whether each row of the section sits between its own dividers
    pub fn rows_divided(&self) -> bool {
        matches!(self, NavSectionKind::Account | NavSectionKind::Session)
    }
}

/// Every entry the drawer can show
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavEntryKind {
    Identity,
    SwitchProfile,
    Status,
    YourProfile,
    Settings,
    Communities,
    Bookmarks,
    Mod,
    Invites,
    ThemeSwitch,
    Contact,
    ReportBug,
    Logout,
    ModMode,
    StaffMode,
    AppVersion,
}

impl NavEntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntryKind::Identity => "Logged in as",
            NavEntryKind::SwitchProfile => "Switch profile",
            NavEntryKind::Status => "Set status",
            NavEntryKind::YourProfile => "Your profile",
            NavEntryKind::Settings => "Settings",
            NavEntryKind::Communities => "Communities",
            NavEntryKind::Bookmarks => "Bookmarks",
            NavEntryKind::Mod => "Moderation",
            NavEntryKind::Invites => "Invites",
            NavEntryKind::ThemeSwitch => "Theme",
            NavEntryKind::Contact => "Contact",
            NavEntryKind::ReportBug => "Report a bug",
            NavEntryKind::Logout => "Logout",
            NavEntryKind::ModMode => "Mod mode",
            NavEntryKind::StaffMode => "Staff mode",
            NavEntryKind::AppVersion => "Version",
        }
    }

    /// Privileged entries must never render without the matching role
    pub fn is_privileged(&self) -> bool {
        matches!(
            self,
            NavEntryKind::Mod | NavEntryKind::ModMode | NavEntryKind::StaffMode
        )
    }
}

/// Predicate deciding whether an entry is shown
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Visibility {
    Always,
    /// More than one profile belongs to the session
    MultipleProfiles,
    Feature(FeatureFlag),
    Gardener,
    Staff,
    SessionPresent,
}

impl Visibility {
    pub fn holds(&self, ctx: &NavContext<'_>) -> bool {
        let id = ctx.session.map(|p| p.id.as_str());
        match self {
            Visibility::Always => true,
            Visibility::MultipleProfiles => ctx.profile_count > 1,
            Visibility::Feature(flag) => ctx.flags.is_enabled(*flag),
            Visibility::Gardener => ctx.roles.is_gardener(id),
            Visibility::Staff => ctx.roles.is_staff(id),
            Visibility::SessionPresent => ctx.session.is_some(),
        }
    }
}

/// Drawer layout: section, entry and visibility, in render order
pub const DRAWER_ENTRIES: &[(NavSectionKind, NavEntryKind, Visibility)] = &[
    (NavSectionKind::Identity, NavEntryKind::Identity, Visibility::Always),
    (NavSectionKind::Account, NavEntryKind::SwitchProfile, Visibility::MultipleProfiles),
    (NavSectionKind::Account, NavEntryKind::Status, Visibility::Always),
    (NavSectionKind::Primary, NavEntryKind::YourProfile, Visibility::Always),
    (NavSectionKind::Primary, NavEntryKind::Settings, Visibility::Always),
    (
        NavSectionKind::Primary,
        NavEntryKind::Communities,
        Visibility::Feature(FeatureFlag::Communities),
    ),
    (NavSectionKind::Primary, NavEntryKind::Bookmarks, Visibility::Always),
    (NavSectionKind::Primary, NavEntryKind::Mod, Visibility::Gardener),
    (NavSectionKind::Primary, NavEntryKind::Invites, Visibility::Always),
    (NavSectionKind::Primary, NavEntryKind::ThemeSwitch, Visibility::Always),
    (NavSectionKind::Support, NavEntryKind::Contact, Visibility::Always),
    (NavSectionKind::Support, NavEntryKind::ReportBug, Visibility::Always),
    (NavSectionKind::Session, NavEntryKind::Logout, Visibility::Always),
    (NavSectionKind::Session, NavEntryKind::ModMode, Visibility::Gardener),
    (NavSectionKind::Session, NavEntryKind::StaffMode, Visibility::Staff),
    (NavSectionKind::Footer, NavEntryKind::AppVersion, Visibility::SessionPresent),
];

/// Inputs to a single composition
#[derive(Clone, Copy, Debug)]
pub struct NavContext<'a> {
    /// Acting profile, `None` while signed out
    pub session: Option<&'a ProfileSummary>,
    /// Number of profiles owned by the session
    pub profile_count: usize,
    pub flags: &'a FeatureFlags,
    pub roles: &'a RoleDirectory,
    pub app_version: &'a str,
    pub ipfs_gateway: &'a str,
}

/// What activating an entry hands off to its collaborator
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NavAction {
    /// In-app route
    Navigate(String),
    OpenExternal(&'static str),
    SwitchProfile,
    OpenStatus,
    OpenInvites,
    ToggleTheme,
    Logout,
    ToggleModMode,
    ToggleStaffMode,
    None,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavEntry {
    pub kind: NavEntryKind,
    pub label: String,
    pub action: NavAction,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NavSection {
    pub kind: NavSectionKind,
    pub entries: Vec<NavEntry>,
}

/// Header block of the drawer
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IdentitySummary {
    /// Formatted handle, empty without a session
    pub handle: String,
    pub avatar: String,
    pub href: String,
}

/// Composed drawer, ready to render
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DrawerMenu {
    pub identity: IdentitySummary,
    pub sections: Vec<NavSection>,
}

impl DrawerMenu {
    pub fn entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    pub fn contains(&self, kind: NavEntryKind) -> bool {
        self.entries().any(|e| e.kind == kind)
    }

    pub fn section(&self, kind: NavSectionKind) -> Option<&NavSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Activate an entry.
    ///
    /// `close` dismisses the drawer and is called exactly once, whether or
    /// not the entry is part of this menu. Returns the action the caller
    /// must delegate; entries missing from the menu yield `NavAction::None`.
    pub fn activate(&self, kind: NavEntryKind, close: impl FnOnce()) -> NavAction {
        close();
        match self.entries().find(|e| e.kind == kind) {
            Some(entry) => {
                tracing::debug!(entry = ?kind, action = ?entry.action, "Drawer entry activated");
                entry.action.clone()
            }
            None => {
                tracing::warn!(entry = ?kind, "Activated entry not present in drawer");
                NavAction::None
            }
        }
    }
}

/// Compose the drawer for the given context
pub fn compose_menu(ctx: &NavContext<'_>) -> DrawerMenu {
    let handle = format_handle(ctx.session.map(|p| p.handle.as_str()));
    let profile_href = format!("/u/{}", handle);

    let mut sections: Vec<NavSection> = Vec::new();
    for (section, kind, visibility) in DRAWER_ENTRIES {
        if !visibility.holds(ctx) {
            continue;
        }
        let entry = NavEntry {
            kind: *kind,
            label: entry_label(*kind, ctx),
            action: entry_action(*kind, &profile_href),
        };
        match sections.last_mut() {
            Some(last) if last.kind == *section => last.entries.push(entry),
            _ => sections.push(NavSection {
                kind: *section,
                entries: vec![entry],
            }),
        }
    }

    DrawerMenu {
        identity: IdentitySummary {
            avatar: get_avatar(ctx.session, ctx.ipfs_gateway),
            handle,
            href: profile_href,
        },
        sections,
    }
}

fn entry_label(kind: NavEntryKind, ctx: &NavContext<'_>) -> String {
    match kind {
        NavEntryKind::AppVersion => format!("v{}", ctx.app_version),
        other => other.label().to_string(),
    }
}

fn entry_action(kind: NavEntryKind, profile_href: &str) -> NavAction {
    match kind {
        NavEntryKind::Identity | NavEntryKind::YourProfile => {
            NavAction::Navigate(profile_href.to_string())
        }
        NavEntryKind::SwitchProfile => NavAction::SwitchProfile,
        NavEntryKind::Status => NavAction::OpenStatus,
        NavEntryKind::Settings => NavAction::Navigate("/settings".into()),
        NavEntryKind::Communities => NavAction::Navigate("/communities".into()),
        NavEntryKind::Bookmarks => NavAction::Navigate("/bookmarks".into()),
        NavEntryKind::Mod => NavAction::Navigate("/mod".into()),
        NavEntryKind::Invites => NavAction::OpenInvites,
        NavEntryKind::ThemeSwitch => NavAction::ToggleTheme,
        NavEntryKind::Contact => NavAction::Navigate("/contact".into()),
        NavEntryKind::ReportBug => NavAction::OpenExternal(REPORT_BUG_URL),
        NavEntryKind::Logout => NavAction::Logout,
        NavEntryKind::ModMode => NavAction::ToggleModMode,
        NavEntryKind::StaffMode => NavAction::ToggleStaffMode,
        NavEntryKind::AppVersion => NavAction::None,
    }
}
