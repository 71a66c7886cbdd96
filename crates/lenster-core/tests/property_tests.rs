//! Property-based tests for drawer composition and handle formatting
//!
//! Uses proptest to verify the visibility rules hold for arbitrary sessions,
//! flag sets and role assignments.

use std::cell::Cell;

use lenster_core::format::{format_handle, DEFAULT_IPFS_GATEWAY};
use lenster_core::nav::DRAWER_ENTRIES;
use lenster_core::{
    compose_menu, FeatureFlag, FeatureFlags, NavContext, NavEntryKind, ProfileSummary,
    RoleDirectory,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

#[derive(Debug, Clone)]
struct Scenario {
    signed_in: bool,
    profile_count: usize,
    communities: bool,
    gardener: bool,
    staff: bool,
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    (any::<bool>(), 0..5usize, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(signed_in, profile_count, communities, gardener, staff)| Scenario {
            signed_in,
            profile_count,
            communities,
            gardener,
            staff,
        },
    )
}

struct Fixture {
    profile: ProfileSummary,
    flags: FeatureFlags,
    roles: RoleDirectory,
}

impl Fixture {
    fn new(s: &Scenario) -> Self {
        let mut flags = FeatureFlags::default();
        flags.set(FeatureFlag::Communities, s.communities);
        let id = "0x2a".to_string();
        let roles = RoleDirectory::new(
            s.gardener.then(|| id.clone()),
            s.staff.then(|| id.clone()),
        );
        Self {
            profile: ProfileSummary::new(id, "alice.lens"),
            flags,
            roles,
        }
    }

    fn ctx<'a>(&'a self, s: &Scenario) -> NavContext<'a> {
        NavContext {
            session: s.signed_in.then_some(&self.profile),
            profile_count: s.profile_count,
            flags: &self.flags,
            roles: &self.roles,
            app_version: "0.1.0",
            ipfs_gateway: DEFAULT_IPFS_GATEWAY,
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The switcher shows iff the session owns more than one profile
    #[test]
    fn switcher_follows_profile_count(s in scenario_strategy()) {
        let fixture = Fixture::new(&s);
        let menu = compose_menu(&fixture.ctx(&s));
        prop_assert_eq!(menu.contains(NavEntryKind::SwitchProfile), s.profile_count > 1);
    }

    /// Gardener and staff entries follow their own predicate independently
    #[test]
    fn privileged_entries_follow_roles(s in scenario_strategy()) {
        let fixture = Fixture::new(&s);
        let menu = compose_menu(&fixture.ctx(&s));
        let gardener = s.signed_in && s.gardener;
        let staff = s.signed_in && s.staff;
        prop_assert_eq!(menu.contains(NavEntryKind::Mod), gardener);
        prop_assert_eq!(menu.contains(NavEntryKind::ModMode), gardener);
        prop_assert_eq!(menu.contains(NavEntryKind::StaffMode), staff);
    }

    /// Communities follows the flag regardless of role
    #[test]
    fn communities_follows_flag(s in scenario_strategy()) {
        let fixture = Fixture::new(&s);
        let menu = compose_menu(&fixture.ctx(&s));
        prop_assert_eq!(menu.contains(NavEntryKind::Communities), s.communities);
    }

    /// Every rendered entry closes the drawer exactly once
    #[test]
    fn activation_closes_once(s in scenario_strategy()) {
        let fixture = Fixture::new(&s);
        let menu = compose_menu(&fixture.ctx(&s));
        for entry in menu.entries() {
            let closed = Cell::new(0);
            menu.activate(entry.kind, || closed.set(closed.get() + 1));
            prop_assert_eq!(closed.get(), 1);
        }
    }

    /// Entries keep the table order and no section is empty
    #[test]
    fn order_matches_table(s in scenario_strategy()) {
        let fixture = Fixture::new(&s);
        let menu = compose_menu(&fixture.ctx(&s));
        let table: Vec<_> = DRAWER_ENTRIES.iter().map(|(_, kind, _)| *kind).collect();
        let positions: Vec<_> = menu
            .entries()
            .map(|e| table.iter().position(|k| *k == e.kind).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(menu.sections.iter().all(|sec| !sec.entries.is_empty()));
    }

    /// Formatted handles never contain disallowed characters
    #[test]
    fn formatted_handle_is_clean(handle in ".{0,64}") {
        let formatted = format_handle(Some(&handle));
        if !handle.eq_ignore_ascii_case("lensprotocol") {
            prop_assert!(formatted
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '.'));
        }
    }
}
