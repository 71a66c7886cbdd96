//! Privileged role tiers (gardener, staff)

use std::collections::HashSet;

/// Profile ids holding privileged roles
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleDirectory {
    gardeners: HashSet<String>,
    staff: HashSet<String>,
}

impl RoleDirectory {
    pub fn new<G, S>(gardeners: G, staff: S) -> Self
    where
        G: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        Self {
            gardeners: gardeners.into_iter().collect(),
            staff: staff.into_iter().collect(),
        }
    }

    /// Gardeners moderate content. An absent id never holds a role.
    pub fn is_gardener(&self, id: Option<&str>) -> bool {
        id.is_some_and(|id| self.gardeners.contains(id))
    }

    /// Staff get access to internal tooling
    pub fn is_staff(&self, id: Option<&str>) -> bool {
        id.is_some_and(|id| self.staff.contains(id))
    }
}
