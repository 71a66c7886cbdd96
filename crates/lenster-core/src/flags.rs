//! Feature flags gating optional functionality

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::LensterError;

/// Known feature flags
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FeatureFlag {
    Communities,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 1] = [FeatureFlag::Communities];

    /// Stable key used on the command line and in the environment
    pub fn key(&self) -> &'static str {
        match self {
            FeatureFlag::Communities => "communities",
        }
    }
}

impl FromStr for FeatureFlag {
    type Err = LensterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureFlag::ALL
            .into_iter()
            .find(|flag| flag.key() == s.trim())
            .ok_or_else(|| LensterError::Config(format!("unknown feature flag: {}", s)))
    }
}

/// Resolved flag values. Flags never mentioned are disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    values: HashMap<FeatureFlag, bool>,
}

impl FeatureFlags {
    /// Parse a comma-separated list such as `communities` or `-communities`.
    ///
    /// A leading `-` disables a flag. Unknown keys are skipped.
    pub fn parse(list: &str) -> Self {
        let mut flags = Self::default();
        for raw in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, enabled) = match raw.strip_prefix('-') {
                Some(rest) => (rest, false),
                None => (raw, true),
            };
            match key.parse::<FeatureFlag>() {
                Ok(flag) => flags.set(flag, enabled),
                Err(e) => tracing::warn!(error = %e, "Ignoring feature flag"),
            }
        }
        flags
    }

    pub fn set(&mut self, flag: FeatureFlag, enabled: bool) {
        self.values.insert(flag, enabled);
    }

    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.values.get(&flag).copied().unwrap_or(false)
    }
}
