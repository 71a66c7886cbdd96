//! Session Types - The acting profile and the profiles it may switch to

use crate::error::{LensterError, Result};
use crate::profile::Picture;

/// Minimal identity of a profile, enough to render the drawer header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Profile id on the social graph (hex, e.g. `0x01`)
    pub id: String,
    /// Raw handle including its namespace suffix (e.g. `alice.lens`)
    pub handle: String,
    /// Wallet address owning the profile
    pub owned_by: String,
    pub picture: Option<Picture>,
}

impl ProfileSummary {
    pub fn new(id: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            handle: handle.into(),
            owned_by: String::new(),
            picture: None,
        }
    }
}

/// Signed-in state of the client.
///
/// `current` is `None` while signed out; `profiles` lists every profile the
/// connected wallet owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub current: Option<ProfileSummary>,
    pub profiles: Vec<ProfileSummary>,
}

impl Session {
    /// Sign in with the owned profiles, acting as the first one
    pub fn sign_in(profiles: Vec<ProfileSummary>) -> Self {
        let current = profiles.first().cloned();
        if let Some(ref profile) = current {
            tracing::info!(profile = %profile.id, owned = profiles.len(), "Signed in");
        }
        Self { current, profiles }
    }

    pub fn sign_out(&mut self) {
        if let Some(profile) = self.current.take() {
            tracing::info!(profile = %profile.id, "Signed out");
        }
        self.profiles.clear();
    }

    /// Act as another of the session's profiles
    pub fn switch_profile(&mut self, id: &str) -> Result<()> {
        let next = self
            .profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| LensterError::ProfileNotInSession(id.to_string()))?;
        tracing::info!(profile = %next.id, "Switched profile");
        self.current = Some(next);
        Ok(())
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_ref().map(|p| p.id.as_str())
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_profiles() -> Session {
        Session::sign_in(vec![
            ProfileSummary::new("0x01", "alice.lens"),
            ProfileSummary::new("0x02", "bob.lens"),
        ])
    }

    #[test]
    fn test_sign_in_acts_as_first_profile() {
        let session = two_profiles();
        assert_eq!(session.current_id(), Some("0x01"));
        assert_eq!(session.profile_count(), 2);
    }

    #[test]
    fn test_sign_in_without_profiles() {
        let session = Session::sign_in(vec![]);
        assert!(!session.is_signed_in());
    }

    #[test]
    fn test_switch_profile() {
        let mut session = two_profiles();
        session.switch_profile("0x02").unwrap();
        assert_eq!(session.current_id(), Some("0x02"));
    }

    #[test]
    fn test_switch_to_foreign_profile_fails() {
        let mut session = two_profiles();
        let err = session.switch_profile("0x99").unwrap_err();
        assert!(matches!(err, LensterError::ProfileNotInSession(id) if id == "0x99"));
        assert_eq!(session.current_id(), Some("0x01"));
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let mut session = two_profiles();
        session.sign_out();
        assert_eq!(session, Session::default());
    }
}
