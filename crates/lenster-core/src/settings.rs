//! Profile Settings - View state for the profile settings screen
//!
//! The screen resolves to exactly one `SettingsView`. Only `Ready` carries
//! content, and it selects exactly one picture editor.

use crate::client::ProfileSource;
use crate::profile::ProfileRecord;

/// Which picture editor to mount
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PictureEditor {
    /// Upload a conventional image
    Standard,
    /// Pick an owned NFT as the picture
    Nft,
}

/// State of the settings screen
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SettingsView {
    /// No acting profile, or the profile does not exist
    NotFound,
    /// Fetch outstanding
    Loading,
    /// Fetch failed; not retried
    Failed(String),
    Ready {
        profile: ProfileRecord,
        has_nft_picture: bool,
    },
}

impl SettingsView {
    /// Build the ready state, deriving the editor choice once
    pub fn ready(profile: ProfileRecord) -> Self {
        let has_nft_picture = profile.has_nft_picture();
        SettingsView::Ready {
            profile,
            has_nft_picture,
        }
    }

    pub fn picture_editor(&self) -> Option<PictureEditor> {
        match self {
            SettingsView::Ready {
                has_nft_picture: true,
                ..
            } => Some(PictureEditor::Nft),
            SettingsView::Ready { .. } => Some(PictureEditor::Standard),
            _ => None,
        }
    }

    /// HTTP-equivalent status of the fallback pages
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SettingsView::NotFound => Some(404),
            SettingsView::Failed(_) => Some(500),
            _ => None,
        }
    }
}

/// Initial state before any fetch completes.
///
/// Without a session there is nothing to fetch, so the screen is
/// immediately `NotFound`.
pub fn initial_view(session_id: Option<&str>) -> SettingsView {
    match session_id {
        Some(_) => SettingsView::Loading,
        None => SettingsView::NotFound,
    }
}

/// Fetch the acting profile and resolve the settings view.
///
/// Issues no query without a session id. Errors are logged and surfaced as
/// `Failed`; there is no retry.
pub async fn load_profile_settings<S>(source: &S, session_id: Option<&str>) -> SettingsView
where
    S: ProfileSource + ?Sized,
{
    let Some(id) = session_id else {
        tracing::debug!("No session, skipping profile settings query");
        return SettingsView::NotFound;
    };

    match source.fetch_profile(id).await {
        Ok(Some(profile)) => {
            let view = SettingsView::ready(profile);
            tracing::debug!(profile = %id, editor = ?view.picture_editor(), "Profile settings ready");
            view
        }
        Ok(None) => {
            tracing::warn!(profile = %id, "Profile not found");
            SettingsView::NotFound
        }
        Err(e) => {
            tracing::error!(profile = %id, error = %e, "Failed to load profile settings");
            SettingsView::Failed(e.to_string())
        }
    }
}

/// Tabs of the settings sidebar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SettingsTab {
    Profile,
    Account,
    Interests,
    Allowance,
    Cleanup,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::Profile,
        SettingsTab::Account,
        SettingsTab::Interests,
        SettingsTab::Allowance,
        SettingsTab::Cleanup,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Account => "Account",
            SettingsTab::Interests => "Interests",
            SettingsTab::Allowance => "Allowance",
            SettingsTab::Cleanup => "Cleanup",
        }
    }

    /// Path segment under `/settings`; the profile tab is the index
    pub fn slug(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "",
            SettingsTab::Account => "account",
            SettingsTab::Interests => "interests",
            SettingsTab::Allowance => "allowance",
            SettingsTab::Cleanup => "cleanup",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        SettingsTab::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn path(&self) -> String {
        match self {
            SettingsTab::Profile => "/settings".to_string(),
            other => format!("/settings/{}", other.slug()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::{LensterError, Result};
    use crate::profile::Picture;

    enum Reply {
        Found(Option<Picture>),
        Empty,
        Fail,
    }

    struct StubSource {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProfileSource for StubSource {
        async fn fetch_profile(&self, profile_id: &str) -> Result<Option<ProfileRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::Found(picture) => Ok(Some(record(profile_id, picture.clone()))),
                Reply::Empty => Ok(None),
                Reply::Fail => Err(LensterError::Server {
                    status: 502,
                    message: "bad gateway".into(),
                }),
            }
        }
    }

    fn record(id: &str, picture: Option<Picture>) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            name: Some("Alice".into()),
            location: None,
            website: None,
            twitter: None,
            bio: None,
            attributes: vec![],
            cover_picture: None,
            picture,
        }
    }

    #[tokio::test]
    async fn test_no_session_skips_query() {
        let source = StubSource::new(Reply::Empty);
        let view = load_profile_settings(&source, None).await;
        assert_eq!(view, SettingsView::NotFound);
        assert_eq!(view.status_code(), Some(404));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_nft_picture_selects_nft_editor() {
        let source = StubSource::new(Reply::Found(Some(Picture::Nft {
            uri: "ipfs://nft".into(),
            token_id: "1".into(),
        })));
        let view = load_profile_settings(&source, Some("0x01")).await;
        assert_eq!(view.picture_editor(), Some(PictureEditor::Nft));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_media_picture_selects_standard_editor() {
        let source = StubSource::new(Reply::Found(Some(Picture::Media {
            url: "https://img/a.png".into(),
        })));
        let view = load_profile_settings(&source, Some("0x01")).await;
        assert!(matches!(
            view,
            SettingsView::Ready {
                has_nft_picture: false,
                ..
            }
        ));
        assert_eq!(view.picture_editor(), Some(PictureEditor::Standard));
    }

    #[tokio::test]
    async fn test_missing_picture_selects_standard_editor() {
        let source = StubSource::new(Reply::Found(None));
        let view = load_profile_settings(&source, Some("0x01")).await;
        assert_eq!(view.picture_editor(), Some(PictureEditor::Standard));
    }

    #[tokio::test]
    async fn test_fetch_error_is_terminal() {
        let source = StubSource::new(Reply::Fail);
        let view = load_profile_settings(&source, Some("0x01")).await;
        assert!(matches!(view, SettingsView::Failed(ref msg) if msg.contains("502")));
        assert_eq!(view.status_code(), Some(500));
        assert_eq!(view.picture_editor(), None);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_result_is_not_found() {
        let source = StubSource::new(Reply::Empty);
        let view = load_profile_settings(&source, Some("0x01")).await;
        assert_eq!(view, SettingsView::NotFound);
    }

    #[test]
    fn test_initial_view() {
        assert_eq!(initial_view(Some("0x01")), SettingsView::Loading);
        assert_eq!(initial_view(None), SettingsView::NotFound);
        assert_eq!(SettingsView::Loading.picture_editor(), None);
        assert_eq!(SettingsView::Loading.status_code(), None);
    }

    #[test]
    fn test_sidebar_tabs() {
        assert_eq!(SettingsTab::ALL[0].path(), "/settings");
        assert_eq!(SettingsTab::Cleanup.path(), "/settings/cleanup");
        assert_eq!(SettingsTab::from_slug("allowance"), Some(SettingsTab::Allowance));
        assert_eq!(SettingsTab::from_slug("billing"), None);
    }
}
