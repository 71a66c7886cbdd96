//! Editable copy of the profile fields and its metadata document

use serde::Serialize;

use crate::config::is_http_url;
use crate::format::is_valid_profile_name;
use crate::profile::{Picture, ProfileRecord};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_LOCATION_LEN: usize = 100;
pub const MAX_TWITTER_LEN: usize = 100;
pub const MAX_BIO_LEN: usize = 260;

const APP_ID: &str = "Lenster";
const METADATA_VERSION: &str = "1.0.0";

/// Form fields of the profile editor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub location: String,
    pub website: String,
    pub twitter: String,
    pub bio: String,
    /// Carried through unchanged; edited by the cover uploader
    pub cover_picture: Option<String>,
}

/// A field that failed validation
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DraftField {
    Name,
    Location,
    Website,
    Twitter,
    Bio,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FieldError {
    pub field: DraftField,
    pub message: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MetadataAttribute {
    pub trait_type: &'static str,
    pub key: &'static str,
    pub value: String,
}

/// Profile metadata document, as pinned before a metadata update
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileMetadata {
    pub version: &'static str,
    pub metadata_id: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub cover_picture: Option<String>,
    pub attributes: Vec<MetadataAttribute>,
}

impl ProfileDraft {
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            name: record.name.clone().unwrap_or_default(),
            location: record.location().unwrap_or_default().to_string(),
            website: record.website().unwrap_or_default().to_string(),
            twitter: record.twitter().unwrap_or_default().to_string(),
            bio: record.bio.clone().unwrap_or_default(),
            cover_picture: record
                .cover_picture
                .as_ref()
                .map(|p| p.source().to_string()),
        }
    }

    /// Check every field, collecting all failures
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(FieldError { field, message });

        if self.name.chars().count() > MAX_NAME_LEN {
            fail(DraftField::Name, "Name should not exceed 100 characters");
        }
        if !self.name.is_empty() && !is_valid_profile_name(&self.name) {
            fail(DraftField::Name, "Name should not contain restricted symbols");
        }
        if self.location.chars().count() > MAX_LOCATION_LEN {
            fail(DraftField::Location, "Location should not exceed 100 characters");
        }
        if !self.website.is_empty() && !is_http_url(&self.website) {
            fail(DraftField::Website, "Invalid URL");
        }
        if self.twitter.chars().count() > MAX_TWITTER_LEN {
            fail(DraftField::Twitter, "Twitter should not exceed 100 characters");
        }
        if self.bio.chars().count() > MAX_BIO_LEN {
            fail(DraftField::Bio, "Bio should not exceed 260 characters");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the metadata document. Empty fields are omitted.
    pub fn to_metadata(&self) -> ProfileMetadata {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        let mut attributes = Vec::new();
        for (key, value) in [
            ("location", self.location.as_str()),
            ("website", self.website.as_str()),
            ("twitter", self.twitter.as_str()),
        ] {
            if let Some(value) = non_empty(value) {
                attributes.push(MetadataAttribute {
                    trait_type: "string",
                    key,
                    value,
                });
            }
        }
        attributes.push(MetadataAttribute {
            trait_type: "string",
            key: "app",
            value: APP_ID.to_string(),
        });

        ProfileMetadata {
            version: METADATA_VERSION,
            metadata_id: ulid::Ulid::new().to_string(),
            name: non_empty(self.name.as_str()),
            bio: non_empty(self.bio.as_str()),
            cover_picture: self.cover_picture.clone(),
            attributes,
        }
    }
}

/// Picture source shown by the standard editor, if any
pub fn current_picture_url(record: &ProfileRecord) -> Option<&str> {
    match record.picture.as_ref()? {
        Picture::Media { url } => Some(url),
        Picture::Nft { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Attribute;

    fn record() -> ProfileRecord {
        ProfileRecord {
            id: "0x01".into(),
            name: Some("Alice".into()),
            location: None,
            website: Some("https://alice.xyz".into()),
            twitter: None,
            bio: Some("gm".into()),
            attributes: vec![Attribute {
                key: "location".into(),
                value: "Lisbon".into(),
            }],
            cover_picture: Some(Picture::Media {
                url: "https://img/cover.png".into(),
            }),
            picture: Some(Picture::Nft {
                uri: "ipfs://nft".into(),
                token_id: "3".into(),
            }),
        }
    }

    #[test]
    fn test_from_record() {
        let draft = ProfileDraft::from_record(&record());
        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.location, "Lisbon");
        assert_eq!(draft.website, "https://alice.xyz");
        assert_eq!(draft.twitter, "");
        assert_eq!(draft.cover_picture.as_deref(), Some("https://img/cover.png"));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let draft = ProfileDraft {
            name: "Alice ✅".into(),
            website: "alice.xyz".into(),
            bio: "x".repeat(MAX_BIO_LEN + 1),
            ..Default::default()
        };
        let fields: Vec<_> = draft
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec![DraftField::Name, DraftField::Website, DraftField::Bio]);
    }

    #[test]
    fn test_limits_count_characters() {
        let draft = ProfileDraft {
            location: "é".repeat(MAX_LOCATION_LEN),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_metadata_omits_empty_fields() {
        let draft = ProfileDraft {
            name: "Alice".into(),
            twitter: "alice".into(),
            ..Default::default()
        };
        let metadata = draft.to_metadata();
        assert_eq!(metadata.name.as_deref(), Some("Alice"));
        assert_eq!(metadata.bio, None);
        let keys: Vec<_> = metadata.attributes.iter().map(|a| a.key).collect();
        assert_eq!(keys, vec!["twitter", "app"]);

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["metadata_id"].as_str().unwrap().len(), 26);
    }

    #[test]
    fn test_nft_picture_has_no_upload_url() {
        let mut rec = record();
        assert_eq!(current_picture_url(&rec), None);
        rec.picture = Some(Picture::Media {
            url: "https://img/a.png".into(),
        });
        assert_eq!(current_picture_url(&rec), Some("https://img/a.png"));
    }
}
