//! Profile Types - Records returned by the indexing API
//!
//! `Picture` is a tagged union over the two media shapes the API serves for
//! profile and cover images. Decoding goes through the GraphQL `__typename`
//! discriminator so an unknown variant is a hard error.

use serde::{Deserialize, Deserializer};

/// Profile or cover picture
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PictureWire")]
pub enum Picture {
    /// Conventionally uploaded media
    Media { url: String },
    /// Image backed by an NFT the profile owner holds
    Nft { uri: String, token_id: String },
}

impl Picture {
    /// Location of the image, either the media URL or the NFT image URI
    pub fn source(&self) -> &str {
        match self {
            Picture::Media { url } => url,
            Picture::Nft { uri, .. } => uri,
        }
    }

    pub fn is_nft(&self) -> bool {
        matches!(self, Picture::Nft { .. })
    }
}

#[derive(Deserialize)]
#[serde(tag = "__typename")]
enum PictureWire {
    MediaSet {
        original: MediaWire,
    },
    NftImage {
        uri: String,
        #[serde(rename = "tokenId")]
        token_id: String,
    },
}

#[derive(Deserialize)]
struct MediaWire {
    url: String,
}

impl From<PictureWire> for Picture {
    fn from(wire: PictureWire) -> Self {
        match wire {
            PictureWire::MediaSet { original } => Picture::Media { url: original.url },
            PictureWire::NftImage { uri, token_id } => Picture::Nft { uri, token_id },
        }
    }
}

/// Free-form key/value attribute attached to a profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

/// Profile fields needed by the settings screen
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub cover_picture: Option<Picture>,
    #[serde(default)]
    pub picture: Option<Picture>,
}

impl ProfileRecord {
    /// Value of the attribute with the given key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref().or_else(|| self.attribute("location"))
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref().or_else(|| self.attribute("website"))
    }

    pub fn twitter(&self) -> Option<&str> {
        self.twitter.as_deref().or_else(|| self.attribute("twitter"))
    }

    /// True iff the profile picture is the NFT-backed variant
    pub fn has_nft_picture(&self) -> bool {
        self.picture.as_ref().is_some_and(Picture::is_nft)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
