//! GraphQL client for the Lens indexing API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::config::AppConfig;
use crate::error::{LensterError, Result};
use crate::profile::ProfileRecord;

/// Profile fields for the settings screen
pub const PROFILE_SETTINGS_QUERY: &str = r#"
  query ProfileSettings($request: ProfileQueryRequest!) {
    profiles(request: $request) {
      items {
        id
        name
        location
        website
        twitter
        bio
        attributes {
          key
          value
        }
        coverPicture {
          __typename
          ... on MediaSet {
            original {
              url
            }
          }
          ... on NftImage {
            uri
            tokenId
          }
        }
        picture {
          __typename
          ... on MediaSet {
            original {
              url
            }
          }
          ... on NftImage {
            uri
            tokenId
          }
        }
      }
    }
  }
"#;

/// Source of profile records.
///
/// `Ok(None)` means the query succeeded but matched no profile; failures
/// travel on the error channel.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, profile_id: &str) -> Result<Option<ProfileRecord>>;
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct ProfilesData {
    profiles: ProfileItems,
}

#[derive(Deserialize)]
struct ProfileItems {
    items: Vec<ProfileRecord>,
}

/// HTTP client for the indexing API
///
/// # Example
///
/// ```rust,no_run
/// use lenster_core::{AppConfig, LensClient, ProfileSource};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LensClient::new(&AppConfig::default())?;
/// let profile = client.fetch_profile("0x01").await?;
/// # Ok(())
/// # }
/// ```
pub struct LensClient {
    api_url: String,
    client: Client,
}

impl LensClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            api_url: config.api_url.clone(),
            client,
        })
    }

    /// Run a query and return its `data`.
    ///
    /// `errors` map to `GraphQl`. A 400 without `errors`, or a response
    /// without `data`, is a `Server` error.
    async fn query<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let response = self
            .client
            .post(&self.api_url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() && status != StatusCode::BAD_REQUEST {
            let message = response.text().await.unwrap_or_default();
            return Err(LensterError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphQlResponse<T> = response.json().await?;
        if !body.errors.is_empty() {
            return Err(LensterError::GraphQl {
                messages: body.errors.into_iter().map(|e| e.message).collect(),
            });
        }
        if status == StatusCode::BAD_REQUEST {
            return Err(LensterError::Server {
                status: status.as_u16(),
                message: "bad request".to_string(),
            });
        }
        body.data.ok_or_else(|| LensterError::Server {
            status: status.as_u16(),
            message: "response carried no data".to_string(),
        })
    }
}

#[async_trait]
impl ProfileSource for LensClient {
    async fn fetch_profile(&self, profile_id: &str) -> Result<Option<ProfileRecord>> {
        let variables = json!({ "request": { "profileIds": [profile_id] } });
        let data: ProfilesData = self.query(PROFILE_SETTINGS_QUERY, variables).await?;
        let profile = data.profiles.items.into_iter().next();
        tracing::info!(
            profile = %profile_id,
            found = profile.is_some(),
            "Fetched profile settings"
        );
        Ok(profile)
    }
}
