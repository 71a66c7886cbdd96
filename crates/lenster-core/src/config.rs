//! Runtime configuration shared by the client and the UI

use crate::error::{LensterError, Result};
use crate::flags::FeatureFlags;
use crate::format::DEFAULT_IPFS_GATEWAY;
use crate::roles::RoleDirectory;

pub const DEFAULT_API_URL: &str = "https://api.lens.dev";

/// Application configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// GraphQL endpoint of the indexing API
    pub api_url: String,
    /// Gateway prefix used to resolve `ipfs://` URLs
    pub ipfs_gateway: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Version shown in the drawer footer
    pub app_version: String,
    pub features: FeatureFlags,
    pub roles: RoleDirectory,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            ipfs_gateway: DEFAULT_IPFS_GATEWAY.to_string(),
            timeout_secs: 30,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            features: FeatureFlags::default(),
            roles: RoleDirectory::default(),
        }
    }
}

impl AppConfig {
    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        if !is_http_url(&self.api_url) {
            return Err(LensterError::Config(format!(
                "api url must be http(s): {}",
                self.api_url
            )));
        }
        if !is_http_url(&self.ipfs_gateway) {
            return Err(LensterError::Config(format!(
                "ipfs gateway must be http(s): {}",
                self.ipfs_gateway
            )));
        }
        if self.timeout_secs == 0 {
            return Err(LensterError::Config("timeout must be positive".into()));
        }
        Ok(())
    }
}

/// `http://` or `https://` followed by a host
pub(crate) fn is_http_url(value: &str) -> bool {
    ["https://", "http://"]
        .iter()
        .filter_map(|scheme| value.strip_prefix(scheme))
        .any(|rest| !rest.is_empty() && !rest.starts_with('/') && !rest.contains(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = AppConfig {
            api_url: "ftp://api".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(LensterError::Config(_))));

        let config = AppConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_url() {
        assert!(is_http_url("https://lenster.xyz"));
        assert!(is_http_url("http://localhost:3000/graphql"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("lenster.xyz"));
        assert!(!is_http_url("https://a b"));
    }
}
