#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lenster_core::config::DEFAULT_API_URL;
use lenster_core::format::DEFAULT_IPFS_GATEWAY;
use lenster_core::{AppConfig, FeatureFlags, LensClient, ProfileSummary, RoleDirectory};
use tracing_subscriber::EnvFilter;

/// Lenster - Desktop client for the Lens social graph
#[derive(Parser, Debug)]
#[command(name = "lenster-desktop")]
#[command(about = "Lenster - Desktop client for the Lens social graph")]
struct Args {
    /// GraphQL endpoint of the indexing API
    #[arg(long, env = "LENSTER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Gateway used to resolve ipfs:// media
    #[arg(long, env = "LENSTER_IPFS_GATEWAY", default_value = DEFAULT_IPFS_GATEWAY)]
    ipfs_gateway: String,

    /// Request timeout in seconds
    #[arg(long, env = "LENSTER_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Owned profiles as id:handle[:owner], comma separated. The first one is active.
    #[arg(long, env = "LENSTER_PROFILES", value_delimiter = ',')]
    profiles: Vec<String>,

    /// Feature flags, e.g. "communities" or "-communities"
    #[arg(long, env = "LENSTER_FEATURES", default_value = "")]
    features: String,

    /// Profile ids with the gardener role
    #[arg(long, env = "LENSTER_GARDENERS", value_delimiter = ',')]
    gardeners: Vec<String>,

    /// Profile ids with the staff role
    #[arg(long, env = "LENSTER_STAFF", value_delimiter = ',')]
    staff: Vec<String>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(AppConfig, Vec<ProfileSummary>)> {
        let profiles = self
            .profiles
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| parse_profile(p))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let config = AppConfig {
            api_url: self.api_url,
            ipfs_gateway: self.ipfs_gateway,
            timeout_secs: self.timeout_secs,
            features: FeatureFlags::parse(&self.features),
            roles: RoleDirectory::new(self.gardeners, self.staff),
            ..Default::default()
        };
        config.validate().context("invalid configuration")?;
        Ok((config, profiles))
    }
}

/// Parse `id:handle[:owner]`
fn parse_profile(raw: &str) -> anyhow::Result<ProfileSummary> {
    let mut parts = raw.trim().splitn(3, ':');
    let (Some(id), Some(handle)) = (parts.next(), parts.next()) else {
        bail!("profile must be id:handle[:owner], got {:?}", raw);
    };
    if id.is_empty() || handle.is_empty() {
        bail!("profile id and handle must not be empty: {:?}", raw);
    }
    let mut profile = ProfileSummary::new(id, handle);
    profile.owned_by = parts.next().unwrap_or_default().to_string();
    Ok(profile)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (config, profiles) = Args::parse().into_config()?;

    tracing::info!(
        api = %config.api_url,
        profiles = profiles.len(),
        "Starting Lenster"
    );

    let client = LensClient::new(&config).context("failed to build API client")?;
    context::init(context::Startup {
        config,
        profiles,
        source: Arc::new(client),
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Lenster")
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
