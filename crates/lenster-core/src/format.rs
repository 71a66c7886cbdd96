//! Handle, display-name and avatar formatting
//!
//! Pure string-in/string-out helpers used wherever a profile is rendered.

use crate::session::ProfileSummary;

/// Symbols that imitate verification badges and may not appear in names.
/// U+FE0F is included because `☑️` is written with a variation selector.
pub const RESTRICTED_SYMBOLS: [char; 5] = ['\u{2611}', '\u{FE0F}', '✓', '✔', '✅'];

/// Handle suffixes of the protocol namespaces
const HANDLE_SUFFIXES: [&str; 2] = [".lens", ".test"];

/// Handles of the protocol's own profile, rendered verbatim
const PROTOCOL_HANDLES: [&str; 2] = ["lensprotocol", "lensprotocol.test"];

pub const DEFAULT_IPFS_GATEWAY: &str = "https://gateway.ipfscdn.io/ipfs/";
const ARWEAVE_GATEWAY: &str = "https://arweave.net/";
const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Format a handle for display.
///
/// Strips the namespace suffix and any character outside `[0-9 .A-Za-z]`.
/// A missing handle formats to the empty string.
pub fn format_handle(handle: Option<&str>) -> String {
    let Some(handle) = handle.filter(|h| !h.is_empty()) else {
        return String::new();
    };
    if PROTOCOL_HANDLES
        .iter()
        .any(|h| handle.eq_ignore_ascii_case(h))
    {
        return handle.to_string();
    }
    let bare = HANDLE_SUFFIXES
        .iter()
        .find_map(|suffix| handle.strip_suffix(suffix))
        .unwrap_or(handle);
    sanitize_handle(bare)
}

/// Remove characters that are never valid in a handle
pub fn sanitize_handle(handle: &str) -> String {
    handle
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ' || *c == '.')
        .collect()
}

/// Remove restricted symbols from a display name
pub fn sanitize_display_name(name: &str) -> String {
    name.chars()
        .filter(|c| !RESTRICTED_SYMBOLS.contains(c))
        .collect()
}

/// A profile name is valid when non-empty and free of restricted symbols
pub fn is_valid_profile_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| RESTRICTED_SYMBOLS.contains(&c))
}

/// `0x`-optional, 40 hex digits
pub fn is_ethereum_address(value: &str) -> bool {
    let hex = value.strip_prefix("0x").unwrap_or(value);
    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Rewrite decentralised-storage URLs to an HTTP gateway
pub fn sanitize_dstorage_url(url: &str, ipfs_gateway: &str) -> String {
    if let Some(cid) = url.strip_prefix("ipfs://") {
        format!("{}{}", ipfs_gateway, cid)
    } else if let Some(tx) = url.strip_prefix("ar://") {
        format!("{}{}", ARWEAVE_GATEWAY, tx)
    } else {
        url.to_string()
    }
}

/// Avatar URL for a profile.
///
/// Uses the profile picture when set, otherwise a generated avatar for the
/// owning address. A missing profile gets the zero-address placeholder.
pub fn get_avatar(profile: Option<&ProfileSummary>, ipfs_gateway: &str) -> String {
    match profile {
        Some(ProfileSummary {
            picture: Some(picture),
            ..
        }) => sanitize_dstorage_url(picture.source(), ipfs_gateway),
        Some(profile) if !profile.owned_by.is_empty() => {
            stamp_avatar(&profile.owned_by.to_lowercase())
        }
        _ => stamp_avatar(ZERO_ADDRESS),
    }
}

fn stamp_avatar(address: &str) -> String {
    format!("https://cdn.stamp.fyi/avatar/eth:{}?s=300", address)
}
