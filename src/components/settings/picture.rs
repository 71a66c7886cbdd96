//! Picture editors. Exactly one is mounted, chosen by the picture variant.

use dioxus::prelude::*;
use lenster_core::draft::current_picture_url;
use lenster_core::format::{is_ethereum_address, sanitize_dstorage_url};
use lenster_core::{Picture, ProfileRecord};
use lenster_ui::{Button, Input};

use crate::context::use_config;

/// Editor for a conventionally uploaded picture
#[component]
pub fn StandardPicture(profile: ProfileRecord) -> Element {
    let config = use_config();
    let current = current_picture_url(&profile)
        .map(|url| sanitize_dstorage_url(url, &config.ipfs_gateway));
    let mut url = use_signal(|| current.clone().unwrap_or_default());
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let profile_id = profile.id.clone();
    let save = move |_: ()| {
        let value = url.read().trim().to_string();
        if value.is_empty() {
            error.set(Some("Pick an image first".into()));
            return;
        }
        error.set(None);
        tracing::info!(profile = %profile_id, url = %value, "Picture prepared for update");
    };

    rsx! {
        div { class: "picture-editor",
            h3 { "Choose picture" }
            if let Some(src) = current {
                img { class: "picture-preview", src: "{src}", alt: "Current picture" }
            }
            Input {
                id: "picture-url".to_string(),
                label: "Image URL".to_string(),
                value: url(),
                oninput: move |s| url.set(s),
                placeholder: "ipfs://...".to_string(),
                error: error(),
            }
            Button { onclick: save, "Save" }
        }
    }
}

/// Editor for an NFT-backed picture
#[component]
pub fn NftPicture(profile: ProfileRecord) -> Element {
    let token = match &profile.picture {
        Some(Picture::Nft { token_id, .. }) => token_id.clone(),
        _ => String::new(),
    };
    let mut contract = use_signal(String::new);
    let mut token_id = use_signal(|| token.clone());
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let profile_id = profile.id.clone();
    let save = move |_: ()| {
        let address = contract.read().trim().to_string();
        let token = token_id.read().trim().to_string();
        if !is_ethereum_address(&address) {
            error.set(Some("Invalid contract address".into()));
            return;
        }
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
            error.set(Some("Token id must be a number".into()));
            return;
        }
        error.set(None);
        tracing::info!(profile = %profile_id, contract = %address, token = %token, "NFT picture prepared for update");
    };

    rsx! {
        div { class: "picture-editor nft",
            h3 { "Choose NFT picture" }
            if !token.is_empty() {
                p { class: "picture-meta", "Current token #{token}" }
            }
            Input {
                id: "nft-contract".to_string(),
                label: "Contract address".to_string(),
                value: contract(),
                oninput: move |s| contract.set(s),
                placeholder: "0x277f5959e22f94d5bd4c2cc0a77c4c71f31da3ac".to_string(),
            }
            Input {
                id: "nft-token".to_string(),
                label: "Token id".to_string(),
                value: token_id(),
                oninput: move |s| token_id.set(s),
                error: error(),
            }
            Button { onclick: save, "Save" }
        }
    }
}
