//! Public profile page

use dioxus::prelude::*;
use lenster_core::{format_handle, get_avatar};

use crate::context::{use_config, use_session};

#[component]
pub fn UserProfile(handle: String) -> Element {
    let config = use_config();
    let session = use_session();

    let own = session
        .read()
        .profiles
        .iter()
        .find(|p| format_handle(Some(&p.handle)) == handle)
        .cloned();
    let avatar = get_avatar(own.as_ref(), &config.ipfs_gateway);

    rsx! {
        section { class: "user-profile",
            img { class: "profile-avatar", src: "{avatar}", alt: "{handle}" }
            h2 { class: "profile-handle", "@{handle}" }
            if let Some(profile) = own {
                p { class: "muted", "Profile {profile.id}" }
            }
        }
    }
}
