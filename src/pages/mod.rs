//! Page components for Lenster.

mod home;
mod misc;
mod profile;
mod settings;

pub use home::Home;
pub use misc::{Bookmarks, Communities, Contact, Moderation, PageNotFound};
pub use profile::UserProfile;
pub use settings::{Settings, SettingsSection};
