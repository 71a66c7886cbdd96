//! Settings screen components

mod picture;
mod profile_form;
mod sidebar;

pub use picture::{NftPicture, StandardPicture};
pub use profile_form::ProfileForm;
pub use sidebar::SettingsSidebar;
