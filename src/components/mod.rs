//! UI Components for Lenster.

mod fallback;
mod mobile_drawer;
mod modals;
mod nav_header;
pub mod settings;

pub use fallback::{Custom404, Custom500, PageLoading};
pub use mobile_drawer::MobileDrawerMenu;
pub use modals::GlobalModals;
pub use nav_header::Navbar;
