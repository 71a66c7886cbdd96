//! Styling for Lenster.

mod styles;

pub use styles::GLOBAL_STYLES;
