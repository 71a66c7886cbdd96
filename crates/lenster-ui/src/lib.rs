//! Lenster UI Primitives
//!
//! Small Dioxus building blocks shared by every Lenster screen: buttons,
//! form fields, cards and the loading spinner. Styling is class-based; the
//! stylesheet lives with the application.

pub mod components;

pub use components::*;
