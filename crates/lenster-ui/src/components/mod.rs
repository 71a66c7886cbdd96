//! Reusable UI components

mod button;
mod card;
mod input;
mod spinner;

pub use button::*;
pub use card::*;
pub use input::*;
pub use spinner::*;
