//! Application-specific UI components
//!
//! Components build on iced widgets and effects and emit `crate::app::Message`.

pub mod decorations;
pub mod dog_card;
pub mod plea_buttons;
