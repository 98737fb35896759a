//! UI module
//! Pastel card-on-background look with pink accents
//!
//! # Architecture
//!
//! - **Components** (`components`): pieces of the screen, emit app messages
//! - **Effects** (`effects`): canvas overlays (hearts)
//! - **Animation** (`animation`): eased transitions and looping motion
//! - **Theme** (`theme`) and **Icons** (`icons`): shared look

pub mod animation;
pub mod components;
pub mod effects;
pub mod icons;
pub mod theme;
