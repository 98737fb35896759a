//! Animation system
//!
//! Eased transitions come from `iced_anim` and are ticked on every frame;
//! looping motion (floating, bouncing, pinging) is a pure function of the
//! time elapsed since the window opened.
//!
//! # Usage
//!
//! ```rust
//! use crate::ui::animation::prelude::*;
//!
//! let opacity: Animated<f32> = Animated::transition(0.0, Easing::EASE);
//! ```

pub mod motion;
pub mod prelude;
mod transition;

pub use transition::{FadeIn, StageTransition};
