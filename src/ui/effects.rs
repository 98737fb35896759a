//! Canvas effects drawn on top of the regular widgets
//!
//! - `confetti`: heart shower after a "yes"
//! - `heart_ping`: pulsing heart over the photo
//! - `shapes`: vector paths shared by both

pub mod confetti;
pub mod heart_ping;
pub mod shapes;
