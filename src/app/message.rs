//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::{Action, Stage};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Interaction ============
    /// "Yes" button clicked
    Affirmative,
    /// "No" button clicked
    Negative,
    /// "Start over" link clicked
    Reset,

    // ============ Assets ============
    /// Stage image downloaded (or failed, with the error text)
    StageImageLoaded(Stage, Result<Vec<u8>, String>),

    // ============ Keyboard ============
    /// Key pressed (from keyboard subscription)
    KeyPressed(Key, Modifiers),
    /// Run a bound action
    ExecuteAction(Action),

    // ============ Animation ============
    /// Frame tick while something is moving
    AnimationTick,
}
