//! Feature modules - logic separated from UI
//!
//! Nothing in here depends on `crate::ui` or `crate::app`.

pub mod content;
pub mod interaction;
pub mod keybindings;
pub mod settings;

pub use content::{BackgroundTheme, Labels, StageContent};
pub use interaction::{AffirmativeStyle, Interaction, Stage};
pub use keybindings::{Action, KeyBindings};
pub use settings::Settings;
