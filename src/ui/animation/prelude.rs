//! Animation prelude - commonly used types re-exported for convenience

use std::time::Duration;

pub use iced_anim::Animated;
pub use iced_anim::transition::Easing;

/// Window background cross-fade between stages
pub const BACKGROUND_FADE: Duration = Duration::from_millis(1000);
/// Photo and message fade-in on stage change
pub const CONTENT_FADE: Duration = Duration::from_millis(500);
/// "No" button shrink
pub const BUTTON_RESIZE: Duration = Duration::from_millis(300);

/// Animation presets for common use cases
pub mod presets {
    use super::*;

    /// Smooth ease for color and opacity changes
    pub fn fade(duration: Duration) -> Easing {
        Easing::EASE.with_duration(duration)
    }

    /// Quick ease-out for size changes
    pub fn resize() -> Easing {
        Easing::EASE_OUT.with_duration(BUTTON_RESIZE)
    }
}
