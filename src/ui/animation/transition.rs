//! Eased transitions driven by `iced_anim`

use std::time::Instant;

use iced::Color;
use iced_anim::Animated;

use super::prelude::{BACKGROUND_FADE, CONTENT_FADE, presets};
use crate::utils::lerp_color;

/// Cross-fade of the window background between stage colors
#[derive(Debug)]
pub struct StageTransition {
    from: Color,
    to: Color,
    progress: Animated<f32>,
}

impl StageTransition {
    /// Start settled on `color`
    pub fn new(color: Color) -> Self {
        Self {
            from: color,
            to: color,
            progress: Animated::transition(1.0, presets::fade(BACKGROUND_FADE)),
        }
    }

    /// Fade towards `color`, starting from whatever is on screen now
    pub fn retarget(&mut self, color: Color) {
        if color == self.to {
            return;
        }

        self.from = self.current();
        self.to = color;
        self.progress = Animated::transition(0.0, presets::fade(BACKGROUND_FADE));
        self.progress.update(1.0.into());
    }

    /// Color to paint right now
    pub fn current(&self) -> Color {
        lerp_color(self.from, self.to, *self.progress.value())
    }

    /// Color the fade is heading to
    #[cfg(test)]
    pub fn target(&self) -> Color {
        self.to
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.progress.tick(now);
    }
}

/// Opacity ramp from 0 to 1, restartable
#[derive(Debug)]
pub struct FadeIn {
    opacity: Animated<f32>,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeIn {
    /// Start fully visible
    pub fn new() -> Self {
        Self {
            opacity: Animated::transition(1.0, presets::fade(CONTENT_FADE)),
        }
    }

    /// Drop to transparent and fade back in
    pub fn restart(&mut self) {
        self.opacity = Animated::transition(0.0, presets::fade(CONTENT_FADE));
        self.opacity.update(1.0.into());
    }

    pub fn opacity(&self) -> f32 {
        *self.opacity.value()
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.opacity.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_starts_settled() {
        let transition = StageTransition::new(Color::WHITE);
        assert_eq!(transition.current(), Color::WHITE);
        assert!(!transition.is_animating());
    }

    #[test]
    fn test_retarget_starts_from_current() {
        let mut transition = StageTransition::new(Color::WHITE);
        transition.retarget(Color::BLACK);

        assert_eq!(transition.target(), Color::BLACK);
        // Either still on its way or, at the latest, already there
        assert!(transition.is_animating() || transition.current() == Color::BLACK);
        assert!(transition.current().r >= 0.0 && transition.current().r <= 1.0);
    }

    #[test]
    fn test_retarget_same_color_is_noop() {
        let mut transition = StageTransition::new(Color::WHITE);
        transition.retarget(Color::WHITE);
        assert!(!transition.is_animating());
    }

    #[test]
    fn test_fade_restart() {
        let mut fade = FadeIn::new();
        assert_eq!(fade.opacity(), 1.0);

        fade.restart();
        assert!(fade.is_animating() || fade.opacity() > 0.0);
        assert!(fade.opacity() >= 0.0 && fade.opacity() <= 1.0);
    }
}
