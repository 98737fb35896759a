//! Application state definitions

use std::collections::HashMap;
use std::time::{Duration, Instant};

use iced::widget::image;

use crate::features::{Interaction, Settings, Stage};
use crate::ui::animation::prelude::{Animated, presets};
use crate::ui::animation::{FadeIn, StageTransition};
use crate::ui::effects::confetti::Celebration;
use crate::ui::theme;

/// Main application state
pub struct App {
    /// Configuration
    pub core: CoreState,
    /// Stage and "no" count
    pub interaction: Interaction,
    /// Images and animations
    pub ui: UiState,
}

/// Configuration loaded at startup
pub struct CoreState {
    pub settings: Settings,
}

/// Download state of a stage photo
#[derive(Debug, Clone)]
pub enum StageImage {
    Loading,
    Ready(image::Handle),
    Unavailable,
}

/// UI state (photos, transitions, celebration)
pub struct UiState {
    pub images: HashMap<Stage, StageImage>,
    /// Window background cross-fade
    pub background: StageTransition,
    /// Photo and message fade-in
    pub content_fade: FadeIn,
    /// Displayed scale of the "no" button, eased towards the real value
    pub no_scale: Animated<f32>,
    /// Heart shower, only while happy
    pub celebration: Option<Celebration>,
    /// When the window opened; looping motion is timed from here
    pub started: Instant,
    /// Time of the latest frame
    pub now: Instant,
}

impl UiState {
    pub fn new(settings: &Settings, now: Instant) -> Self {
        let initial = settings.content.get(Stage::Initial);

        Self {
            images: Stage::ALL
                .iter()
                .map(|stage| (*stage, StageImage::Loading))
                .collect(),
            background: StageTransition::new(theme::stage_background(initial.theme)),
            content_fade: FadeIn::new(),
            no_scale: Animated::transition(1.0, presets::resize()),
            celebration: None,
            started: now,
            now,
        }
    }

    /// Time since the window opened
    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started)
    }

    /// Photo for a stage, if it has arrived
    pub fn photo(&self, stage: Stage) -> Option<&image::Handle> {
        match self.images.get(&stage) {
            Some(StageImage::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Any eased transition still running
    pub fn has_active_animations(&self) -> bool {
        self.background.is_animating()
            || self.content_fade.is_animating()
            || self.no_scale.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.background.tick(now);
        self.content_fade.tick(now);
        self.no_scale.tick(now);
    }
}
