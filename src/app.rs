//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use std::time::Instant;

use iced::Task;

use crate::features::{Action, Settings, Stage};
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let ui = UiState::new(&settings, Instant::now());

        // Fetch every stage photo up front so stage changes never wait
        let fetches = Stage::ALL.map(|stage| {
            let url = settings.content.get(stage).image_url.clone();
            Task::perform(helpers::fetch_image(url), move |result| {
                Message::StageImageLoaded(stage, result.map_err(|e| format!("{:#}", e)))
            })
        });

        let app = Self {
            core: CoreState { settings },
            interaction: Default::default(),
            ui,
        };

        tracing::info!("Starting at stage {}", app.interaction.stage());
        for action in Action::all() {
            tracing::debug!(
                "{} bound to {}",
                action.display_name(),
                app.core.settings.keybindings.describe(action)
            );
        }
        (app, Task::batch(fetches))
    }

    /// Window title
    pub fn title(&self) -> String {
        "Milk Tea Pup".to_string()
    }

    /// Continuous motion is on unless the user asked for less of it
    pub fn animate(&self) -> bool {
        !self.core.settings.display.reduce_motion
    }

    /// Subscriptions for animation frames and keyboard events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let needs_frames = subscription_logic::needs_animation_subscription(
            self.ui.has_active_animations(),
            self.animate(),
        );

        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        iced::Subscription::batch([animation_sub, keyboard_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are needed while an eased transition runs, or all the time
    /// when looping motion (floating, bouncing) is enabled
    pub fn needs_animation_subscription(has_transitions: bool, continuous_motion: bool) -> bool {
        has_transitions || continuous_motion
    }
}

#[cfg(test)]
mod tests {
    use super::state::StageImage;
    use super::subscription_logic::*;
    use super::*;

    #[test]
    fn frames_for_continuous_motion() {
        assert!(needs_animation_subscription(false, true));
        assert!(needs_animation_subscription(true, true));
    }

    #[test]
    fn reduced_motion_only_ticks_for_transitions() {
        assert!(needs_animation_subscription(true, false));
        assert!(!needs_animation_subscription(false, false));
    }

    #[test]
    fn new_app_starts_fresh() {
        let (app, _task) = App::new(Settings::default());
        assert_eq!(app.interaction.stage(), Stage::Initial);
        assert_eq!(app.interaction.negative_clicks(), 0);
        assert!(app.ui.celebration.is_none());
        for stage in Stage::ALL {
            assert!(matches!(app.ui.images.get(&stage), Some(StageImage::Loading)));
        }
    }

    #[test]
    fn reduce_motion_setting() {
        let mut settings = Settings::default();
        settings.display.reduce_motion = true;
        let (app, _task) = App::new(settings);
        assert!(!app.animate());
    }
}
