//! "Yes", "no" and "start over" handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Stage;
use crate::ui::effects::confetti::Celebration;
use crate::ui::theme;

impl App {
    /// Handle button clicks
    pub fn handle_interaction(&mut self, message: &Message) -> Option<Task<Message>> {
        let before = self.interaction.stage();

        match message {
            Message::Negative => {
                if self.interaction.activate_negative() {
                    let scale = self.interaction.negative_scale();
                    self.ui.no_scale.update(scale.into());
                    self.on_stage_change(before);
                } else {
                    tracing::debug!("Ignoring \"no\" at stage {}", before);
                }
                Some(Task::none())
            }

            Message::Affirmative => {
                self.interaction.activate_affirmative();
                self.on_stage_change(before);
                Some(Task::none())
            }

            Message::Reset => {
                self.interaction.reset();
                self.ui.no_scale.update(self.interaction.negative_scale().into());
                self.on_stage_change(before);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Start the transitions for a new stage
    fn on_stage_change(&mut self, before: Stage) {
        let after = self.interaction.stage();
        if before == after {
            return;
        }

        tracing::info!(
            "Stage {} -> {} after {} \"no\" clicks",
            before,
            after,
            self.interaction.negative_clicks()
        );

        let now = Instant::now();
        self.ui.now = now;

        let content = self.core.settings.content.get(after);
        self.ui
            .background
            .retarget(theme::stage_background(content.theme));
        self.ui.content_fade.restart();

        self.ui.celebration = if after == Stage::Happy {
            let count = self.core.settings.celebration.particle_count;
            Some(Celebration::spawn(count, now))
        } else {
            None
        };
    }
}
