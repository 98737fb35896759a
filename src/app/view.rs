//! Application view rendering

use iced::widget::{column, container, stack, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::{decorations, dog_card, plea_buttons};
use crate::ui::effects::confetti;
use crate::ui::theme;

impl App {
    /// Build the window contents
    ///
    /// Layers, back to front: decorations, card with footer, heart shower.
    pub fn view(&self) -> Element<'_, Message> {
        let stage = self.interaction.stage();
        let settings = &self.core.settings;
        let content = settings.content.get(stage);
        let animate = self.animate();
        let elapsed = self.ui.elapsed();

        let buttons = plea_buttons::view(
            &self.interaction,
            &settings.labels,
            *self.ui.no_scale.value(),
            elapsed,
            animate,
        );

        let card = dog_card::view(
            content,
            stage,
            self.ui.photo(stage),
            self.ui.content_fade.opacity(),
            elapsed,
            animate,
            buttons,
        );

        let footer = text(&settings.labels.footer)
            .size(12)
            .color(theme::faded(theme::PINK_400, 0.8));

        let main = container(
            column![card, footer]
                .spacing(32)
                .align_x(Alignment::Center)
                .max_width(448),
        )
        .padding(16)
        .center(Fill);

        let mut layers = stack![decorations::view(elapsed, animate), main];
        if let Some(celebration) = &self.ui.celebration {
            layers = layers.push(confetti::view(celebration, self.ui.now, animate));
        }

        let background = self.ui.background.current();
        container(layers)
            .width(Fill)
            .height(Fill)
            .style(move |_theme| theme::backdrop(background))
            .into()
    }
}
