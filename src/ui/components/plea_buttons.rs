//! "Yes", "no" and "start over" buttons
//!
//! Which buttons exist is decided here from the interaction state: the "no"
//! button is not built at all once the dog is smug or happy, and the
//! "start over" link only exists while the dog is happy.

use std::time::Duration;

use iced::widget::{Column, button, container, row, svg, text};
use iced::{Alignment, Color, Element, Fill, Font, Padding};

use crate::app::Message;
use crate::features::{AffirmativeStyle, Interaction, Labels};
use crate::ui::animation::motion;
use crate::ui::{icons, theme};

const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Celebration look, independent of the click count
const CELEBRATION_PADDING_X: f32 = 48.0;
const CELEBRATION_PADDING_Y: f32 = 16.0;
const CELEBRATION_TEXT: f32 = 24.0;

/// "No" button at scale 1.0
const NO_PADDING_X: f32 = 32.0;
const NO_PADDING_Y: f32 = 12.0;
const NO_TEXT: f32 = 18.0;

/// A button the column can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PleaButton {
    Affirmative,
    Negative,
    Reset,
}

/// Buttons to show for the current state, top to bottom
pub fn visible_buttons(interaction: &Interaction) -> Vec<PleaButton> {
    let mut buttons = vec![PleaButton::Affirmative];
    if interaction.negative_visible() {
        buttons.push(PleaButton::Negative);
    }
    if interaction.reset_visible() {
        buttons.push(PleaButton::Reset);
    }
    buttons
}

/// Build the button column
pub fn view<'a>(
    interaction: &Interaction,
    labels: &'a Labels,
    no_scale: f32,
    elapsed: Duration,
    animate: bool,
) -> Element<'a, Message> {
    let shown = visible_buttons(interaction);

    let buttons = Column::with_children(shown.iter().map(|kind| match kind {
        PleaButton::Affirmative => affirmative(interaction, labels, elapsed, animate),
        PleaButton::Negative => negative(labels, no_scale),
        PleaButton::Reset => reset(labels),
    }))
    .spacing(16)
    .align_x(Alignment::Center)
    .width(Fill);

    let top_gap = if shown.contains(&PleaButton::Reset) {
        16.0
    } else {
        0.0
    };
    container(buttons)
        .padding(Padding::new(0.0).top(top_gap))
        .width(Fill)
        .into()
}

/// Small "start over" link
fn reset<'a>(labels: &'a Labels) -> Element<'a, Message> {
    container(
        button(text(&labels.reset).size(14))
            .padding(Padding::new(4.0).left(8.0).right(8.0))
            .style(theme::reset_link)
            .on_press(Message::Reset),
    )
    .padding(Padding::new(0.0).top(24.0))
    .into()
}

fn affirmative<'a>(
    interaction: &Interaction,
    labels: &'a Labels,
    elapsed: Duration,
    animate: bool,
) -> Element<'a, Message> {
    match interaction.affirmative_style() {
        AffirmativeStyle::Scaled {
            padding_x,
            padding_y,
            text_size,
        } => button(text(&labels.affirmative).size(text_size as f32).font(BOLD))
            .padding(Padding {
                top: padding_y as f32,
                bottom: padding_y as f32,
                left: padding_x as f32,
                right: padding_x as f32,
            })
            .style(theme::affirmative_button)
            .on_press(Message::Affirmative)
            .into(),

        AffirmativeStyle::Maximal {
            padding_y,
            text_size,
        } => button(
            text(&labels.affirmative)
                .size(text_size as f32)
                .font(BOLD)
                .width(Fill)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .width(Fill)
        .padding(Padding::new(padding_y as f32).left(0.0).right(0.0))
        .style(theme::affirmative_button)
        .on_press(Message::Affirmative)
        .into(),

        AffirmativeStyle::Neutral => celebration(labels, elapsed, animate),
    }
}

/// Pink bouncing button shown once the answer is yes
fn celebration<'a>(labels: &'a Labels, elapsed: Duration, animate: bool) -> Element<'a, Message> {
    let content = row![
        text(&labels.celebration).size(CELEBRATION_TEXT).font(BOLD),
        svg(svg::Handle::from_memory(icons::SPARKLES.as_bytes()))
            .width(CELEBRATION_TEXT)
            .height(CELEBRATION_TEXT)
            .style(|_theme, _status| svg::Style {
                color: Some(Color::WHITE),
            }),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let height = CELEBRATION_TEXT + 2.0 * CELEBRATION_PADDING_Y;
    let max_lift = 0.25 * height;
    let lift = if animate {
        -motion::bounce_offset(elapsed, Duration::ZERO, height)
    } else {
        0.0
    };

    container(
        button(content)
            .padding(Padding {
                top: CELEBRATION_PADDING_Y,
                bottom: CELEBRATION_PADDING_Y,
                left: CELEBRATION_PADDING_X,
                right: CELEBRATION_PADDING_X,
            })
            .style(theme::celebration_button)
            .on_press(Message::Affirmative),
    )
    .padding(Padding::new(0.0).top(max_lift - lift).bottom(lift))
    .into()
}

/// Gray button, shrunk by `scale`
fn negative<'a>(labels: &'a Labels, scale: f32) -> Element<'a, Message> {
    let label = text(&labels.negative).size(NO_TEXT * scale).font(BOLD);

    let shrunk = button(label)
        .padding(Padding {
            top: NO_PADDING_Y * scale,
            bottom: NO_PADDING_Y * scale,
            left: NO_PADDING_X * scale,
            right: NO_PADDING_X * scale,
        })
        .style(theme::negative_button)
        .on_press(Message::Negative);

    // Keep the slot at full size so the layout does not jump while it shrinks
    let slot = NO_TEXT * 1.4 + 2.0 * NO_PADDING_Y;
    container(shrunk).center_y(slot).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Stage;

    fn at_stage(stage: Stage) -> Interaction {
        let mut interaction = Interaction::new();
        match stage {
            Stage::Initial => {}
            Stage::Happy => interaction.activate_affirmative(),
            _ => {
                while interaction.stage() != stage {
                    interaction.activate_negative();
                }
            }
        }
        assert_eq!(interaction.stage(), stage);
        interaction
    }

    #[test]
    fn yes_and_no_while_pleading() {
        for stage in [Stage::Initial, Stage::Begging, Stage::Crying] {
            assert_eq!(
                visible_buttons(&at_stage(stage)),
                vec![PleaButton::Affirmative, PleaButton::Negative],
                "{}",
                stage
            );
        }
    }

    #[test]
    fn no_button_gone_when_smug() {
        assert_eq!(
            visible_buttons(&at_stage(Stage::Smug)),
            vec![PleaButton::Affirmative]
        );
    }

    #[test]
    fn happy_offers_start_over_instead_of_no() {
        let shown = visible_buttons(&at_stage(Stage::Happy));
        assert_eq!(shown, vec![PleaButton::Affirmative, PleaButton::Reset]);
        assert!(!shown.contains(&PleaButton::Negative));
    }

    #[test]
    fn yes_after_three_noes_still_hides_no() {
        let mut interaction = at_stage(Stage::Smug);
        interaction.activate_affirmative();
        assert_eq!(
            visible_buttons(&interaction),
            vec![PleaButton::Affirmative, PleaButton::Reset]
        );
    }
}
