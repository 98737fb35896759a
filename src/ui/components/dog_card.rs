//! The card in the middle: photo, message and buttons

use std::time::Duration;

use iced::widget::{column, container, image, stack, svg, text};
use iced::{Alignment, ContentFit, Element, Fill, Font, Padding};

use crate::app::Message;
use crate::features::{Stage, StageContent};
use crate::ui::animation::motion;
use crate::ui::effects::heart_ping;
use crate::ui::{icons, theme};

const CARD_MAX_WIDTH: f32 = 448.0;
const PHOTO_SIZE: f32 = 256.0;
const PHOTO_BORDER: f32 = 4.0;
const MESSAGE_SIZE: f32 = 28.0;

/// Build the card
///
/// `photo` is `None` while the stage image is still downloading or could
/// not be fetched; a placeholder heart is shown instead.
pub fn view<'a>(
    content: &'a StageContent,
    stage: Stage,
    photo: Option<&image::Handle>,
    content_opacity: f32,
    elapsed: Duration,
    animate: bool,
    buttons: Element<'a, Message>,
) -> Element<'a, Message> {
    let message = text(&content.message)
        .size(MESSAGE_SIZE)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        })
        .color(theme::faded(theme::message_color(stage), content_opacity))
        .width(Fill)
        .align_x(iced::alignment::Horizontal::Center);

    let body = column![
        floating_photo(stage, photo, content_opacity, elapsed, animate),
        container(message).padding(Padding::new(0.0).left(8.0).right(8.0)),
        buttons,
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(body)
        .padding(32)
        .max_width(CARD_MAX_WIDTH)
        .width(Fill)
        .style(theme::card)
        .into()
}

fn floating_photo<'a>(
    stage: Stage,
    photo: Option<&image::Handle>,
    opacity: f32,
    elapsed: Duration,
    animate: bool,
) -> Element<'a, Message> {
    let inner = PHOTO_SIZE - 2.0 * PHOTO_BORDER;

    let picture: Element<'a, Message> = match photo {
        Some(handle) => image(handle.clone())
            .width(Fill)
            .height(Fill)
            .content_fit(ContentFit::Cover)
            .border_radius(20.0)
            .opacity(opacity)
            .into(),
        None => container(
            svg(svg::Handle::from_memory(icons::HEART.as_bytes()))
                .width(64)
                .height(64)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::PINK_300),
                }),
        )
        .center(Fill)
        .style(theme::photo_placeholder)
        .into(),
    };

    let framed: Element<'a, Message> = if stage == Stage::Happy {
        stack![
            picture,
            container(heart_ping::view(elapsed, animate, inner))
                .center(Fill)
                .style(theme::happy_tint),
        ]
        .into()
    } else {
        picture
    };

    let lift = if animate {
        -motion::float_offset(elapsed, Duration::ZERO)
    } else {
        0.0
    };

    container(
        container(framed)
            .width(PHOTO_SIZE)
            .height(PHOTO_SIZE)
            .padding(PHOTO_BORDER)
            .style(theme::photo_frame),
    )
    .padding(Padding::new(0.0).top(10.0 - lift).bottom(lift))
    .into()
}
