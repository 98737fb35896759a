//! Floating icons in the four corners of the window

use std::time::Duration;

use iced::widget::{Space, column, container, row, svg};
use iced::{Color, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::animation::motion;
use crate::ui::{icons, theme};

const OPACITY: f32 = 0.5;

/// One corner icon
struct Decoration {
    icon: &'static str,
    size: f32,
    color: Color,
    delay: Duration,
}

const TOP_LEFT: Decoration = Decoration {
    icon: icons::HEART,
    size: 48.0,
    color: theme::PINK_300,
    delay: Duration::ZERO,
};

const TOP_RIGHT: Decoration = Decoration {
    icon: icons::STAR,
    size: 40.0,
    color: theme::YELLOW_300,
    delay: Duration::from_millis(1000),
};

const BOTTOM_LEFT: Decoration = Decoration {
    icon: icons::COFFEE,
    size: 44.0,
    color: theme::BLUE_300,
    delay: Duration::from_millis(1500),
};

const BOTTOM_RIGHT: Decoration = Decoration {
    icon: icons::SPARKLES,
    size: 52.0,
    color: theme::PURPLE_300,
    delay: Duration::from_millis(500),
};

/// Icon shifted by its current float offset
///
/// The offset is split between top and bottom padding so the icon moves
/// without changing the height of its slot.
fn floating_icon(
    decoration: &Decoration,
    elapsed: Duration,
    animate: bool,
) -> Element<'static, Message> {
    let lift = if animate {
        -motion::float_offset(elapsed, decoration.delay)
    } else {
        0.0
    };
    let color = theme::faded(decoration.color, OPACITY);

    container(
        svg(svg::Handle::from_memory(decoration.icon.as_bytes()))
            .width(decoration.size)
            .height(decoration.size)
            .style(move |_theme, _status| svg::Style { color: Some(color) }),
    )
    .padding(Padding::new(0.0).top(10.0 - lift).bottom(lift))
    .into()
}

/// Full-window decoration layer
pub fn view(elapsed: Duration, animate: bool) -> Element<'static, Message> {
    let top = row![
        floating_icon(&TOP_LEFT, elapsed, animate),
        Space::new().width(Fill),
        container(floating_icon(&TOP_RIGHT, elapsed, animate))
            .padding(Padding::new(0.0).top(40.0).right(40.0)),
    ];

    let bottom = row![
        container(floating_icon(&BOTTOM_LEFT, elapsed, animate))
            .padding(Padding::new(0.0).left(40.0)),
        Space::new().width(Fill),
        floating_icon(&BOTTOM_RIGHT, elapsed, animate),
    ];

    container(column![
        top,
        Space::new().height(Fill),
        container(bottom).padding(Padding::new(0.0).bottom(40.0)),
    ])
    .padding(Padding::new(30.0))
    .width(Fill)
    .height(Fill)
    .into()
}
