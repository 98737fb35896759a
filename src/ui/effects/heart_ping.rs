//! Pulsing heart laid over the photo while the dog is happy

use std::time::Duration;

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Color, Element, Point, Renderer, Theme, mouse};

use super::shapes;
use crate::ui::animation::motion;
use crate::ui::theme;

/// Heart size before it starts growing
const HEART_SIZE: f32 = 80.0;

#[derive(Debug, Clone, Copy)]
struct HeartPing {
    elapsed: Duration,
    animate: bool,
}

impl<Message> Program<Message> for HeartPing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        // Steady heart underneath, pulse on top
        frame.fill(&shapes::heart(center, HEART_SIZE), Color::WHITE);

        if self.animate {
            let (scale, opacity) = motion::ping(self.elapsed);
            if opacity > 0.0 {
                frame.fill(
                    &shapes::heart(center, HEART_SIZE * scale),
                    theme::faded(Color::WHITE, opacity * 0.75),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Heart overlay of the given square size
pub fn view<'a, Message: 'a>(elapsed: Duration, animate: bool, size: f32) -> Element<'a, Message> {
    Canvas::new(HeartPing { elapsed, animate })
        .width(size)
        .height(size)
        .into()
}
