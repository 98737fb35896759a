//! Vector shapes for canvas effects

use iced::Point;
use iced::widget::canvas::Path;

/// Filled heart centered on `center`, `size` wide
pub fn heart(center: Point, size: f32) -> Path {
    let s = size;
    let (cx, cy) = (center.x, center.y);

    Path::new(|builder| {
        builder.move_to(Point::new(cx, cy + 0.4 * s));
        builder.bezier_curve_to(
            Point::new(cx - 0.6 * s, cy),
            Point::new(cx - 0.35 * s, cy - 0.55 * s),
            Point::new(cx, cy - 0.2 * s),
        );
        builder.bezier_curve_to(
            Point::new(cx + 0.35 * s, cy - 0.55 * s),
            Point::new(cx + 0.6 * s, cy),
            Point::new(cx, cy + 0.4 * s),
        );
        builder.close();
    })
}
