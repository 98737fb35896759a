//! Heart shower shown while the dog is happy
//!
//! A fresh set of particles is rolled every time the happy stage is entered
//! and thrown away when it is left; nothing carries over between rounds.

use std::time::{Duration, Instant};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::{Element, Fill, Point, Renderer, Theme, mouse};
use rand::Rng;

use super::shapes;
use crate::ui::animation::motion;
use crate::ui::theme;

const MIN_SIZE: f32 = 16.0;
const MAX_SIZE: f32 = 40.0;
const MAX_DELAY_SECS: f32 = 2.0;
const OPACITY: f32 = 0.6;

/// One heart in the shower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the window width
    pub x: f32,
    /// Vertical position as a fraction of the window height
    pub y: f32,
    /// Bounce start delay
    pub delay: Duration,
    /// Heart width in pixels
    pub size: f32,
}

impl Particle {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            delay: Duration::from_secs_f32(rng.random_range(0.0..MAX_DELAY_SECS)),
            size: rng.random_range(MIN_SIZE..MAX_SIZE),
        }
    }
}

/// A running celebration
#[derive(Debug, Clone)]
pub struct Celebration {
    particles: Vec<Particle>,
    started: Instant,
}

impl Celebration {
    /// Roll `count` particles
    pub fn spawn(count: usize, now: Instant) -> Self {
        Self::spawn_with(&mut rand::rng(), count, now)
    }

    pub fn spawn_with(rng: &mut impl Rng, count: usize, now: Instant) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(rng)).collect(),
            started: now,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Time since the shower began
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }
}

/// Canvas program painting the particles
struct ConfettiLayer<'a> {
    particles: &'a [Particle],
    elapsed: Duration,
    animate: bool,
}

impl<Message> Program<Message> for ConfettiLayer<'_> {
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
        let color = theme::faded(theme::PINK_400, OPACITY);

        for particle in self.particles {
            let lift = if self.animate {
                motion::bounce_offset(self.elapsed, particle.delay, particle.size)
            } else {
                0.0
            };
            let center = Point::new(
                particle.x * bounds.width,
                particle.y * bounds.height + lift,
            );
            frame.fill(&shapes::heart(center, particle.size), color);
        }

        vec![frame.into_geometry()]
    }
}

/// Full-window overlay; ignores the mouse so the buttons below stay usable
pub fn view<'a, Message: 'a>(
    celebration: &'a Celebration,
    now: Instant,
    animate: bool,
) -> Element<'a, Message> {
    Canvas::new(ConfettiLayer {
        particles: celebration.particles(),
        elapsed: celebration.elapsed(now),
        animate,
    })
    .width(Fill)
    .height(Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_particles_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let celebration = Celebration::spawn_with(&mut rng, 200, Instant::now());

        assert_eq!(celebration.particles().len(), 200);
        for p in celebration.particles() {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
            assert!((MIN_SIZE..MAX_SIZE).contains(&p.size));
            assert!(p.delay <= Duration::from_secs_f32(MAX_DELAY_SECS));
        }
    }

    #[test]
    fn test_each_celebration_is_rolled_fresh() {
        let now = Instant::now();
        let a = Celebration::spawn_with(&mut StdRng::seed_from_u64(1), 20, now);
        let b = Celebration::spawn_with(&mut StdRng::seed_from_u64(2), 20, now);
        assert_ne!(a.particles(), b.particles());
    }

    #[test]
    fn test_elapsed_never_negative() {
        let now = Instant::now();
        let celebration = Celebration::spawn(3, now);
        assert_eq!(celebration.elapsed(now), Duration::ZERO);
        assert!(celebration.elapsed(now + Duration::from_secs(2)) >= Duration::from_secs(2));
    }
}
