//! Interaction state machine
//!
//! The dog moves through five stages driven by the number of "no" clicks.
//! A "yes" click jumps straight to [`Stage::Happy`] from anywhere, and
//! starting over puts everything back to the initial state.
//!
//! The button styling is derived from the state with two pure functions,
//! [`affirmative_style`] and [`negative_scale`], so the view never keeps
//! its own copy of the numbers.

use serde::{Deserialize, Serialize};

/// Base horizontal padding of the "yes" button
const YES_PADDING_X: u32 = 32;
/// Base vertical padding of the "yes" button
const YES_PADDING_Y: u32 = 16;
/// Base text size of the "yes" button
const YES_TEXT_SIZE: u32 = 20;

/// Growth per "no" click
const YES_GROW_X: u32 = 20;
const YES_GROW_Y: u32 = 15;
const YES_GROW_TEXT: u32 = 8;

/// Fixed vertical padding once the dog turns smug
const SMUG_PADDING_Y: u32 = 60;
/// Fixed text size once the dog turns smug
const SMUG_TEXT_SIZE: u32 = 48;

/// Shrink per "no" click
const NO_SHRINK_STEP: f32 = 0.2;
/// The "no" button never gets smaller than this
const NO_MIN_SCALE: f32 = 0.3;

/// Stages of the interaction, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Initial,
    Begging,
    Crying,
    Smug,
    Happy,
}

impl Stage {
    /// Every stage, in order
    pub const ALL: [Stage; 5] = [
        Stage::Initial,
        Stage::Begging,
        Stage::Crying,
        Stage::Smug,
        Stage::Happy,
    ];

    /// Stage reached after `clicks` rejections (never `Happy`)
    pub fn from_negative_clicks(clicks: u32) -> Self {
        match clicks {
            0 => Stage::Initial,
            1 => Stage::Begging,
            2 => Stage::Crying,
            _ => Stage::Smug,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Initial => "initial",
            Stage::Begging => "begging",
            Stage::Crying => "crying",
            Stage::Smug => "smug",
            Stage::Happy => "happy",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Style parameters for the "yes" button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffirmativeStyle {
    /// No parameters; the view uses its own celebration look
    Neutral,
    /// Fills the card width and dwarfs everything else
    Maximal { padding_y: u32, text_size: u32 },
    /// Grows with every rejection
    Scaled {
        padding_x: u32,
        padding_y: u32,
        text_size: u32,
    },
}

/// Style of the "yes" button for a given state
pub fn affirmative_style(stage: Stage, negative_clicks: u32) -> AffirmativeStyle {
    match stage {
        Stage::Happy => AffirmativeStyle::Neutral,
        Stage::Smug => AffirmativeStyle::Maximal {
            padding_y: SMUG_PADDING_Y,
            text_size: SMUG_TEXT_SIZE,
        },
        Stage::Initial | Stage::Begging | Stage::Crying => AffirmativeStyle::Scaled {
            padding_x: grow(YES_PADDING_X, YES_GROW_X, negative_clicks),
            padding_y: grow(YES_PADDING_Y, YES_GROW_Y, negative_clicks),
            text_size: grow(YES_TEXT_SIZE, YES_GROW_TEXT, negative_clicks),
        },
    }
}

fn grow(base: u32, step: u32, clicks: u32) -> u32 {
    base.saturating_add(step.saturating_mul(clicks))
}

/// Scale factor of the "no" button: shrinks but never disappears
pub fn negative_scale(negative_clicks: u32) -> f32 {
    (1.0 - NO_SHRINK_STEP * negative_clicks as f32).max(NO_MIN_SCALE)
}

/// Interaction controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    stage: Stage,
    negative_clicks: u32,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            stage: Stage::Initial,
            negative_clicks: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn negative_clicks(&self) -> u32 {
        self.negative_clicks
    }

    /// Register a "no" click
    ///
    /// Returns `false` and leaves the state untouched while the "no" button
    /// is hidden, which pins the count once the dog turns smug.
    pub fn activate_negative(&mut self) -> bool {
        if !self.negative_visible() {
            return false;
        }

        self.negative_clicks = self.negative_clicks.saturating_add(1);
        self.stage = Stage::from_negative_clicks(self.negative_clicks);
        true
    }

    /// Register a "yes" click; the count is kept but no longer matters
    pub fn activate_affirmative(&mut self) {
        self.stage = Stage::Happy;
    }

    /// Back to the very beginning
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The "no" button is gone once the dog is smug or happy
    pub fn negative_visible(&self) -> bool {
        !matches!(self.stage, Stage::Smug | Stage::Happy)
    }

    /// Starting over is only offered after a "yes"
    pub fn reset_visible(&self) -> bool {
        self.stage == Stage::Happy
    }

    pub fn affirmative_style(&self) -> AffirmativeStyle {
        affirmative_style(self.stage, self.negative_clicks)
    }

    pub fn negative_scale(&self) -> f32 {
        negative_scale(self.negative_clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after_rejections(n: u32) -> Interaction {
        let mut interaction = Interaction::new();
        for _ in 0..n {
            interaction.activate_negative();
        }
        interaction
    }

    #[test]
    fn test_stage_follows_rejections() {
        assert_eq!(after_rejections(0).stage(), Stage::Initial);
        assert_eq!(after_rejections(1).stage(), Stage::Begging);
        assert_eq!(after_rejections(2).stage(), Stage::Crying);
        assert_eq!(after_rejections(3).stage(), Stage::Smug);
    }

    #[test]
    fn test_count_pinned_once_smug() {
        let mut interaction = after_rejections(3);
        assert!(!interaction.activate_negative());
        assert!(!interaction.activate_negative());
        assert_eq!(interaction.negative_clicks(), 3);
        assert_eq!(interaction.stage(), Stage::Smug);
    }

    #[test]
    fn test_from_negative_clicks_saturates_at_smug() {
        assert_eq!(Stage::from_negative_clicks(3), Stage::Smug);
        assert_eq!(Stage::from_negative_clicks(42), Stage::Smug);
        assert_eq!(Stage::from_negative_clicks(u32::MAX), Stage::Smug);
    }

    #[test]
    fn test_affirmative_from_any_state() {
        for n in 0..=3 {
            let mut interaction = after_rejections(n);
            interaction.activate_affirmative();
            assert_eq!(interaction.stage(), Stage::Happy);
            assert_eq!(interaction.negative_clicks(), n);

            // Idempotent
            interaction.activate_affirmative();
            assert_eq!(interaction.stage(), Stage::Happy);
            assert_eq!(interaction.negative_clicks(), n);
        }
    }

    #[test]
    fn test_no_rejection_while_happy() {
        let mut interaction = after_rejections(1);
        interaction.activate_affirmative();
        assert!(!interaction.negative_visible());
        assert!(!interaction.activate_negative());
        assert_eq!(interaction.negative_clicks(), 1);
        assert_eq!(interaction.stage(), Stage::Happy);
    }

    #[test]
    fn test_reset_from_anywhere() {
        for n in 0..=3 {
            let mut interaction = after_rejections(n);
            interaction.reset();
            assert_eq!(interaction, Interaction::new());

            let mut interaction = after_rejections(n);
            interaction.activate_affirmative();
            interaction.reset();
            assert_eq!(interaction.stage(), Stage::Initial);
            assert_eq!(interaction.negative_clicks(), 0);
        }
    }

    #[test]
    fn test_negative_scale_curve() {
        assert_eq!(negative_scale(0), 1.0);
        assert!((negative_scale(1) - 0.8).abs() < 1e-6);
        assert!((negative_scale(2) - 0.6).abs() < 1e-6);
        assert!((negative_scale(3) - 0.4).abs() < 1e-6);
        assert_eq!(negative_scale(4), NO_MIN_SCALE);
        assert_eq!(negative_scale(u32::MAX), NO_MIN_SCALE);
    }

    #[test]
    fn test_negative_scale_monotonic_and_floored() {
        let mut previous = negative_scale(0);
        for n in 1..200 {
            let scale = negative_scale(n);
            assert!(scale <= previous, "scale grew at n={}", n);
            assert!(scale >= 0.3, "scale below floor at n={}", n);
            previous = scale;
        }
    }

    #[test]
    fn test_affirmative_grows_linearly() {
        for stage in [Stage::Initial, Stage::Begging, Stage::Crying] {
            for n in 0..10 {
                assert_eq!(
                    affirmative_style(stage, n),
                    AffirmativeStyle::Scaled {
                        padding_x: 32 + 20 * n,
                        padding_y: 16 + 15 * n,
                        text_size: 20 + 8 * n,
                    }
                );
            }
        }
    }

    #[test]
    fn test_affirmative_fixed_when_smug() {
        let expected = AffirmativeStyle::Maximal {
            padding_y: 60,
            text_size: 48,
        };
        for n in [0, 3, 7, u32::MAX] {
            assert_eq!(affirmative_style(Stage::Smug, n), expected);
        }
    }

    #[test]
    fn test_affirmative_neutral_when_happy() {
        assert_eq!(affirmative_style(Stage::Happy, 0), AffirmativeStyle::Neutral);
        assert_eq!(affirmative_style(Stage::Happy, 3), AffirmativeStyle::Neutral);
    }

    #[test]
    fn test_affirmative_no_overflow() {
        let style = affirmative_style(Stage::Initial, u32::MAX);
        assert_eq!(
            style,
            AffirmativeStyle::Scaled {
                padding_x: u32::MAX,
                padding_y: u32::MAX,
                text_size: u32::MAX,
            }
        );
    }

    #[test]
    fn test_full_round() {
        let mut interaction = Interaction::new();

        interaction.activate_negative();
        assert_eq!(interaction.stage(), Stage::Begging);
        assert_eq!(interaction.negative_clicks(), 1);
        assert!(interaction.negative_visible());
        assert!(matches!(
            interaction.affirmative_style(),
            AffirmativeStyle::Scaled { padding_x: 52, .. }
        ));

        interaction.activate_negative();
        interaction.activate_negative();
        assert_eq!(interaction.stage(), Stage::Smug);
        assert_eq!(interaction.negative_clicks(), 3);
        assert!(!interaction.negative_visible());
        assert!(matches!(
            interaction.affirmative_style(),
            AffirmativeStyle::Maximal { .. }
        ));

        interaction.activate_affirmative();
        assert_eq!(interaction.stage(), Stage::Happy);
        assert_eq!(interaction.negative_clicks(), 3);
        assert!(interaction.reset_visible());
        assert!(!interaction.negative_visible());

        interaction.reset();
        assert_eq!(interaction, Interaction::new());
        assert!(!interaction.reset_visible());
    }
}
