//! Theme system
//! Soft pastel palette: one background per stage, white card, pink accents

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::features::{BackgroundTheme, Stage};

// ============================================================================
// Color Palette
// ============================================================================

// Stage backgrounds
mod stage_bg {
    use super::*;
    pub const PINK: Color = color!(0xfdf2f8);
    pub const ORANGE: Color = color!(0xfff7ed);
    pub const BLUE: Color = color!(0xeff6ff);
    pub const PURPLE: Color = color!(0xfaf5ff);
    pub const YELLOW: Color = color!(0xfefce8);
}

pub const PINK_200: Color = color!(0xfbcfe8);
pub const PINK_300: Color = color!(0xf9a8d4);
pub const PINK_400: Color = color!(0xf472b6);
pub const PINK_500: Color = color!(0xec4899);
pub const PINK_600: Color = color!(0xdb2777);

pub const YELLOW_300: Color = color!(0xfde047);
pub const BLUE_300: Color = color!(0x93c5fd);
pub const PURPLE_300: Color = color!(0xd8b4fe);
pub const PURPLE_700: Color = color!(0x7e22ce);

pub const GREEN_400: Color = color!(0x4ade80);
pub const GREEN_500: Color = color!(0x22c55e);

pub const GRAY_200: Color = color!(0xe5e7eb);
pub const GRAY_300: Color = color!(0xd1d5db);
pub const GRAY_500: Color = color!(0x6b7280);
pub const GRAY_800: Color = color!(0x1f2937);

/// Window background for a stage theme
pub fn stage_background(theme: BackgroundTheme) -> Color {
    match theme {
        BackgroundTheme::Pink => stage_bg::PINK,
        BackgroundTheme::Orange => stage_bg::ORANGE,
        BackgroundTheme::Blue => stage_bg::BLUE,
        BackgroundTheme::Purple => stage_bg::PURPLE,
        BackgroundTheme::Yellow => stage_bg::YELLOW,
    }
}

/// Message color: pink when happy, purple when smug
pub fn message_color(stage: Stage) -> Color {
    match stage {
        Stage::Happy => PINK_600,
        Stage::Smug => PURPLE_700,
        _ => GRAY_800,
    }
}

/// Color with its alpha multiplied by `factor`
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-window background
pub fn backdrop(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Frosted white card holding the dog
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.9))),
        border: Border {
            radius: 40.0.into(),
            width: 4.0,
            color: PINK_200,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 25.0),
            blur_radius: 50.0,
        },
        ..Default::default()
    }
}

/// Rounded white frame around the photo
pub fn photo_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: 24.0.into(),
            width: 4.0,
            color: Color::WHITE,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 10.0),
            blur_radius: 15.0,
        },
        ..Default::default()
    }
}

/// Shown while the photo is loading or failed to load
pub fn photo_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(stage_bg::PINK)),
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pink wash over the photo once the dog is happy
pub fn happy_tint(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(faded(PINK_500, 0.2))),
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

fn pill(background: Color, text_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: 9999.0.into(),
            ..Default::default()
        },
        shadow,
        ..Default::default()
    }
}

fn shadow_lg() -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
        offset: Vector::new(0.0, 10.0),
        blur_radius: 15.0,
    }
}

fn shadow_md() -> Shadow {
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 6.0,
    }
}

/// Green "yes" button
pub fn affirmative_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = pill(GREEN_400, Color::WHITE, shadow_lg());

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(GREEN_500)),
            ..base
        },
        _ => base,
    }
}

/// Pink "yes" button after the dog got its milk tea
pub fn celebration_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = pill(PINK_500, Color::WHITE, shadow_lg());

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(PINK_600)),
            ..base
        },
        _ => base,
    }
}

/// Gray "no" button
pub fn negative_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = pill(GRAY_200, GRAY_500, shadow_md());

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(GRAY_300)),
            ..base
        },
        _ => base,
    }
}

/// Underlined-looking text link for starting over
pub fn reset_link(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: PINK_400,
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            text_color: PINK_600,
            ..base
        },
        _ => base,
    }
}
