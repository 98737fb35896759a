//! Utility functions

use iced::Color;

/// Detect image format from magic bytes
///
/// Returns `None` for anything that is not a known image, e.g. an HTML
/// error page served with a 200.
pub fn detect_image_format(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() < 8 {
        return None;
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("png");
    }

    // JPEG: FF D8 FF
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("jpg");
    }

    // GIF: 47 49 46 38
    if bytes.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
        return Some("gif");
    }

    // WebP: 52 49 46 46 ... 57 45 42 50
    if bytes.len() >= 12 && bytes.starts_with(&[0x52, 0x49, 0x46, 0x46]) && &bytes[8..12] == b"WEBP"
    {
        return Some("webp");
    }

    None
}

/// Linear interpolation between two colors, `t` clamped to [0, 1]
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_formats() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        let jpg = [0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F'];
        let webp = *b"RIFF\x00\x00\x00\x00WEBPVP8 ";
        assert_eq!(detect_image_format(&png), Some("png"));
        assert_eq!(detect_image_format(&jpg), Some("jpg"));
        assert_eq!(detect_image_format(&webp), Some("webp"));
        assert_eq!(detect_image_format(b"GIF89a\x01\x00"), Some("gif"));
    }

    #[test]
    fn test_detect_rejects_non_images() {
        assert_eq!(detect_image_format(b"<!DOCTYPE html>"), None);
        assert_eq!(detect_image_format(&[0xFF, 0xD8]), None);
        assert_eq!(detect_image_format(&[]), None);
    }

    #[test]
    fn test_lerp_color_endpoints() {
        let from = Color::from_rgb(0.0, 0.0, 0.0);
        let to = Color::from_rgb(1.0, 0.5, 0.25);
        assert_eq!(lerp_color(from, to, 0.0), from);
        assert_eq!(lerp_color(from, to, 1.0), to);
        assert_eq!(lerp_color(from, to, 2.0), to);

        let mid = lerp_color(from, to, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.25).abs() < 1e-6);
    }
}
