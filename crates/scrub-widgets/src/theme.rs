//! Color conversion between the engine and iced

use iced::Color;

/// Outline of sample rectangles
pub const SAMPLE_OUTLINE: Color = Color::from_rgb(0.25, 0.25, 0.25);

/// Engine color to iced color
pub fn to_iced(color: scrub_core::Color) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}
