//! Common types for Scrub
//!
//! Plain geometry and color values shared by the layout, the draw list and
//! the configuration. They carry no toolkit dependency; renderers convert
//! them to their own types.

use serde::{Deserialize, Serialize};

/// RGBA color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
    pub const RED: Color = Color::from_rgb8(255, 0, 0);
    /// Default sample fill (#808000)
    pub const DARK_YELLOW: Color = Color::from_rgb8(128, 128, 0);
    /// Selection highlight, header baseline (#008080)
    pub const DARK_CYAN: Color = Color::from_rgb8(0, 128, 128);

    /// Create an opaque color from 0.0..=1.0 components
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit components
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }
}

/// Point in widget pixel space (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in widget pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center point, used to anchor centered labels
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Font used for ruler and track label text
///
/// Pure pass-through configuration: the engine stores it and hands it to the
/// renderer with every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerFont {
    /// Font family name; renderers fall back to their default when unknown
    pub family: String,
    /// Point size
    pub size: f32,
}

impl Default for RulerFont {
    fn default() -> Self {
        Self {
            family: "Decorative".to_string(),
            size: 7.0,
        }
    }
}
