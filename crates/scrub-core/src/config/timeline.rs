//! Timeline appearance and geometry settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::io::{load_config, save_config};
use crate::error::TimelineResult;
use crate::layout::{CursorMode, DEFAULT_TRACK_HEIGHT};
use crate::scale::{Viewport, DEFAULT_LEFT_PADDING, DEFAULT_RIGHT_PADDING};
use crate::types::{Color, RulerFont};

/// Timeline configuration
///
/// Every field has a default, so partial YAML files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Height of one track row in pixels
    /// Default: 20
    pub track_height: f64,

    /// Pixels reserved for track labels left of the timeline area
    /// Hit-testing and pointer remapping use the same value.
    /// Default: 40
    pub left_padding: f64,

    /// Pixels kept free right of the timeline area
    /// Default: 10
    pub right_padding: f64,

    /// Shared cursor (all tracks advance together) or one cursor per track
    /// Default: shared
    pub cursor_mode: CursorMode,

    /// Distance between ruler ticks in pixels, at least 1
    /// Default: 30
    pub tick_spacing: f64,

    /// Every n-th tick is a labelled major tick
    /// Default: 3
    pub major_tick_every: usize,

    /// Corner radius of sample rectangles
    /// Default: 10
    pub corner_radius: f64,

    pub colors: ColorConfig,

    /// Font for ruler and track labels
    pub font: RulerFont,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            track_height: DEFAULT_TRACK_HEIGHT,
            left_padding: DEFAULT_LEFT_PADDING,
            right_padding: DEFAULT_RIGHT_PADDING,
            cursor_mode: CursorMode::Shared,
            tick_spacing: 30.0,
            major_tick_every: 3,
            corner_radius: 10.0,
            colors: ColorConfig::default(),
            font: RulerFont::default(),
        }
    }
}

impl TimelineConfig {
    /// Viewport for a widget of the given width with these paddings
    pub fn viewport(&self, width: f64) -> Viewport {
        Viewport::new(width).with_padding(self.left_padding, self.right_padding)
    }

    /// Load from YAML, defaults when the file is missing or invalid
    pub fn load(path: &Path) -> Self {
        load_config(path)
    }

    pub fn save(&self, path: &Path) -> TimelineResult<()> {
        save_config(self, path)?;
        Ok(())
    }
}

/// Timeline colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Widget background
    pub background: Color,
    /// Ruler ticks, labels and track lines
    pub text: Color,
    /// Header baseline under the ruler
    pub accent: Color,
    /// Fill of the sample under the selection pointer
    pub highlight: Color,
    /// Playhead line and marker fill
    pub playhead: Color,
    /// Playhead marker outline
    pub marker_outline: Color,
    /// Sample captions
    pub caption: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(60, 63, 65),
            text: Color::from_rgb8(187, 187, 187),
            accent: Color::DARK_CYAN,
            highlight: Color::DARK_CYAN,
            playhead: Color::RED,
            marker_outline: Color::BLACK,
            caption: Color::BLACK,
        }
    }
}
