//! Time ↔ pixel mapping
//!
//! The timeline maps its whole duration onto the usable width, i.e. the widget
//! width minus the left padding (track labels) and the right padding. The scale
//! is time units per pixel and must be recomputed whenever the width changes;
//! nothing here caches it.

use crate::error::{TimelineError, TimelineResult};

/// Default left padding reserved for track labels
pub const DEFAULT_LEFT_PADDING: f64 = 40.0;

/// Default right padding
pub const DEFAULT_RIGHT_PADDING: f64 = 10.0;

/// Horizontal geometry of the widget at one point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Full widget width in pixels
    pub width: f64,
    /// Pixels reserved left of the timeline area
    pub left_padding: f64,
    /// Pixels reserved right of the timeline area
    pub right_padding: f64,
}

impl Viewport {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            left_padding: DEFAULT_LEFT_PADDING,
            right_padding: DEFAULT_RIGHT_PADDING,
        }
    }

    pub fn with_padding(mut self, left: f64, right: f64) -> Self {
        self.left_padding = left;
        self.right_padding = right;
        self
    }

    /// Width left for the timeline between the paddings (may be ≤ 0)
    pub fn usable_width(&self) -> f64 {
        self.width - self.left_padding - self.right_padding
    }

    /// Right edge of the timeline area
    pub fn right_edge(&self) -> f64 {
        self.width - self.right_padding
    }

    /// Scale for the given total duration at this width
    pub fn scale(&self, duration: f64) -> TimelineResult<f64> {
        scale(duration, self.width, self.left_padding, self.right_padding)
    }
}

/// Time units per pixel for `duration` spread over the usable width
///
/// Fails with [`TimelineError::DegenerateGeometry`] when the paddings leave no
/// room, and with [`TimelineError::InvalidDuration`] when the duration is not a
/// positive finite number.
pub fn scale(duration: f64, width: f64, left_padding: f64, right_padding: f64) -> TimelineResult<f64> {
    let usable = width - left_padding - right_padding;
    if !(usable > 0.0) || !usable.is_finite() {
        return Err(TimelineError::DegenerateGeometry {
            width,
            left_padding,
            right_padding,
        });
    }
    if !(duration > 0.0) || !duration.is_finite() {
        return Err(TimelineError::InvalidDuration(duration));
    }
    Ok(duration / usable)
}

/// Convert a pixel offset to time units
#[inline]
pub fn pixel_to_time(px: f64, scale: f64) -> f64 {
    px * scale
}

/// Convert time units to a pixel offset
#[inline]
pub fn time_to_pixel(time: f64, scale: f64) -> f64 {
    time / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_reference_widget() {
        // 440px wide widget with 40/10 padding leaves 390px
        let s = scale(100.0, 440.0, 40.0, 10.0).unwrap();
        assert!((s - 100.0 / 390.0).abs() < 1e-12);
        assert!((s - 0.2564).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip() {
        for &(duration, usable) in &[(100.0, 390.0), (3.5, 12.0), (86400.0, 1920.0), (0.01, 1.0)] {
            let s = scale(duration, usable + 50.0, 40.0, 10.0).unwrap();
            assert!((s - duration / usable).abs() < 1e-12);
            for &x in &[-40.0, 0.0, 1.0, 123.456, usable] {
                let back = time_to_pixel(pixel_to_time(x, s), s);
                assert!((back - x).abs() < 1e-9, "{} -> {}", x, back);
            }
        }
    }

    #[test]
    fn test_degenerate_width_rejected() {
        assert!(matches!(
            scale(100.0, 50.0, 40.0, 10.0),
            Err(TimelineError::DegenerateGeometry { .. })
        ));
        assert!(matches!(
            scale(100.0, 20.0, 40.0, 10.0),
            Err(TimelineError::DegenerateGeometry { .. })
        ));
    }

    #[test]
    fn test_invalid_duration_rejected() {
        assert!(matches!(scale(0.0, 440.0, 40.0, 10.0), Err(TimelineError::InvalidDuration(_))));
        assert!(matches!(scale(-1.0, 440.0, 40.0, 10.0), Err(TimelineError::InvalidDuration(_))));
        assert!(matches!(
            scale(f64::INFINITY, 440.0, 40.0, 10.0),
            Err(TimelineError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_viewport_helpers() {
        let vp = Viewport::new(440.0);
        assert_eq!(vp.usable_width(), 390.0);
        assert_eq!(vp.right_edge(), 430.0);
        assert!((vp.scale(100.0).unwrap() - 100.0 / 390.0).abs() < 1e-12);

        let narrow = Viewport::new(440.0).with_padding(200.0, 240.0);
        assert!(narrow.scale(100.0).is_err());
    }
}
