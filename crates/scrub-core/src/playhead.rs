//! Playhead (scrub position)
//!
//! The stored position is the pointer x remapped from `[0, width]` onto
//! `[-left_padding, width - right_padding]`. It is deliberately *not* clamped to
//! the visible timeline area: values left of the padding zone come out
//! negative so hosts can detect "before start". Clamping happens only when the
//! marker is drawn.

use crate::events::{EventSink, TimelineEvent};
use crate::layout::HEADER_HEIGHT;
use crate::scale::{pixel_to_time, time_to_pixel, Viewport};
use crate::types::Point;

/// Half width of the marker triangle
pub const MARKER_HALF_WIDTH: f64 = 5.0;

/// Top of the marker triangle
pub const MARKER_TOP: f64 = 20.0;

/// Remap a raw pointer x from `[0, width]` to `[-left_padding, width - right_padding]`
///
/// Linear inside the widget; saturates at the two endpoints outside it, the way
/// a table lookup does.
pub fn remap_pointer_x(x: f64, viewport: &Viewport) -> f64 {
    let low = -viewport.left_padding;
    let high = viewport.right_edge();
    if x <= 0.0 {
        low
    } else if x >= viewport.width {
        high
    } else {
        low + (x / viewport.width) * (high - low)
    }
}

/// Where the renderer draws the playhead
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayheadMarker {
    /// Marker x in widget pixels (after render-time clamping)
    pub x: f64,
    /// Triangle in the ruler: left, right, tip
    pub triangle: [Point; 3],
    /// Vertical line from the header baseline down to the widget bottom
    pub line: (Point, Point),
}

impl PlayheadMarker {
    pub fn at(x: f64, height: f64) -> Self {
        Self {
            x,
            triangle: [
                Point::new(x - MARKER_HALF_WIDTH, MARKER_TOP),
                Point::new(x + MARKER_HALF_WIDTH, MARKER_TOP),
                Point::new(x, HEADER_HEIGHT),
            ],
            line: (Point::new(x, HEADER_HEIGHT), Point::new(x, height)),
        }
    }
}

/// Scrub position state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playhead {
    position_px: Option<f64>,
    time_pos: Option<f64>,
    is_dragging: bool,
}

impl Playhead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remapped pointer position, `None` until the first press
    pub fn position_px(&self) -> Option<f64> {
        self.position_px
    }

    /// Position in time units (`position_px * scale` at update time)
    pub fn time_pos(&self) -> Option<f64> {
        self.time_pos
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn begin(&mut self) {
        self.is_dragging = true;
    }

    pub fn end(&mut self) {
        self.is_dragging = false;
    }

    /// Move the playhead to a raw pointer x and emit `PositionChanged`
    ///
    /// Returns the remapped position.
    pub fn set_from_pointer(
        &mut self,
        x: f64,
        viewport: &Viewport,
        scale: f64,
        sink: &mut dyn EventSink,
    ) -> f64 {
        let position = remap_pointer_x(x, viewport);
        self.position_px = Some(position);
        self.time_pos = Some(pixel_to_time(position, scale));
        sink.emit(TimelineEvent::PositionChanged(position));
        position
    }

    /// Marker x with render-time clamping applied
    ///
    /// - no position yet, or a negative one: left padding edge
    /// - beyond the usable width: pinned to the right edge
    /// - otherwise the stored time converted with the *current* scale, so the
    ///   marker keeps its time when the widget is resized
    pub fn marker_x(&self, viewport: &Viewport, scale: f64) -> f64 {
        match (self.position_px, self.time_pos) {
            (Some(px), Some(time)) if px >= 0.0 => {
                if px <= viewport.usable_width() {
                    time_to_pixel(time, scale) + viewport.left_padding
                } else {
                    viewport.right_edge()
                }
            }
            _ => viewport.left_padding,
        }
    }

    pub fn marker(&self, viewport: &Viewport, scale: f64, height: f64) -> PlayheadMarker {
        PlayheadMarker::at(self.marker_x(viewport, scale), height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(440.0)
    }

    #[test]
    fn test_remap_endpoints_and_interior() {
        let vp = vp();
        assert_eq!(remap_pointer_x(0.0, &vp), -40.0);
        assert_eq!(remap_pointer_x(440.0, &vp), 430.0);
        // midpoint of [-40, 430]
        assert!((remap_pointer_x(220.0, &vp) - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_remap_outside_widget() {
        let vp = vp();
        assert_eq!(remap_pointer_x(-25.0, &vp), -40.0);
        assert_eq!(remap_pointer_x(900.0, &vp), 430.0);
    }

    #[test]
    fn test_set_from_pointer_emits() {
        let vp = vp();
        let scale = vp.scale(100.0).unwrap();
        let mut playhead = Playhead::new();
        let mut events: Vec<TimelineEvent> = Vec::new();

        let pos = playhead.set_from_pointer(220.0, &vp, scale, &mut events);
        assert_eq!(playhead.position_px(), Some(pos));
        assert!((playhead.time_pos().unwrap() - pos * scale).abs() < 1e-12);
        assert_eq!(events, vec![TimelineEvent::PositionChanged(pos)]);
    }

    #[test]
    fn test_out_of_range_position_stored_raw() {
        let vp = vp();
        let scale = vp.scale(100.0).unwrap();
        let mut playhead = Playhead::new();
        let mut events: Vec<TimelineEvent> = Vec::new();

        let pos = playhead.set_from_pointer(-100.0, &vp, scale, &mut events);
        assert!(pos < 0.0);
        assert_eq!(events, vec![TimelineEvent::PositionChanged(-40.0)]);
        // Drawn at the left edge, stored negative
        assert_eq!(playhead.marker_x(&vp, scale), 40.0);
        assert_eq!(playhead.position_px(), Some(-40.0));

        let pos = playhead.set_from_pointer(1000.0, &vp, scale, &mut events);
        assert!(pos > vp.usable_width());
        assert_eq!(playhead.marker_x(&vp, scale), vp.right_edge());
    }

    #[test]
    fn test_marker_defaults_to_left_padding() {
        let vp = vp();
        let playhead = Playhead::new();
        let marker = playhead.marker(&vp, 0.25, 200.0);
        assert_eq!(marker.x, 40.0);
        assert_eq!(marker.triangle[0], Point::new(35.0, 20.0));
        assert_eq!(marker.triangle[1], Point::new(45.0, 20.0));
        assert_eq!(marker.triangle[2], Point::new(40.0, 40.0));
        assert_eq!(marker.line, (Point::new(40.0, 40.0), Point::new(40.0, 200.0)));
    }

    #[test]
    fn test_marker_keeps_time_on_resize() {
        let narrow = vp();
        let scale = narrow.scale(100.0).unwrap();
        let mut playhead = Playhead::new();
        playhead.set_from_pointer(220.0, &narrow, scale, &mut ());
        let time = playhead.time_pos().unwrap();

        let wide = Viewport::new(830.0);
        let wide_scale = wide.scale(100.0).unwrap();
        let x = playhead.marker_x(&wide, wide_scale);
        assert!((x - (time / wide_scale + 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_drag_flag() {
        let mut playhead = Playhead::new();
        assert!(!playhead.is_dragging());
        playhead.begin();
        assert!(playhead.is_dragging());
        playhead.end();
        assert!(!playhead.is_dragging());
    }
}
