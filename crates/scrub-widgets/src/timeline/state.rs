//! Timeline widget state
//!
//! Pure data owned by the application: the engine, the last draw list and the
//! image handles for sample thumbnails.

use std::collections::HashMap;

use iced::widget::image;
use scrub_core::{DrawList, PointerEvent, Timeline, TimelineEvent};

/// Default canvas height in pixels
pub const DEFAULT_TIMELINE_HEIGHT: f32 = 200.0;

/// Pointer input collected by the canvas during one iced event
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineInput {
    /// Canvas width in pixels when the input was collected
    pub width: f32,
    /// Engine events in delivery order; empty for a pure resize
    pub events: Vec<PointerEvent>,
}

/// State for the timeline canvas
#[derive(Debug, Clone)]
pub struct TimelineState {
    timeline: Timeline,
    height: f32,
    frame: Option<DrawList>,
    thumbnails: HashMap<String, image::Handle>,
}

impl TimelineState {
    pub fn new(timeline: Timeline) -> Self {
        Self::with_height(timeline, DEFAULT_TIMELINE_HEIGHT)
    }

    pub fn with_height(timeline: Timeline, height: f32) -> Self {
        let mut state = Self {
            timeline,
            height,
            frame: None,
            thumbnails: HashMap::new(),
        };
        state.refresh();
        state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Mutable engine access; call [`TimelineState::refresh`] after editing
    pub fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Last draw list, `None` while the geometry is degenerate
    pub fn frame(&self) -> Option<&DrawList> {
        self.frame.as_ref()
    }

    /// Register the image drawn for thumbnails with this key
    pub fn set_thumbnail(&mut self, key: impl Into<String>, handle: image::Handle) {
        self.thumbnails.insert(key.into(), handle);
    }

    pub fn thumbnail(&self, key: &str) -> Option<&image::Handle> {
        self.thumbnails.get(key)
    }

    /// Run canvas input through the engine
    ///
    /// Returns the timeline events in the order they were emitted. The draw
    /// list is rebuilt when the engine asks for a redraw or the width changed.
    pub fn update(&mut self, input: TimelineInput) -> Vec<TimelineEvent> {
        let width = f64::from(input.width);
        let resized = width != self.timeline.width();
        self.timeline.set_width(width);

        let mut events: Vec<TimelineEvent> = Vec::new();
        let mut redraw = resized;
        for event in input.events {
            redraw |= self.timeline.handle_pointer(event, &mut events).redraw;
        }

        if redraw {
            self.refresh();
        }
        events
    }

    /// Rebuild the draw list from the engine
    pub fn refresh(&mut self) {
        self.frame = match self.timeline.draw_list(f64::from(self.height)) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::warn!("TimelineState::refresh: {}", e);
                None
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_core::{PointerButton, Sample};

    fn state() -> TimelineState {
        let mut timeline = Timeline::new(100.0, 440.0, vec!["Video".to_string()]);
        timeline.add_sample(Sample::new(20.0).with_text("A"));
        TimelineState::new(timeline)
    }

    #[test]
    fn test_new_builds_frame() {
        let state = state();
        let frame = state.frame().unwrap();
        assert_eq!(frame.width, 440.0);
        assert_eq!(frame.height, f64::from(DEFAULT_TIMELINE_HEIGHT));
        assert_eq!(frame.samples.len(), 1);
    }

    #[test]
    fn test_resize_rebuilds_frame() {
        let mut state = state();
        let events = state.update(TimelineInput {
            width: 830.0,
            events: Vec::new(),
        });
        assert!(events.is_empty());
        assert_eq!(state.frame().unwrap().width, 830.0);
    }

    #[test]
    fn test_press_reports_position_and_selection() {
        let mut state = state();
        // Remaps to x=50, inside sample A
        let x = (50.0 + 40.0) * 440.0 / 470.0;
        let events = state.update(TimelineInput {
            width: 440.0,
            events: vec![
                PointerEvent::Entered,
                PointerEvent::Pressed {
                    x,
                    button: PointerButton::Primary,
                },
            ],
        });

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], TimelineEvent::PositionChanged(_)));
        assert!(matches!(&events[1], TimelineEvent::SelectionChanged(s) if s.text == "A"));
        assert!((state.frame().unwrap().playhead.marker.x - (50.0 + 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_width_drops_frame() {
        let mut state = state();
        let _ = state.update(TimelineInput {
            width: 30.0,
            events: Vec::new(),
        });
        assert!(state.frame().is_none());

        let _ = state.update(TimelineInput {
            width: 440.0,
            events: Vec::new(),
        });
        assert!(state.frame().is_some());
    }
}
