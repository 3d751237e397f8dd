//! Pointer interaction state machine
//!
//! Turns raw pointer events into playhead and selection updates:
//!
//! ```text
//!            enter                press(primary)
//!   Idle  ---------->  Inside  -------------------> Dragging
//!         <----------          <-------------------
//!            leave                release(primary)
//! ```
//!
//! - `Moved` always records the hover position; only while dragging does it
//!   move the playhead and re-run the selection hit test.
//! - Leaving the widget during a drag keeps the drag alive (the host keeps
//!   delivering moves to the grabbing widget); the release then lands in `Idle`.
//! - Buttons other than the primary one are ignored.
//!
//! Within one event the playhead is updated before the selection is checked,
//! and both happen before the redraw request is returned, so a frame never
//! shows a new playhead with a stale highlight.

use crate::events::EventSink;
use crate::playhead::{remap_pointer_x, Playhead};
use crate::sample::Sample;
use crate::scale::Viewport;
use crate::selection::Selection;
use crate::types::Color;

/// Pointer buttons the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Raw pointer event, x in widget pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Entered,
    Left,
    Pressed { x: f64, button: PointerButton },
    Moved { x: f64 },
    Released { button: PointerButton },
}

/// Interaction state derived from the inside and drag flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Inside,
    Dragging,
}

/// What the host should do after an event
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// Request a repaint (fire-and-forget)
    pub redraw: bool,
}

impl Response {
    pub const NONE: Response = Response { redraw: false };
    pub const REDRAW: Response = Response { redraw: true };
}

/// Everything a pointer event may touch
pub struct ScrubTarget<'a> {
    pub playhead: &'a mut Playhead,
    pub selection: &'a mut Selection,
    pub samples: &'a mut [Sample],
    pub viewport: Viewport,
    /// Current scale, `None` when the geometry is degenerate
    pub scale: Option<f64>,
    pub highlight: Color,
}

/// Pointer tracking state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interaction {
    is_pointer_inside: bool,
    hover_px: Option<f64>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.is_pointer_inside
    }

    /// Last remapped pointer position seen by a move, dragging or not
    pub fn hover_px(&self) -> Option<f64> {
        self.hover_px
    }

    pub fn state(&self, playhead: &Playhead) -> InteractionState {
        if playhead.is_dragging() {
            InteractionState::Dragging
        } else if self.is_pointer_inside {
            InteractionState::Inside
        } else {
            InteractionState::Idle
        }
    }

    /// Handle one pointer event to completion
    pub fn handle(
        &mut self,
        event: PointerEvent,
        mut target: ScrubTarget<'_>,
        sink: &mut dyn EventSink,
    ) -> Response {
        match event {
            PointerEvent::Entered => {
                self.is_pointer_inside = true;
                Response::NONE
            }
            PointerEvent::Left => {
                self.is_pointer_inside = false;
                Response::REDRAW
            }
            PointerEvent::Pressed {
                x,
                button: PointerButton::Primary,
            } => {
                scrub(x, &mut target, sink);
                target.playhead.begin();
                Response::REDRAW
            }
            PointerEvent::Moved { x } => {
                self.hover_px = Some(remap_pointer_x(x, &target.viewport));
                if target.playhead.is_dragging() {
                    scrub(x, &mut target, sink);
                }
                Response::REDRAW
            }
            PointerEvent::Released {
                button: PointerButton::Primary,
            } => {
                target.playhead.end();
                Response::NONE
            }
            PointerEvent::Pressed { .. } | PointerEvent::Released { .. } => Response::NONE,
        }
    }
}

/// Move the playhead, then re-check the selection at the new position
fn scrub(x: f64, target: &mut ScrubTarget<'_>, sink: &mut dyn EventSink) {
    let Some(scale) = target.scale else {
        log::debug!(
            "scrub: ignoring pointer at x={:.1}, no valid scale for width {:.1}",
            x,
            target.viewport.width
        );
        return;
    };
    let position = target
        .playhead
        .set_from_pointer(x, &target.viewport, scale, sink);
    target.selection.check_selection(
        position,
        target.samples,
        &target.viewport,
        target.highlight,
        sink,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TimelineEvent;
    use crate::layout::{layout, CursorMode, LayoutParams};

    struct Fixture {
        interaction: Interaction,
        playhead: Playhead,
        selection: Selection,
        samples: Vec<Sample>,
        viewport: Viewport,
        scale: Option<f64>,
        events: Vec<TimelineEvent>,
    }

    impl Fixture {
        fn new() -> Self {
            let viewport = Viewport::new(440.0);
            let scale = viewport.scale(100.0).ok();
            let mut samples = vec![Sample::new(20.0), Sample::new(30.0).with_track(1)];
            let params = LayoutParams {
                scale: scale.unwrap(),
                left_padding: viewport.left_padding,
                track_height: 20.0,
                cursor_mode: CursorMode::Shared,
            };
            layout(&mut samples, &params).unwrap();
            Self {
                interaction: Interaction::new(),
                playhead: Playhead::new(),
                selection: Selection::new(),
                samples,
                viewport,
                scale,
                events: Vec::new(),
            }
        }

        fn send(&mut self, event: PointerEvent) -> Response {
            let target = ScrubTarget {
                playhead: &mut self.playhead,
                selection: &mut self.selection,
                samples: &mut self.samples,
                viewport: self.viewport,
                scale: self.scale,
                highlight: Color::DARK_CYAN,
            };
            self.interaction.handle(event, target, &mut self.events)
        }

        fn state(&self) -> InteractionState {
            self.interaction.state(&self.playhead)
        }

        fn positions(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, TimelineEvent::PositionChanged(_)))
                .count()
        }
    }

    fn press(x: f64) -> PointerEvent {
        PointerEvent::Pressed {
            x,
            button: PointerButton::Primary,
        }
    }

    fn release() -> PointerEvent {
        PointerEvent::Released {
            button: PointerButton::Primary,
        }
    }

    #[test]
    fn test_enter_press_release_leave() {
        let mut f = Fixture::new();
        assert_eq!(f.state(), InteractionState::Idle);

        assert_eq!(f.send(PointerEvent::Entered), Response::NONE);
        assert_eq!(f.state(), InteractionState::Inside);

        assert_eq!(f.send(press(100.0)), Response::REDRAW);
        assert_eq!(f.state(), InteractionState::Dragging);

        assert_eq!(f.send(release()), Response::NONE);
        assert_eq!(f.state(), InteractionState::Inside);

        assert_eq!(f.send(PointerEvent::Left), Response::REDRAW);
        assert_eq!(f.state(), InteractionState::Idle);
    }

    #[test]
    fn test_move_without_drag_only_hovers() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Entered);
        assert_eq!(f.send(PointerEvent::Moved { x: 220.0 }), Response::REDRAW);

        assert!((f.interaction.hover_px().unwrap() - 195.0).abs() < 1e-9);
        assert_eq!(f.playhead.position_px(), None);
        assert!(f.events.is_empty());
    }

    #[test]
    fn test_drag_emits_every_update() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Entered);
        f.send(press(50.0));
        f.send(PointerEvent::Moved { x: 60.0 });
        f.send(PointerEvent::Moved { x: 70.0 });
        f.send(release());
        f.send(PointerEvent::Moved { x: 80.0 });

        assert_eq!(f.positions(), 3);
    }

    #[test]
    fn test_drag_outside_widget_reports_raw_position() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Entered);
        f.send(press(100.0));
        f.send(PointerEvent::Left);
        // Still dragging after leaving
        assert_eq!(f.state(), InteractionState::Dragging);

        f.send(PointerEvent::Moved { x: -30.0 });
        assert_eq!(f.events.last(), Some(&TimelineEvent::PositionChanged(-40.0)));

        f.send(PointerEvent::Moved { x: 600.0 });
        assert_eq!(f.events.last(), Some(&TimelineEvent::PositionChanged(430.0)));
        assert!(f.playhead.position_px().unwrap() > f.viewport.usable_width());

        f.send(release());
        assert_eq!(f.state(), InteractionState::Idle);
    }

    #[test]
    fn test_playhead_before_selection() {
        let mut f = Fixture::new();
        // Remapped x=50 hits the first sample
        let x = (50.0 + 40.0) * 440.0 / 470.0;
        f.send(press(x));

        assert!(matches!(f.events[0], TimelineEvent::PositionChanged(_)));
        assert!(matches!(f.events[1], TimelineEvent::SelectionChanged(_)));
        assert_eq!(f.events.len(), 2);
        assert_eq!(f.samples[0].color, Color::DARK_CYAN);
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut f = Fixture::new();
        f.send(PointerEvent::Entered);
        let r = f.send(PointerEvent::Pressed {
            x: 100.0,
            button: PointerButton::Secondary,
        });
        assert_eq!(r, Response::NONE);
        assert_eq!(f.state(), InteractionState::Inside);
        assert!(f.events.is_empty());

        f.send(press(100.0));
        f.send(PointerEvent::Released {
            button: PointerButton::Middle,
        });
        assert_eq!(f.state(), InteractionState::Dragging);
    }

    #[test]
    fn test_degenerate_scale_does_not_fail() {
        let mut f = Fixture::new();
        f.scale = None;
        assert_eq!(f.send(press(100.0)), Response::REDRAW);
        assert_eq!(f.state(), InteractionState::Dragging);
        assert!(f.events.is_empty());
        assert_eq!(f.playhead.position_px(), None);
    }
}
