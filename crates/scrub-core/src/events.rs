//! Notifications emitted to the host
//!
//! Handlers receive an [`EventSink`] and push events into it synchronously,
//! inside the pointer-event handling call. Firing rules:
//!
//! - `PositionChanged` on every playhead update (press, and every move while
//!   dragging)
//! - `SelectionChanged` only when the hit sample differs from the previously
//!   selected one

use crossbeam::channel::Sender;

use crate::sample::Sample;

/// Event emitted by the timeline
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEvent {
    /// Playhead moved; remapped pointer position in pixels (unclamped)
    PositionChanged(f64),
    /// A different sample is now selected (snapshot at selection time)
    SelectionChanged(Sample),
}

/// Receiver of timeline events
pub trait EventSink {
    fn emit(&mut self, event: TimelineEvent);
}

/// Collect events for the caller to drain
impl EventSink for Vec<TimelineEvent> {
    fn emit(&mut self, event: TimelineEvent) {
        self.push(event);
    }
}

/// Discard events
impl EventSink for () {
    fn emit(&mut self, _event: TimelineEvent) {}
}

/// Forward events over a channel
///
/// A disconnected receiver is not an error for the timeline; the event is dropped.
impl EventSink for Sender<TimelineEvent> {
    fn emit(&mut self, event: TimelineEvent) {
        if let Err(e) = self.send(event) {
            log::debug!("EventSink: receiver gone, dropping {:?}", e.into_inner());
        }
    }
}

/// Adapter turning a closure into an [`EventSink`]
///
/// ```ignore
/// let mut sink = FnSink(|event| println!("{:?}", event));
/// timeline.handle_pointer(event, &mut sink);
/// ```
pub struct FnSink<F>(pub F)
where
    F: FnMut(TimelineEvent);

impl<F> EventSink for FnSink<F>
where
    F: FnMut(TimelineEvent),
{
    fn emit(&mut self, event: TimelineEvent) {
        (self.0)(event)
    }
}
