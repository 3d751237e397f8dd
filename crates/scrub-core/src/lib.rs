//! Scrub Core - timeline geometry and scrub interaction engine
//!
//! This crate holds everything a timeline/scrubber control needs that does not
//! depend on a drawing surface:
//!
//! - **Time ↔ pixel mapping** (`scale`): time-per-pixel ratio from the total
//!   duration and the usable widget width
//! - **Sample layout** (`layout`): pixel span and track row for every sample
//! - **Playhead** (`playhead`): scrub position in pixels and time units
//! - **Selection** (`selection`): hit-testing the pointer against sample spans
//! - **Interaction** (`interaction`): pointer event sequencing
//! - **Draw list** (`draw`): per-frame geometry handed to a renderer
//!
//! The [`Timeline`] type ties these together and is what hosts normally use.
//!
//! # Usage
//!
//! ```ignore
//! use scrub_core::{PointerButton, PointerEvent, Sample, Timeline, TimelineEvent};
//!
//! let mut timeline = Timeline::new(100.0, 440.0, vec!["Video".into(), "Audio".into()]);
//! timeline.add_sample(Sample::new(50.0).with_text("intro"));
//!
//! let mut events: Vec<TimelineEvent> = Vec::new();
//! let response = timeline.handle_pointer(
//!     PointerEvent::Pressed { x: 120.0, button: PointerButton::Primary },
//!     &mut events,
//! );
//! if response.redraw {
//!     let frame = timeline.draw_list(200.0)?;
//!     // hand `frame` to the renderer
//! }
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod events;
pub mod format;
pub mod interaction;
pub mod layout;
pub mod playhead;
pub mod sample;
pub mod scale;
pub mod selection;
pub mod timeline;
pub mod types;

pub use draw::DrawList;
pub use error::{TimelineError, TimelineResult};
pub use events::{EventSink, FnSink, TimelineEvent};
pub use format::format_time;
pub use interaction::{InteractionState, PointerButton, PointerEvent, Response};
pub use layout::{CursorMode, LayoutPass};
pub use sample::{Sample, SampleId, Thumbnail};
pub use scale::Viewport;
pub use timeline::Timeline;
pub use types::{Color, Point, Rect, RulerFont};
