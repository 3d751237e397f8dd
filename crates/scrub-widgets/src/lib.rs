//! iced widgets for the scrub timeline engine
//!
//! `scrub-core` computes geometry and interaction; this crate is the host side
//! of that boundary for iced 0.14 applications.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State struct** (`TimelineState`): owns the engine and the last draw list
//! - **View function** (`timeline_view`): takes state + callback, returns `Element<Message>`
//! - **Canvas Program** (`TimelineCanvas`): translates iced mouse events into
//!   engine pointer events and paints the draw list
//!
//! The canvas cannot mutate application state, so pointer input travels as a
//! message: the canvas publishes a [`TimelineInput`], the application passes it
//! to [`TimelineState::update`] and receives the resulting timeline events.

pub mod theme;
pub mod timeline;

pub use theme::to_iced;
pub use timeline::{
    timeline_view, TimelineCanvas, TimelineInput, TimelineInteraction, TimelineState,
    DEFAULT_TIMELINE_HEIGHT,
};
