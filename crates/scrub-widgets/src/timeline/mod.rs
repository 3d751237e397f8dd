//! Timeline widget
//!
//! - **State** (`TimelineState`): engine, cached draw list, thumbnail images
//! - **View function** (`timeline_view`): state + callback to `Element<Message>`
//! - **Canvas Program** (`TimelineCanvas`): event translation and painting

mod canvas;
mod state;
mod view;

pub use canvas::{pointer_button, TimelineCanvas, TimelineInteraction};
pub use state::{TimelineInput, TimelineState, DEFAULT_TIMELINE_HEIGHT};
pub use view::timeline_view;
