//! Timeline view function
//!
//! ## Usage
//!
//! ```ignore
//! fn view(&self) -> Element<'_, Message> {
//!     let timeline = timeline_view(&self.timeline, Message::Timeline);
//!     column![timeline, /* status line */].into()
//! }
//!
//! fn update(&mut self, message: Message) {
//!     if let Message::Timeline(input) = message {
//!         for event in self.timeline.update(input) {
//!             // react to PositionChanged / SelectionChanged
//!         }
//!     }
//! }
//! ```

use super::canvas::TimelineCanvas;
use super::state::{TimelineInput, TimelineState};
use iced::widget::Canvas;
use iced::{Element, Length};

/// Create a timeline element
///
/// # Arguments
///
/// * `state` - Engine and last draw list
/// * `on_input` - Called with the pointer input of each relevant iced event;
///   pass the result to [`TimelineState::update`]
pub fn timeline_view<'a, Message>(
    state: &'a TimelineState,
    on_input: impl Fn(TimelineInput) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(TimelineCanvas { state, on_input })
        .width(Length::Fill)
        .height(Length::Fixed(state.height()))
        .into()
}
