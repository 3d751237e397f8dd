//! Canvas Program for the timeline
//!
//! Translates iced mouse events into engine [`PointerEvent`]s and paints the
//! last [`DrawList`] of a [`TimelineState`].
//!
//! iced reports window-level cursor events, so entering and leaving the widget
//! is derived from the cursor crossing the canvas bounds. Once a primary press
//! grabbed the timeline, moves and the release are forwarded even when the
//! cursor is outside.

use iced::alignment::{Horizontal, Vertical};
use iced::border;
use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Point, Rectangle, Size, Theme};
use scrub_core::draw::{Label, LabelAlign, Line, RulerTick, SampleShape};
use scrub_core::layout::ThumbnailFit;
use scrub_core::{DrawList, PointerButton, PointerEvent};

use super::state::{TimelineInput, TimelineState};
use crate::theme::{to_iced, SAMPLE_OUTLINE};

/// Pointer tracking kept by iced between events
#[derive(Debug, Clone, Copy, Default)]
pub struct TimelineInteraction {
    /// Cursor was over the canvas at the last event
    pub is_inside: bool,
    /// Primary button went down on the canvas and is still held
    pub is_grabbed: bool,
}

/// Canvas program for the timeline
///
/// `on_input` is called with the pointer input collected from one iced event.
pub struct TimelineCanvas<'a, Message, F>
where
    F: Fn(TimelineInput) -> Message,
{
    pub state: &'a TimelineState,
    pub on_input: F,
}

/// iced mouse button to engine pointer button
pub fn pointer_button(button: mouse::Button) -> PointerButton {
    match button {
        mouse::Button::Left => PointerButton::Primary,
        mouse::Button::Right => PointerButton::Secondary,
        mouse::Button::Middle => PointerButton::Middle,
        mouse::Button::Back => PointerButton::Other(3),
        mouse::Button::Forward => PointerButton::Other(4),
        mouse::Button::Other(code) => PointerButton::Other(code),
    }
}

impl<'a, Message, F> Program<Message> for TimelineCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(TimelineInput) -> Message,
{
    type State = TimelineInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let mut events = Vec::new();

        let inside = cursor.is_over(bounds);
        if inside != interaction.is_inside {
            interaction.is_inside = inside;
            events.push(if inside {
                PointerEvent::Entered
            } else {
                PointerEvent::Left
            });
        }

        let x = cursor.position().map(|p| f64::from(p.x - bounds.x));
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(button)) if inside => {
                if let Some(x) = x {
                    if *button == mouse::Button::Left {
                        interaction.is_grabbed = true;
                    }
                    events.push(PointerEvent::Pressed {
                        x,
                        button: pointer_button(*button),
                    });
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if inside || interaction.is_grabbed => {
                if let Some(x) = x {
                    events.push(PointerEvent::Moved { x });
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(button))
                if inside || interaction.is_grabbed =>
            {
                if *button == mouse::Button::Left {
                    interaction.is_grabbed = false;
                }
                events.push(PointerEvent::Released {
                    button: pointer_button(*button),
                });
            }
            _ => {}
        }

        let resized = f64::from(bounds.width) != self.state.timeline().width();
        if events.is_empty() && !resized {
            return None;
        }
        Some(canvas::Action::publish((self.on_input)(TimelineInput {
            width: bounds.width,
            events,
        })))
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.is_grabbed {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let Some(list) = self.state.frame() else {
            // Degenerate width: keep the configured background only
            frame.fill_rectangle(
                Point::ORIGIN,
                bounds.size(),
                to_iced(self.state.timeline().background_color()),
            );
            return vec![frame.into_geometry()];
        };

        draw_list(&mut frame, list, self.state);
        vec![frame.into_geometry()]
    }
}

/// Paint a draw list in its field order
fn draw_list(frame: &mut Frame, list: &DrawList, state: &TimelineState) {
    frame.fill_rectangle(Point::ORIGIN, frame.size(), to_iced(list.background));

    stroke_line(frame, &list.header_line);

    for tick in &list.ticks {
        match tick {
            RulerTick::Major { line, label, .. } => {
                stroke_line(frame, line);
                draw_label(frame, label, list.font.size);
            }
            RulerTick::Minor { at, color } => {
                frame.fill_rectangle(
                    Point::new(at.x as f32, at.y as f32),
                    Size::new(1.0, 1.0),
                    to_iced(*color),
                );
            }
        }
    }

    for track in &list.tracks {
        draw_label(frame, &track.label, list.font.size);
        stroke_line(frame, &track.line);
    }

    for sample in &list.samples {
        draw_sample(frame, sample, state, list.font.size);
    }

    let marker = &list.playhead.marker;
    let (top, bottom) = marker.line;
    frame.stroke(
        &Path::line(
            Point::new(top.x as f32, top.y as f32),
            Point::new(bottom.x as f32, bottom.y as f32),
        ),
        Stroke::default()
            .with_color(to_iced(list.playhead.fill))
            .with_width(1.0),
    );
    let triangle = Path::new(|b| {
        let [left, right, tip] = marker.triangle;
        b.move_to(Point::new(left.x as f32, left.y as f32));
        b.line_to(Point::new(right.x as f32, right.y as f32));
        b.line_to(Point::new(tip.x as f32, tip.y as f32));
        b.close();
    });
    frame.fill(&triangle, to_iced(list.playhead.fill));
    frame.stroke(
        &triangle,
        Stroke::default()
            .with_color(to_iced(list.playhead.outline))
            .with_width(1.0),
    );
}

fn stroke_line(frame: &mut Frame, line: &Line) {
    frame.stroke(
        &Path::line(
            Point::new(line.from.x as f32, line.from.y as f32),
            Point::new(line.to.x as f32, line.to.y as f32),
        ),
        Stroke::default()
            .with_color(to_iced(line.color))
            .with_width(line.width as f32),
    );
}

fn draw_label(frame: &mut Frame, label: &Label, size: f32) {
    if label.text.is_empty() {
        return;
    }
    let (position, align_x, align_y) = match label.align {
        LabelAlign::TopCenter => (
            Point::new(label.rect.center().x as f32, label.rect.y as f32),
            Horizontal::Center,
            Vertical::Top,
        ),
        LabelAlign::CenterLeft => (
            Point::new(label.rect.x as f32, label.rect.center().y as f32),
            Horizontal::Left,
            Vertical::Center,
        ),
    };
    frame.fill_text(Text {
        content: label.text.clone(),
        position,
        size: size.into(),
        color: to_iced(label.color),
        align_x: align_x.into(),
        align_y: align_y.into(),
        ..Text::default()
    });
}

fn draw_sample(frame: &mut Frame, sample: &SampleShape, state: &TimelineState, font_size: f32) {
    let rect = iced_rect(sample.rect);
    let body = Path::new(|b| {
        b.rounded_rectangle(
            rect.position(),
            rect.size(),
            border::Radius::from(sample.corner_radius as f32),
        );
    });
    frame.fill(&body, to_iced(sample.fill));
    frame.stroke(
        &body,
        Stroke::default().with_color(SAMPLE_OUTLINE).with_width(1.0),
    );

    if let Some(placement) = &sample.thumbnail {
        if let Some(handle) = state.thumbnail(&placement.key) {
            let clip = iced_rect(placement.clip);
            // Clip frame coordinates are relative to the clip origin
            let image_bounds = match placement.fit {
                ThumbnailFit::Natural => Rectangle::new(Point::ORIGIN, clip.size()),
                ThumbnailFit::Cropped { source } => Rectangle::new(
                    Point::new(-(source.x as f32), -(source.y as f32)),
                    Size::new(
                        placement.natural_width as f32,
                        placement.natural_height as f32,
                    ),
                ),
            };
            frame.with_clip(clip, |frame| {
                frame.draw_image(image_bounds, canvas::Image::new(handle.clone()));
            });
        }
    }

    if let Some(caption) = &sample.caption {
        draw_label(frame, caption, font_size);
    }
}

fn iced_rect(rect: scrub_core::Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x as f32, rect.y as f32),
        Size::new(rect.width as f32, rect.height as f32),
    )
}
