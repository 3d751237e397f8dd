//! Demo application state

use iced::widget::{column, container, row, text};
use iced::{Element, Length};
use scrub_core::config::TimelineConfig;
use scrub_core::{format_time, Color, Sample, Timeline, TimelineEvent};
use scrub_widgets::{timeline_view, TimelineInput, TimelineState};

/// Total timeline duration in seconds
const DURATION: f64 = 100.0;

/// Width the timeline starts with before the first layout from iced
const INITIAL_WIDTH: f64 = 800.0;

#[derive(Debug, Clone)]
pub enum Message {
    Timeline(TimelineInput),
}

pub struct DemoApp {
    timeline: TimelineState,
    /// Last reported playhead position in time units
    position: f64,
    /// Caption of the last selected sample
    selected: Option<String>,
}

impl DemoApp {
    pub fn new(config: TimelineConfig) -> Self {
        let names = vec!["Video".to_string(), "Audio".to_string(), "Text".to_string()];
        let mut timeline = Timeline::with_config(DURATION, INITIAL_WIDTH, names, config);

        timeline.add_sample(Sample::new(12.0).with_text("intro"));
        timeline.add_sample(Sample::new(20.0).with_text("voice").with_track(1));
        timeline.add_sample(Sample::new(8.0).with_text("title").with_track(2));
        timeline.add_sample(
            Sample::new(25.0)
                .with_text("scene 2")
                .with_color(Color::from_rgb8(96, 96, 160)),
        );
        timeline.add_sample(Sample::new(15.0).with_text("music").with_track(1));

        log::info!(
            "DemoApp: {} samples over {}s",
            timeline.samples().len(),
            timeline.duration()
        );

        Self {
            timeline: TimelineState::new(timeline),
            position: 0.0,
            selected: None,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Timeline(input) => {
                for event in self.timeline.update(input) {
                    match event {
                        TimelineEvent::PositionChanged(position) => self.position = position,
                        TimelineEvent::SelectionChanged(sample) => {
                            log::info!("Selected '{}' on track {}", sample.text, sample.track);
                            self.selected = Some(sample.text);
                        }
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let timeline = timeline_view(&self.timeline, Message::Timeline);

        let playhead_time = self
            .timeline
            .timeline()
            .playhead()
            .time_pos()
            .unwrap_or(0.0);
        let status = row![
            text(format!("Time {}", format_time(playhead_time))),
            text(format!("Pointer {:.0}px", self.position)),
            text(format!(
                "Selected: {}",
                self.selected.as_deref().unwrap_or("none")
            )),
        ]
        .spacing(24);

        container(column![timeline, status].spacing(12))
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
