//! Timeline - owner of samples, playhead and selection
//!
//! `Timeline` holds the state a timeline widget needs between frames and
//! exposes the operations a host calls: pointer handling, layout, draw list
//! construction and the queries (duration, selected sample, colors, font).
//!
//! Layout is cached and recomputed lazily when the sample list or the width
//! changes. Sample spans are therefore valid only after the most recent
//! layout pass; pointer handling and [`Timeline::draw_list`] refresh it first.

use crate::config::TimelineConfig;
use crate::draw::{self, DrawList};
use crate::error::TimelineResult;
use crate::events::EventSink;
use crate::interaction::{Interaction, InteractionState, PointerEvent, Response, ScrubTarget};
use crate::layout::{self, LayoutParams, LayoutPass};
use crate::playhead::Playhead;
use crate::sample::{Sample, SampleId};
use crate::scale::Viewport;
use crate::selection::Selection;
use crate::types::{Color, RulerFont};

/// Embeddable timeline/scrubber state
#[derive(Debug, Clone)]
pub struct Timeline {
    duration: f64,
    width: f64,
    track_names: Vec<String>,
    config: TimelineConfig,
    samples: Vec<Sample>,
    playhead: Playhead,
    selection: Selection,
    interaction: Interaction,
    layout: Option<LayoutPass>,
    layout_dirty: bool,
    /// False while the width leaves no room for a scale; logged on change only
    geometry_valid: bool,
}

impl Timeline {
    /// Create a timeline with the default configuration
    ///
    /// # Arguments
    /// * `duration` - Total duration in time units
    /// * `length` - Initial widget width in pixels
    /// * `track_names` - Display names, index = track
    pub fn new(duration: f64, length: f64, track_names: Vec<String>) -> Self {
        Self::with_config(duration, length, track_names, TimelineConfig::default())
    }

    pub fn with_config(
        duration: f64,
        length: f64,
        track_names: Vec<String>,
        config: TimelineConfig,
    ) -> Self {
        log::debug!(
            "Timeline::new: duration={}, width={}px, {} track names",
            duration,
            length,
            track_names.len()
        );
        Self {
            duration,
            width: length,
            track_names,
            config,
            samples: Vec::new(),
            playhead: Playhead::new(),
            selection: Selection::new(),
            interaction: Interaction::new(),
            layout: None,
            layout_dirty: true,
            geometry_valid: true,
        }
    }

    /// Override the track row height
    pub fn with_track_height(mut self, track_height: f64) -> Self {
        self.config.track_height = track_height;
        self.layout_dirty = true;
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────────────

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Widget was resized; layout is recomputed on next use
    pub fn set_width(&mut self, width: f64) {
        if width != self.width {
            self.width = width;
            self.layout_dirty = true;
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.config.viewport(self.width)
    }

    /// Current time units per pixel
    pub fn scale(&self) -> TimelineResult<f64> {
        self.viewport().scale(self.duration)
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TimelineConfig) {
        self.config = config;
        self.layout_dirty = true;
    }

    pub fn track_names(&self) -> &[String] {
        &self.track_names
    }

    // ─────────────────────────────────────────────────────────────────────
    // Samples
    // ─────────────────────────────────────────────────────────────────────

    /// Samples in insertion order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn sample(&self, id: SampleId) -> Option<&Sample> {
        self.samples.iter().find(|s| s.id() == id)
    }

    /// Append a sample; it is placed after all existing samples
    ///
    /// The sample gets a fresh id here, so adding clones of one sample yields
    /// distinct entries. Use the returned id to refer to it afterwards.
    pub fn add_sample(&mut self, mut sample: Sample) -> SampleId {
        let id = sample.assign_id();
        self.samples.push(sample);
        self.layout_dirty = true;
        id
    }

    /// Remove a sample, clearing the selection if it pointed at it
    pub fn remove_sample(&mut self, id: SampleId) -> Option<Sample> {
        let index = self.samples.iter().position(|s| s.id() == id)?;
        let removed = self.samples.remove(index);
        self.selection.retain(&self.samples);
        self.layout_dirty = true;
        Some(removed)
    }

    pub fn clear_samples(&mut self) {
        self.samples.clear();
        self.selection.clear();
        self.layout_dirty = true;
    }

    /// Edit a sample in place; layout is recomputed on next use
    pub fn update_sample<F>(&mut self, id: SampleId, f: F) -> bool
    where
        F: FnOnce(&mut Sample),
    {
        match self.samples.iter_mut().find(|s| s.id() == id) {
            Some(sample) => {
                f(sample);
                self.layout_dirty = true;
                true
            }
            None => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Playhead / selection queries
    // ─────────────────────────────────────────────────────────────────────

    /// Selected sample, if it is still part of the list
    pub fn selected_sample(&self) -> Option<&Sample> {
        self.selection.selected_sample(&self.samples)
    }

    pub fn playhead(&self) -> &Playhead {
        &self.playhead
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state(&self.playhead)
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.interaction.is_pointer_inside()
    }

    pub fn hover_px(&self) -> Option<f64> {
        self.interaction.hover_px()
    }

    /// Whether the last pointer event found a usable scale
    pub fn has_valid_geometry(&self) -> bool {
        self.geometry_valid
    }

    // ─────────────────────────────────────────────────────────────────────
    // Layout, interaction, drawing
    // ─────────────────────────────────────────────────────────────────────

    /// Current layout pass, recomputed if the samples or the width changed
    ///
    /// Fails with [`crate::TimelineError::DegenerateGeometry`] when the width leaves
    /// no room between the paddings; cached spans are cleared in that case.
    pub fn layout(&mut self) -> TimelineResult<&LayoutPass> {
        let pass = self.take_layout()?;
        Ok(self.layout.insert(pass))
    }

    /// Handle one pointer event; events are emitted into `sink` before returning
    pub fn handle_pointer(&mut self, event: PointerEvent, sink: &mut dyn EventSink) -> Response {
        let scale = match self.layout() {
            Ok(pass) => Some(pass.scale),
            Err(e) => {
                if self.geometry_valid {
                    log::warn!("handle_pointer: {}, scrubbing disabled", e);
                }
                None
            }
        };
        if scale.is_some() && !self.geometry_valid {
            log::info!("handle_pointer: width {}px is usable again", self.width);
        }
        self.geometry_valid = scale.is_some();
        let target = ScrubTarget {
            playhead: &mut self.playhead,
            selection: &mut self.selection,
            samples: &mut self.samples,
            viewport: self.config.viewport(self.width),
            scale,
            highlight: self.config.colors.highlight,
        };
        self.interaction.handle(event, target, sink)
    }

    /// Geometry for one frame of the given widget height
    pub fn draw_list(&mut self, height: f64) -> TimelineResult<DrawList> {
        let pass = self.take_layout()?;
        let list = draw::build(
            &pass,
            &self.samples,
            &self.track_names,
            &self.playhead,
            &self.viewport(),
            height,
            &self.config,
        );
        self.layout = Some(pass);
        Ok(list)
    }

    fn take_layout(&mut self) -> TimelineResult<LayoutPass> {
        match self.layout.take() {
            Some(pass) if !self.layout_dirty => Ok(pass),
            _ => {
                let pass = self.compute_layout()?;
                self.layout_dirty = false;
                Ok(pass)
            }
        }
    }

    fn compute_layout(&mut self) -> TimelineResult<LayoutPass> {
        let scale = match self.scale() {
            Ok(scale) => scale,
            Err(e) => {
                layout::invalidate(&mut self.samples);
                return Err(e);
            }
        };
        let params = LayoutParams {
            scale,
            left_padding: self.config.left_padding,
            track_height: self.config.track_height,
            cursor_mode: self.config.cursor_mode,
        };
        layout::layout(&mut self.samples, &params)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Pass-through appearance settings
    // ─────────────────────────────────────────────────────────────────────

    pub fn background_color(&self) -> Color {
        self.config.colors.background
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.config.colors.background = color;
    }

    pub fn text_color(&self) -> Color {
        self.config.colors.text
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.config.colors.text = color;
    }

    pub fn text_font(&self) -> &RulerFont {
        &self.config.font
    }

    pub fn set_text_font(&mut self, font: RulerFont) {
        self.config.font = font;
    }
}
