//! Hit-test based sample selection
//!
//! The hit test compares the remapped pointer x against each cached span
//! shifted by the widget paddings: a sample is hit when
//! `start - left_padding < x < end - right_padding`. The start bound uses the
//! left padding and the end bound the right padding; they must be the same
//! constants the layout and the pointer remap use.
//!
//! Adjacent samples overlap under this test, so the last hit sample in list
//! order wins. Only that sample carries the highlight color.

use crate::events::{EventSink, TimelineEvent};
use crate::sample::{Sample, SampleId};
use crate::scale::Viewport;
use crate::types::Color;

/// Whether the pointer x falls inside a sample's padding-adjusted span
///
/// Samples that were never laid out are never hit.
pub fn hit_test(sample: &Sample, x: f64, viewport: &Viewport) -> bool {
    sample
        .span()
        .map(|span| span.start - viewport.left_padding < x && x < span.end - viewport.right_padding)
        .unwrap_or(false)
}

/// Currently selected sample, by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<SampleId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected id, which may refer to a sample no longer in the list
    ///
    /// Prefer [`Selection::selected_sample`], which validates against the list.
    pub fn selected(&self) -> Option<SampleId> {
        self.selected
    }

    /// Selected sample if it is still part of `samples`
    pub fn selected_sample<'a>(&self, samples: &'a [Sample]) -> Option<&'a Sample> {
        let id = self.selected?;
        samples.iter().find(|s| s.id() == id)
    }

    /// Drop the selection if its sample has left the list
    pub fn retain(&mut self, samples: &[Sample]) {
        if self.selected_sample(samples).is_none() {
            self.selected = None;
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Hit-test `x` against all samples and update colors and selection
    ///
    /// Colors are reassigned on every call. `SelectionChanged` is emitted only
    /// when the winning sample differs from the current selection; a miss keeps
    /// the current selection. Returns the hit sample, if any.
    pub fn check_selection(
        &mut self,
        x: f64,
        samples: &mut [Sample],
        viewport: &Viewport,
        highlight: Color,
        sink: &mut dyn EventSink,
    ) -> Option<SampleId> {
        let hit = samples.iter().rposition(|s| hit_test(s, x, viewport));

        for (index, sample) in samples.iter_mut().enumerate() {
            sample.color = if Some(index) == hit {
                highlight
            } else {
                sample.default_color
            };
        }

        let sample = &samples[hit?];
        if self.selected != Some(sample.id()) {
            log::debug!(
                "check_selection: x={:.1} selects sample {} (track {})",
                x,
                sample.id().get(),
                sample.track
            );
            self.selected = Some(sample.id());
            sink.emit(TimelineEvent::SelectionChanged(sample.clone()));
        }
        Some(sample.id())
    }
}
