//! Sample layout
//!
//! Computes the pixel region of every sample for the current scale and writes
//! the horizontal span back onto the sample for hit-testing.
//!
//! ## Cursor behavior
//!
//! Samples are placed **in list order with one running cursor shared by all
//! tracks**: a sample on track 1 starts where the previous sample (on any
//! track) ended. Samples on different tracks are not laid out independently and
//! overlaps are never resolved. [`CursorMode::PerTrack`] gives every track its
//! own cursor instead; it is opt-in and `Shared` stays the default.
//!
//! The cursor starts at `left_padding * scale` time units, which lands the
//! first sample at the left padding edge.
//!
//! ```text
//!  0          40                                        width-10
//!  |  labels  | ruler ticks .........................      |   <- header (40px)
//!  | track 0  [ sample A ]                    [ sample C ]      <- 40 + th*0
//!  | track 1             [ sample B ]                           <- 40 + th*1
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::sample::{Sample, SampleId, Span, Thumbnail};
use crate::scale::{pixel_to_time, time_to_pixel};
use crate::types::Rect;

/// Height of the fixed time-ruler header in pixels
pub const HEADER_HEIGHT: f64 = 40.0;

/// Default track row height in pixels
pub const DEFAULT_TRACK_HEIGHT: f64 = 20.0;

/// Rows occupied by the ruler header
pub const HEADER_ROWS: usize = 1;

/// Track rows rendered beyond the highest used track index, minus one
///
/// Rows rendered = `TRACK_ROW_SLACK + max(track)`.
pub const TRACK_ROW_SLACK: usize = 2;

/// How the horizontal cursor advances across tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorMode {
    /// One cursor for the whole list, regardless of track
    #[default]
    Shared,
    /// One cursor per track index
    PerTrack,
}

/// Inputs of a layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Time units per pixel
    pub scale: f64,
    pub left_padding: f64,
    pub track_height: f64,
    pub cursor_mode: CursorMode,
}

/// How a thumbnail is fitted into its sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThumbnailFit {
    /// Narrower than the sample: drawn at natural size at the left edge
    Natural,
    /// At least as wide as the sample: `source` is the region cut out of the image
    Cropped { source: Rect },
}

/// Where and how the renderer draws a sample's thumbnail
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailPlacement {
    /// Renderer-side image handle
    pub key: String,
    /// Destination rectangle in widget pixels
    pub dest: Rect,
    /// Rounded-rect clip region
    pub clip: Rect,
    pub fit: ThumbnailFit,
    /// Thumbnail size after scaling to its fixed height
    pub natural_width: f64,
    pub natural_height: f64,
}

/// Geometry of one sample after a layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGeometry {
    pub id: SampleId,
    /// Position in the sample list
    pub index: usize,
    pub track: u32,
    /// Full sample region (x = start, width = duration / scale)
    pub rect: Rect,
    pub thumbnail: Option<ThumbnailPlacement>,
}

/// Result of one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPass {
    /// Scale the pass was computed for
    pub scale: f64,
    /// Per-sample geometry, in list order
    pub samples: Vec<SampleGeometry>,
    /// Track rows to render (0 for an empty sample list)
    pub track_rows: usize,
}

impl LayoutPass {
    /// Header rows plus track rows
    pub fn row_count(&self) -> usize {
        HEADER_ROWS + self.track_rows
    }
}

/// Highest track index in use
///
/// Fails with [`TimelineError::EmptySampleSet`] for an empty list.
pub fn max_track(samples: &[Sample]) -> TimelineResult<u32> {
    samples
        .iter()
        .map(|s| s.track)
        .max()
        .ok_or(TimelineError::EmptySampleSet)
}

/// Number of track rows to render for a sample list
///
/// An empty list is not an error here: it renders no track rows.
pub fn track_row_count(samples: &[Sample]) -> usize {
    match max_track(samples) {
        Ok(max) => TRACK_ROW_SLACK + max as usize,
        Err(_) => 0,
    }
}

/// Vertical origin of a track row
#[inline]
pub fn row_origin(track: u32, track_height: f64) -> f64 {
    HEADER_HEIGHT + track_height * track as f64
}

/// Fit a thumbnail into a sample region
pub fn thumbnail_placement(thumbnail: &Thumbnail, sample_rect: Rect) -> ThumbnailPlacement {
    if thumbnail.width < sample_rect.width {
        let dest = Rect::new(sample_rect.x, sample_rect.y, thumbnail.width, sample_rect.height);
        ThumbnailPlacement {
            key: thumbnail.key.clone(),
            dest,
            clip: dest,
            fit: ThumbnailFit::Natural,
            natural_width: thumbnail.width,
            natural_height: thumbnail.height,
        }
    } else {
        ThumbnailPlacement {
            key: thumbnail.key.clone(),
            dest: sample_rect,
            clip: sample_rect,
            fit: ThumbnailFit::Cropped {
                source: Rect::new(0.0, 0.0, sample_rect.width, sample_rect.height),
            },
            natural_width: thumbnail.width,
            natural_height: thumbnail.height,
        }
    }
}

/// Lay out all samples and cache their spans
///
/// Only the derived span of each sample is written; durations and tracks are
/// left alone. Negative durations produce zero-width spans and do not move the
/// cursor.
pub fn layout(samples: &mut [Sample], params: &LayoutParams) -> TimelineResult<LayoutPass> {
    let scale = params.scale;
    if !(scale > 0.0) || !scale.is_finite() {
        return Err(TimelineError::InvalidScale(scale));
    }

    let anchor = time_to_pixel(pixel_to_time(params.left_padding, scale), scale);
    let mut shared_cursor = anchor;
    let mut track_cursors: HashMap<u32, f64> = HashMap::new();

    let mut geometry = Vec::with_capacity(samples.len());
    for (index, sample) in samples.iter_mut().enumerate() {
        let cursor = match params.cursor_mode {
            CursorMode::Shared => &mut shared_cursor,
            CursorMode::PerTrack => track_cursors.entry(sample.track).or_insert(anchor),
        };

        let width = time_to_pixel(sample.duration.max(0.0), scale);
        let start = *cursor;
        let end = start + width;
        *cursor = end;

        let rect = Rect::new(
            start,
            row_origin(sample.track, params.track_height),
            width,
            params.track_height,
        );
        sample.set_layout(Span { start, end }, rect);

        geometry.push(SampleGeometry {
            id: sample.id(),
            index,
            track: sample.track,
            rect,
            thumbnail: sample
                .thumbnail
                .as_ref()
                .map(|t| thumbnail_placement(t, rect)),
        });
    }

    let pass = LayoutPass {
        scale,
        samples: geometry,
        track_rows: track_row_count(samples),
    };
    log::debug!(
        "layout: {} samples, scale {:.5}, {} track rows ({:?} cursor)",
        pass.samples.len(),
        scale,
        pass.track_rows,
        params.cursor_mode
    );
    Ok(pass)
}

/// Forget cached spans, e.g. when no valid scale exists for the current width
pub fn invalidate(samples: &mut [Sample]) {
    for sample in samples {
        sample.clear_layout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::scale;

    fn params(scale: f64) -> LayoutParams {
        LayoutParams {
            scale,
            left_padding: 40.0,
            track_height: DEFAULT_TRACK_HEIGHT,
            cursor_mode: CursorMode::Shared,
        }
    }

    #[test]
    fn test_single_sample_reference_widget() {
        let s = scale(100.0, 440.0, 40.0, 10.0).unwrap();
        let mut samples = vec![Sample::new(50.0)];
        let pass = layout(&mut samples, &params(s)).unwrap();

        let start = samples[0].start_pos().unwrap();
        let end = samples[0].end_pos().unwrap();
        assert!((start - 40.0).abs() < 1e-9);
        assert!((end - (40.0 + 50.0 / s)).abs() < 1e-9);
        assert!((end - 235.0).abs() < 1e-9);
        assert_eq!(pass.samples[0].rect.y, HEADER_HEIGHT);
        assert_eq!(pass.samples[0].rect.height, DEFAULT_TRACK_HEIGHT);
    }

    #[test]
    fn test_span_width_matches_duration() {
        let s = scale(600.0, 1280.0, 40.0, 10.0).unwrap();
        let mut samples: Vec<Sample> = [12.0, 0.5, 33.3, 100.0, 7.25]
            .iter()
            .enumerate()
            .map(|(i, &d)| Sample::new(d).with_track((i % 3) as u32))
            .collect();
        layout(&mut samples, &params(s)).unwrap();

        for sample in &samples {
            let span = sample.span().unwrap();
            assert!((span.width() - sample.duration / s).abs() < 1e-9);
        }
        for pair in samples.windows(2) {
            assert_eq!(pair[1].start_pos(), pair[0].end_pos());
        }
    }

    #[test]
    fn test_cursor_is_shared_across_tracks() {
        let s = scale(100.0, 440.0, 40.0, 10.0).unwrap();
        let mut samples = vec![Sample::new(20.0).with_track(0), Sample::new(30.0).with_track(1)];
        let pass = layout(&mut samples, &params(s)).unwrap();

        // Second sample does not restart at the left edge of its own track
        assert_eq!(samples[1].start_pos(), samples[0].end_pos());
        assert_eq!(pass.samples[1].rect.y, HEADER_HEIGHT + DEFAULT_TRACK_HEIGHT);
    }

    #[test]
    fn test_per_track_cursor_mode() {
        let s = scale(100.0, 440.0, 40.0, 10.0).unwrap();
        let mut samples = vec![
            Sample::new(20.0).with_track(0),
            Sample::new(30.0).with_track(1),
            Sample::new(10.0).with_track(0),
        ];
        let p = LayoutParams {
            cursor_mode: CursorMode::PerTrack,
            ..params(s)
        };
        layout(&mut samples, &p).unwrap();

        assert_eq!(samples[0].start_pos(), samples[1].start_pos());
        assert_eq!(samples[2].start_pos(), samples[0].end_pos());
    }

    #[test]
    fn test_track_rows() {
        let samples = vec![Sample::new(1.0).with_track(0), Sample::new(1.0).with_track(3)];
        // Gap at tracks 1-2 still reserves rows
        assert_eq!(max_track(&samples).unwrap(), 3);
        assert_eq!(track_row_count(&samples), 5);
        assert_eq!(row_origin(3, 20.0), 100.0);
    }

    #[test]
    fn test_empty_sample_set() {
        let mut samples: Vec<Sample> = Vec::new();
        assert!(matches!(max_track(&samples), Err(TimelineError::EmptySampleSet)));

        let pass = layout(&mut samples, &params(0.25)).unwrap();
        assert!(pass.samples.is_empty());
        assert_eq!(pass.track_rows, 0);
        assert_eq!(pass.row_count(), HEADER_ROWS);
    }

    #[test]
    fn test_negative_duration_is_zero_width() {
        let mut samples = vec![Sample::new(-5.0), Sample::new(10.0)];
        layout(&mut samples, &params(0.5)).unwrap();

        let first = samples[0].span().unwrap();
        assert_eq!(first.width(), 0.0);
        assert_eq!(samples[1].start_pos(), Some(first.end));
    }

    #[test]
    fn test_invalid_scale_rejected() {
        let mut samples = vec![Sample::new(1.0)];
        assert!(matches!(
            layout(&mut samples, &params(0.0)),
            Err(TimelineError::InvalidScale(_))
        ));
        assert!(samples[0].span().is_none());
    }

    #[test]
    fn test_thumbnail_narrower_than_sample() {
        let rect = Rect::new(40.0, 40.0, 200.0, 20.0);
        let thumb = Thumbnail::new("a.png", 80.0, 45.0);
        let placement = thumbnail_placement(&thumb, rect);

        assert_eq!(placement.fit, ThumbnailFit::Natural);
        assert_eq!(placement.dest, Rect::new(40.0, 40.0, 80.0, 20.0));
        assert_eq!(placement.clip, placement.dest);
    }

    #[test]
    fn test_thumbnail_wider_than_sample() {
        let rect = Rect::new(40.0, 60.0, 50.0, 20.0);
        let thumb = Thumbnail::new("b.png", 80.0, 45.0);
        let placement = thumbnail_placement(&thumb, rect);

        assert_eq!(placement.dest, rect);
        assert_eq!(placement.clip, rect);
        assert_eq!(placement.natural_width, 80.0);
        assert_eq!(placement.natural_height, 45.0);
        assert_eq!(
            placement.fit,
            ThumbnailFit::Cropped {
                source: Rect::new(0.0, 0.0, 50.0, 20.0)
            }
        );
    }

    #[test]
    fn test_invalidate_clears_spans() {
        let mut samples = vec![Sample::new(1.0)];
        layout(&mut samples, &params(0.5)).unwrap();
        assert!(samples[0].span().is_some());
        invalidate(&mut samples);
        assert!(samples[0].span().is_none());
        assert!(samples[0].rect().is_none());
    }
}
