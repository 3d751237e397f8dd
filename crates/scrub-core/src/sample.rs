//! Timeline samples
//!
//! A sample is a time-bounded unit placed on a track. Its horizontal pixel
//! span is not part of its definition: the layout pass derives it from the
//! cumulative durations and the current scale, and caches it on the sample so
//! that selection can hit-test against it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{Color, Rect};

/// Height thumbnails are scaled to when attached to a sample
pub const THUMBNAIL_HEIGHT: f64 = 45.0;

static NEXT_SAMPLE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a sample
///
/// Selection refers to samples by id so it never keeps a removed sample alive.
/// Clones of a sample share its id until a timeline takes ownership: insertion
/// assigns a fresh id, so every list entry is distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(u64);

impl SampleId {
    fn next() -> Self {
        Self(NEXT_SAMPLE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Preview image attached to a sample
///
/// The engine never decodes images: `key` is an opaque handle the renderer
/// resolves, and the size is only used for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    /// Renderer-side handle (file path, cache key, ...)
    pub key: String,
    /// Width in pixels after scaling to [`THUMBNAIL_HEIGHT`]
    pub width: f64,
    /// Height in pixels after scaling
    pub height: f64,
}

impl Thumbnail {
    /// Create a thumbnail from an image of the given natural size
    ///
    /// The image is scaled to [`THUMBNAIL_HEIGHT`] keeping its aspect ratio.
    pub fn new(key: impl Into<String>, natural_width: f64, natural_height: f64) -> Self {
        let width = if natural_height > 0.0 {
            (natural_width * THUMBNAIL_HEIGHT / natural_height).max(0.0)
        } else {
            0.0
        };
        Self {
            key: key.into(),
            width,
            height: THUMBNAIL_HEIGHT,
        }
    }
}

/// Pixel span computed by the most recent layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// A time-bounded unit placed on a track
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    id: SampleId,
    /// Length in time units
    pub duration: f64,
    /// Track row index (gaps between used indices still reserve rows)
    pub track: u32,
    /// Caption drawn inside the sample, empty for none
    pub text: String,
    pub thumbnail: Option<Thumbnail>,
    /// Current display color (highlight while selected)
    pub color: Color,
    /// Color restored when the sample is not under the selection pointer
    pub default_color: Color,
    span: Option<Span>,
    row: Option<Rect>,
}

impl Sample {
    /// Create a sample on track 0 with the default color
    pub fn new(duration: f64) -> Self {
        Self {
            id: SampleId::next(),
            duration,
            track: 0,
            text: String::new(),
            thumbnail: None,
            color: Color::DARK_YELLOW,
            default_color: Color::DARK_YELLOW,
            span: None,
            row: None,
        }
    }

    pub fn with_track(mut self, track: u32) -> Self {
        self.track = track;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set both the display color and the color restored on deselection
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.default_color = color;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn id(&self) -> SampleId {
        self.id
    }

    /// Pixel span from the most recent layout pass, `None` before the first one
    ///
    /// Stale after the sample list, the durations or the widget width change
    /// until the next layout pass runs.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn start_pos(&self) -> Option<f64> {
        self.span.map(|s| s.start)
    }

    pub fn end_pos(&self) -> Option<f64> {
        self.span.map(|s| s.end)
    }

    /// Full rounded-rect region from the most recent layout pass
    pub fn rect(&self) -> Option<Rect> {
        self.row
    }

    /// Give the sample a fresh id; called by the owning timeline on insertion
    pub(crate) fn assign_id(&mut self) -> SampleId {
        self.id = SampleId::next();
        self.id
    }

    pub(crate) fn set_layout(&mut self, span: Span, rect: Rect) {
        self.span = Some(span);
        self.row = Some(rect);
    }

    pub(crate) fn clear_layout(&mut self) {
        self.span = None;
        self.row = None;
    }
}
