//! Renderer boundary
//!
//! A [`DrawList`] is everything needed to paint one frame, in widget pixel
//! coordinates: the ruler, the track rows, one rounded rectangle per sample and
//! the playhead. The engine never touches a drawing surface; renderers walk the
//! list in field order (background, header, ruler, tracks, samples, playhead).

use crate::config::TimelineConfig;
use crate::format::format_time;
use crate::layout::{LayoutPass, ThumbnailPlacement, HEADER_HEIGHT};
use crate::playhead::{Playhead, PlayheadMarker};
use crate::sample::{Sample, SampleId};
use crate::scale::{pixel_to_time, Viewport};
use crate::types::{Color, Point, Rect, RulerFont};

/// Stroke width of the header baseline
pub const HEADER_LINE_WIDTH: f64 = 5.0;

/// Top of major ruler ticks
pub const MAJOR_TICK_TOP: f64 = 20.0;

/// Smallest tick spacing honored; finer configured spacings are clamped
pub const MIN_TICK_SPACING: f64 = 1.0;

/// Y of minor ruler tick points
pub const MINOR_TICK_Y: f64 = 30.0;

/// Half width of the box ruler labels are centered in
pub const RULER_LABEL_HALF_WIDTH: f64 = 50.0;

/// Height of ruler label and caption boxes
pub const LABEL_BOX_HEIGHT: f64 = 100.0;

/// Captions start this far below the top of their sample
pub const CAPTION_OFFSET: f64 = 5.0;

/// Straight line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Color,
}

/// Text alignment inside a label box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    /// Horizontally centered, top aligned (ruler labels, captions)
    TopCenter,
    /// Left aligned, vertically centered (track names)
    CenterLeft,
}

/// Text placed in a box
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub rect: Rect,
    pub align: LabelAlign,
    pub color: Color,
}

/// Ruler tick
#[derive(Debug, Clone, PartialEq)]
pub enum RulerTick {
    /// Labelled tick with a line through the lower half of the ruler
    Major { x: f64, line: Line, label: Label },
    /// Single point
    Minor { at: Point, color: Color },
}

/// One track row: its name and its separator line
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRow {
    /// 1-based row number
    pub row: usize,
    pub label: Label,
    pub line: Line,
}

/// One sample as a filled rounded rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct SampleShape {
    pub id: SampleId,
    pub rect: Rect,
    pub corner_radius: f64,
    /// Current sample color (highlight while selected)
    pub fill: Color,
    pub caption: Option<Label>,
    pub thumbnail: Option<ThumbnailPlacement>,
}

/// Playhead marker with its colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayheadShape {
    pub marker: PlayheadMarker,
    pub fill: Color,
    pub outline: Color,
}

/// Geometry for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    pub font: RulerFont,
    pub header_line: Line,
    pub ticks: Vec<RulerTick>,
    pub tracks: Vec<TrackRow>,
    pub samples: Vec<SampleShape>,
    pub playhead: PlayheadShape,
}

/// Ruler ticks from the left padding edge up to (excluding) the right edge
///
/// Spacings below [`MIN_TICK_SPACING`] are clamped to it; non-positive or
/// non-finite spacings disable the ruler.
pub fn ruler_ticks(viewport: &Viewport, scale: f64, config: &TimelineConfig) -> Vec<RulerTick> {
    let mut ticks = Vec::new();
    if !(config.tick_spacing > 0.0) || !config.tick_spacing.is_finite() {
        return ticks;
    }
    let spacing = config.tick_spacing.max(MIN_TICK_SPACING);
    let major_every = config.major_tick_every.max(1);
    let color = config.colors.text;
    let right = viewport.right_edge();

    let mut index = 0usize;
    loop {
        let x = viewport.left_padding + spacing * index as f64;
        if x >= right {
            break;
        }
        if index % major_every == 0 {
            let time = pixel_to_time(x - viewport.left_padding, scale);
            ticks.push(RulerTick::Major {
                x,
                line: Line {
                    from: Point::new(x, MAJOR_TICK_TOP),
                    to: Point::new(x, HEADER_HEIGHT),
                    width: 1.0,
                    color,
                },
                label: Label {
                    text: format_time(time),
                    rect: Rect::new(
                        x - RULER_LABEL_HALF_WIDTH,
                        0.0,
                        RULER_LABEL_HALF_WIDTH * 2.0,
                        LABEL_BOX_HEIGHT,
                    ),
                    align: LabelAlign::TopCenter,
                    color,
                },
            });
        } else {
            ticks.push(RulerTick::Minor {
                at: Point::new(x, MINOR_TICK_Y),
                color,
            });
        }
        index += 1;
    }
    ticks
}

/// Track name rows
///
/// Row `i` (1-based) sits at `track_height * (i + 1)` and shows
/// `track_names[i - 1]`, or nothing when fewer names were given.
pub fn track_rows(
    rows: usize,
    track_names: &[String],
    viewport: &Viewport,
    config: &TimelineConfig,
) -> Vec<TrackRow> {
    let th = config.track_height;
    (1..=rows)
        .map(|row| {
            let y = th * (row + 1) as f64;
            TrackRow {
                row,
                label: Label {
                    text: track_names.get(row - 1).cloned().unwrap_or_default(),
                    rect: Rect::new(0.0, y, viewport.left_padding, th),
                    align: LabelAlign::CenterLeft,
                    color: config.colors.text,
                },
                line: Line {
                    from: Point::new(0.0, y),
                    to: Point::new(viewport.right_edge(), y),
                    width: 1.0,
                    color: config.colors.text,
                },
            }
        })
        .collect()
}

/// Build the draw list for one frame from a fresh layout pass
pub fn build(
    pass: &LayoutPass,
    samples: &[Sample],
    track_names: &[String],
    playhead: &Playhead,
    viewport: &Viewport,
    height: f64,
    config: &TimelineConfig,
) -> DrawList {
    let sample_shapes = pass
        .samples
        .iter()
        .filter_map(|geometry| {
            let sample = samples.get(geometry.index)?;
            let caption = (!sample.text.is_empty()).then(|| Label {
                text: sample.text.clone(),
                rect: Rect::new(
                    geometry.rect.x,
                    geometry.rect.y + CAPTION_OFFSET,
                    geometry.rect.width,
                    LABEL_BOX_HEIGHT,
                ),
                align: LabelAlign::TopCenter,
                color: config.colors.caption,
            });
            Some(SampleShape {
                id: geometry.id,
                rect: geometry.rect,
                corner_radius: config.corner_radius,
                fill: sample.color,
                caption,
                thumbnail: geometry.thumbnail.clone(),
            })
        })
        .collect();

    DrawList {
        width: viewport.width,
        height,
        background: config.colors.background,
        font: config.font.clone(),
        header_line: Line {
            from: Point::new(0.0, HEADER_HEIGHT),
            to: Point::new(viewport.right_edge(), HEADER_HEIGHT),
            width: HEADER_LINE_WIDTH,
            color: config.colors.accent,
        },
        ticks: ruler_ticks(viewport, pass.scale, config),
        tracks: track_rows(pass.track_rows, track_names, viewport, config),
        samples: sample_shapes,
        playhead: PlayheadShape {
            marker: playhead.marker(viewport, pass.scale, height),
            fill: config.colors.playhead,
            outline: config.colors.marker_outline,
        },
    }
}
