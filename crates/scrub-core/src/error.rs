//! Timeline error types

use thiserror::Error;

/// Errors that can occur while computing timeline geometry
#[derive(Error, Debug)]
pub enum TimelineError {
    /// Usable width (widget width minus both paddings) is not positive
    #[error(
        "Degenerate geometry: width {width}px leaves no room between paddings \
         (left={left_padding}px, right={right_padding}px)"
    )]
    DegenerateGeometry {
        width: f64,
        left_padding: f64,
        right_padding: f64,
    },

    /// Total duration cannot produce a scale
    #[error("Invalid timeline duration: {0}")]
    InvalidDuration(f64),

    /// Layout was asked to run with a scale that is not positive and finite
    #[error("Invalid scale: {0}")]
    InvalidScale(f64),

    /// Track count derivation needs at least one sample
    #[error("No samples to derive a track count from")]
    EmptySampleSet,

    /// Configuration file could not be written
    #[error("Timeline config error: {0}")]
    Config(#[from] anyhow::Error),
}

/// Result type for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;
