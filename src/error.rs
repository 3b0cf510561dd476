use thiserror::Error;

/// Errors raised when a set of section dimensions cannot produce a valid
/// boundary.
///
/// Validation runs before any point is generated: generation either fully
/// succeeds or rejects its input. There is no partial result.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error("dimension {name} = {value} must be positive")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("dimension {name} = {value} must not be negative")]
    NegativeDimension { name: &'static str, value: f64 },

    #[error("fillet {name} = {radius} exceeds the available length {limit}")]
    FilletTooLarge {
        name: &'static str,
        radius: f64,
        limit: f64,
    },

    #[error("slope {degrees}° leaves the face direction degenerate")]
    DegenerateSlope { degrees: f64 },

    #[error("wall thickness {thickness} leaves no interior in an extent of {extent}")]
    WallTooThick { thickness: f64, extent: f64 },

    #[error("circle tessellation needs at least 3 segments, got {segments}")]
    TooFewSegments { segments: u32 },

    #[error("degenerate section: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`SectionError`].
pub type Result<T> = std::result::Result<T, SectionError>;
