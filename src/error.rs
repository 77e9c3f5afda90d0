//! Error taxonomy for the filter engine.
//!
//! Three failure kinds, matching the three points where a call can go
//! wrong: decoding the input bytes, resolving the filter name, and
//! encoding the result. Errors are surfaced to the immediate caller as
//! distinct, inspectable values; the engine never retries and never
//! returns a partial image.

use thiserror::Error;

/// Failure modes of the filter pipeline.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Input bytes were empty, truncated, or not a recognized raster
    /// format.
    #[error("failed to decode input image: {0}")]
    Decode(String),

    /// The requested filter name does not match any [`FilterKind`].
    /// Matching is case-sensitive and exact; there is no fuzzy matching
    /// and no default filter.
    ///
    /// [`FilterKind`]: crate::filters::FilterKind
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),

    /// The pixel buffer handed to the encoder violated its shape
    /// invariant, or the PNG encoder itself failed. Defensive: given the
    /// decoder invariants this should be unreachable.
    #[error("failed to encode output image: {0}")]
    Encode(String),
}
