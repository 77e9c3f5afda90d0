//! rasterfx — a stateless image filter engine.
//!
//! Takes encoded image bytes and a filter name, decodes to an RGBA
//! pixel buffer, applies one of nine filters, and re-encodes the result
//! as PNG:
//!
//! ```no_run
//! let input_bytes = std::fs::read("photo.jpg").unwrap();
//! let png = rasterfx::apply_filter(&input_bytes, "sepia")?;
//! # Ok::<(), rasterfx::FilterError>(())
//! ```
//!
//! ## Pipeline
//!
//! bytes -> [`codec::decode`] -> [`PixelBuffer`] -> [`FilterKind::apply`]
//! -> [`codec::encode`] -> PNG bytes. Each stage owns the buffer it
//! produces until handing it to the next; the engine keeps no state
//! between calls, so the same input always yields the same output and
//! concurrent calls need no locking.
//!
//! ## Filters
//!
//! `grayscale`, `blur`, `huerotate`, `invert`, `sepia`, `pixelate`,
//! `emboss`, `sharpen`, `posterize` — see [`filters`] for the
//! algorithms and their constants. Unrecognized names fail with
//! [`FilterError::UnknownFilter`]; matching is exact and
//! case-sensitive.
//!
//! ## Hosts
//!
//! The engine is an in-process function with no I/O of its own. The
//! `wasm` feature additionally exports it to JavaScript via
//! wasm-bindgen.

pub mod buffer;
pub mod codec;
pub mod engine;
pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::PixelBuffer;
pub use engine::apply_filter;
pub use error::FilterError;
pub use filters::FilterKind;
