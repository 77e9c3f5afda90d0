//! Filter kernels and their dispatcher.
//!
//! Every kernel maps an RGBA image to a new RGBA image of identical
//! dimensions, shape (height, width, 4) as u8. Alpha passes through
//! unchanged except for pixelate, which averages it with the rest of
//! the block.
//!
//! | Filter | Kind | Module |
//! |-----------|----------------------|--------------------|
//! | grayscale | per-pixel map | [`grayscale`] |
//! | invert | per-pixel map | [`color_adjust`] |
//! | sepia | per-pixel map | [`color_adjust`] |
//! | huerotate | color space | [`color_science`] |
//! | posterize | quantization | [`stylize`] |
//! | pixelate | block average | [`stylize`] |
//! | blur | separable convolution| [`blur`] |
//! | sharpen | 3x3 convolution | [`sharpen`] |
//! | emboss | 3x3 convolution | [`stylize`] |
//!
//! Spatial kernels read from an untouched source view and write a fresh
//! destination array; see [`core`](crate::filters::core) for the shared
//! machinery and the edge-replication policy.

use ndarray::{Array3, ArrayView3};

pub mod blur;
pub mod color_adjust;
pub mod color_science;
pub mod core;
pub mod grayscale;
pub mod sharpen;
pub mod stylize;

/// Gaussian blur standard deviation.
pub const BLUR_SIGMA: f32 = 5.0;

/// Hue rotation angle in degrees.
pub const HUE_ROTATE_DEGREES: f32 = 90.0;

/// Posterize quantization levels per channel.
pub const POSTERIZE_LEVELS: u8 = 4;

/// Pixelate tile edge length in pixels.
pub const PIXELATE_BLOCK: usize = 8;

/// The closed set of filters this engine provides.
///
/// Selected by name at the call boundary; see [`FilterKind::from_name`].
/// The `match` in [`FilterKind::apply`] is exhaustive, so adding a
/// variant without wiring its kernel is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Grayscale,
    Blur,
    HueRotate,
    Invert,
    Sepia,
    Pixelate,
    Emboss,
    Sharpen,
    Posterize,
}

impl FilterKind {
    /// All filters, in the order the selection UI lists them.
    pub const ALL: [FilterKind; 9] = [
        FilterKind::Grayscale,
        FilterKind::Blur,
        FilterKind::HueRotate,
        FilterKind::Invert,
        FilterKind::Sepia,
        FilterKind::Pixelate,
        FilterKind::Emboss,
        FilterKind::Sharpen,
        FilterKind::Posterize,
    ];

    /// Resolve a filter from its wire name.
    ///
    /// Case-sensitive exact match; anything else is `None`. No fuzzy
    /// matching and no default filter.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "grayscale" => Some(FilterKind::Grayscale),
            "blur" => Some(FilterKind::Blur),
            "huerotate" => Some(FilterKind::HueRotate),
            "invert" => Some(FilterKind::Invert),
            "sepia" => Some(FilterKind::Sepia),
            "pixelate" => Some(FilterKind::Pixelate),
            "emboss" => Some(FilterKind::Emboss),
            "sharpen" => Some(FilterKind::Sharpen),
            "posterize" => Some(FilterKind::Posterize),
            _ => None,
        }
    }

    /// Wire name of the filter.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "grayscale",
            FilterKind::Blur => "blur",
            FilterKind::HueRotate => "huerotate",
            FilterKind::Invert => "invert",
            FilterKind::Sepia => "sepia",
            FilterKind::Pixelate => "pixelate",
            FilterKind::Emboss => "emboss",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Posterize => "posterize",
        }
    }

    /// Run the kernel on an RGBA image.
    ///
    /// # Arguments
    /// * `input` - RGBA image (height, width, 4) as u8
    ///
    /// # Returns
    /// Filtered RGBA image with the same dimensions
    pub fn apply(self, input: ArrayView3<u8>) -> Array3<u8> {
        match self {
            FilterKind::Grayscale => grayscale::grayscale_rgba(input),
            FilterKind::Blur => blur::gaussian_blur_rgba(input, BLUR_SIGMA),
            FilterKind::HueRotate => color_science::hue_rotate_rgba(input, HUE_ROTATE_DEGREES),
            FilterKind::Invert => color_adjust::invert_rgba(input),
            FilterKind::Sepia => color_adjust::sepia_rgba(input),
            FilterKind::Pixelate => stylize::pixelate_rgba(input, PIXELATE_BLOCK),
            FilterKind::Emboss => stylize::emboss_rgba(input),
            FilterKind::Sharpen => sharpen::sharpen_rgba(input),
            FilterKind::Posterize => stylize::posterize_rgba(input, POSTERIZE_LEVELS),
        }
    }
}
