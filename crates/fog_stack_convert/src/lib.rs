//! Conversion of sparse signed-distance volumes into dense fog-density slice
//! stacks.
//!
//! The pipeline, in order:
//!   1. a [`GridSource`] produces the named grid (file parsing stays behind
//!      that seam)
//!   2. [`sdf_to_fog`] remaps narrow-band signed distances to normalized
//!      [0, 1] densities
//!   3. [`extract_slices`] walks the bounding region along one axis and fills
//!      a dense [`Slice`] per depth index
//!   4. [`export_stack`] packages each slice into named channel buffers and
//!      drives a [`SliceEncoder`] (the binary image format stays behind that
//!      seam)
//!
//! [`convert_grid`] runs all four stages. Every failure aborts the whole
//! conversion; a truncated slice stack is worse than no output.

pub mod error;
pub mod export;
pub mod pipeline;
pub mod remap;
pub mod slice;
pub mod source;

pub use error::*;
pub use export::*;
pub use pipeline::*;
pub use remap::*;
pub use slice::*;
pub use source::*;

#[cfg(feature = "image")]
mod image_conversions;
#[cfg(feature = "image")]
pub use image_conversions::*;

pub mod prelude {
    pub use super::{
        convert_grid, extract_slices, extract_slices_while, export_stack, sdf_to_fog,
        ConvertConfig, ConvertError, ConvertSummary, EncodeError, ExportChannel, ExportImage,
        GridSource, MemoryGridSource, Precision, Slice, SliceEncoder, SliceStack,
    };
}
