//! Packaging of slices into channel buffers and hand-off to the encoder.
//!
//! The encoder itself (the binary HDR image format) stays behind the
//! [`SliceEncoder`] trait. This module only owns the shape of what encoders
//! receive: named channel buffers in a significant order, plus the requested
//! storage precision.

use crate::{ConvertError, EncodeError, Slice, SliceStack};

use serde::{Deserialize, Serialize};

/// The conventional name of the single density channel.
pub const DENSITY_CHANNEL: &str = "V";

/// Requested storage precision for encoded samples. The encoder owns the
/// actual conversion; this is a request, not a guarantee.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Precision {
    /// Reduced-precision floating point, for compact stacks.
    Half,
    /// Full single precision, for fidelity.
    Full,
}

impl Precision {
    #[inline]
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Precision::Half => 2,
            Precision::Full => 4,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Half
    }
}

/// One named channel of dense samples.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportChannel {
    name: String,
    values: Vec<f32>,
}

impl ExportChannel {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The samples as raw bytes, for encoders that consume byte buffers.
    #[inline]
    pub fn raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }
}

/// A dense image handed to the encoder: one or more named channels of
/// identical dimensions. Channel order is significant and preserved exactly
/// as declared; consuming viewers expect a conventional ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportImage {
    width: u32,
    height: u32,
    channels: Vec<ExportChannel>,
}

impl ExportImage {
    /// Packages one slice as a single-channel image, without copying the
    /// sample buffer.
    pub fn from_slice(slice: Slice, channel_name: impl Into<String>) -> Self {
        let (_, values) = slice.into_parts();
        let (extent, values) = values.into_parts();

        Self {
            width: extent.shape.x() as u32,
            height: extent.shape.y() as u32,
            channels: vec![ExportChannel {
                name: channel_name.into(),
                values,
            }],
        }
    }

    /// Appends a channel. Asserts that its sample count matches the image
    /// dimensions.
    pub fn push_channel(&mut self, name: impl Into<String>, values: Vec<f32>) {
        assert_eq!(values.len(), (self.width * self.height) as usize);

        self.channels.push(ExportChannel {
            name: name.into(),
            values,
        });
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> &[ExportChannel] {
        &self.channels
    }
}

/// The seam to whatever writes the binary image format.
pub trait SliceEncoder {
    /// Encodes `image` to `target` with the requested `precision`.
    fn encode(
        &mut self,
        image: &ExportImage,
        target: &str,
        precision: Precision,
    ) -> Result<(), EncodeError>;
}

/// Derives the per-slice target from the stack's output path by splicing a
/// zero-padded sequence number before the extension:
/// `cloud.exr` becomes `cloud.0003.exr` for slice 3.
pub fn slice_target(output: &str, index: usize) -> String {
    match output.rfind('.') {
        Some(dot) => format!("{}.{:04}{}", &output[..dot], index, &output[dot..]),
        None => format!("{}.{:04}", output, index),
    }
}

/// Drives `encoder` once per slice, in stack order. The first encoder failure
/// aborts the remaining slices with [`ConvertError::Encode`], carrying the
/// target it was writing. Returns the targets written, in order.
pub fn export_stack<E: SliceEncoder>(
    stack: SliceStack,
    encoder: &mut E,
    output: &str,
    precision: Precision,
    channel_name: &str,
) -> Result<Vec<String>, ConvertError> {
    let mut targets = Vec::with_capacity(stack.len());
    for (index, slice) in stack.into_slices().into_iter().enumerate() {
        let target = slice_target(output, index);
        let image = ExportImage::from_slice(slice, channel_name);
        encoder
            .encode(&image, &target, precision)
            .map_err(|source| ConvertError::Encode {
                target: target.clone(),
                source,
            })?;
        targets.push(target);
    }
    tracing::debug!(files = targets.len(), "encoded slice stack");

    Ok(targets)
}
