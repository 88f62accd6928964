use fog_stack_core::Extent3i;

use thiserror::Error;

/// Everything that can abort a conversion. All variants are unrecoverable for
/// the current run: partial output is never left behind.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConvertError {
    /// The named grid is absent from the input.
    #[error("grid {name:?} not found in input")]
    GridNotFound { name: String },

    /// The grid exists but holds no active voxel data to slice.
    #[error("grid {name:?} contains no voxel data")]
    EmptyGrid { name: String },

    /// The background value cannot express a narrow band, so the density
    /// remap is undefined.
    #[error("background value {background} cannot be remapped")]
    InvalidBackground { background: f32 },

    /// The slicing region covers no voxels.
    #[error("slicing region {extent:?} is empty")]
    EmptyBoundingBox { extent: Extent3i },

    /// Cooperative cancellation fired between slices.
    #[error("conversion cancelled before slice at depth {depth}")]
    Cancelled { depth: i32 },

    /// The external encoder rejected a slice.
    #[error("failed to encode {target:?}: {source}")]
    Encode {
        target: String,
        #[source]
        source: EncodeError,
    },
}

impl ConvertError {
    /// The pipeline stage this error aborts.
    pub fn stage(&self) -> &'static str {
        match self {
            ConvertError::GridNotFound { .. } | ConvertError::EmptyGrid { .. } => "read",
            ConvertError::InvalidBackground { .. } => "remap",
            ConvertError::EmptyBoundingBox { .. } | ConvertError::Cancelled { .. } => "slice",
            ConvertError::Encode { .. } => "encode",
        }
    }

    /// A stable, non-zero process exit code for CLI front ends.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::GridNotFound { .. } => 2,
            ConvertError::EmptyGrid { .. } => 3,
            ConvertError::InvalidBackground { .. } => 4,
            ConvertError::EmptyBoundingBox { .. } => 5,
            ConvertError::Cancelled { .. } => 6,
            ConvertError::Encode { .. } => 7,
        }
    }
}

/// The code/message pair reported by an external encoder.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message} (code {code})")]
pub struct EncodeError {
    pub code: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    use fog_stack_core::Point3i;

    #[test]
    fn exit_codes_are_nonzero_and_distinct() {
        let errors = [
            ConvertError::GridNotFound {
                name: "density".into(),
            },
            ConvertError::EmptyGrid {
                name: "density".into(),
            },
            ConvertError::InvalidBackground { background: 0.0 },
            ConvertError::EmptyBoundingBox {
                extent: Extent3i::from_min_and_shape(Point3i::ZERO, Point3i::ZERO),
            },
            ConvertError::Cancelled { depth: 3 },
            ConvertError::Encode {
                target: "out.0000.exr".into(),
                source: EncodeError {
                    code: 13,
                    message: "disk full".into(),
                },
            },
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn stages_name_the_failing_step() {
        assert_eq!(
            ConvertError::GridNotFound {
                name: "density".into()
            }
            .stage(),
            "read"
        );
        assert_eq!(
            ConvertError::InvalidBackground { background: 0.0 }.stage(),
            "remap"
        );
        assert_eq!(ConvertError::Cancelled { depth: 0 }.stage(), "slice");
        assert_eq!(
            ConvertError::Encode {
                target: "t".into(),
                source: EncodeError {
                    code: 1,
                    message: "m".into()
                }
            }
            .stage(),
            "encode"
        );
    }

    #[test]
    fn encode_error_message_names_target_and_cause() {
        let err = ConvertError::Encode {
            target: "cloud.0002.exr".into(),
            source: EncodeError {
                code: 5,
                message: "unsupported channel layout".into(),
            },
        };

        let message = err.to_string();
        assert!(message.contains("cloud.0002.exr"));
        assert!(message.contains("unsupported channel layout"));
    }
}
