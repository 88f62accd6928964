//! The end-to-end conversion: open, remap, slice, encode.

use crate::{
    export_stack, extract_slices, sdf_to_fog, ConvertError, GridSource, Precision, SliceEncoder,
    DENSITY_CHANNEL,
};

use fog_stack_core::{Axis3, Extent3i};

use serde::{Deserialize, Serialize};

/// Parameters of one conversion run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConvertConfig {
    /// The grid to pull out of the container.
    pub grid_name: String,
    /// The slicing axis.
    pub axis: Axis3,
    /// Requested storage precision for encoded samples.
    pub precision: Precision,
    /// The channel name given to the density samples.
    pub channel: String,
    /// Explicit slicing region. Defaults to the grid's active bounding
    /// extent.
    pub bounds: Option<Extent3i>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            grid_name: "density".into(),
            axis: Axis3::Z,
            precision: Precision::default(),
            channel: DENSITY_CHANNEL.into(),
            bounds: None,
        }
    }
}

/// What a successful conversion produced.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertSummary {
    /// The region that was sliced.
    pub bounds: Extent3i,
    /// The encoder targets written, in stack order.
    pub targets: Vec<String>,
}

/// Runs the whole pipeline: opens `config.grid_name` from `source`, remaps it
/// to fog densities, slices it along `config.axis`, and encodes one image per
/// slice under `output`. Any stage failure aborts the run; see
/// [`ConvertError::stage`] and [`ConvertError::exit_code`] for the CLI
/// boundary.
pub fn convert_grid<S, E>(
    source: &mut S,
    encoder: &mut E,
    output: &str,
    config: &ConvertConfig,
) -> Result<ConvertSummary, ConvertError>
where
    S: GridSource,
    E: SliceEncoder,
{
    let span = tracing::info_span!("convert", grid = %config.grid_name);
    let _enter = span.enter();

    for name in source.grid_names() {
        if name != config.grid_name {
            tracing::debug!(grid = %name, "skipping grid");
        }
    }
    let grid = source.open_grid_by_name(&config.grid_name)?;
    let active_bounds =
        grid.active_bounding_extent()
            .ok_or_else(|| ConvertError::EmptyGrid {
                name: config.grid_name.clone(),
            })?;
    tracing::info!(
        active_voxels = grid.num_active_voxels(),
        tiles = grid.num_tiles(),
        "read grid"
    );

    let grid = sdf_to_fog(grid)?;

    let bounds = config.bounds.unwrap_or(active_bounds);
    let stack = extract_slices(&grid, config.axis, bounds)?;
    tracing::info!(slices = stack.len(), "extracted slices");

    let targets = export_stack(stack, encoder, output, config.precision, &config.channel)?;
    tracing::info!(files = targets.len(), "encoded output");

    Ok(ConvertSummary { bounds, targets })
}
