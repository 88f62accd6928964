//! Remapping of narrow-band signed distances to normalized fog densities.
//!
//! A level-set grid stores signed distances clamped to `[-background,
//! +background]`: the narrow band is active, bulk interior/exterior regions
//! are inactive constant tiles, and unstored space reads `+background`. The
//! remap turns that into a fog volume where interior voxels read 1, exterior
//! voxels read 0, and the narrow band ramps linearly between them.

use crate::ConvertError;

use fog_stack_storage::TileGrid;

/// Remaps `grid` from signed distances to fog densities, producing the next
/// logical grid state. See [`sdf_to_fog_in_place`] for the exact passes.
pub fn sdf_to_fog(mut grid: TileGrid<f32>) -> Result<TileGrid<f32>, ConvertError> {
    sdf_to_fog_in_place(&mut grid)?;

    Ok(grid)
}

/// The in-place form of [`sdf_to_fog`]. Fails with
/// [`ConvertError::InvalidBackground`] before any mutation if the background
/// cannot express a narrow band.
///
/// Three passes:
/// 1. every active value `d` becomes `(background - d) / (2 * background)`,
///    mapping the band `[-background, +background]` to `[1, 0]`; values
///    outside the band land outside `[0, 1]` and are preserved, not clamped
/// 2. every stored inactive value `< 0` (bulk interior) becomes `1.0` and
///    stays off; positive inactive values are left alone
/// 3. the background becomes `0.0` (with sign-preserving substitution of
///    stored inactive `±background` values), so exterior space reads zero
///    density on any later point query
///
/// The transform is asymmetric: running it again on an already-remapped grid
/// is not a no-op.
pub fn sdf_to_fog_in_place(grid: &mut TileGrid<f32>) -> Result<(), ConvertError> {
    let outside = grid.background();
    if outside == 0.0 || !outside.is_finite() {
        return Err(ConvertError::InvalidBackground {
            background: outside,
        });
    }
    let width = 2.0 * outside;

    let mut narrow_band = 0u64;
    grid.for_each_active_entry_mut(|_, value| {
        *value = (outside - *value) / width;
        narrow_band += 1;
    });
    tracing::debug!(entries = narrow_band, "remapped narrow-band values");

    let mut interior = 0u64;
    grid.for_each_inactive_entry_mut(|_, value| {
        if *value < 0.0 {
            *value = 1.0;
            interior += 1;
        }
    });
    tracing::debug!(entries = interior, "filled bulk interior regions");

    grid.replace_background(0.0);

    Ok(())
}
