use crate::ConvertError;

use fog_stack_storage::TileGrid;

/// The seam to whatever reads volumetric container files. A container holds
/// any number of named grids; the conversion pipeline asks for exactly one.
pub trait GridSource {
    /// The names of every grid in the container, in container order.
    fn grid_names(&self) -> Vec<String>;

    /// Opens the grid called `name`, or fails with
    /// [`ConvertError::GridNotFound`].
    fn open_grid_by_name(&mut self, name: &str) -> Result<TileGrid<f32>, ConvertError>;
}

/// A `GridSource` over grids already in memory. Used by tests and by
/// embedders that build grids procedurally.
#[derive(Clone, Debug, Default)]
pub struct MemoryGridSource {
    grids: Vec<(String, TileGrid<f32>)>,
}

impl MemoryGridSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, grid: TileGrid<f32>) {
        self.grids.push((name.into(), grid));
    }
}

impl GridSource for MemoryGridSource {
    fn grid_names(&self) -> Vec<String> {
        self.grids.iter().map(|(name, _)| name.clone()).collect()
    }

    fn open_grid_by_name(&mut self, name: &str) -> Result<TileGrid<f32>, ConvertError> {
        self.grids
            .iter()
            .find(|(grid_name, _)| grid_name == name)
            .map(|(_, grid)| grid.clone())
            .ok_or_else(|| ConvertError::GridNotFound { name: name.into() })
    }
}
