//! Storage for volumetric scalar fields on the 3D integer lattice.
//!
//! The two storage types are:
//!   - [`TileGrid`]: a sparse 3D grid of power-of-2 tiles over an ambient
//!     background value, with per-voxel and per-tile activity
//!   - [`Array2`]: a dense 2D array, used for slice buffers
//!
//! Point access goes through the [`Get`]/[`GetMut`] traits, bulk access
//! through [`ForEach2`]/[`ForEach3`]. For long runs of spatially-adjacent
//! point queries, [`GridCursor`] caches the last tile touched so consecutive
//! lookups skip the hash map.

pub mod access;
pub mod array2;
pub mod bitset;
pub mod tile_grid;

pub use access::*;
pub use array2::*;
pub use bitset::*;
pub use tile_grid::*;

/// Hash map type to use for small keys like `Point3i`.
pub type SmallKeyHashMap<K, V> = ahash::AHashMap<K, V>;

pub mod prelude {
    pub use super::{
        Array2, ForEach2, ForEach3, Get, GetMut, GridCursor, GridTransform, SmallKeyHashMap,
        Stride, Tile, TileGrid, TileIndexer, TileValue, VoxelValue,
    };
}
