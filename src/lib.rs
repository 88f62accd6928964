//! Convert sparse signed-distance volumes into dense fog-density slice stacks
//! for floating-point image export.
//!
//! This library is organized into several crates:
//! - **core**: lattice point, extent, and axis data types
//! - **storage**: sparse tile grids and dense slice buffers
//! - **convert**: the density remap, slice extraction, and export pipeline
//!
//! The container file reader and the binary image encoder stay behind the
//! `GridSource` and `SliceEncoder` seams in **convert**; this workspace never
//! parses or writes those formats itself.
//!
//! # Example
//! ```
//! use fog_stack::prelude::*;
//!
//! // A block of zero-distance voxels at the origin of a level set.
//! let mut grid = TileGrid::new(Point3i::fill(8), 2.0);
//! for p in Extent3i::from_min_and_shape(Point3i::ZERO, Point3i::fill(4)).iter_points() {
//!     grid.set_value_on(p, 0.0);
//! }
//!
//! let grid = sdf_to_fog(grid).unwrap();
//! let bounds = grid.active_bounding_extent().unwrap();
//! let stack = extract_slices(&grid, Axis3::Z, bounds).unwrap();
//!
//! assert_eq!(stack.len(), 4);
//! assert_eq!(stack.slices()[0].values().get(Point2i::ZERO), 0.5);
//! ```

pub use fog_stack_convert as convert;
pub use fog_stack_core as core;
pub use fog_stack_storage as storage;

pub mod prelude {
    pub use super::convert::prelude::*;
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;
}
