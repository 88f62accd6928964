//! The core data types for addressing volumes on 2D and 3D integer lattices.
//!
//! Everything in this crate is geometry-only: points, axis-aligned extents, and
//! principal axes. Storage for values at lattice points lives in
//! `fog_stack_storage`.

pub mod axis;
pub mod extent;
pub mod point;

pub use axis::*;
pub use extent::*;
pub use point::*;

pub mod prelude {
    pub use super::{bounding_extent, Axis3, Extent2i, Extent3i, Point2i, Point3i};
}
