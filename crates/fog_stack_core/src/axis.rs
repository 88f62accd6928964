use crate::Point3i;

use serde::{Deserialize, Serialize};

/// Either the X, Y, or Z axis.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Axis3 {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis3 {
    /// The index for a point's component on this axis.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn get_unit_vector(&self) -> Point3i {
        match self {
            Axis3::X => Point3i([1, 0, 0]),
            Axis3::Y => Point3i([0, 1, 0]),
            Axis3::Z => Point3i([0, 0, 1]),
        }
    }

    /// The two axes spanning the plane normal to this axis, in ascending
    /// order. When slicing along this axis, the first spans the slice's x and
    /// the second the slice's y.
    pub fn plane_axes(&self) -> [Axis3; 2] {
        match self {
            Axis3::X => [Axis3::Y, Axis3::Z],
            Axis3::Y => [Axis3::X, Axis3::Z],
            Axis3::Z => [Axis3::X, Axis3::Y],
        }
    }
}
