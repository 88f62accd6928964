use core::ops::{Add, AddAssign, BitAnd, Mul, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A point on the 2D integer lattice.
///
/// The component array is public so callers can index components by axis, e.g.
/// `p.0[axis.index()]`.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct Point2i(pub [i32; 2]);

/// A point on the 3D integer lattice.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(transparent)]
pub struct Point3i(pub [i32; 3]);

unsafe impl bytemuck::Zeroable for Point2i {}
unsafe impl bytemuck::Pod for Point2i {}
unsafe impl bytemuck::Zeroable for Point3i {}
unsafe impl bytemuck::Pod for Point3i {}

impl Point2i {
    pub const ZERO: Self = Point2i([0; 2]);
    pub const ONES: Self = Point2i([1; 2]);

    /// A point with all components equal to `value`.
    #[inline]
    pub const fn fill(value: i32) -> Self {
        Point2i([value; 2])
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.0[1]
    }

    /// The componentwise minimum of `self` and `other`.
    #[inline]
    pub fn meet(self, other: Self) -> Self {
        Point2i([self.0[0].min(other.0[0]), self.0[1].min(other.0[1])])
    }

    /// The componentwise maximum of `self` and `other`.
    #[inline]
    pub fn join(self, other: Self) -> Self {
        Point2i([self.0[0].max(other.0[0]), self.0[1].max(other.0[1])])
    }
}

impl Point3i {
    pub const ZERO: Self = Point3i([0; 3]);
    pub const ONES: Self = Point3i([1; 3]);

    /// A point with all components equal to `value`.
    #[inline]
    pub const fn fill(value: i32) -> Self {
        Point3i([value; 3])
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.0[2]
    }

    /// The componentwise minimum of `self` and `other`.
    #[inline]
    pub fn meet(self, other: Self) -> Self {
        Point3i([
            self.0[0].min(other.0[0]),
            self.0[1].min(other.0[1]),
            self.0[2].min(other.0[2]),
        ])
    }

    /// The componentwise maximum of `self` and `other`.
    #[inline]
    pub fn join(self, other: Self) -> Self {
        Point3i([
            self.0[0].max(other.0[0]),
            self.0[1].max(other.0[1]),
            self.0[2].max(other.0[2]),
        ])
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map_components(self, f: impl Fn(i32) -> i32) -> Self {
        Point3i([f(self.0[0]), f(self.0[1]), f(self.0[2])])
    }

    /// `true` iff every component is a positive power of 2.
    #[inline]
    pub fn dimensions_are_powers_of_2(&self) -> bool {
        self.0.iter().all(|&c| c > 0 && (c & (c - 1)) == 0)
    }
}

macro_rules! impl_componentwise_ops {
    ($point:ty, $dims:literal) => {
        impl Add for $point {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                let mut c = self.0;
                for i in 0..$dims {
                    c[i] += rhs.0[i];
                }
                Self(c)
            }
        }

        impl Sub for $point {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                let mut c = self.0;
                for i in 0..$dims {
                    c[i] -= rhs.0[i];
                }
                Self(c)
            }
        }

        impl AddAssign for $point {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $point {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Mul<i32> for $point {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: i32) -> Self {
                let mut c = self.0;
                for i in 0..$dims {
                    c[i] *= rhs;
                }
                Self(c)
            }
        }

        impl BitAnd for $point {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                let mut c = self.0;
                for i in 0..$dims {
                    c[i] &= rhs.0[i];
                }
                Self(c)
            }
        }
    };
}

impl_componentwise_ops!(Point2i, 2);
impl_componentwise_ops!(Point3i, 3);
