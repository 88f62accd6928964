use crate::{Point2i, Point3i};

use core::ops::{Add, Sub};
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// A 2-dimensional extent: the Cartesian product of a half-closed interval
/// `[a, b)` in each dimension. Think of it as an axis-aligned rectangle with a
/// minimum point and a shape.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Extent2i {
    /// The least point contained in the extent.
    pub minimum: Point2i,
    /// The length of each dimension.
    pub shape: Point2i,
}

/// A 3-dimensional extent: an axis-aligned box with a minimum point and a
/// shape. This is the primary structure used to bound queries against grids.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Extent3i {
    /// The least point contained in the extent.
    pub minimum: Point3i,
    /// The length of each dimension.
    pub shape: Point3i,
}

macro_rules! impl_extent {
    ($extent:ty, $point:ty, $dims:literal) => {
        impl $extent {
            /// The default representation of an extent as the minimum point and shape.
            #[inline]
            pub fn from_min_and_shape(minimum: $point, shape: $point) -> Self {
                Self { minimum, shape }
            }

            /// An alternative representation as the minimum point and least upper bound.
            #[inline]
            pub fn from_min_and_lub(minimum: $point, least_upper_bound: $point) -> Self {
                // Avoid negative shape components.
                let shape = (least_upper_bound - minimum).join(<$point>::ZERO);

                Self { minimum, shape }
            }

            /// An alternative representation as the minimum point and the unique maximum
            /// point.
            #[inline]
            pub fn from_min_and_max(minimum: $point, max: $point) -> Self {
                Self::from_min_and_lub(minimum, max + <$point>::ONES)
            }

            /// The least point `p` for which all points `q` in the extent satisfy `q < p`.
            #[inline]
            pub fn least_upper_bound(&self) -> $point {
                self.minimum + self.shape
            }

            /// The unique greatest point in the extent.
            #[inline]
            pub fn max(&self) -> $point {
                self.least_upper_bound() - <$point>::ONES
            }

            /// Returns `true` iff the point `p` is contained in this extent.
            #[inline]
            pub fn contains(&self, p: $point) -> bool {
                let lub = self.least_upper_bound();

                (0..$dims).all(|i| self.minimum.0[i] <= p.0[i] && p.0[i] < lub.0[i])
            }

            /// Returns the extent containing only the points in both `self` and `other`.
            #[inline]
            pub fn intersection(&self, other: &Self) -> Self {
                let minimum = self.minimum.join(other.minimum);
                let lub = self.least_upper_bound().meet(other.least_upper_bound());

                Self::from_min_and_lub(minimum, lub)
            }

            /// Returns `true` iff the intersection of `self` and `other` equals `self`.
            #[inline]
            pub fn is_subset_of(&self, other: &Self) -> bool {
                self.intersection(other).eq(self)
            }

            /// The number of points contained in the extent.
            #[inline]
            pub fn num_points(&self) -> usize {
                self.shape.0.iter().map(|&c| c as i64).product::<i64>() as usize
            }

            /// Returns `true` iff the number of points in the extent is 0.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.num_points() == 0
            }
        }

        impl Add<$point> for $extent {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $point) -> Self {
                Self {
                    minimum: self.minimum + rhs,
                    shape: self.shape,
                }
            }
        }

        impl Sub<$point> for $extent {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $point) -> Self {
                Self {
                    minimum: self.minimum - rhs,
                    shape: self.shape,
                }
            }
        }
    };
}

impl_extent!(Extent2i, Point2i, 2);
impl_extent!(Extent3i, Point3i, 3);

impl Extent2i {
    /// Iterate over all points in the extent, row-major (x varies fastest).
    pub fn iter_points(&self) -> impl Iterator<Item = Point2i> {
        let min = self.minimum;
        let lub = self.least_upper_bound();

        iproduct!(min.y()..lub.y(), min.x()..lub.x()).map(|(y, x)| Point2i([x, y]))
    }
}

impl Extent3i {
    /// Iterate over all points in the extent, row-major (x varies fastest,
    /// then y, then z).
    pub fn iter_points(&self) -> impl Iterator<Item = Point3i> {
        let min = self.minimum;
        let lub = self.least_upper_bound();

        iproduct!(min.z()..lub.z(), min.y()..lub.y(), min.x()..lub.x())
            .map(|(z, y, x)| Point3i([x, y, z]))
    }
}

/// Returns the smallest extent containing all of the given points, or `None`
/// for an empty set of points.
pub fn bounding_extent(points: impl Iterator<Item = Point3i>) -> Option<Extent3i> {
    let mut bounds: Option<(Point3i, Point3i)> = None;
    for p in points {
        bounds = Some(match bounds {
            Some((min, max)) => (min.meet(p), max.join(p)),
            None => (p, p),
        });
    }

    bounds.map(|(min, max)| Extent3i::from_min_and_max(min, max))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn row_major_extent_iter2() {
        let extent = Extent2i::from_min_and_shape(Point2i([0, 0]), Point2i([2, 2]));

        let points: Vec<_> = extent.iter_points().collect();

        assert_eq!(
            points,
            vec![
                Point2i([0, 0]),
                Point2i([1, 0]),
                Point2i([0, 1]),
                Point2i([1, 1]),
            ]
        );
    }

    #[test]
    fn row_major_extent_iter3() {
        let extent = Extent3i::from_min_and_shape(Point3i([0, 0, 0]), Point3i([2, 2, 2]));

        let points: Vec<_> = extent.iter_points().collect();

        assert_eq!(
            points,
            vec![
                Point3i([0, 0, 0]),
                Point3i([1, 0, 0]),
                Point3i([0, 1, 0]),
                Point3i([1, 1, 0]),
                Point3i([0, 0, 1]),
                Point3i([1, 0, 1]),
                Point3i([0, 1, 1]),
                Point3i([1, 1, 1]),
            ]
        );
    }

    #[test]
    fn empty_intersection_is_empty() {
        let e1 = Extent3i::from_min_and_max(Point3i::fill(0), Point3i::fill(1));
        let e2 = Extent3i::from_min_and_max(Point3i::fill(3), Point3i::fill(4));

        // A naive implementation might say the shape is [-2, -2, -2].
        assert_eq!(e1.intersection(&e2).shape, Point3i::fill(0));
        assert!(e1.intersection(&e2).is_empty());
    }

    #[test]
    fn bounding_extent_of_scattered_points() {
        let points = vec![Point3i([0, -1, 4]), Point3i([2, 3, 0]), Point3i([1, 0, 1])];

        let extent = bounding_extent(points.into_iter()).unwrap();

        assert_eq!(
            extent,
            Extent3i::from_min_and_max(Point3i([0, -1, 0]), Point3i([2, 3, 4]))
        );
        assert!(bounding_extent(std::iter::empty()).is_none());
    }
}
