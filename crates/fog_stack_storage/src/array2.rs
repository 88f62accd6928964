//! A dense 2D array over an extent of the integer lattice.
//!
//! `Array2` contains data at exactly the set of points in its `Extent2i`, and
//! no more. It can be indexed by global `Point2i` or by flat [`Stride`], and
//! values are laid out row-major (x varies fastest), matching the traversal
//! order of `Extent2i::iter_points`.

use crate::{ForEach2, Get, GetMut, Stride};

use fog_stack_core::{Extent2i, Point2i};

use serde::{Deserialize, Serialize};

/// A map from `Point2i` to `T`, stored as a flat array on the heap.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Array2<T> {
    values: Vec<T>,
    extent: Extent2i,
}

impl<T> Array2<T> {
    /// Create a new `Array2` directly from the extent and values. This asserts
    /// that the number of points in the extent matches the length of `values`.
    pub fn new(extent: Extent2i, values: Vec<T>) -> Self {
        assert_eq!(extent.num_points(), values.len());

        Self { values, extent }
    }

    /// Creates an array that fills the entire `extent` with the same `value`.
    pub fn fill(extent: Extent2i, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(extent, vec![value; extent.num_points()])
    }

    /// Creates an array for `extent` where each point's value is determined by
    /// the `filler` function, evaluated in row-major order.
    pub fn fill_with(extent: Extent2i, mut filler: impl FnMut(Point2i) -> T) -> Self {
        let values = extent.iter_points().map(|p| filler(p)).collect();

        Self::new(extent, values)
    }

    #[inline]
    pub fn extent(&self) -> &Extent2i {
        &self.extent
    }

    /// Returns the entire slice of values.
    #[inline]
    pub fn values_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns the entire mutable slice of values.
    #[inline]
    pub fn values_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Moves the raw extent and values storage out of `self`.
    #[inline]
    pub fn into_parts(self) -> (Extent2i, Vec<T>) {
        (self.extent, self.values)
    }

    /// Returns `true` iff this map contains point `p`.
    #[inline]
    pub fn contains(&self, p: Point2i) -> bool {
        self.extent.contains(p)
    }

    /// The flat offset of global point `p`. Asserts in-bounds in debug mode.
    #[inline]
    pub fn stride_from_point(&self, p: Point2i) -> Stride {
        debug_assert!(self.extent.contains(p));
        let local = p - self.extent.minimum;

        Stride((local.x() + self.extent.shape.x() * local.y()) as usize)
    }

    /// A view of the values as raw bytes.
    #[inline]
    pub fn as_raw_bytes(&self) -> &[u8]
    where
        T: bytemuck::Pod,
    {
        bytemuck::cast_slice(&self.values)
    }
}

impl<T> Get<Stride> for Array2<T>
where
    T: Clone,
{
    type Data = T;

    #[inline]
    fn get(&self, stride: Stride) -> T {
        self.values[stride.0].clone()
    }
}

impl<T> GetMut<Stride> for Array2<T> {
    type Data = T;

    #[inline]
    fn get_mut(&mut self, stride: Stride) -> &mut T {
        &mut self.values[stride.0]
    }
}

impl<T> Get<Point2i> for Array2<T>
where
    T: Clone,
{
    type Data = T;

    #[inline]
    fn get(&self, p: Point2i) -> T {
        self.get(self.stride_from_point(p))
    }
}

impl<T> GetMut<Point2i> for Array2<T> {
    type Data = T;

    #[inline]
    fn get_mut(&mut self, p: Point2i) -> &mut T {
        let stride = self.stride_from_point(p);

        self.get_mut(stride)
    }
}

impl<T> ForEach2 for Array2<T>
where
    T: Clone,
{
    type Item = T;

    fn for_each(&self, extent: &Extent2i, mut f: impl FnMut(Point2i, T)) {
        // Only iterate the in-bounds section, so it's impossible to index out
        // of bounds.
        for p in extent.intersection(&self.extent).iter_points() {
            f(p, self.get(p));
        }
    }
}
