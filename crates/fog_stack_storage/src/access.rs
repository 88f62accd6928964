//! Traits defining different ways to access data from grids and arrays.
//!
//! `Get`/`GetMut` cover random access by point or flat [`Stride`], while
//! `ForEach2`/`ForEach3` iterate a sub-extent with a closure, which is the
//! fast path for bulk reads.

use core::ops::{Add, AddAssign};

use fog_stack_core::{Extent2i, Extent3i, Point2i, Point3i};

/// A flat array offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stride(pub usize);

impl Add for Stride {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // Wraps for modular indexing arithmetic.
        Stride(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Stride {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

pub trait Get<L> {
    type Data;

    /// Get an owned value at `location`.
    fn get(&self, location: L) -> Self::Data;
}

pub trait GetMut<L> {
    type Data;

    /// Get a mutable reference to the value at `location`.
    fn get_mut(&mut self, location: L) -> &mut Self::Data;
}

pub trait ForEach2 {
    type Item;

    fn for_each(&self, extent: &Extent2i, f: impl FnMut(Point2i, Self::Item));
}

pub trait ForEach3 {
    type Item;

    fn for_each(&self, extent: &Extent3i, f: impl FnMut(Point3i, Self::Item));
}
