//! Extraction of dense 2D slices from a sparse grid.
//!
//! The extractor walks a bounding region along one principal axis and fills
//! one dense buffer per depth index by point-querying the grid, so cells not
//! covered by stored tiles take the grid's background value. Queries go
//! through a [`GridCursor`], which keeps runs of adjacent lookups inside the
//! same tile from re-probing the hash map.
//!
//! Extraction is a pure function of grid state: the same grid always yields
//! bit-identical stacks.

use crate::ConvertError;

use fog_stack_core::{Axis3, Extent2i, Extent3i, Point2i, Point3i};
use fog_stack_storage::{Array2, GridCursor, TileGrid};

/// One dense cross-section of the volume at a fixed depth index. The 2D
/// extent keeps the global in-plane coordinates of the bounding region.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    depth: i32,
    values: Array2<f32>,
}

impl Slice {
    /// The depth index along the stack's slicing axis.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    #[inline]
    pub fn values(&self) -> &Array2<f32> {
        &self.values
    }

    #[inline]
    pub fn into_parts(self) -> (i32, Array2<f32>) {
        (self.depth, self.values)
    }
}

/// Slices of one bounding region, ordered by increasing depth index. The
/// ordering is part of the contract: stack viewers assume monotonic depth.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceStack {
    axis: Axis3,
    bounds: Extent3i,
    slices: Vec<Slice>,
}

impl SliceStack {
    #[inline]
    pub fn axis(&self) -> Axis3 {
        self.axis
    }

    #[inline]
    pub fn bounds(&self) -> &Extent3i {
        &self.bounds
    }

    #[inline]
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    #[inline]
    pub fn into_slices(self) -> Vec<Slice> {
        self.slices
    }
}

/// Extracts the slice stack covering `bounds` along `axis`. Callers usually
/// pass the grid's active bounding extent. Fails with
/// [`ConvertError::EmptyBoundingBox`] if `bounds` covers no voxels.
pub fn extract_slices(
    grid: &TileGrid<f32>,
    axis: Axis3,
    bounds: Extent3i,
) -> Result<SliceStack, ConvertError> {
    extract_slices_while(grid, axis, bounds, || true)
}

/// Like [`extract_slices`], but checks `keep_going` between slices and fails
/// with [`ConvertError::Cancelled`] once it returns `false`. This bounds the
/// abort latency of a conversion over a very large grid to one slice.
pub fn extract_slices_while(
    grid: &TileGrid<f32>,
    axis: Axis3,
    bounds: Extent3i,
    mut keep_going: impl FnMut() -> bool,
) -> Result<SliceStack, ConvertError> {
    if bounds.is_empty() {
        return Err(ConvertError::EmptyBoundingBox { extent: bounds });
    }

    let [u, v] = axis.plane_axes();
    let slice_extent = Extent2i::from_min_and_shape(
        Point2i([bounds.minimum.0[u.index()], bounds.minimum.0[v.index()]]),
        Point2i([bounds.shape.0[u.index()], bounds.shape.0[v.index()]]),
    );
    let depth_min = bounds.minimum.0[axis.index()];
    let depth_max = bounds.max().0[axis.index()];

    let mut slices = Vec::with_capacity((depth_max - depth_min + 1) as usize);
    for depth in depth_min..=depth_max {
        if !keep_going() {
            return Err(ConvertError::Cancelled { depth });
        }

        // Row-major fill means consecutive queries walk along `u`, so the
        // cursor stays inside one tile for whole runs. Each slice gets its own
        // cursor; depth indices are independent once the grid is remapped.
        let mut cursor = GridCursor::new(grid);
        let values = Array2::fill_with(slice_extent, |q| {
            let mut p = Point3i::ZERO;
            p.0[axis.index()] = depth;
            p.0[u.index()] = q.x();
            p.0[v.index()] = q.y();

            cursor.get(p)
        });

        slices.push(Slice { depth, values });
    }
    tracing::debug!(slices = slices.len(), axis = ?axis, "extracted slice stack");

    Ok(SliceStack {
        axis,
        bounds,
        slices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use fog_stack_storage::Get;
    use pretty_assertions::assert_eq;

    fn value_for_point(p: Point3i) -> f32 {
        (p.x() + 10 * p.y() + 100 * p.z()) as f32
    }

    fn labeled_grid(extent: &Extent3i) -> TileGrid<f32> {
        let mut grid = TileGrid::new(Point3i::fill(4), 0.0);
        for p in extent.iter_points() {
            grid.set_value_on(p, value_for_point(p));
        }

        grid
    }

    #[test]
    fn four_cubed_region_yields_four_ordered_slices() {
        let bounds = Extent3i::from_min_and_shape(Point3i::ZERO, Point3i::fill(4));
        let grid = labeled_grid(&bounds);

        let stack = extract_slices(&grid, Axis3::Z, bounds).unwrap();

        assert_eq!(stack.len(), 4);
        for (i, slice) in stack.slices().iter().enumerate() {
            assert_eq!(slice.depth(), i as i32);
            assert_eq!(slice.values().extent().shape, Point2i([4, 4]));
        }
    }

    #[test]
    fn every_bounds_point_appears_in_exactly_one_slice_cell() {
        let bounds = Extent3i::from_min_and_shape(Point3i([-2, 1, 0]), Point3i([3, 4, 5]));
        let grid = labeled_grid(&bounds);

        for &axis in [Axis3::X, Axis3::Y, Axis3::Z].iter() {
            let stack = extract_slices(&grid, axis, bounds).unwrap();
            let [u, v] = axis.plane_axes();

            let cells: usize = stack
                .slices()
                .iter()
                .map(|s| s.values().extent().num_points())
                .sum();
            assert_eq!(cells, bounds.num_points());

            // Each 3D point is found at its unique (slice, cell) address with
            // the value written there, so no point is skipped or duplicated.
            for p in bounds.iter_points() {
                let depth = p.0[axis.index()];
                let slice = &stack.slices()[(depth - bounds.minimum.0[axis.index()]) as usize];
                let q = Point2i([p.0[u.index()], p.0[v.index()]]);

                assert_eq!(slice.values().get(q), value_for_point(p));
            }
        }
    }

    #[test]
    fn uncovered_cells_take_the_background_value() {
        let mut grid = TileGrid::new(Point3i::fill(4), 0.25);
        grid.set_value_on(Point3i::ZERO, 9.0);

        let bounds = Extent3i::from_min_and_shape(Point3i([-1, -1, 0]), Point3i([3, 3, 1]));
        let stack = extract_slices(&grid, Axis3::Z, bounds).unwrap();

        let slice = &stack.slices()[0];
        assert_eq!(slice.values().get(Point2i([0, 0])), 9.0);
        assert_eq!(slice.values().get(Point2i([-1, -1])), 0.25);
        assert_eq!(slice.values().get(Point2i([1, 1])), 0.25);
    }

    #[test]
    fn extraction_is_deterministic() {
        use rand::prelude::*;

        let mut grid = TileGrid::new(Point3i::fill(4), 0.0);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let p = Point3i([
                rng.gen_range(-8..8),
                rng.gen_range(-8..8),
                rng.gen_range(-8..8),
            ]);
            grid.set_voxel(p, rng.gen(), rng.gen());
        }

        let bounds = Extent3i::from_min_and_shape(Point3i::fill(-8), Point3i::fill(16));
        let first = extract_slices(&grid, Axis3::Y, bounds).unwrap();
        let second = extract_slices(&grid, Axis3::Y, bounds).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_bounds_fail() {
        let grid = TileGrid::new(Point3i::fill(4), 0.0);
        let bounds = Extent3i::from_min_and_shape(Point3i::ZERO, Point3i([4, 0, 4]));

        assert_eq!(
            extract_slices(&grid, Axis3::Z, bounds),
            Err(ConvertError::EmptyBoundingBox { extent: bounds })
        );
    }

    #[test]
    fn cancellation_between_slices_reports_depth_reached() {
        let bounds = Extent3i::from_min_and_shape(Point3i::ZERO, Point3i::fill(4));
        let grid = labeled_grid(&bounds);

        let mut budget = 2;
        let result = extract_slices_while(&grid, Axis3::Z, bounds, || {
            if budget == 0 {
                return false;
            }
            budget -= 1;

            true
        });

        assert_eq!(result, Err(ConvertError::Cancelled { depth: 2 }));
    }
}
