//! A sparse volumetric scalar field made of power-of-2 tiles.
//!
//! # Tiles and the background
//!
//! The grid takes a value at every possible `Point3i`: points not covered by a
//! stored tile read as the grid-wide background value. A stored tile is either
//! a single constant value spanning its whole extent, or a dense block of
//! voxel values with a per-voxel activity mask. Constant tiles are what keep
//! wide interior/exterior regions cheap; dense tiles hold the narrow band.
//!
//! Tile minimums are always multiples of the tile shape, and tile shape
//! dimensions must be powers of 2, which allows for efficiently calculating a
//! tile key from any point in the tile.
//!
//! # Iteration
//!
//! [`TileGrid::active_values`] yields every active voxel exactly once, in
//! implementation-defined traversal order. [`TileGrid::inactive_values`]
//! yields stored inactive regions that differ from the background, reporting a
//! constant tile once regardless of its extent, so sparse volumes never cost
//! O(volume) to walk. The `*_entry_mut` visitors mutate values at storage
//! granularity: a constant tile is visited once with the extent it covers.
//!
//! # Example
//! ```
//! use fog_stack_core::prelude::*;
//! use fog_stack_storage::prelude::*;
//!
//! let mut grid = TileGrid::new(Point3i::fill(8), 3.0);
//!
//! grid.set_value_on(Point3i([1, 2, 3]), -0.5);
//! grid.fill_tile(Point3i::fill(-8), 1.0, false);
//!
//! assert_eq!(grid.get(Point3i([1, 2, 3])), -0.5);
//! assert_eq!(grid.get(Point3i::fill(-1)), 1.0);
//! // Anywhere else reads the background.
//! assert_eq!(grid.get(Point3i::fill(100)), 3.0);
//! ```

use crate::{BitSet, ForEach3, Get, SmallKeyHashMap, Stride};

use fog_stack_core::{bounding_extent, Extent3i, Point3i};

use core::iter::once;
use core::ops::Neg;
use either::Either;
use serde::{Deserialize, Serialize};

/// Maps a voxel index coordinate to world space. Identity unless overridden.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct GridTransform {
    pub voxel_size: f32,
    pub origin: [f32; 3],
}

impl GridTransform {
    pub const IDENTITY: Self = Self {
        voxel_size: 1.0,
        origin: [0.0; 3],
    };

    #[inline]
    pub fn index_to_world(&self, p: Point3i) -> [f32; 3] {
        [
            self.origin[0] + self.voxel_size * p.x() as f32,
            self.origin[1] + self.voxel_size * p.y() as f32,
            self.origin[2] + self.voxel_size * p.z() as f32,
        ]
    }
}

impl Default for GridTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Calculates tile locations from lattice points.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct TileIndexer {
    tile_shape: Point3i,
    tile_shape_mask: Point3i,
}

impl TileIndexer {
    /// All dimensions of `tile_shape` must be powers of 2.
    #[inline]
    pub fn new(tile_shape: Point3i) -> Self {
        assert!(tile_shape.dimensions_are_powers_of_2());

        Self {
            tile_shape,
            tile_shape_mask: (tile_shape - Point3i::ONES).map_components(|c| !c),
        }
    }

    /// The constant shape of a tile. The same for all tiles.
    #[inline]
    pub fn tile_shape(&self) -> Point3i {
        self.tile_shape
    }

    /// The number of voxels covered by one tile.
    #[inline]
    pub fn num_points_per_tile(&self) -> usize {
        Extent3i::from_min_and_shape(Point3i::ZERO, self.tile_shape).num_points()
    }

    /// Returns the minimum of the tile that contains `point`.
    #[inline]
    pub fn min_of_tile_containing_point(&self, point: Point3i) -> Point3i {
        self.tile_shape_mask & point
    }

    /// Determines whether `min` is a valid tile minimum, i.e. a multiple of
    /// the tile shape.
    #[inline]
    pub fn tile_min_is_valid(&self, min: Point3i) -> bool {
        self.min_of_tile_containing_point(min) == min
    }

    /// The extent spanned by the tile at `min`.
    #[inline]
    pub fn extent_for_tile_with_min(&self, min: Point3i) -> Extent3i {
        Extent3i::from_min_and_shape(min, self.tile_shape)
    }

    /// The flat offset of `p` inside the tile at `tile_min`, row-major.
    #[inline]
    pub fn stride_in_tile(&self, tile_min: Point3i, p: Point3i) -> Stride {
        let local = p - tile_min;

        Stride(
            (local.x() + self.tile_shape.x() * (local.y() + self.tile_shape.y() * local.z()))
                as usize,
        )
    }
}

/// One stored tile: a constant value spanning the tile's extent, or a dense
/// block of voxels with an activity mask.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Tile<T> {
    Constant { value: T, active: bool },
    Voxels(VoxelTile<T>),
}

/// Dense per-voxel values and activity for one tile.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VoxelTile<T> {
    values: Vec<T>,
    mask: BitSet,
}

impl<T> VoxelTile<T> {
    fn splat(num_points: usize, value: T, active: bool) -> Self
    where
        T: Clone,
    {
        Self {
            values: vec![value; num_points],
            mask: if active {
                BitSet::all_set(num_points)
            } else {
                BitSet::all_unset(num_points)
            },
        }
    }
}

/// A voxel sample produced by grid iteration or point queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelValue<T> {
    pub point: Point3i,
    pub value: T,
    pub active: bool,
}

/// A constant-value region produced by inactive iteration. Reported once
/// regardless of how many voxels `extent` covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileValue<T> {
    pub extent: Extent3i,
    pub value: T,
}

/// A sparse 3D scalar field over an ambient background value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TileGrid<T> {
    indexer: TileIndexer,
    tiles: SmallKeyHashMap<Point3i, Tile<T>>,
    background: T,
    transform: GridTransform,
}

impl<T> TileGrid<T> {
    /// Creates an empty grid. All dimensions of `tile_shape` must be powers
    /// of 2.
    pub fn new(tile_shape: Point3i, background: T) -> Self {
        Self {
            indexer: TileIndexer::new(tile_shape),
            tiles: SmallKeyHashMap::default(),
            background,
            transform: GridTransform::IDENTITY,
        }
    }

    #[inline]
    pub fn indexer(&self) -> &TileIndexer {
        &self.indexer
    }

    #[inline]
    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    #[inline]
    pub fn set_transform(&mut self, transform: GridTransform) {
        self.transform = transform;
    }

    /// The value of every point not covered by a stored tile.
    #[inline]
    pub fn background(&self) -> T
    where
        T: Copy,
    {
        self.background
    }

    /// Returns `true` iff no tiles are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The number of stored tiles (constant and dense).
    #[inline]
    pub fn num_tiles(&self) -> usize {
        self.tiles.len()
    }
}

impl<T> TileGrid<T>
where
    T: Copy,
{
    /// Point query. Returns the background value where no tile is stored.
    #[inline]
    pub fn get_point(&self, p: Point3i) -> T {
        let min = self.indexer.min_of_tile_containing_point(p);

        match self.tiles.get(&min) {
            None => self.background,
            Some(Tile::Constant { value, .. }) => *value,
            Some(Tile::Voxels(tile)) => tile.values[self.indexer.stride_in_tile(min, p).0],
        }
    }

    /// Point query returning the value together with its activity state.
    #[inline]
    pub fn get_voxel(&self, p: Point3i) -> VoxelValue<T> {
        let min = self.indexer.min_of_tile_containing_point(p);

        match self.tiles.get(&min) {
            None => VoxelValue {
                point: p,
                value: self.background,
                active: false,
            },
            Some(Tile::Constant { value, active }) => VoxelValue {
                point: p,
                value: *value,
                active: *active,
            },
            Some(Tile::Voxels(tile)) => {
                let i = self.indexer.stride_in_tile(min, p).0;

                VoxelValue {
                    point: p,
                    value: tile.values[i],
                    active: tile.mask.bit_is_set(i),
                }
            }
        }
    }

    #[inline]
    pub fn is_active(&self, p: Point3i) -> bool {
        self.get_voxel(p).active
    }

    /// Writes a single voxel value and its activity, promoting a constant tile
    /// to dense voxels if needed.
    pub fn set_voxel(&mut self, p: Point3i, value: T, active: bool) {
        let min = self.indexer.min_of_tile_containing_point(p);
        let i = self.indexer.stride_in_tile(min, p).0;
        let num_points = self.indexer.num_points_per_tile();
        let background = self.background;

        let tile = self.tiles.entry(min).or_insert_with(|| Tile::Constant {
            value: background,
            active: false,
        });
        if let Tile::Constant { value, active } = *tile {
            *tile = Tile::Voxels(VoxelTile::splat(num_points, value, active));
        }
        if let Tile::Voxels(VoxelTile { values, mask }) = tile {
            values[i] = value;
            if active {
                mask.set_bit(i);
            } else {
                mask.unset_bit(i);
            }
        }
    }

    /// Writes an active voxel value.
    #[inline]
    pub fn set_value_on(&mut self, p: Point3i, value: T) {
        self.set_voxel(p, value, true);
    }

    /// Writes an inactive voxel value.
    #[inline]
    pub fn set_value_off(&mut self, p: Point3i, value: T) {
        self.set_voxel(p, value, false);
    }

    /// Replaces the whole tile at `min` with one constant value. Asserts that
    /// `min` is a valid tile minimum.
    pub fn fill_tile(&mut self, min: Point3i, value: T, active: bool) {
        assert!(
            self.indexer.tile_min_is_valid(min),
            "{:?} is not a multiple of the tile shape",
            min
        );

        self.tiles.insert(min, Tile::Constant { value, active });
    }

    /// Lazily yields every active voxel exactly once. Traversal order is
    /// implementation-defined; re-acquire the iterator to restart.
    pub fn active_values(&self) -> impl Iterator<Item = VoxelValue<T>> + '_ {
        self.tiles.iter().flat_map(move |(&min, tile)| {
            let extent = self.indexer.extent_for_tile_with_min(min);
            match tile {
                Tile::Constant { value, active } => {
                    let n = if *active { extent.num_points() } else { 0 };
                    let value = *value;

                    Either::Left(
                        extent
                            .iter_points()
                            .map(move |point| VoxelValue {
                                point,
                                value,
                                active: true,
                            })
                            .take(n),
                    )
                }
                Tile::Voxels(tile) => Either::Right(
                    extent
                        .iter_points()
                        .enumerate()
                        .filter(move |(i, _)| tile.mask.bit_is_set(*i))
                        .map(move |(i, point)| VoxelValue {
                            point,
                            value: tile.values[i],
                            active: true,
                        }),
                ),
            }
        })
    }

    /// Lazily yields the stored inactive regions whose value differs from the
    /// background: whole constant tiles once per tile, dense inactive voxels
    /// as single-voxel extents. Never visits unstored space.
    pub fn inactive_values(&self) -> impl Iterator<Item = TileValue<T>> + '_
    where
        T: PartialEq,
    {
        let background = self.background;

        self.tiles.iter().flat_map(move |(&min, tile)| {
            let extent = self.indexer.extent_for_tile_with_min(min);
            match tile {
                Tile::Constant { value, active } => {
                    let n = if !*active && *value != background { 1 } else { 0 };

                    Either::Left(
                        once(TileValue {
                            extent,
                            value: *value,
                        })
                        .take(n),
                    )
                }
                Tile::Voxels(tile) => Either::Right(
                    extent
                        .iter_points()
                        .enumerate()
                        .filter(move |(i, _)| {
                            !tile.mask.bit_is_set(*i) && tile.values[*i] != background
                        })
                        .map(move |(i, point)| TileValue {
                            extent: Extent3i::from_min_and_shape(point, Point3i::ONES),
                            value: tile.values[i],
                        }),
                ),
            }
        })
    }

    /// Visits every stored active entry for mutation: dense voxels one at a
    /// time, constant tiles once with the extent they cover.
    pub fn for_each_active_entry_mut(&mut self, mut f: impl FnMut(&Extent3i, &mut T)) {
        let indexer = self.indexer;
        for (&min, tile) in self.tiles.iter_mut() {
            let extent = indexer.extent_for_tile_with_min(min);
            match tile {
                Tile::Constant { value, active } => {
                    if *active {
                        f(&extent, value);
                    }
                }
                Tile::Voxels(VoxelTile { values, mask }) => {
                    for (i, (p, value)) in extent.iter_points().zip(values.iter_mut()).enumerate() {
                        if mask.bit_is_set(i) {
                            f(&Extent3i::from_min_and_shape(p, Point3i::ONES), value);
                        }
                    }
                }
            }
        }
    }

    /// Visits every stored inactive entry for mutation, at the same
    /// granularity as `for_each_active_entry_mut`. Activity states are
    /// preserved.
    pub fn for_each_inactive_entry_mut(&mut self, mut f: impl FnMut(&Extent3i, &mut T)) {
        let indexer = self.indexer;
        for (&min, tile) in self.tiles.iter_mut() {
            let extent = indexer.extent_for_tile_with_min(min);
            match tile {
                Tile::Constant { value, active } => {
                    if !*active {
                        f(&extent, value);
                    }
                }
                Tile::Voxels(VoxelTile { values, mask }) => {
                    for (i, (p, value)) in extent.iter_points().zip(values.iter_mut()).enumerate() {
                        if !mask.bit_is_set(i) {
                            f(&Extent3i::from_min_and_shape(p, Point3i::ONES), value);
                        }
                    }
                }
            }
        }
    }

    /// The smallest extent bounding all active voxels, or `None` if the grid
    /// has none.
    pub fn active_bounding_extent(&self) -> Option<Extent3i> {
        bounding_extent(self.tiles.iter().flat_map(move |(&min, tile)| {
            let extent = self.indexer.extent_for_tile_with_min(min);
            match tile {
                Tile::Constant { active, .. } => {
                    let n = if *active { 2 } else { 0 };

                    Either::Left(once(extent.minimum).chain(once(extent.max())).take(n))
                }
                Tile::Voxels(tile) => Either::Right(
                    extent
                        .iter_points()
                        .enumerate()
                        .filter(move |(i, _)| tile.mask.bit_is_set(*i))
                        .map(|(_, p)| p),
                ),
            }
        }))
    }

    /// The total number of active voxels.
    pub fn num_active_voxels(&self) -> usize {
        let per_tile = self.indexer.num_points_per_tile();

        self.tiles
            .values()
            .map(|tile| match tile {
                Tile::Constant { active: true, .. } => per_tile,
                Tile::Constant { .. } => 0,
                Tile::Voxels(tile) => tile.mask.num_set_bits(),
            })
            .sum()
    }

    /// Substitutes the background value. Stored inactive values equal to plus
    /// or minus the old background are rewritten sign-preserving, so signed
    /// narrow-band exteriors stay consistent with the new default.
    pub fn replace_background(&mut self, new_background: T)
    where
        T: PartialEq + Neg<Output = T>,
    {
        fn substitute<T>(value: &mut T, old: T, new: T)
        where
            T: Copy + PartialEq + Neg<Output = T>,
        {
            if *value == old {
                *value = new;
            } else if *value == -old {
                *value = -new;
            }
        }

        let old = self.background;
        for tile in self.tiles.values_mut() {
            match tile {
                Tile::Constant {
                    value,
                    active: false,
                } => substitute(value, old, new_background),
                Tile::Constant { .. } => {}
                Tile::Voxels(VoxelTile { values, mask }) => {
                    for (i, value) in values.iter_mut().enumerate() {
                        if !mask.bit_is_set(i) {
                            substitute(value, old, new_background);
                        }
                    }
                }
            }
        }

        self.background = new_background;
    }
}

impl<T> Get<Point3i> for TileGrid<T>
where
    T: Copy,
{
    type Data = T;

    #[inline]
    fn get(&self, p: Point3i) -> T {
        self.get_point(p)
    }
}

impl<T> ForEach3 for TileGrid<T>
where
    T: Copy,
{
    type Item = T;

    fn for_each(&self, extent: &Extent3i, mut f: impl FnMut(Point3i, T)) {
        let mut cursor = GridCursor::new(self);
        for p in extent.iter_points() {
            f(p, cursor.get(p));
        }
    }
}

/// A point-query accessor that caches the tile it last touched.
///
/// Consecutive queries usually land in the same tile, so a cursor turns most
/// lookups into an offset calculation instead of a hash map probe. Cursors
/// borrow the grid immutably, so independent consumers (one per slice, one per
/// worker) can each hold their own.
pub struct GridCursor<'a, T> {
    grid: &'a TileGrid<T>,
    tile_min: Point3i,
    tile: Option<&'a Tile<T>>,
    primed: bool,
}

impl<'a, T> GridCursor<'a, T>
where
    T: Copy,
{
    pub fn new(grid: &'a TileGrid<T>) -> Self {
        Self {
            grid,
            tile_min: Point3i::ZERO,
            tile: None,
            primed: false,
        }
    }

    /// Equivalent to `grid.get_point(p)`.
    #[inline]
    pub fn get(&mut self, p: Point3i) -> T {
        let min = self.grid.indexer.min_of_tile_containing_point(p);
        if !self.primed || min != self.tile_min {
            self.tile = self.grid.tiles.get(&min);
            self.tile_min = min;
            self.primed = true;
        }

        match self.tile {
            None => self.grid.background,
            Some(Tile::Constant { value, .. }) => *value,
            Some(Tile::Voxels(tile)) => tile.values[self.grid.indexer.stride_in_tile(min, p).0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::prelude::*;

    const TILE_SHAPE: Point3i = Point3i([4; 3]);

    #[test]
    fn write_and_read_points() {
        let mut grid = TileGrid::new(TILE_SHAPE, 0);

        let points = [
            [0, 0, 0],
            [1, 2, 3],
            [4, 0, 0],
            [0, 4, 0],
            [0, 0, 4],
            [3, 0, 0],
            [-3, 0, 0],
        ];

        for p in points.iter().cloned() {
            assert_eq!(grid.get(Point3i(p)), 0);
            grid.set_value_on(Point3i(p), 1);
            assert_eq!(grid.get(Point3i(p)), 1);
            assert!(grid.is_active(Point3i(p)));
        }
    }

    #[test]
    fn unstored_points_read_background() {
        let mut grid = TileGrid::new(TILE_SHAPE, 7);
        grid.set_value_on(Point3i::ZERO, 1);

        assert_eq!(grid.get(Point3i::fill(100)), 7);
        assert!(!grid.is_active(Point3i::fill(100)));
        // Inactive neighbors in the same tile hold the splatted background.
        assert_eq!(grid.get(Point3i([1, 0, 0])), 7);
    }

    #[test]
    fn constant_tile_reads_everywhere_in_its_extent() {
        let mut grid = TileGrid::new(TILE_SHAPE, 0.0);
        grid.fill_tile(Point3i::fill(4), -5.0, false);

        let extent = Extent3i::from_min_and_shape(Point3i::fill(4), TILE_SHAPE);
        for p in extent.iter_points() {
            assert_eq!(grid.get(p), -5.0);
            assert!(!grid.is_active(p));
        }
        assert_eq!(grid.get(Point3i::fill(3)), 0.0);
    }

    #[test]
    fn active_values_cover_every_active_voxel_exactly_once() {
        let mut grid = TileGrid::new(TILE_SHAPE, 0);

        let mut rng = rand::thread_rng();
        let mut expected = std::collections::BTreeSet::new();
        for _ in 0..100 {
            let p = Point3i([
                rng.gen_range(-8..8),
                rng.gen_range(-8..8),
                rng.gen_range(-8..8),
            ]);
            grid.set_value_on(p, 1);
            expected.insert(p.0);
        }

        let mut seen = Vec::new();
        for v in grid.active_values() {
            assert!(v.active);
            assert_eq!(v.value, 1);
            seen.push(v.point.0);
        }
        seen.sort_unstable();
        assert_eq!(seen.len(), expected.len());
        assert!(seen.iter().cloned().eq(expected.into_iter()));
        assert_eq!(grid.num_active_voxels(), seen.len());
    }

    #[test]
    fn inactive_values_report_tiles_not_voxels() {
        let mut grid = TileGrid::new(TILE_SHAPE, 2.0);
        grid.fill_tile(Point3i::fill(0), -2.0, false);
        grid.set_value_off(Point3i::fill(8), -1.0);
        // Equal to background, so not reported.
        grid.set_value_off(Point3i::fill(-8), 2.0);

        let mut entries: Vec<_> = grid.inactive_values().collect();
        entries.sort_by_key(|e| e.extent.minimum.0);

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].extent,
            Extent3i::from_min_and_shape(Point3i::fill(0), TILE_SHAPE)
        );
        assert_eq!(entries[0].value, -2.0);
        assert_eq!(
            entries[1].extent,
            Extent3i::from_min_and_shape(Point3i::fill(8), Point3i::ONES)
        );
        assert_eq!(entries[1].value, -1.0);
    }

    #[test]
    fn active_bounding_extent_is_tight() {
        let mut grid = TileGrid::new(TILE_SHAPE, 0);
        assert_eq!(grid.active_bounding_extent(), None);

        grid.set_value_on(Point3i([1, 1, 1]), 1);
        grid.set_value_on(Point3i([2, 3, 1]), 1);
        // Inactive data must not grow the active bounds.
        grid.set_value_off(Point3i([-20, 0, 0]), 9);

        assert_eq!(
            grid.active_bounding_extent(),
            Some(Extent3i::from_min_and_max(
                Point3i([1, 1, 1]),
                Point3i([2, 3, 1])
            ))
        );
    }

    #[test]
    fn replace_background_rewrites_stored_inactive_values_sign_preserving() {
        let mut grid = TileGrid::new(TILE_SHAPE, 3.0);
        grid.set_value_off(Point3i([0, 0, 0]), 3.0);
        grid.set_value_off(Point3i([1, 0, 0]), -3.0);
        grid.set_value_off(Point3i([2, 0, 0]), 1.5);
        grid.set_value_on(Point3i([3, 0, 0]), 3.0);
        grid.fill_tile(Point3i::fill(4), -3.0, false);

        grid.replace_background(0.0);

        assert_eq!(grid.background(), 0.0);
        assert_eq!(grid.get(Point3i([0, 0, 0])), 0.0);
        assert_eq!(grid.get(Point3i([1, 0, 0])), 0.0);
        // Values not equal to the old background are preserved.
        assert_eq!(grid.get(Point3i([2, 0, 0])), 1.5);
        // Active values are never substituted.
        assert_eq!(grid.get(Point3i([3, 0, 0])), 3.0);
        assert_eq!(grid.get(Point3i::fill(5)), 0.0);
        assert_eq!(grid.get(Point3i::fill(100)), 0.0);
    }

    #[test]
    fn cursor_agrees_with_random_access() {
        let mut grid = TileGrid::new(TILE_SHAPE, 0.5);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let p = Point3i([
                rng.gen_range(-16..16),
                rng.gen_range(-16..16),
                rng.gen_range(-16..16),
            ]);
            grid.set_voxel(p, rng.gen(), rng.gen());
        }

        let extent = Extent3i::from_min_and_shape(Point3i::fill(-20), Point3i::fill(40));
        let mut cursor = GridCursor::new(&grid);
        for p in extent.iter_points() {
            assert_eq!(cursor.get(p), grid.get_point(p));
        }
    }

    #[test]
    fn transform_maps_index_to_world() {
        let mut grid = TileGrid::new(TILE_SHAPE, 0);
        assert_eq!(grid.transform(), &GridTransform::IDENTITY);

        grid.set_transform(GridTransform {
            voxel_size: 0.5,
            origin: [1.0, 0.0, -1.0],
        });

        assert_eq!(
            grid.transform().index_to_world(Point3i([2, 4, 6])),
            [2.0, 2.0, 2.0]
        );
    }

    #[test]
    fn for_each_matches_point_queries() {
        let mut grid = TileGrid::new(TILE_SHAPE, 0);
        grid.set_value_on(Point3i([2, 2, 2]), 9);
        grid.fill_tile(Point3i::fill(4), 3, true);

        let extent = Extent3i::from_min_and_shape(Point3i::ZERO, Point3i::fill(10));
        grid.for_each(&extent, |p, value| assert_eq!(value, grid.get(p)));
    }
}
