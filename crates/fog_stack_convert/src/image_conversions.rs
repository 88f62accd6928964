use crate::Slice;

pub use image;

use fog_stack_storage::Get;

use image::{ImageBuffer, Luma};

/// Converts a slice into a single-channel floating-point image buffer. Pixel
/// `(0, 0)` corresponds to the slice extent's minimum; writing the buffer to
/// disk stays with the caller.
pub fn slice_to_image(slice: &Slice) -> ImageBuffer<Luma<f32>, Vec<f32>> {
    let map_extent = *slice.values().extent();
    let img_extent = map_extent - map_extent.minimum;
    let shape = img_extent.shape;
    assert!(shape.x() > 0);
    assert!(shape.y() > 0);
    let (width, height) = (shape.x() as u32, shape.y() as u32);

    let mut img = ImageBuffer::new(width, height);
    for (map_p, img_p) in map_extent.iter_points().zip(img_extent.iter_points()) {
        *img.get_pixel_mut(img_p.x() as u32, img_p.y() as u32) = Luma([slice.values().get(map_p)]);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::extract_slices;

    use fog_stack_core::{Axis3, Extent3i, Point3i};
    use fog_stack_storage::TileGrid;

    #[test]
    fn pixels_match_slice_cells() {
        let mut grid = TileGrid::new(Point3i::fill(4), 0.0);
        grid.set_value_on(Point3i([-1, 2, 0]), 0.75);

        let bounds = Extent3i::from_min_and_shape(Point3i([-2, 0, 0]), Point3i([4, 4, 1]));
        let stack = extract_slices(&grid, Axis3::Z, bounds).unwrap();

        let img = slice_to_image(&stack.slices()[0]);

        assert_eq!(img.dimensions(), (4, 4));
        // The stored voxel lands at its extent-local pixel.
        assert_eq!(img.get_pixel(1, 2), &Luma([0.75]));
        assert_eq!(img.get_pixel(0, 0), &Luma([0.0]));
    }
}
