use crate::Arrangement;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;
use image::{GrayImage, Luma};

/// Value of pixels covered by an item
pub const FILLED: Luma<u8> = Luma([255]);

/// Value of background pixels
pub const EMPTY: Luma<u8> = Luma([0]);

/// Rasterizes the arrangement into a `width` x `height` two-valued image ([`FILLED`] and [`EMPTY`]).
/// Every item is drawn as the filled ellipse inscribed in its bounding box.
///
/// The pixels are stored as 8-bit grayscale: the BMP encoder of `image` cannot write 1 bit per pixel.
/// Fails if a dimension of the container does not fit in a `u32`.
pub fn arrangement_to_bitmap(arrangement: &Arrangement) -> LayoutResult<GrayImage> {
    let container = &arrangement.container;
    let too_large = || LayoutError::RasterTooLarge {
        width: container.width(),
        height: container.height(),
    };
    let width = u32::try_from(container.width()).map_err(|_| too_large())?;
    let height = u32::try_from(container.height()).map_err(|_| too_large())?;

    let mut image = GrayImage::from_pixel(width, height, EMPTY);
    for item in &arrangement.items {
        fill_ellipse(&mut image, item.bbox());
    }
    Ok(image)
}

/// Fills the ellipse inscribed in `bbox`, border pixels included.
/// Pixels outside of the image are ignored.
pub fn fill_ellipse(image: &mut GrayImage, bbox: Rect) {
    let image_rect = Rect::new(0, 0, image.width() as i64 - 1, image.height() as i64 - 1);
    let Some(clipped) = Rect::intersection(bbox, image_rect) else {
        return;
    };

    // half extents measured to the outer edge of the border pixels
    let rx = (bbox.width() as f64 + 1.0) / 2.0;
    let ry = (bbox.height() as f64 + 1.0) / 2.0;
    let cx = (bbox.x_min + bbox.x_max) as f64 / 2.0;
    let cy = (bbox.y_min + bbox.y_max) as f64 / 2.0;

    for y in clipped.y_min..=clipped.y_max {
        for x in clipped.x_min..=clipped.x_max {
            let dx = (x as f64 - cx) / rx;
            let dy = (y as f64 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                image.put_pixel(x as u32, y as u32, FILLED);
            }
        }
    }
}
