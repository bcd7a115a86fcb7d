//! Scale-to-boundary computation for placing a raster on a document page.
//!
//! The fit is a two-pass clamp: width first, then height. Each pass that
//! clamps a dimension re-derives the other one from the *original* image
//! aspect ratio, so a raster that overflows in both directions still ends up
//! with its native proportions. Division truncates, matching the integer
//! point grid PDF content streams use here.

/// Default page width in PDF points (US Letter).
pub const PAGE_WIDTH_PTS: u32 = 612;

/// Default page height in PDF points (US Letter).
pub const PAGE_HEIGHT_PTS: u32 = 792;

/// Scale `image` to fit inside `boundary`, preserving aspect ratio.
///
/// Never upscales: an image already inside the boundary is returned
/// unchanged. Pure and total for positive inputs; intermediate products use
/// `u64` so no realistic raster size can overflow.
pub fn fit_to_boundary(image: (u32, u32), boundary: (u32, u32)) -> (u32, u32) {
    let (image_w, image_h) = image;
    let (bound_w, bound_h) = boundary;

    let mut width = image_w;
    let mut height = image_h;

    // scale in width
    if width > bound_w {
        width = bound_w;
        height = (width as u64 * image_h as u64 / image_w as u64) as u32;
    }

    // scale in height, re-deriving width from the original ratio
    if height > bound_h {
        height = bound_h;
        width = (height as u64 * image_w as u64 / image_h as u64) as u32;
    }

    (width, height)
}
