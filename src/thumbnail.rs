/// Thumbnail geometry and padded-canvas composition
///
/// This module holds the only real logic in the tool: computing proportional
/// down-scale dimensions that fit a bounding box without ever enlarging the
/// source, and compositing the scaled copy centered on a transparent canvas
/// of the exact target size.
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Compute the dimensions of a proportionally scaled copy of a
/// `width` x `height` image that fits within `max_width` x `max_height`
///
/// The aspect ratio is preserved and the source is never enlarged: an image
/// that already fits inside the bounds keeps its native dimensions. Scaled
/// dimensions are rounded to the nearest pixel, clamped to at least 1 and at
/// most the bound on each axis.
///
/// # Examples
///
/// ```
/// use favicon_gen::thumbnail::fit_within;
///
/// assert_eq!(fit_within(100, 50, 32, 32), (32, 16));
/// assert_eq!(fit_within(8, 8, 180, 180), (8, 8)); // never upscaled
/// ```
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );

    let scaled_w = (width as f64 * scale).round() as u32;
    let scaled_h = (height as f64 * scale).round() as u32;

    (
        scaled_w.clamp(1, max_width),
        scaled_h.clamp(1, max_height),
    )
}

/// Offset that centers `content` pixels inside `canvas` pixels on one axis,
/// integer-truncated (leftover space / 2)
pub fn center_offset(canvas: u32, content: u32) -> i64 {
    (canvas.saturating_sub(content) / 2) as i64
}

/// Produce a proportionally down-scaled copy of `src` fitting within
/// `max_width` x `max_height`
///
/// Uses Lanczos3 resampling to avoid aliasing at small icon sizes. Returns
/// an unmodified copy when the source already fits within the bounds.
pub fn scaled_copy(src: &RgbaImage, max_width: u32, max_height: u32) -> RgbaImage {
    let (w, h) = fit_within(src.width(), src.height(), max_width, max_height);
    if (w, h) == (src.width(), src.height()) {
        src.clone()
    } else {
        imageops::resize(src, w, h, FilterType::Lanczos3)
    }
}

/// Render `src` down-scaled and centered on a fully transparent canvas of
/// exactly `width` x `height` pixels
///
/// Pixels outside the scaled copy's footprint stay fully transparent; the
/// copy is blended onto the canvas using its own alpha channel.
pub fn padded_thumbnail(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let thumb = scaled_copy(src, width, height);
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    let x = center_offset(width, thumb.width());
    let y = center_offset(height, thumb.height());
    imageops::overlay(&mut canvas, &thumb, x, y);

    canvas
}
