//! Spread compositing
//!
//! Two page rasters are placed side by side on one opaque canvas. Both
//! pages are top-aligned; the shorter page leaves background below it.

use crate::types::Background;
use image::{DynamicImage, GenericImageView, RgbImage, imageops};
use std::ffi::OsString;
use std::path::Path;

// =============================================================================
// Geometry
// =============================================================================

/// Pixel dimensions of a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &impl GenericImageView) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }
}

/// Canvas and placement of a two-page spread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadGeometry {
    pub canvas: Size,
    /// Top-left corner of the left page
    pub left_origin: (u32, u32),
    /// Top-left corner of the right page
    pub right_origin: (u32, u32),
}

/// Canvas is as wide as both pages and as tall as the taller one
pub fn spread_geometry(left: Size, right: Size) -> SpreadGeometry {
    SpreadGeometry {
        canvas: Size::new(left.width + right.width, left.height.max(right.height)),
        left_origin: (0, 0),
        right_origin: (left.width, 0),
    }
}

// =============================================================================
// Compositing
// =============================================================================

/// Composite two pages into one spread on an opaque background
pub fn compose_spread(left: &DynamicImage, right: &DynamicImage, background: Background) -> RgbImage {
    let geometry = spread_geometry(Size::of(left), Size::of(right));

    let mut canvas = RgbImage::from_pixel(
        geometry.canvas.width,
        geometry.canvas.height,
        background.to_rgb(),
    );

    for (page, (x, y)) in [
        (left, geometry.left_origin),
        (right, geometry.right_origin),
    ] {
        let rgb = flatten(page, background);
        imageops::replace(&mut canvas, &rgb, i64::from(x), i64::from(y));
    }

    canvas
}

/// Blend any alpha channel onto the background so the canvas stays opaque
fn flatten(page: &DynamicImage, background: Background) -> RgbImage {
    if !page.color().has_alpha() {
        return page.to_rgb8();
    }

    let rgba = page.to_rgba8();
    let bg = background.to_rgb();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let blend = |fg: u8, bg: u8| -> u8 {
            let a = u16::from(a);
            ((u16::from(fg) * a + u16::from(bg) * (255 - a) + 127) / 255) as u8
        };
        image::Rgb([blend(r, bg.0[0]), blend(g, bg.0[1]), blend(b, bg.0[2])])
    })
}

// =============================================================================
// Naming
// =============================================================================

/// Output file name for a spread: `<left stem>-<right file name>`.
///
/// `p00001.jpg` + `p00002.jpg` gives `p00001-p00002.jpg`.
pub fn spread_file_name(left: &Path, right: &Path) -> OsString {
    let mut name = left.file_stem().map(OsString::from).unwrap_or_default();
    name.push("-");
    if let Some(right_name) = right.file_name() {
        name.push(right_name);
    }
    name
}

// =============================================================================
// Tests
// =============================================================================
