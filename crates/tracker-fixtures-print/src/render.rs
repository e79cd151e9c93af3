//! Marker rasterization.

use image::{GrayImage, Luma};
use tracker_fixtures_aruco::Dictionary;

/// Marker border width in modules (OpenCV uses 1).
pub const MARKER_BORDER_BITS: usize = 1;

/// Default inner marker side length in pixels.
pub const DEFAULT_MARKER_SIZE_PX: u32 = 200;

/// Default white quiet-zone width around the marker, in pixels.
pub const DEFAULT_QUIET_ZONE_PX: u32 = 20;

/// Geometry of one rendered marker image.
#[derive(Clone, Copy, Debug)]
pub struct MarkerImageSpec {
    /// Marker id within the dictionary.
    pub marker_id: u32,
    /// Inner marker side length in pixels (quiet zone excluded).
    pub size_px: u32,
    /// White margin width on each side, in pixels.
    pub quiet_zone_px: u32,
}

impl Default for MarkerImageSpec {
    fn default() -> Self {
        Self {
            marker_id: 0,
            size_px: DEFAULT_MARKER_SIZE_PX,
            quiet_zone_px: DEFAULT_QUIET_ZONE_PX,
        }
    }
}

impl MarkerImageSpec {
    /// Output raster side length: inner marker plus quiet zone on both sides.
    #[inline]
    pub fn output_side_px(&self) -> u32 {
        self.size_px + 2 * self.quiet_zone_px
    }
}

/// Rasterization errors.
#[derive(thiserror::Error, Debug)]
pub enum MarkerRenderError {
    #[error("marker id {id} out of range for {dictionary} ({count} markers)")]
    IdOutOfRange {
        id: u32,
        dictionary: &'static str,
        count: usize,
    },
    #[error("marker size must be > 0 px")]
    ZeroSize,
}

/// Render one dictionary entry into a padded grayscale raster.
///
/// The marker grid is `marker_size + 2 * MARKER_BORDER_BITS` modules per
/// side; the border ring is always black and the inner bits follow the
/// dictionary code (row-major, black = 1). Modules are filled by
/// nearest-neighbor lookup so the raster is exactly `size_px` wide for any
/// requested size, and the whole grid is surrounded by a uniform white quiet
/// zone of `quiet_zone_px`.
pub fn render_marker(
    dict: Dictionary,
    spec: &MarkerImageSpec,
) -> Result<GrayImage, MarkerRenderError> {
    let code = dict
        .code(spec.marker_id)
        .ok_or(MarkerRenderError::IdOutOfRange {
            id: spec.marker_id,
            dictionary: dict.name,
            count: dict.len(),
        })?;
    if spec.size_px == 0 {
        return Err(MarkerRenderError::ZeroSize);
    }

    let bits = dict.marker_size;
    let cells = bits + 2 * MARKER_BORDER_BITS;
    let size = spec.size_px as usize;
    let quiet = spec.quiet_zone_px;

    let side = spec.output_side_px();
    let mut img = GrayImage::from_pixel(side, side, Luma([255u8]));

    for y in 0..size {
        let cy = y * cells / size;
        for x in 0..size {
            let cx = x * cells / size;
            if module_is_black(code, bits, cells, cx, cy) {
                img.put_pixel(quiet + x as u32, quiet + y as u32, Luma([0u8]));
            }
        }
    }

    Ok(img)
}

#[inline]
fn module_is_black(code: u64, bits: usize, cells: usize, cx: usize, cy: usize) -> bool {
    if cx == 0 || cy == 0 || cx + 1 == cells || cy + 1 == cells {
        return true;
    }
    let bx = cx - MARKER_BORDER_BITS;
    let by = cy - MARKER_BORDER_BITS;
    (code >> (by * bits + bx)) & 1 == 1
}
