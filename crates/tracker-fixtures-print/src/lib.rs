//! Printable ArUco marker image generation.
//!
//! Renders one entry of a fixed dictionary into a padded 8-bit grayscale
//! raster and writes it to disk in a lossless format inferred from the file
//! extension. The rendered raster is what the downstream tracker is tested
//! against, so rendering is fully deterministic: the same dictionary, id and
//! sizes always produce byte-identical pixels.

mod io;
mod render;

pub use io::{generate_marker_image, write_marker_image, MarkerReport, MarkerWriteError};
pub use render::{
    render_marker, MarkerImageSpec, MarkerRenderError, DEFAULT_MARKER_SIZE_PX,
    DEFAULT_QUIET_ZONE_PX, MARKER_BORDER_BITS,
};
