//! Encoding markers to disk and reporting what was written.

use std::path::Path;

use image::GrayImage;
use log::debug;
use serde::{Deserialize, Serialize};
use tracker_fixtures_aruco::Dictionary;

use crate::render::{render_marker, MarkerImageSpec, MarkerRenderError};

/// Errors from rendering-and-writing a marker image.
#[derive(thiserror::Error, Debug)]
pub enum MarkerWriteError {
    #[error(transparent)]
    Render(#[from] MarkerRenderError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// What was generated: enough for a caller to confirm the invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerReport {
    pub dictionary: String,
    pub marker_id: u32,
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Write an already-rendered marker raster to `path`.
///
/// The encoding is inferred from the file extension (PNG for the default
/// fixture name).
pub fn write_marker_image(img: &GrayImage, path: impl AsRef<Path>) -> Result<(), MarkerWriteError> {
    img.save(path.as_ref())?;
    Ok(())
}

/// Render `spec` from `dict` and persist it at `path`.
///
/// Validation happens before any file is touched, so an invalid id or size
/// never leaves an output file behind.
pub fn generate_marker_image(
    dict: Dictionary,
    spec: &MarkerImageSpec,
    path: impl AsRef<Path>,
) -> Result<MarkerReport, MarkerWriteError> {
    let path = path.as_ref();
    let img = render_marker(dict, spec)?;
    write_marker_image(&img, path)?;
    debug!(
        "wrote {} marker id {} as {}x{} px to {}",
        dict.name,
        spec.marker_id,
        img.width(),
        img.height(),
        path.display()
    );

    Ok(MarkerReport {
        dictionary: dict.name.to_string(),
        marker_id: spec.marker_id,
        path: path.display().to_string(),
        width: img.width(),
        height: img.height(),
    })
}
