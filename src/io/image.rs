//! PNG export of rendered compositions

use crate::io::canvas::RasterCanvas;
use crate::io::error::{Result, SketchError};
use std::path::Path;

/// Export a rendered canvas as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The canvas has no pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &RasterCanvas, output_path: &Path) -> Result<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(SketchError::InvalidFrameData {
            reason: format!(
                "Canvas has no pixels ({}x{})",
                canvas.width(),
                canvas.height()
            ),
        });
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .image()
        .save(output_path)
        .map_err(|e| SketchError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
