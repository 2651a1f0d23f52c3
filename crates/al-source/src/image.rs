use std::path::Path;

use al_core::error::CoreError;
use al_core::frame::FrameBuffer;

/// Decode an image file into an RGBA frame.
///
/// Any read or decode failure is reported as [`CoreError::ImageDecode`] so
/// callers can skip the frame instead of aborting a batch.
///
/// # Errors
/// Returns [`CoreError::ImageDecode`] if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use al_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("frames/0001.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, CoreError> {
    let img = image::open(path).map_err(|e| CoreError::ImageDecode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}
