use al_core::error::CoreError;
use al_core::frame::FrameBuffer;
use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Output dimensions for a frame squeezed to `target_width` columns.
///
/// `height = round(target_width * src_height / src_width * char_aspect)`,
/// never below 1 row.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if the source or target width is zero.
///
/// # Example
/// ```
/// use al_source::resize::target_size;
/// assert_eq!(target_size(200, 100, 80, 0.55).unwrap(), (80, 22));
/// ```
pub fn target_size(
    src_width: u32,
    src_height: u32,
    target_width: u32,
    char_aspect: f32,
) -> Result<(u32, u32), CoreError> {
    if src_width == 0 || src_height == 0 || target_width == 0 {
        return Err(CoreError::InvalidDimensions {
            width: src_width,
            height: src_height,
        });
    }
    let aspect_ratio = f64::from(src_height) / f64::from(src_width);
    let height = (f64::from(target_width) * aspect_ratio * f64::from(char_aspect)).round();
    Ok((target_width, (height as u32).max(1)))
}

/// Squeezes frames to a fixed column count, correcting for tall terminal cells.
///
/// Holds the fast_image_resize state so it is reused across a whole batch.
/// The source buffer is consumed: its pixels are handed to the resizer
/// without an intermediate copy.
///
/// # Example
/// ```
/// use al_core::frame::FrameBuffer;
/// use al_source::resize::FrameFitter;
/// let mut fitter = FrameFitter::new(80, 0.55);
/// let dst = fitter.fit(FrameBuffer::new(200, 100)).unwrap();
/// assert_eq!((dst.width, dst.height), (80, 22));
/// ```
pub struct FrameFitter {
    inner: FirResizer,
    options: ResizeOptions,
    columns: u32,
    char_aspect: f32,
}

impl FrameFitter {
    /// Fitter producing `columns`-wide frames squashed by `char_aspect`.
    #[must_use]
    pub fn new(columns: u32, char_aspect: f32) -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom))
                .use_alpha(false),
            columns,
            char_aspect,
        }
    }

    /// Resample `src` to [`target_size`]. A frame already at that size is
    /// returned untouched.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] for a zero-sized frame, or an
    /// error if the pixel buffer does not match its dimensions.
    pub fn fit(&mut self, src: FrameBuffer) -> Result<FrameBuffer> {
        let (width, height) = target_size(src.width, src.height, self.columns, self.char_aspect)?;
        if (src.width, src.height) == (width, height) {
            return Ok(src);
        }

        let src_image = Image::from_vec_u8(src.width, src.height, src.data, PixelType::U8x4)
            .with_context(|| format!("Pixel buffer does not match {}x{}", src.width, src.height))?;
        let mut dst_image = Image::new(width, height, PixelType::U8x4);
        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .with_context(|| format!("Resize to {width}x{height} failed"))?;

        Ok(FrameBuffer {
            data: dst_image.into_vec(),
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_follows_rounded_aspect_formula() {
        // 80 * (480/640) * 0.55 = 33.0
        assert_eq!(target_size(640, 480, 80, 0.55).unwrap(), (80, 33));
        // 100 * (1080/1920) * 0.55 = 30.9375 → 31
        assert_eq!(target_size(1920, 1080, 100, 0.55).unwrap(), (100, 31));
        // 80 * 1.0 * 0.55 = 44.0
        assert_eq!(target_size(300, 300, 80, 0.55).unwrap(), (80, 44));
    }

    #[test]
    fn very_wide_images_keep_one_row() {
        assert_eq!(target_size(4000, 10, 80, 0.55).unwrap(), (80, 1));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            target_size(0, 10, 80, 0.55),
            Err(CoreError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(target_size(10, 10, 0, 0.55).is_err());
    }

    fn filled(width: u32, height: u32, value: u8) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        for px in fb.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[value, value, value, 255]);
        }
        fb
    }

    #[test]
    fn uniform_color_survives_resize() {
        let mut fitter = FrameFitter::new(16, 0.55);
        let dst = fitter.fit(filled(64, 48, 120)).unwrap();
        assert_eq!((dst.width, dst.height), (16, 7));
        assert_eq!(dst.data.len(), 16 * 7 * 4);
        assert!(dst.data.chunks_exact(4).all(|px| px[..3] == [120, 120, 120]));
    }

    #[test]
    fn frame_already_at_target_size_is_returned_as_is() {
        // 10 * (6/10) * 1.0 = 6 rows, same as the source
        let mut src = filled(10, 6, 0);
        src.data[0] = 77;
        let mut fitter = FrameFitter::new(10, 1.0);
        let dst = fitter.fit(src).unwrap();
        assert_eq!((dst.width, dst.height), (10, 6));
        assert_eq!(dst.data[0], 77);
    }

    #[test]
    fn fitter_is_reused_across_sizes() {
        let mut fitter = FrameFitter::new(8, 0.55);
        let wide = fitter.fit(filled(64, 16, 10)).unwrap();
        let tall = fitter.fit(filled(16, 64, 10)).unwrap();
        // 8 * 0.25 * 0.55 = 1.1 → 1; 8 * 4 * 0.55 = 17.6 → 18
        assert_eq!((wide.width, wide.height), (8, 1));
        assert_eq!((tall.width, tall.height), (8, 18));
    }

    #[test]
    fn zero_sized_frame_is_rejected_by_fitter() {
        let mut fitter = FrameFitter::new(8, 0.55);
        let err = fitter.fit(FrameBuffer::new(0, 4)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidDimensions { width: 0, height: 4 })
        ));
    }
}
