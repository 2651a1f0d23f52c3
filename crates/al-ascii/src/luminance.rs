use al_core::charset::GlyphRamp;
use al_core::frame::{AsciiFrame, FrameBuffer, LumaFrame};

/// Convert an RGBA frame to BT.601 luminance, one byte per pixel.
///
/// # Example
/// ```
/// use al_core::frame::FrameBuffer;
/// use al_ascii::luminance::to_grayscale;
///
/// let mut frame = FrameBuffer::new(2, 1);
/// frame.data[4..8].copy_from_slice(&[255, 255, 255, 255]);
/// let luma = to_grayscale(&frame);
/// assert_eq!(luma.data, vec![0, 255]);
/// ```
#[must_use]
pub fn to_grayscale(frame: &FrameBuffer) -> LumaFrame {
    let data = frame
        .data
        .chunks_exact(4)
        .map(|px| al_core::frame::luma_bt601(px[0], px[1], px[2]))
        .collect();
    LumaFrame {
        data,
        width: frame.width,
        height: frame.height,
    }
}

/// Map every luminance sample to a glyph and split the result into rows of
/// `luma.width` characters.
///
/// # Example
/// ```
/// use al_core::charset::GlyphRamp;
/// use al_core::frame::LumaFrame;
/// use al_ascii::luminance::map_to_glyphs;
///
/// let luma = LumaFrame::from_raw(3, 1, vec![0, 128, 255]).unwrap();
/// let frame = map_to_glyphs(&luma, &GlyphRamp::default());
/// assert_eq!(frame.to_text(), "@= ");
/// ```
#[must_use]
pub fn map_to_glyphs(luma: &LumaFrame, ramp: &GlyphRamp) -> AsciiFrame {
    let width = luma.width as usize;
    if width == 0 {
        return AsciiFrame::default();
    }
    // chunks_exact drops a ragged tail, so every row is exactly `width` wide.
    let glyphs: Vec<char> = luma
        .data
        .chunks_exact(width)
        .flatten()
        .map(|&v| ramp.map(v))
        .collect();
    AsciiFrame::from_glyphs(&glyphs, width).unwrap_or_default()
}
