/// Pixel buffer decoded from a source image.
///
/// Stores pixels as RGBA row-major, 4 bytes per pixel.
///
/// # Example
/// ```
/// use al_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// RGBA pixels, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer of the given dimensions.
    ///
    /// # Example
    /// ```
    /// use al_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }
}

/// Perceptual luminance, ITU-R BT.601 in 16.16 fixed point:
/// `L = R*299/1000 + G*587/1000 + B*114/1000`, rounded.
#[inline(always)]
#[must_use]
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

/// Single-channel luminance image, row-major, one byte per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LumaFrame {
    /// Luminance values [0..255].
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl LumaFrame {
    /// Wrap an existing buffer. Returns `None` if the length does not match.
    ///
    /// # Example
    /// ```
    /// use al_core::frame::LumaFrame;
    /// let luma = LumaFrame::from_raw(2, 1, vec![0, 255]).unwrap();
    /// assert_eq!(luma.data[1], 255);
    /// assert!(LumaFrame::from_raw(2, 2, vec![0]).is_none());
    /// ```
    #[must_use]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize).then_some(Self {
            data,
            width,
            height,
        })
    }
}

/// A rendered ASCII frame: `height` rows of exactly `width` glyphs.
///
/// Serialized as LF-joined rows without a trailing newline.
///
/// # Example
/// ```
/// use al_core::frame::AsciiFrame;
/// let frame = AsciiFrame::from_glyphs(&['@', ' ', '.', '#'], 2).unwrap();
/// assert_eq!(frame.height(), 2);
/// assert_eq!(frame.to_text(), "@ \n.#");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiFrame {
    rows: Vec<String>,
    width: usize,
}

impl AsciiFrame {
    /// Split row-major glyphs into rows of `width` characters.
    ///
    /// Returns `None` when `width` is zero or the glyph count is not a
    /// multiple of `width`.
    #[must_use]
    pub fn from_glyphs(glyphs: &[char], width: usize) -> Option<Self> {
        if width == 0 || glyphs.len() % width != 0 {
            return None;
        }
        let rows = glyphs
            .chunks(width)
            .map(|row| row.iter().collect::<String>())
            .collect();
        Some(Self { rows, width })
    }

    /// Parse LF-joined text, checking that all rows share one length.
    ///
    /// # Example
    /// ```
    /// use al_core::frame::AsciiFrame;
    /// assert!(AsciiFrame::parse("ab\ncd").is_some());
    /// assert!(AsciiFrame::parse("ab\nc").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let rows: Vec<String> = text.split('\n').map(str::to_owned).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if rows.iter().any(|r| r.chars().count() != width) {
            return None;
        }
        Some(Self { rows, width })
    }

    /// Width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// LF-joined text as written to disk.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.rows.join("\n")
    }
}
