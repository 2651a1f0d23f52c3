/// 10 characters, darkest → lightest. Space is the lightest symbol.
pub const RAMP_DEFAULT: &str = "@%#*+=-:. ";

/// Lookup table mapping luminance [0..255] → glyph.
///
/// Pre-computed at construction so the per-pixel cost is a single index.
/// Each glyph owns a bucket of `256 / len` luminance levels.
///
/// # Example
/// ```
/// use al_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::default();
/// assert_eq!(ramp.map(0), '@');
/// assert_eq!(ramp.map(255), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    lut: [char; 256],
}

impl GlyphRamp {
    /// Build a ramp from a charset ordered darkest→lightest.
    ///
    /// A charset with fewer than 2 characters falls back to [`RAMP_DEFAULT`].
    ///
    /// # Example
    /// ```
    /// use al_core::charset::GlyphRamp;
    /// let ramp = GlyphRamp::new("#. ");
    /// assert_eq!(ramp.map(0), '#');
    /// assert_eq!(ramp.map(255), ' ');
    /// ```
    #[must_use]
    pub fn new(charset: &str) -> Self {
        let glyphs: Vec<char> = charset.chars().collect();
        if glyphs.len() < 2 {
            log::warn!("Glyph ramp {charset:?} too short, using default ramp");
            return Self::new(RAMP_DEFAULT);
        }
        let len = glyphs.len();
        let mut lut = [' '; 256];
        for (v, slot) in lut.iter_mut().enumerate() {
            // v * len / 256 stays below len for v <= 255; min() guards the last bucket.
            *slot = glyphs[(v * len / 256).min(len - 1)];
        }
        Self { glyphs, lut }
    }

    /// Map a luminance value [0..255] to a glyph.
    ///
    /// # Example
    /// ```
    /// use al_core::charset::GlyphRamp;
    /// let ramp = GlyphRamp::default();
    /// assert_eq!(ramp.map(128), '=');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }

    /// Glyphs of the ramp, darkest first.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Number of glyphs in the ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a ramp holds at least two glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::new(RAMP_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ramp_maps_extremes() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.map(0), '@');
        assert_eq!(ramp.map(255), ' ');
        assert_eq!(ramp.map(128), '=');
    }

    #[test]
    fn every_luminance_maps_into_ramp() {
        let ramp = GlyphRamp::default();
        for v in 0..=255u8 {
            assert!(RAMP_DEFAULT.contains(ramp.map(v)), "luminance {v} out of ramp");
        }
    }

    #[test]
    fn buckets_follow_floor_rule() {
        let ramp = GlyphRamp::default();
        let chars: Vec<char> = RAMP_DEFAULT.chars().collect();
        for v in 0..=255u8 {
            let expected = chars[usize::from(v) * 10 / 256];
            assert_eq!(ramp.map(v), expected, "luminance {v}");
        }
        // Bucket edges: 25.6 levels per glyph.
        assert_eq!(ramp.map(25), '@');
        assert_eq!(ramp.map(26), '%');
        assert_eq!(ramp.map(230), '.');
        assert_eq!(ramp.map(231), ' ');
    }

    #[test]
    fn ramp_is_monotonic() {
        let ramp = GlyphRamp::default();
        let mut prev_idx = 0usize;
        for v in 0..=255u8 {
            let ch = ramp.map(v);
            let idx = ramp.glyphs().iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev_idx, "ramp not monotonic at luminance {v}");
            prev_idx = idx;
        }
    }

    #[test]
    fn short_charset_falls_back_to_default() {
        let ramp = GlyphRamp::new("x");
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp.map(0), '@');
    }
}
