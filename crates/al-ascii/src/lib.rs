/// ASCII conversion engine for asciiloop.
///
/// Converts pixel frames to luminance and luminance to glyph grids.
pub mod luminance;

pub use luminance::{map_to_glyphs, to_grayscale};
