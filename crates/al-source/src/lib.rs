/// Image sources for asciiloop: decoding, aspect-corrected resizing and
/// frame directory scanning.

pub mod folder;
pub mod image;
pub mod resize;
