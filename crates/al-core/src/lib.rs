/// Configuration, types, and shared structures for asciiloop.
///
/// This crate contains the shared types, traits, and configuration logic
/// used by the converter and the player.

pub mod cancel;
pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use cancel::CancelToken;
pub use charset::GlyphRamp;
pub use config::AnimConfig;
pub use error::CoreError;
pub use frame::{AsciiFrame, FrameBuffer, LumaFrame};
