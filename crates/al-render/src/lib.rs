/// Terminal playback for asciiloop.
///
/// Provides the crossterm renderer, the frame pacer and the playback loop.
pub mod player;
pub mod terminal;

pub use player::{PlaybackSummary, Player, StopReason};
pub use terminal::{TerminalRenderer, ThreadPacer};
