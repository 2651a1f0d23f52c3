use std::path::{Path, PathBuf};
use std::time::Duration;

use al_core::cancel::CancelToken;
use al_core::error::CoreError;
use al_core::traits::{Pacer, Renderer};
use anyhow::{Context, Result};

/// Extension of rendered ASCII frames.
pub const FRAME_EXT: &str = "txt";

/// Playback state.
///
/// # Example
/// ```
/// use al_render::player::PlayerState;
/// let state = PlayerState::Stopped;
/// assert!(matches!(state, PlayerState::Stopped));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    /// Frames are being displayed.
    Running,
    /// Terminal state: end of a non-looping pass, interrupt, or nothing to play.
    Stopped,
}

/// Why playback ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The frame directory held no frames; the loop was never entered.
    NoFrames,
    /// A non-looping pass reached its last frame.
    Finished,
    /// The cancellation token was triggered.
    Interrupted,
}

/// Outcome of [`Player::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Number of render + pause cycles performed.
    pub frames_shown: usize,
    /// Number of complete passes over the frame set.
    pub passes_completed: u64,
    /// Why playback ended.
    pub reason: StopReason,
}

/// Lists the `.txt` frames of `ascii_dir`, sorted by file name.
///
/// A missing directory is treated as an empty frame set.
///
/// # Errors
/// Returns an error if the directory exists but cannot be read.
pub fn load_frame_list(ascii_dir: &Path) -> Result<Vec<PathBuf>> {
    if !ascii_dir.is_dir() {
        return Ok(Vec::new());
    }
    al_source::folder::scan_frames(ascii_dir, FRAME_EXT)
}

/// Delay between frames for `fps` (clamped to at least 1).
///
/// # Example
/// ```
/// use al_render::player::frame_delay;
/// use std::time::Duration;
/// assert_eq!(frame_delay(4), Duration::from_millis(250));
/// ```
#[must_use]
pub fn frame_delay(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(fps.max(1)))
}

/// Status line shown under each frame. Both indices are 1-based.
///
/// # Example
/// ```
/// use al_render::player::status_line;
/// assert_eq!(status_line(3, 120, 2), "Frame: 3/120 | Loop: 2");
/// ```
#[must_use]
pub fn status_line(frame: usize, count: usize, iteration: u64) -> String {
    format!("Frame: {frame}/{count} | Loop: {iteration}")
}

/// Fixed-rate playback loop over a directory of ASCII frames.
///
/// The start banner stays on screen for the configured start delay before
/// the first frame clears it. The cancellation token is checked at the top of
/// every frame.
///
/// # Example
/// ```no_run
/// use al_core::cancel::CancelToken;
/// use al_render::{Player, TerminalRenderer, ThreadPacer};
/// use std::path::Path;
///
/// use std::time::Duration;
///
/// let mut player = Player::new(TerminalRenderer::stdout(), ThreadPacer, CancelToken::new())
///     .with_start_delay(Duration::from_secs(1));
/// player.play(Path::new("ascii_frames"), 24, true).unwrap();
/// ```
pub struct Player<R: Renderer, P: Pacer> {
    renderer: R,
    pacer: P,
    cancel: CancelToken,
    state: PlayerState,
    start_delay: Duration,
}

impl<R: Renderer, P: Pacer> Player<R, P> {
    /// Build a stopped player with no start delay.
    pub fn new(renderer: R, pacer: P, cancel: CancelToken) -> Self {
        Self {
            renderer,
            pacer,
            cancel,
            state: PlayerState::Stopped,
            start_delay: Duration::ZERO,
        }
    }

    /// Hold the start banner for `delay` before the first frame.
    #[must_use]
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Shared access to the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Shared access to the pacer.
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Play every frame of `ascii_dir` at `fps`, forever if `looping`.
    ///
    /// # Errors
    /// Returns an error if the frame directory or a frame file cannot be read,
    /// or if the renderer fails.
    pub fn play(&mut self, ascii_dir: &Path, fps: u32, looping: bool) -> Result<PlaybackSummary> {
        let frames = load_frame_list(ascii_dir)?;
        let mut summary = PlaybackSummary {
            frames_shown: 0,
            passes_completed: 0,
            reason: StopReason::NoFrames,
        };

        if frames.is_empty() {
            let err = CoreError::EmptyFrameSet {
                dir: ascii_dir.display().to_string(),
            };
            log::warn!("{err}");
            self.renderer.notice(&err.to_string())?;
            return Ok(summary);
        }

        let delay = frame_delay(fps);
        let count = frames.len();
        self.renderer.notice(&format!(
            "Playing animation with {count} frames at {fps} FPS"
        ))?;
        self.renderer.notice("Press Ctrl+C to stop\n")?;
        if !self.start_delay.is_zero() {
            self.pacer.pause(self.start_delay);
        }

        self.state = PlayerState::Running;
        let mut iteration: u64 = 0;

        loop {
            log::debug!("Pass {} over {count} frames", iteration + 1);
            for (idx, path) in frames.iter().enumerate() {
                if self.cancel.is_cancelled() {
                    self.state = PlayerState::Stopped;
                    self.renderer.notice("\n\nAnimation stopped!")?;
                    log::info!("Playback interrupted after {} frames", summary.frames_shown);
                    summary.reason = StopReason::Interrupted;
                    return Ok(summary);
                }

                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Cannot read frame {}", path.display()))?;
                let status = status_line(idx + 1, count, iteration + 1);
                self.renderer.render(&text, &status)?;
                summary.frames_shown += 1;
                self.pacer.pause(delay);
            }

            iteration += 1;
            summary.passes_completed = iteration;
            if !looping {
                break;
            }
        }

        self.state = PlayerState::Stopped;
        summary.reason = StopReason::Finished;
        Ok(summary)
    }
}
