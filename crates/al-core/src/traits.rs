use std::time::Duration;

use anyhow::Result;

/// Draws pre-rendered ASCII frames somewhere visible.
///
/// Implemented by : `TerminalRenderer`. Tests use recording renderers.
///
/// # Example
/// ```
/// use al_core::traits::Renderer;
///
/// struct NullRenderer;
/// impl Renderer for NullRenderer {
///     fn render(&mut self, _frame_text: &str, _status_line: &str) -> anyhow::Result<()> { Ok(()) }
///     fn notice(&mut self, _message: &str) -> anyhow::Result<()> { Ok(()) }
/// }
/// ```
pub trait Renderer {
    /// Replace whatever is on display with `frame_text`, followed by `status_line`.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn render(&mut self, frame_text: &str, status_line: &str) -> Result<()>;

    /// Print an out-of-band message (start banner, stop acknowledgment, ...).
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn notice(&mut self, message: &str) -> Result<()>;
}

/// Waits between frames.
///
/// # Example
/// ```
/// use al_core::traits::Pacer;
/// use std::time::Duration;
///
/// struct NoWait;
/// impl Pacer for NoWait {
///     fn pause(&mut self, _delay: Duration) {}
/// }
/// ```
pub trait Pacer {
    /// Block for `delay`.
    fn pause(&mut self, delay: Duration);
}
