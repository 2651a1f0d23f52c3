use std::io::{self, Stdout, Write};
use std::time::Duration;

use al_core::traits::{Pacer, Renderer};
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

/// Clears the screen and reprints each frame using crossterm commands.
///
/// Generic over the writer so output can be captured in tests.
///
/// # Example
/// ```
/// use al_core::traits::Renderer;
/// use al_render::terminal::TerminalRenderer;
///
/// let mut renderer = TerminalRenderer::new(Vec::new());
/// renderer.render("@@\n  ", "Frame: 1/1 | Loop: 1").unwrap();
/// ```
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<Stdout> {
    /// Renderer bound to the process stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Wrap an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame_text: &str, status_line: &str) -> Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(frame_text),
            Print("\n\n"),
            Print(status_line),
            Print("\n"),
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Blocks the calling thread for the frame delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
