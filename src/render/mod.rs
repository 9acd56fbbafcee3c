pub mod frame;

pub use frame::Frame;

use std::io::{self, Write};

/// Consumes one frame per tick.
pub trait Render {
    fn render(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Draws the ocean in place on an ANSI terminal.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    cleared: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cleared: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for ConsoleRenderer<W> {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        if !self.cleared {
            write!(self.out, "\x1b[2J")?;
            self.cleared = true;
        }
        write!(self.out, "\x1b[H")?;

        writeln!(self.out, "{}", frame.header())?;
        for line in frame.grid_lines() {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

/// One JSON document per frame, newline separated.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for JsonLinesRenderer<W> {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Discards frames; used for headless runs.
pub struct NullRenderer;

impl Render for NullRenderer {
    fn render(&mut self, _frame: &Frame) -> io::Result<()> {
        Ok(())
    }
}
