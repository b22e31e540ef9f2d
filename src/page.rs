//! The page buffer.
//!
//! Programs never print straight to the display. Printed lines collect in a
//! buffer, and the buffer leaves rotated: a flush writes the flopped
//! contents to the sink, so each printed line becomes a column of the
//! displayed block. The `page` statement flushes mid-run; the driver
//! flushes once more at end-of-run.

use std::io::{self, Write};

use crate::rotate::flop;

/// Accumulator for program output. Owned by the driver and handed to the
/// evaluator, so independent runs never share state.
#[derive(Debug, Default)]
pub struct PageBuffer {
    zone: String,
}

impl PageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one printed line to the buffer.
    pub fn append(&mut self, text: &str) {
        self.zone.push_str(text);
        self.zone.push('\n');
    }

    /// Write the rotated buffer to the sink and reset the buffer. An empty
    /// buffer still produces a newline.
    pub fn flush(&mut self, sink: &mut dyn Write) -> io::Result<()> {
        writeln!(sink, "{}", flop(&self.zone))?;
        self.zone.clear();
        Ok(())
    }

    /// The unrotated buffer contents.
    pub fn contents(&self) -> &str {
        &self.zone
    }
}
