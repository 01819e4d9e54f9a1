//! The diagnostic stream.
//!
//! Usage lines, noun listings, help output and filter messages are written
//! to a [`Console`], which is stderr unless a writer is injected. Styling is
//! only applied when that stderr is a terminal.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

/// Diagnostic output sink.
pub struct Console {
    out: Box<dyn Write + Send>,
    styled: bool,
}

impl Console {
    /// Console writing to stderr.
    pub fn stderr() -> Self {
        let styled = io::stderr().is_terminal();
        Self::new(io::stderr()).with_styling(styled)
    }

    /// Console writing to `out`, without styling.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            styled: false,
        }
    }

    /// Enable or disable ANSI styling.
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Whether ANSI styling is written.
    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// `text` in bold when styling is on, unchanged otherwise.
    pub fn bold(&self, text: &str) -> String {
        if self.styled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Console writing into memory, plus a handle to read it back.
    ///
    /// # Example
    ///
    /// ```
    /// use director::console::Console;
    ///
    /// let (mut console, buffer) = Console::buffered();
    /// console.err("ok", true);
    /// console.err(42, false);
    /// assert_eq!(buffer.contents(), "ok\n42 ");
    /// ```
    pub fn buffered() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::default();
        (Self::new(buffer.clone()), buffer)
    }

    /// Write `text` followed by a newline, or by a single space when
    /// `newline` is false so successive fragments stay on one line.
    ///
    /// Write failures are dropped; diagnostics never fail a dispatch.
    pub fn err(&mut self, text: impl Display, newline: bool) {
        let result = if newline {
            writeln!(self.out, "{}", text)
        } else {
            write!(self.out, "{} ", text)
        };
        if result.is_ok() {
            let _ = self.out.flush();
        }
    }

    /// Write one line.
    pub fn line(&mut self, text: impl Display) {
        self.err(text, true);
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.err("", true);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Cloneable in-memory writer backing [`Console::buffered`].
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_with_strings() {
        let (mut console, buffer) = Console::buffered();
        console.err("ok", true);
        console.err("this is a longer string", false);
        console.err("123123123123123", true);
        assert_eq!(
            buffer.contents(),
            "ok\nthis is a longer string 123123123123123\n"
        );
    }

    #[test]
    fn test_err_with_numbers() {
        let (mut console, buffer) = Console::buffered();
        console.err(1, true);
        console.err(1e100, false);
        console.err(1_000_000u64 * 10_000_000, true);
        let out = buffer.contents();
        assert!(out.starts_with("1\n"));
        assert!(out.ends_with("10000000000000\n"));
    }

    #[test]
    fn test_bold_plain_without_styling() {
        let (console, _) = Console::buffered();
        assert!(!console.is_styled());
        assert_eq!(console.bold("Usage:"), "Usage:");
    }

    #[test]
    fn test_bold_with_styling() {
        let (console, _) = Console::buffered();
        let console = console.with_styling(true);
        assert!(console.is_styled());
        assert_eq!(console.bold("Usage:"), "Usage:".bold().to_string());
    }

    #[test]
    fn test_line_and_blank() {
        let (mut console, buffer) = Console::buffered();
        console.line("a");
        console.blank();
        console.line("b");
        assert_eq!(buffer.contents(), "a\n\nb\n");
    }
}
