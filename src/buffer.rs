//! The line buffer holding input received but not yet consumed as
//! lines.

use std::mem;

use log::{debug, trace};

/// Append-only-then-drain text buffer for received input.
///
/// The buffer only ever grows by appending newly received chunks and
/// only ever shrinks by removing a consumed prefix during line
/// extraction.
#[derive(Debug, Default)]
pub struct LineBuffer {
    /// The received text not yet consumed as lines.
    text: String,
}

impl LineBuffer {
    /// Creates a new, empty line buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the given chunk to the end of the buffer.
    pub fn append(&mut self, chunk: &str) {
        self.text.push_str(chunk);
        trace!("buffered {} bytes, {} pending", chunk.len(), self.text.len());
    }

    /// Returns `true` when no input is pending.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Removes and returns the first line from the buffer.
    ///
    /// A line is the text up to the first newline, which is stripped
    /// from both the returned value and the buffer. When the buffer
    /// contains no newline, the entire buffer content is returned as
    /// the line and the buffer is emptied: extraction never waits for
    /// a newline to show up.
    ///
    /// Callers must only extract from a non-empty buffer.
    pub fn extract_line(&mut self) -> String {
        let line = match self.text.find('\n') {
            Some(ix) => {
                let line = self.text[..ix].to_owned();
                self.text.drain(..=ix);
                line
            }
            None => mem::take(&mut self.text),
        };

        debug!("extracted line of {} bytes", line.len());
        line
    }
}

#[cfg(test)]
mod tests {
    use super::LineBuffer;

    #[test]
    fn extract_line_strips_newline_and_keeps_remainder() {
        let _ = env_logger::try_init();

        let mut buffer = LineBuffer::new();
        buffer.append("hello\nworld\n");

        assert_eq!(buffer.extract_line(), "hello");
        assert_eq!(buffer.extract_line(), "world");
        assert!(buffer.is_empty());
    }

    #[test]
    fn extract_line_returns_whole_buffer_without_newline() {
        let _ = env_logger::try_init();

        let mut buffer = LineBuffer::new();
        buffer.append("ab");
        buffer.append("cd");

        assert_eq!(buffer.extract_line(), "abcd");
        assert!(buffer.is_empty());
    }

    #[test]
    fn chunks_concatenate_before_extraction() {
        let _ = env_logger::try_init();

        let mut buffer = LineBuffer::new();
        buffer.append("ab");
        buffer.append("cd\nef");

        assert_eq!(buffer.extract_line(), "abcd");
        assert!(!buffer.is_empty());
        assert_eq!(buffer.extract_line(), "ef");
    }

    #[test]
    fn empty_line_is_a_line() {
        let _ = env_logger::try_init();

        let mut buffer = LineBuffer::new();
        buffer.append("\nrest");

        assert_eq!(buffer.extract_line(), "");
        assert_eq!(buffer.extract_line(), "rest");
    }
}
