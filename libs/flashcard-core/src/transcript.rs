//! Append-only record of everything said during a session.

use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SessionTranscript {
    buffer: String,
}

impl SessionTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prompt shown to the user.
    pub fn record_prompt(&mut self, text: &str) {
        self.append(text);
    }

    /// Record a line typed by the user.
    pub fn record_input(&mut self, text: &str) {
        self.append(text);
    }

    /// Record a message printed to the user.
    pub fn record_output(&mut self, text: &str) {
        self.append(text);
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Recorded fragments, one per line.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.buffer.lines()
    }

    /// Write the whole transcript so far to `path`.
    ///
    /// Every call dumps everything recorded since the session started.
    pub fn flush_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, &self.buffer)?;
        info!(path = %path.display(), bytes = self.buffer.len(), "saved transcript");
        Ok(())
    }

    fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
        if !text.ends_with('\n') {
            self.buffer.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fragments_are_newline_terminated() {
        let mut transcript = SessionTranscript::new();
        transcript.record_prompt("Which card?");
        transcript.record_input("cat");
        transcript.record_output("The card has been removed.\n");
        assert_eq!(
            transcript.contents(),
            "Which card?\ncat\nThe card has been removed.\n"
        );
        assert_eq!(transcript.lines().count(), 3);
    }

    #[test]
    fn flush_writes_full_content_each_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut transcript = SessionTranscript::new();

        transcript.record_output("first");
        transcript.flush_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");

        transcript.record_output("second");
        transcript.flush_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
