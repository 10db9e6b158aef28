//! Line-based conversation with the user, mirrored into the transcript.

use crate::error::{FlashcardError, Result};
use crate::transcript::SessionTranscript;
use std::io::{BufRead, Write};

/// Reader, writer and transcript of one program run.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    transcript: SessionTranscript,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            transcript: SessionTranscript::new(),
        }
    }

    /// Show `prompt`, then read one line of input.
    ///
    /// The line terminator is stripped. Returns [`FlashcardError::EndOfInput`]
    /// once the reader is exhausted.
    pub fn input(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        self.transcript.record_prompt(prompt);

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(FlashcardError::EndOfInput);
        }
        let value = line.trim_end_matches(&['\n', '\r'][..]).to_string();
        self.transcript.record_input(&value);
        Ok(value)
    }

    /// Print a message.
    pub fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        self.transcript.record_output(text);
        Ok(())
    }

    pub fn transcript(&self) -> &SessionTranscript {
        &self.transcript
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Session;
    use std::io::Cursor;

    pub type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

    /// Session fed from a fixed list of input lines.
    pub fn scripted(lines: &[&str]) -> ScriptedSession {
        let mut input = lines.join("\n");
        input.push('\n');
        Session::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    pub fn output(session: &ScriptedSession) -> String {
        String::from_utf8_lossy(session.writer()).into_owned()
    }
}
