//! Line-oriented console seam.
//!
//! The session and the quiz only ever talk to a [`Prompter`], so tests can
//! drive them with scripted input and inspect the transcript.

use std::io::{self, BufRead, Write};

/// Parse a typed whole number: optional sign, then ASCII digits.
///
/// Returns `None` for anything else. Values beyond `i64` saturate, so they
/// still read as numbers that fall outside every accepted band.
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<i64>().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// Prompt/response console used by the registration session.
pub trait Prompter {
    /// Show `prompt` and read one line of input, without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Print one line of output.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// [`Prompter`] over any buffered reader and writer (stdin/stdout in the binary).
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}
