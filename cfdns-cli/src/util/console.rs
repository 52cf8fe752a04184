//! Line-oriented console

use std::io::{self, BufRead, Write};

/// Where the session prints and reads.
///
/// The menu loop only talks to this trait, so tests can drive it with a script.
pub trait Console {
    /// Print one line.
    fn println(&mut self, line: &str);

    /// Show `prompt` (no newline) and read one line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console backed by the process's stdin and stdout.
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    #[cfg(test)]
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn println(&mut self, line: &str) {
        // A closed stdout leaves nobody to report to.
        let _ = writeln!(self.output, "{line}");
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
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
}
