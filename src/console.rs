// pixie-edit/src/console.rs
use crate::core::{EditorError, Result};
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

/// Line-oriented prompt/reply channel.
///
/// Production code runs it over stdin/stdout; tests drive it with a
/// `Cursor` and read back what was written into a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Prints `message` without a newline and returns the trimmed reply.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EditorError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    pub fn prompt_int(&mut self, message: &str, name: &str) -> Result<i64> {
        self.prompt_parsed(message, name, "an integer")
    }

    pub fn prompt_float(&mut self, message: &str, name: &str) -> Result<f64> {
        let value: f64 = self.prompt_parsed(message, name, "a number")?;
        if !value.is_finite() {
            return Err(EditorError::invalid_parameter(name, "must be a finite number"));
        }
        Ok(value)
    }

    fn prompt_parsed<T: FromStr>(
        &mut self,
        message: &str,
        name: &str,
        expected: &'static str,
    ) -> Result<T> {
        let reply = self.prompt(message)?;
        reply.parse().map_err(|_| EditorError::Parse {
            name: name.to_string(),
            input: reply,
            expected,
        })
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
