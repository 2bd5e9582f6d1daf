use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::area::area::LightNumber;
use crate::messages::{ConsoleEvent, Prompt};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented prompting over a reader/writer pair.
///
/// Validation loops re-prompt without limit; the only way out of a loop other
/// than valid input is the input stream closing.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    plain: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, plain: bool) -> Self {
        Self {
            input,
            output,
            plain,
        }
    }

    /// Write an event followed by a newline.
    pub fn emit(&mut self, event: &ConsoleEvent) -> io::Result<()> {
        writeln!(self.output, "{}", event.render(self.plain))
    }

    /// Show `prompt` and read one line with its terminator removed.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self, prompt: Prompt) -> Result<String, InputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::Closed);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Prompt until the line parses as a base-10 `i32`.
    pub fn read_integer(&mut self, prompt: Prompt) -> Result<i32, InputError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("Rejected integer input {:?}: {}", line, e);
                    self.emit(&ConsoleEvent::InvalidInteger)?;
                }
            }
        }
    }

    /// Prompt until a light number between 1 and 3 is entered.
    pub fn read_light_number(&mut self, on: bool) -> Result<LightNumber, InputError> {
        loop {
            let value = self.read_integer(Prompt::LightNumber { on })?;
            match LightNumber::try_from(value) {
                Ok(number) => return Ok(number),
                Err(e) => {
                    log::debug!("{}", e);
                    self.emit(&ConsoleEvent::InvalidLightNumber)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
