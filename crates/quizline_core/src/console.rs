//! Line-oriented prompt and output seam used by command handlers.
//!
//! # Responsibility
//! - Read one trimmed line per prompt; report end of input as `None`.
//! - Decode input lossily so a stray non-UTF-8 byte never ends the session.
//! - Write plain, error and emphasized lines.
//!
//! # Invariants
//! - Output methods never fail the caller; write errors are logged.
//! - At most one prompt is outstanding at a time.

use log::warn;
use std::io::{self, BufRead, Write};

/// Prompt loop plus output sink.
pub trait Console {
    /// Shows `prompt` and reads one line.
    ///
    /// Returns `Ok(None)` when input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Reads one line whose editable value starts as `initial`.
    ///
    /// Consoles that cannot pre-fill input show `initial` as a hint and treat
    /// an empty response as "keep `initial`".
    fn read_line_with_initial(&mut self, prompt: &str, initial: &str) -> io::Result<Option<String>> {
        read_with_hint(self, prompt, initial)
    }

    fn log(&mut self, text: &str);
    fn errorlog(&mut self, text: &str);
    fn biglog(&mut self, text: &str);
}

fn read_with_hint<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    initial: &str,
) -> io::Result<Option<String>> {
    let line = console.read_line(&format!("{prompt}[{initial}] "))?;
    Ok(line.map(|line| {
        if line.is_empty() {
            initial.to_string()
        } else {
            line
        }
    }))
}

/// Console over any buffered reader and writer.
///
/// The binary wraps stdin/stdout; tests wrap an in-memory cursor and `Vec<u8>`.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// `interactive` enables pre-seeded edit prompts; pass `false` for piped
    /// input so scripted sessions behave like plain prompts.
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}").and_then(|()| self.output.flush()) {
            warn!("event=console_write module=console status=error error={err}");
        }
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // Invalid UTF-8 is replaced, not rejected; the stream stays usable.
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).trim().to_string()))
    }

    fn read_line_with_initial(&mut self, prompt: &str, initial: &str) -> io::Result<Option<String>> {
        if self.interactive {
            read_with_hint(self, prompt, initial)
        } else {
            self.read_line(prompt)
        }
    }

    fn log(&mut self, text: &str) {
        self.write_line(text);
    }

    fn errorlog(&mut self, text: &str) {
        self.write_line(&format!("Error: {text}"));
    }

    fn biglog(&mut self, text: &str) {
        self.write_line(&format!("  >>> {text} <<<"));
    }
}
