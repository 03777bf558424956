use std::io::{self, BufRead, Write};

use tracing::info;

use crate::{error::EvalResult, evaluate, interpreter::lexer::tokenize};

/// Prompt shown before every line when none is configured.
pub const DEFAULT_PROMPT: &str = "Enter an expression (or \"exit\" to quit): ";
/// Line that ends a session, compared case-insensitively.
pub const EXIT_COMMAND: &str = "exit";
/// Printed when the session ends through [`EXIT_COMMAND`].
pub const EXIT_MESSAGE: &str = "Exiting.";

/// What to do with each line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Evaluate the line and print the integer result.
    #[default]
    Evaluate,
    /// Print the line's tokens, one per output line.
    Tokens,
}

/// Counts gathered over one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Lines processed, excluding the exit command.
    pub lines:    usize,
    /// Lines whose processing failed.
    pub failures: usize,
}

/// Returns `true` if `line` asks to end the session.
///
/// # Example
/// ```
/// use intcalc::repl::is_exit_command;
///
/// assert!(is_exit_command("exit"));
/// assert!(is_exit_command("  EXIT\t"));
/// assert!(!is_exit_command("exit now"));
/// ```
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Processes one line and renders the text to print for it.
///
/// In [`Mode::Evaluate`] this is the integer result; in [`Mode::Tokens`] it is
/// the token stream, one token per line, ending with the end-of-input token.
///
/// # Errors
/// Returns the error that aborted the line.
///
/// # Example
/// ```
/// use intcalc::repl::{Mode, process_line};
///
/// assert_eq!(process_line("6 / 4", Mode::Evaluate).unwrap(), "1");
/// assert_eq!(process_line("7", Mode::Tokens).unwrap(),
///            "Token(INTEGER, 7)\nToken(EOF, None)");
/// ```
pub fn process_line(line: &str, mode: Mode) -> EvalResult<String> {
    match mode {
        Mode::Evaluate => evaluate(line).map(|value| value.to_string()),
        Mode::Tokens => {
            let tokens = tokenize(line)?;
            Ok(tokens.iter()
                     .map(ToString::to_string)
                     .collect::<Vec<_>>()
                     .join("\n"))
        },
    }
}

/// A prompt-driven read-evaluate-print loop.
///
/// Every line gets its own pipeline; an error is printed in place of the
/// result and the loop continues with the next line.
#[derive(Debug, Clone)]
pub struct Repl {
    prompt: String,
    mode:   Mode,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT, Mode::default())
    }
}

impl Repl {
    /// Creates a loop that prints `prompt` before reading each line.
    #[must_use]
    pub fn new(prompt: impl Into<String>, mode: Mode) -> Self {
        Self { prompt: prompt.into(),
               mode }
    }

    /// Runs the loop until the exit command or the end of `input`.
    ///
    /// Results and error messages are both written to `output`. At the end of
    /// input a newline is written so the caller's next output starts on a
    /// fresh line.
    ///
    /// # Errors
    /// Returns any I/O error from reading `input` or writing `output`.
    ///
    /// # Example
    /// ```
    /// use intcalc::repl::{Mode, Repl};
    ///
    /// let mut output = Vec::new();
    /// let summary = Repl::new("> ", Mode::Evaluate).run("1 + 1\n4 / 0\nexit\n".as_bytes(),
    ///                                                   &mut output)
    ///                                              .unwrap();
    ///
    /// assert_eq!(String::from_utf8(output).unwrap(),
    ///            "> 2\n> Error at position 2: Division by zero.\n> Exiting.\n");
    /// assert_eq!(summary.lines, 2);
    /// assert_eq!(summary.failures, 1);
    /// ```
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<Summary> {
        let mut summary = Summary::default();
        let mut lines = input.lines();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;

            if is_exit_command(&line) {
                writeln!(output, "{EXIT_MESSAGE}")?;
                break;
            }

            summary.lines += 1;
            match process_line(&line, self.mode) {
                Ok(text) => writeln!(output, "{text}")?,
                Err(e) => {
                    summary.failures += 1;
                    writeln!(output, "{e}")?;
                },
            }
        }

        info!(lines = summary.lines, failures = summary.failures, "session ended");
        Ok(summary)
    }
}
