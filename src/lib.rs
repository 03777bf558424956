//! # intcalc
//!
//! intcalc evaluates integer arithmetic expressions written as text.
//! It supports non-negative integer literals, `+`, `-`, `*`, `/` with the
//! usual precedence, parentheses, and floor division. Evaluation happens
//! while parsing: the lexer produces tokens on demand and the recursive
//! descent parser folds them into a single `i64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{core::Interpreter, lexer::Lexer, parser::Parser},
};

/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines every error that can abort the evaluation of a line.
/// Each error carries the character position it refers to and renders a
/// human-readable message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Groups them under a single `EvalError` propagated with `?`.
pub mod error;
/// Orchestrates lexing, parsing and evaluation of a single line.
///
/// # Responsibilities
/// - Coordinates the lexer, the parser and the interpreter driver.
/// - Provides entry points for tokenizing and evaluating text.
pub mod interpreter;
/// Installs the `tracing` subscriber used by the command line tool.
pub mod logging;
/// The interactive read-evaluate-print loop.
///
/// Reads one line at a time from any buffered reader, evaluates it with a
/// fresh pipeline and writes the result or the error message, until the
/// `exit` sentinel or the end of input.
pub mod repl;
/// Checked integer arithmetic and literal conversion.
pub mod util;

/// Evaluates one line of text.
///
/// A fresh lexer, parser and interpreter are built for every call, so no
/// state carries over between evaluations.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error encountered.
///
/// # Examples
/// ```
/// use intcalc::{
///     error::{EvalError, ParseError, RuntimeError},
///     evaluate,
/// };
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("(2 - 9) / 2").unwrap(), -4);
///
/// assert!(matches!(evaluate("4 / 0"),
///                  Err(EvalError::Runtime(RuntimeError::DivisionByZero { position: 2 }))));
/// assert!(matches!(evaluate("1 + @"),
///                  Err(EvalError::Parse(ParseError::Lexical { character: '@', .. }))));
/// ```
pub fn evaluate(source: &str) -> EvalResult<i64> {
    debug!(source, "evaluating");
    let result = Parser::new(Lexer::new(source)).map_err(EvalError::from)
                                                 .and_then(|parser| Interpreter::new(parser).interpret());
    match &result {
        Ok(value) => debug!(value, "evaluated"),
        Err(e) => debug!(error = %e, "evaluation failed"),
    }
    result
}
