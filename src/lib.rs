//! # bongscript
//!
//! bongscript is a tree-walking interpreter for a small imperative scripting
//! language whose keywords are transliterated Bengali words.
//!
//! ```text
//! kaj shuru
//!     eta holo i = 1;
//!     jotokhon (i <= 3) {
//!         lekho(i);
//!         i = i + 1;
//!     }
//! kaj shesh
//! ```
//!
//! Source text is tokenized by [`interpreter::lexer`], parsed by
//! [`interpreter::parser`], and executed by [`interpreter::evaluator`].

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

use std::io::{BufRead, Write};

use crate::interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed enum per node position (statement, expression).
/// - Attaches source lines to nodes that can fail at run time.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the source line it was detected on and renders as a
/// human-readable message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and value
/// representations into a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a complete program.
///
/// This function tokenizes, parses, and executes the source, reading console
/// input from `input` and writing console output to `output`. Lexing and
/// parsing finish before anything executes, so a static error produces no
/// output at all. A runtime error stops execution; output already written
/// stays written.
///
/// # Errors
/// Returns a `LexError`, `ParseError`, or `RuntimeError` describing the first
/// failure.
///
/// # Examples
/// ```
/// use bongscript::run;
///
/// let mut output = Vec::<u8>::new();
/// let source = "kaj shuru eta holo x = 2 + 3 * 4; lekho(x); kaj shesh";
/// run(source, &b""[..], &mut output).unwrap();
/// assert_eq!(output, b"14\n");
///
/// // Unknown variable.
/// let source = "kaj shuru lekho(y); kaj shesh";
/// assert!(run(source, &b""[..], &mut Vec::<u8>::new()).is_err());
/// ```
pub fn run<R: BufRead, W: Write>(source: &str,
                                 input: R,
                                 output: W)
                                 -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    let mut interpreter = Interpreter::new(input, output);
    interpreter.execute(&program)?;

    Ok(())
}
