//! # hausalang
//!
//! hausalang is an interpreter for Hausalang, a small indentation-structured
//! programming language with Hausa keywords. Source text is tokenized,
//! parsed into an abstract syntax tree by recursive descent, and executed by
//! walking that tree.
//!
//! ```text
//! aiki factorial(n):
//!     idan n <= 1:
//!         mayar 1
//!     mayar n * factorial(n - 1)
//!
//! rubuta factorial(5)
//! ```

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

use std::io::Write;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::core::InterpreterOptions,
        lexer::{Token, TokenKind, tokenize},
        parser::core::{ElseKeyword, ParseOptions, TopLevelReturn},
        value::core::Value,
    },
};
use crate::{
    ast::Program,
    error::{ParseError, RuntimeError},
    interpreter::{
        environment::Environment, evaluator::core::Context, parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. It
/// standardizes error reporting: every error carries the line and column it
/// refers to and formats as `Error on line L, column C: ...`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps them in a single `Error` for callers that run the whole pipeline.
/// - Implements the standard error traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator,
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by several phases.
///
/// Numeric helpers for the arithmetic operators and stack growth for the
/// recursive parser and evaluator.
pub mod util;

/// Parses a token sequence with the default [`ParseOptions`].
///
/// # Example
/// ```
/// use hausalang::{parse, tokenize};
///
/// let tokens = tokenize("x = 1\nrubuta x\n").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    parse_with(tokens, &ParseOptions::default())
}

/// Parses a token sequence with explicit [`ParseOptions`].
pub fn parse_with(tokens: &[Token], options: &ParseOptions) -> Result<Program, ParseError> {
    parse_program(tokens, *options)
}

/// Executes a program in a fresh global scope with the default
/// [`InterpreterOptions`], writing `rubuta` output to `out`.
pub fn interpret(program: &Program, out: &mut dyn Write) -> Result<(), RuntimeError> {
    interpret_with(program, out, &InterpreterOptions::default())
}

/// Executes a program in a fresh global scope with explicit
/// [`InterpreterOptions`].
pub fn interpret_with(program: &Program,
                      out: &mut dyn Write,
                      options: &InterpreterOptions)
                      -> Result<(), RuntimeError> {
    let mut env = Environment::new();
    Context::new(out, *options).run(program, &mut env)
}

/// Runs source text through the whole pipeline with default options.
///
/// The first error of any stage aborts the run. Output printed before a
/// runtime error stays in `out`.
///
/// # Examples
/// ```
/// use hausalang::run;
///
/// let mut out = Vec::new();
/// run("rubuta 2 + 3 * 4", &mut out).unwrap();
/// assert_eq!(out, b"14");
///
/// // 'y' is not defined.
/// let mut out = Vec::new();
/// assert!(run("rubuta y", &mut out).is_err());
/// ```
pub fn run(source: &str, out: &mut dyn Write) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    interpret(&program, out)?;
    Ok(())
}

/// A global scope that persists across several pieces of source text.
///
/// Each call to [`Session::execute`] lexes, parses and runs one chunk;
/// variables and functions it defines stay visible to later chunks. A chunk
/// that fails keeps whatever bindings it made before the error.
///
/// # Example
/// ```
/// use hausalang::{Session, Value};
///
/// let mut session = Session::new();
/// let mut out = Vec::new();
///
/// session.execute("aiki ninki(n):\n    mayar n * 2\n", &mut out).unwrap();
/// session.execute("x = ninki(21)", &mut out).unwrap();
///
/// assert_eq!(session.variable("x"), Some(&Value::Integer(42)));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    env:           Environment<'static>,
    parse_options: ParseOptions,
    options:       InterpreterOptions,
}

impl Session {
    /// Creates a session with default options and an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with explicit parser and interpreter options.
    #[must_use]
    pub fn with_options(parse_options: ParseOptions, options: InterpreterOptions) -> Self {
        Self { env: Environment::new(),
               parse_options,
               options }
    }

    /// Runs one chunk of source text in the session's global scope.
    pub fn execute(&mut self, source: &str, out: &mut dyn Write) -> Result<(), Error> {
        let tokens = tokenize(source)?;
        let program = parse_with(&tokens, &self.parse_options)?;
        Context::new(out, self.options).run(&program, &mut self.env)?;
        Ok(())
    }

    /// Looks up a global variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.env.get(name)
    }
}
