/// Lexing errors.
///
/// Defines the errors raised while turning source text into tokens:
/// unterminated strings, characters outside the language, and indentation
/// that does not return to an enclosing level.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from tokens. Parse errors include unexpected tokens, missing block
/// structure, malformed function signatures and literals that do not fit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include unknown names, wrong argument counts, unsupported
/// operand types, division by zero and overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the lex, parse and evaluate pipeline.
///
/// Each stage aborts on its first error; this enum keeps the stage that
/// failed distinguishable for callers such as the command-line front end.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid program.
    Parse(ParseError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
