use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing tokens.
pub enum ParseError {
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// What the grammar expected.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Position of the encountered token.
        pos:      Position,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the grammar expected.
        expected: String,
        /// Position of the end of input.
        pos:      Position,
    },
    /// The function definition syntax was invalid.
    InvalidFunctionDefinition {
        /// Details about what is malformed.
        details: String,
        /// Position of the offending token.
        pos:     Position,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal text.
        literal: String,
        /// Position of the literal.
        pos:     Position,
    },
    /// `mayar` appeared outside of any function body.
    ReturnOutsideFunction {
        /// Position of the keyword.
        pos: Position,
    },
    /// The four-word else keyword `in ba haka ba` was cut short.
    IncompleteElse {
        /// How many of the four words were present.
        found: usize,
        /// Position of the first word.
        pos:   Position,
    },
}

impl ParseError {
    /// Gets the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { pos, .. }
            | Self::UnexpectedEndOfInput { pos, .. }
            | Self::InvalidFunctionDefinition { pos, .. }
            | Self::LiteralTooLarge { pos, .. }
            | Self::ReturnOutsideFunction { pos }
            | Self::IncompleteElse { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, pos } => {
                write!(f, "Error on {pos}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { expected, pos } => {
                write!(f, "Error on {pos}: Unexpected end of input; expected {expected}.")
            },

            Self::InvalidFunctionDefinition { details, pos } => write!(f,
                                                                       "Error on {pos}: Invalid function definition: {details}. Example: aiki hada(a, b):"),

            Self::LiteralTooLarge { literal, pos } => {
                write!(f, "Error on {pos}: Literal {literal} is too large.")
            },

            Self::ReturnOutsideFunction { pos } => {
                write!(f, "Error on {pos}: 'mayar' is only allowed inside a function.")
            },

            Self::IncompleteElse { found, pos } => write!(f,
                                                          "Error on {pos}: Incomplete else keyword; expected 'in ba haka ba' but found only {found} of its 4 words."),
        }
    }
}

impl std::error::Error for ParseError {}
