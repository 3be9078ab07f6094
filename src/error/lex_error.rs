use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A string literal was opened but the line ended before its closing
    /// quote.
    UnterminatedString {
        /// Position of the opening quote.
        pos: Position,
    },
    /// A character that starts no token of the language.
    IllegalCharacter {
        /// The offending text.
        found: String,
        /// Position of the character.
        pos:   Position,
    },
    /// A line was dedented to a width that matches no enclosing block.
    InconsistentDedent {
        /// The indentation width of the offending line.
        width: usize,
        /// Position of the first character of the line.
        pos:   Position,
    },
}

impl LexError {
    /// Gets the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnterminatedString { pos }
            | Self::IllegalCharacter { pos, .. }
            | Self::InconsistentDedent { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { pos } => {
                write!(f, "Error on {pos}: Unterminated string literal.")
            },
            Self::IllegalCharacter { found, pos } => {
                write!(f, "Error on {pos}: Illegal character '{found}'.")
            },
            Self::InconsistentDedent { width, pos } => write!(f,
                                                              "Error on {pos}: Inconsistent dedent to width {width}; it matches no enclosing block."),
        }
    }
}

impl std::error::Error for LexError {}
