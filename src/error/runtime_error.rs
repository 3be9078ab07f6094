use crate::ast::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use a variable that is bound in no enclosing scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// Source position of the reference.
        pos:  Position,
    },
    /// Called a function that is defined in no enclosing scope.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// Source position of the call.
        pos:  Position,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
        /// Source position of the call.
        pos:      Position,
    },
    /// The operand type has no such operator (e.g. `"a" - "b"`).
    UnsupportedOperator {
        /// The operator spelling.
        op:      String,
        /// The type name of the operand.
        operand: &'static str,
        /// Source position of the operator.
        pos:     Position,
    },
    /// The operand types differ and no mixed rule applies (e.g. `"a" + 1`).
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// Source position of the operator.
        pos:     Position,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// Source position of the operator.
        pos: Position,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// Source position of the operator.
        pos: Position,
    },
    /// A `don` loop was given a step of zero.
    InvalidLoopStep {
        /// Source position of the loop.
        pos: Position,
    },
    /// Function calls nested deeper than the configured limit.
    RecursionLimit {
        /// The configured maximum call depth.
        limit: usize,
        /// Source position of the call that exceeded it.
        pos:   Position,
    },
    /// Writing to the output sink failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// Source position of the print statement.
        pos:     Position,
    },
}

impl RuntimeError {
    /// Gets the source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UndefinedVariable { pos, .. }
            | Self::UndefinedFunction { pos, .. }
            | Self::ArityMismatch { pos, .. }
            | Self::UnsupportedOperator { pos, .. }
            | Self::TypeMismatch { pos, .. }
            | Self::DivisionByZero { pos }
            | Self::Overflow { pos }
            | Self::InvalidLoopStep { pos }
            | Self::RecursionLimit { pos, .. }
            | Self::Output { pos, .. } => *pos,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, pos } => {
                write!(f, "Error on {pos}: Undefined variable '{name}'.")
            },
            Self::UndefinedFunction { name, pos } => {
                write!(f, "Error on {pos}: Undefined function '{name}'.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  pos, } => write!(f,
                                                   "Error on {pos}: Function '{name}' takes {expected} argument(s) but {found} were given."),
            Self::UnsupportedOperator { op, operand, pos } => write!(f,
                                                                     "Error on {pos}: Operator '{op}' is not supported for {operand} values."),
            Self::TypeMismatch { details, pos } => {
                write!(f, "Error on {pos}: Type error: {details}.")
            },
            Self::DivisionByZero { pos } => write!(f, "Error on {pos}: Division by zero."),
            Self::Overflow { pos } => write!(f,
                                             "Error on {pos}: Integer overflow while trying to compute result."),
            Self::InvalidLoopStep { pos } => {
                write!(f, "Error on {pos}: A loop step of zero would never terminate.")
            },
            Self::RecursionLimit { limit, pos } => write!(f,
                                                          "Error on {pos}: Maximum call depth of {limit} exceeded."),
            Self::Output { details, pos } => {
                write!(f, "Error on {pos}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
