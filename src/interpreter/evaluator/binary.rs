/// Binary operator dispatch.
///
/// Routes each operator to the arithmetic or comparison handler and
/// classifies operand errors.
pub mod core;

/// Arithmetic operators: `+`, `-`, `*`, `/` and `%`.
///
/// Covers integer, real and mixed operands, string concatenation and string
/// repetition.
pub mod arithmetic;

/// Equality and ordering operators.
pub mod comparison;
