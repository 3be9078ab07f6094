/// Core evaluation logic and context management.
///
/// Contains the runtime context, the interpreter options, statement
/// execution, expression dispatch and the `Flow` signal that carries
/// `mayar` out of nested blocks.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string operators, equality and ordering.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Evaluation of `don` loops.
///
/// Evaluates the loop header once, then counts the loop variable towards
/// the exclusive end in the direction the loop names.
pub mod for_loop;

/// Function evaluation.
///
/// Handles calls to user-defined functions: argument evaluation, lookup,
/// arity and depth checks, and the call's own scope.
pub mod function;
