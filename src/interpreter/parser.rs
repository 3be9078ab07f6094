/// Core parser machinery.
///
/// Contains the token cursor, parser options, and the program and expression
/// entry points.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation and the atoms of the grammar: literals, identifiers,
/// calls and parenthesised expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the comparison, additive and multiplicative precedence levels.
pub mod binary;

/// Block parsing.
///
/// Parses indented blocks and the statements that own one: `idan`, `kadai`
/// and `don`.
pub mod block;

/// Utility functions for the parser.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token of a statement and parses assignments,
/// prints, returns, expression statements and function definitions.
pub mod statement;
