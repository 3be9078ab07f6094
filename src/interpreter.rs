/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text line by line, measures indentation to
/// synthesize `Indent` and `Dedent` tokens, and scans the rest of each line
/// into numbers, strings, identifiers, keywords and operators.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source position.
/// - Keeps `Indent` and `Dedent` balanced.
/// - Reports lexical errors for unterminated strings, illegal characters and
///   inconsistent indentation.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `Program` of statements and expressions by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Applies the configurable rules for top-level `mayar` and the else
///   keyword.
pub mod parser;
/// The environment module defines scopes of bindings.
///
/// An `Environment` maps names to values and to function definitions and
/// falls back to its parent for lookups. The global scope lives for a whole
/// run; each function call adds a child scope for its duration.
pub mod environment;
/// The evaluator module executes AST nodes.
///
/// The evaluator walks the AST, evaluates expressions, executes statements,
/// performs function calls, and writes the output of `rubuta`.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, and control flow including `mayar`.
/// - Reports runtime errors such as undefined names or division by zero.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, reals, strings, booleans and none. The module
/// also defines how each value prints and whether it counts as true in a
/// condition.
pub mod value;
