use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, TokenCursor},
            unary::parse_unary,
        },
    },
};

/// Parses relational and equality operators.
///
/// Handles the comparison operators `==`, `!=`, `>`, `<`, `>=` and `<=`,
/// which bind weakest. Chains such as `a < b < c` are left-associative and
/// compare the boolean result of `a < b` with `c`.
///
/// The rule is: `comparison := additive (("==" | "!=" | ">" | "<" | ">=" |
/// "<=") additive)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_comparison(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_additive(cursor)?;
    while let Some(op) = next_operator(cursor, BinaryOperator::is_comparison) {
        let pos = cursor.next_or_end("a comparison operator")?.pos;
        let right = parse_additive(cursor)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(cursor)?;
    while let Some(op) = next_operator(cursor, |op| {
                             matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
                         })
    {
        let pos = cursor.next_or_end("'+' or '-'")?.pos;
        let right = parse_multiplicative(cursor)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(cursor)?;
    while let Some(op) = next_operator(cursor, |op| {
                             matches!(op,
                                      BinaryOperator::Mul
                                      | BinaryOperator::Div
                                      | BinaryOperator::Mod)
                         })
    {
        let pos = cursor.next_or_end("'*', '/' or '%'")?.pos;
        let right = parse_unary(cursor)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                pos };
    }
    Ok(left)
}

/// Returns the binary operator at the cursor if it belongs to the current
/// precedence level, without consuming it.
fn next_operator(cursor: &TokenCursor<'_>,
                 accepts: impl Fn(BinaryOperator) -> bool)
                 -> Option<BinaryOperator> {
    cursor.peek()
          .and_then(token_to_binary_operator)
          .filter(|op| accepts(*op))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is an operator token spelled
/// like one of the arithmetic or comparison operators. Returns `None` for all
/// other tokens, including `=`, `:`, `,` and parentheses.
///
/// # Example
/// ```
/// use hausalang::{
///     ast::{BinaryOperator, Position},
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let plus = Token::new(TokenKind::Operator, "+", Position::new(1, 3));
/// let colon = Token::new(TokenKind::Operator, ":", Position::new(1, 9));
///
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&colon), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::Operator {
        return None;
    }
    BinaryOperator::from_symbol(&token.value)
}
