use crate::{
    ast::{Expr, LiteralValue, Position, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenCursor, parse_expression},
            utils::parse_comma_separated,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a unary minus or falls through to a primary expression.
///
/// Negation binds tighter than any binary operator, so `-x * 2` is
/// `(-x) * 2`. It may repeat: `--x` negates twice.
///
/// Grammar: `unary := "-" unary | primary`
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// An `Expr::UnaryOp` node or the primary expression.
pub fn parse_unary(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut signs = Vec::new();
    while cursor.check_operator("-") {
        signs.push(cursor.next_or_end("'-'")?.pos);
    }

    let primary = ensure_sufficient_stack(|| parse_primary(cursor))?;
    Ok(signs.into_iter()
            .rev()
            .fold(primary, |operand, pos| Expr::UnaryOp { op: UnaryOperator::Negate,
                                                          expr: Box::new(operand),
                                                          pos }))
}

/// Parses primary expressions, the atoms of the grammar.
///
/// Supported forms:
/// - number literals, kept as integers unless written with a `.`,
/// - string literals,
/// - identifiers, promoted to a function call when directly followed by `(`,
/// - parenthesised sub-expressions.
///
/// Grammar:
/// ```text
/// primary := NUMBER | STRING | IDENTIFIER [ "(" arguments ")" ] | "(" expression ")"
/// ```
///
/// # Parameters
/// - `cursor`: Token cursor.
///
/// # Returns
/// The parsed atom.
///
/// # Errors
/// - `LiteralTooLarge` for integers outside the 64-bit range.
/// - `UnexpectedToken` if no expression can start at the cursor or a closing
///   parenthesis is missing.
pub fn parse_primary(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let token = cursor.next_or_end("an expression")?;
    let pos = token.pos;

    match token.kind {
        TokenKind::Number => {
            let value = parse_number(&token.value, pos)?;
            Ok(Expr::Literal { value, pos })
        },
        TokenKind::String => Ok(Expr::Literal { value: LiteralValue::Str(token.value.clone()),
                                                pos }),
        TokenKind::Identifier => {
            if cursor.check_operator("(") {
                cursor.advance();
                let arguments = parse_comma_separated(cursor, parse_expression, ")")?;
                return Ok(Expr::FunctionCall { name: token.value.clone(),
                                               arguments,
                                               pos });
            }
            Ok(Expr::Identifier { name: token.value.clone(),
                                  pos })
        },
        TokenKind::Operator if token.value == "(" => {
            let inner = parse_expression(cursor)?;
            cursor.expect_operator(")")?;
            Ok(inner)
        },
        _ => Err(TokenCursor::unexpected("an expression", token)),
    }
}

/// Converts a number token's text into a literal value.
///
/// Text containing a `.` becomes a real; anything else must fit in an
/// `i64`.
fn parse_number(text: &str, pos: Position) -> ParseResult<LiteralValue> {
    if text.contains('.') {
        return text.parse::<f64>()
                   .map(LiteralValue::Real)
                   .map_err(|_| ParseError::UnexpectedToken { expected: "a number".to_string(),
                                                              found:    text.to_string(),
                                                              pos });
    }
    text.parse::<i64>()
        .map(LiteralValue::Integer)
        .map_err(|_| ParseError::LiteralTooLarge { literal: text.to_string(),
                                                   pos })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::core::ParseOptions};

    fn expr(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).unwrap();
        let mut cursor = TokenCursor::new(&tokens, ParseOptions::default());
        parse_expression(&mut cursor)
    }

    #[test]
    fn integer_and_real_literals_stay_distinct() {
        assert_eq!(expr("7").unwrap(),
                   Expr::Literal { value: LiteralValue::Integer(7),
                                   pos:   Position::new(1, 1), });
        assert_eq!(expr("7.0").unwrap(),
                   Expr::Literal { value: LiteralValue::Real(7.0),
                                   pos:   Position::new(1, 1), });
    }

    #[test]
    fn identifier_followed_by_paren_is_a_call() {
        let Expr::FunctionCall { name, arguments, .. } = expr("hada(1, x + 2)").unwrap() else {
            panic!("expected a call");
        };

        assert_eq!(name, "hada");
        assert_eq!(arguments.len(), 2);
    }

    #[test]
    fn call_without_arguments() {
        let Expr::FunctionCall { arguments, .. } = expr("gaisuwa()").unwrap() else {
            panic!("expected a call");
        };

        assert!(arguments.is_empty());
    }

    #[test]
    fn trailing_comma_in_arguments_is_rejected() {
        assert!(matches!(expr("hada(1, )"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn negation_nests() {
        let Expr::UnaryOp { expr: inner, .. } = expr("--x").unwrap() else {
            panic!("expected negation");
        };

        assert!(matches!(*inner, Expr::UnaryOp { .. }));
    }

    #[test]
    fn oversized_integer_literal_is_rejected() {
        assert_eq!(expr("99999999999999999999"),
                   Err(ParseError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                                     pos:     Position::new(1, 1), }));
    }

    #[test]
    fn missing_close_paren_is_reported() {
        assert!(matches!(expr("(1 + 2"),
                         Err(ParseError::UnexpectedToken { ref expected, .. }) if expected == "')'"));
    }
}
