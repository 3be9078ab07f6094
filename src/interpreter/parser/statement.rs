use std::{collections::HashSet, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_block, parse_for, parse_if, parse_while},
            core::{ParseResult, TokenCursor, TopLevelReturn, parse_expression},
            utils::{parse_comma_separated, parse_identifier},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses a single statement.
///
/// Dispatch is by the leading token:
/// - `aiki` starts a function definition,
/// - `idan`, `kadai` and `don` start the block statements,
/// - `mayar` and `rubuta` start return and print statements,
/// - an identifier followed by `=` starts an assignment,
/// - any other identifier starts an expression statement, so a bare call such
///   as `gaisuwa(suna)` is a complete statement.
///
/// Simple statements must end the line: the token after them has to be a
/// `Newline`, a `Dedent` or `Eof`.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(cursor: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    ensure_sufficient_stack(|| {
        let Some(token) = cursor.peek() else {
            return Err(cursor.end_of_input("a statement"));
        };

        let statement = match token.kind {
            TokenKind::Identifier if cursor.peek_next().is_some_and(|t| t.is_operator("=")) => {
                cursor.advance();
                cursor.advance();
                Statement::Assignment { name:  token.value.clone(),
                                        value: parse_expression(cursor)?,
                                        pos:   token.pos, }
            },
            TokenKind::Identifier => Statement::Expression { expr: parse_expression(cursor)?,
                                                             pos:  token.pos, },
            TokenKind::Function => {
                cursor.advance();
                return parse_function_definition(cursor, token);
            },
            TokenKind::If => {
                cursor.advance();
                return parse_if(cursor, token);
            },
            TokenKind::While => {
                cursor.advance();
                return parse_while(cursor, token);
            },
            TokenKind::For => {
                cursor.advance();
                return parse_for(cursor, token);
            },
            TokenKind::Return => {
                cursor.advance();
                parse_return(cursor, token)?
            },
            TokenKind::Print => {
                cursor.advance();
                Statement::Print { expr: parse_expression(cursor)?,
                                   pos:  token.pos, }
            },
            _ => return Err(TokenCursor::unexpected("a statement", token)),
        };

        expect_statement_end(cursor)?;
        Ok(statement)
    })
}

/// Parses the expression of a `mayar` statement.
///
/// Outside a function body the statement is rejected or kept according to
/// the cursor's [`TopLevelReturn`] option.
fn parse_return(cursor: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Statement> {
    if !cursor.in_function() && cursor.options().top_level_return == TopLevelReturn::Reject {
        return Err(ParseError::ReturnOutsideFunction { pos: keyword.pos });
    }
    Ok(Statement::Return { expr: parse_expression(cursor)?,
                           pos:  keyword.pos, })
}

/// Parses a function definition of the form:
///
/// ```text
/// aiki name(param1, param2, ...):
///     body
/// ```
///
/// Parameters are plain identifiers separated by commas; an empty list is
/// written `()`. The body is an indented block.
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the `aiki` keyword.
/// - `keyword`: The `aiki` token, for the definition's position.
///
/// # Returns
/// A `Statement::FunctionDef` node.
///
/// # Errors
/// Returns `InvalidFunctionDefinition` if the name or parenthesis is missing
/// or a parameter name repeats, and any error from the parameter list or
/// body.
fn parse_function_definition(cursor: &mut TokenCursor<'_>,
                             keyword: &Token)
                             -> ParseResult<Statement> {
    let name = match cursor.peek() {
        Some(token) if token.kind == TokenKind::Identifier => {
            cursor.advance();
            token.value.clone()
        },
        Some(token) => {
            return Err(ParseError::InvalidFunctionDefinition { details: format!("expected a function name, found {}",
                                                                                 token.describe()),
                                                               pos:     token.pos, });
        },
        None => return Err(cursor.end_of_input("a function name")),
    };

    match cursor.peek() {
        Some(token) if token.is_operator("(") => {
            cursor.advance();
        },
        Some(token) => {
            return Err(ParseError::InvalidFunctionDefinition { details: format!("expected '(' after '{name}', found {}",
                                                                                 token.describe()),
                                                               pos:     token.pos, });
        },
        None => return Err(cursor.end_of_input("'('")),
    }

    let params = parse_comma_separated(cursor, parse_identifier, ")")?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = params.iter().find(|p| !seen.insert(p.as_str())) {
        return Err(ParseError::InvalidFunctionDefinition { details: format!("parameter '{duplicate}' is declared twice"),
                                                           pos:     keyword.pos, });
    }

    cursor.enter_function();
    let body = parse_block(cursor, "function parameters");
    cursor.leave_function();

    Ok(Statement::FunctionDef(Rc::new(FunctionDef { name,
                                                    params,
                                                    body: body?,
                                                    pos: keyword.pos })))
}

/// Requires the end of a simple statement: a newline, a dedent or the end
/// of input. The terminator itself is not consumed.
fn expect_statement_end(cursor: &TokenCursor<'_>) -> ParseResult<()> {
    match cursor.peek() {
        Some(token)
            if matches!(token.kind,
                        TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof) =>
        {
            Ok(())
        },
        Some(token) => Err(TokenCursor::unexpected("end of line", token)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{Expr, LiteralValue, Position, Program},
        interpreter::{
            lexer::tokenize,
            parser::core::{ParseOptions, parse_program},
        },
    };

    fn program(source: &str) -> ParseResult<Program> {
        parse_program(&tokenize(source).unwrap(), ParseOptions::default())
    }

    #[test]
    fn identifier_then_equals_is_an_assignment() {
        let parsed = program("x = 5").unwrap();

        assert_eq!(parsed.statements,
                   vec![Statement::Assignment { name:  "x".to_string(),
                                                value: Expr::Literal { value:
                                                                           LiteralValue::Integer(5),
                                                                       pos:   Position::new(1, 5), },
                                                pos:   Position::new(1, 1), }]);
    }

    #[test]
    fn bare_call_is_an_expression_statement() {
        let parsed = program("aiki gaisuwa(suna):\n    rubuta suna\n\nx = 5\ngaisuwa(x)\n").unwrap();

        assert_eq!(parsed.statements.len(), 3);
        assert!(matches!(parsed.statements[0], Statement::FunctionDef(_)));
        assert!(matches!(parsed.statements[1], Statement::Assignment { .. }));
        assert!(matches!(parsed.statements[2],
                         Statement::Expression { expr: Expr::FunctionCall { .. },
                                                 .. }));
    }

    #[test]
    fn identifier_led_expression_is_a_statement() {
        let parsed = program("x + 1\n").unwrap();

        assert!(matches!(parsed.statements[..],
                         [Statement::Expression { expr: Expr::BinaryOp { .. },
                                                  .. }]));
    }

    #[test]
    fn function_definition_collects_parameters() {
        let parsed = program("aiki hada(a, b):\n    mayar a + b\n").unwrap();
        let Statement::FunctionDef(def) = &parsed.statements[0] else {
            panic!("expected a function definition");
        };

        assert_eq!(def.name, "hada");
        assert_eq!(def.params, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(def.body.len(), 1);
    }

    #[test]
    fn missing_function_name_is_invalid_definition() {
        assert!(matches!(program("aiki (a):\n    mayar a\n"),
                         Err(ParseError::InvalidFunctionDefinition { .. })));
    }

    #[test]
    fn duplicate_parameter_is_invalid_definition() {
        assert!(matches!(program("aiki f(a, a):\n    mayar a\n"),
                         Err(ParseError::InvalidFunctionDefinition { .. })));
    }

    #[test]
    fn top_level_return_is_rejected_by_default() {
        assert_eq!(program("mayar 1"),
                   Err(ParseError::ReturnOutsideFunction { pos: Position::new(1, 1) }));
    }

    #[test]
    fn top_level_return_can_be_allowed() {
        let options = ParseOptions { top_level_return: TopLevelReturn::Ignore,
                                     ..ParseOptions::default() };
        let parsed = parse_program(&tokenize("mayar 1").unwrap(), options).unwrap();

        assert!(matches!(parsed.statements[0], Statement::Return { .. }));
    }

    #[test]
    fn two_statements_on_one_line_are_rejected() {
        assert!(matches!(program("x = 1 y = 2"),
                         Err(ParseError::UnexpectedToken { ref expected, .. }) if expected == "end of line"));
    }

    #[test]
    fn statement_cannot_start_with_a_number() {
        assert!(matches!(program("5 + 1"),
                         Err(ParseError::UnexpectedToken { ref expected, .. }) if expected == "a statement"));
    }
}
