use crate::{
    ast::{Direction, ForLoop, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ElseKeyword, ParseResult, TokenCursor, parse_expression},
            statement::parse_statement,
        },
    },
};

/// The words of the else keyword, each lexed as its own `Else` token.
const ELSE_WORDS: [&str; 4] = ["in", "ba", "haka", "ba"];

/// Parses an indented block introduced by a colon.
///
/// Every block-introducing construct shares this shape: a `:`, any number of
/// newlines, an `Indent`, statements up to the matching `Dedent`, and the
/// `Dedent` itself.
///
/// Grammar: `block := ":" NEWLINE* INDENT statement* DEDENT`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the colon.
/// - `context`: What the colon follows, for error messages (e.g. `"if
///   condition"`).
///
/// # Returns
/// The statements of the block.
pub fn parse_block(cursor: &mut TokenCursor<'_>, context: &str) -> ParseResult<Vec<Statement>> {
    match cursor.peek() {
        Some(token) if token.is_operator(":") => {
            cursor.advance();
        },
        Some(token) => {
            return Err(TokenCursor::unexpected(&format!("':' after {context}"), token));
        },
        None => return Err(cursor.end_of_input(&format!("':' after {context}"))),
    }

    cursor.skip_newlines();
    cursor.expect(TokenKind::Indent, "an indented block")?;

    let mut statements = Vec::new();
    cursor.skip_newlines();
    while !cursor.check(TokenKind::Dedent) && !cursor.at_end() {
        statements.push(parse_statement(cursor)?);
        cursor.skip_newlines();
    }

    cursor.expect(TokenKind::Dedent, "the end of the indented block")?;
    Ok(statements)
}

/// Parses an `idan` statement with an optional else arm.
///
/// Syntax:
/// ```text
/// idan <condition>:
///     <statements>
/// in ba haka ba:
///     <statements>
/// ```
/// The else keyword directly follows the `Dedent` that closes the then-block.
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the `idan` keyword.
/// - `keyword`: The `idan` token.
///
/// # Returns
/// A `Statement::If` node.
///
/// # Errors
/// - `IncompleteElse` if, in strict mode, fewer than four else-words appear.
/// - Any error from the condition or either block.
pub fn parse_if(cursor: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Statement> {
    let condition = parse_expression(cursor)?;
    let then_body = parse_block(cursor, "if condition")?;

    let else_body = if cursor.check(TokenKind::Else) {
        parse_else_keyword(cursor)?;
        Some(parse_block(cursor, "else")?)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_body,
                       else_body,
                       pos: keyword.pos })
}

/// Consumes the four-token else keyword `in ba haka ba`.
///
/// In [`ElseKeyword::Strict`] mode each word must be present and in order.
/// In [`ElseKeyword::Lenient`] mode up to four `Else` tokens are consumed,
/// stopping early at anything else.
fn parse_else_keyword(cursor: &mut TokenCursor<'_>) -> ParseResult<()> {
    let start = cursor.peek().map(|t| t.pos).unwrap_or_default();

    match cursor.options().else_keyword {
        ElseKeyword::Strict => {
            for (found, word) in ELSE_WORDS.iter().enumerate() {
                match cursor.peek() {
                    Some(token) if token.kind == TokenKind::Else && token.value == *word => {
                        cursor.advance();
                    },
                    Some(token) if token.kind == TokenKind::Else => {
                        return Err(TokenCursor::unexpected(&format!("'{word}'"), token));
                    },
                    _ => return Err(ParseError::IncompleteElse { found, pos: start }),
                }
            }
        },
        ElseKeyword::Lenient => {
            for _ in 0..ELSE_WORDS.len() {
                if !cursor.check(TokenKind::Else) {
                    break;
                }
                cursor.advance();
            }
        },
    }

    Ok(())
}

/// Parses a `kadai` loop.
///
/// Grammar: `while := "kadai" expression block`
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the `kadai` keyword.
/// - `keyword`: The `kadai` token.
///
/// # Returns
/// A `Statement::While` node.
pub fn parse_while(cursor: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Statement> {
    let condition = parse_expression(cursor)?;
    let body = parse_block(cursor, "while condition")?;

    Ok(Statement::While { condition,
                          body,
                          pos: keyword.pos })
}

/// Parses a `don` counted loop.
///
/// Grammar:
/// ```text
/// for := "don" IDENTIFIER "=" expression ("zuwa" | "ba") expression ["ta" expression] block
/// ```
///
/// `ba` is the same token kind as the first word of the else keyword; here,
/// right after the start value, it means a descending loop.
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the `don` keyword.
/// - `keyword`: The `don` token.
///
/// # Returns
/// A `Statement::For` node.
///
/// # Errors
/// `UnexpectedToken` if the variable, `=`, or direction word is missing, and
/// any error from the bounds, step or body.
pub fn parse_for(cursor: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Statement> {
    let var = cursor.expect(TokenKind::Identifier, "a loop variable after 'don'")?
                    .value
                    .clone();
    cursor.expect_operator("=")?;
    let start = parse_expression(cursor)?;

    let direction = match cursor.peek() {
        Some(token) if token.kind == TokenKind::To => Direction::Ascending,
        Some(token) if token.kind == TokenKind::Else && token.value == "ba" => {
            Direction::Descending
        },
        Some(token) => return Err(TokenCursor::unexpected("'zuwa' or 'ba'", token)),
        None => return Err(cursor.end_of_input("'zuwa' or 'ba'")),
    };
    cursor.advance();

    let end = parse_expression(cursor)?;
    let step = if cursor.check(TokenKind::Step) {
        cursor.advance();
        Some(parse_expression(cursor)?)
    } else {
        None
    };

    let body = parse_block(cursor, "for header")?;

    Ok(Statement::For(ForLoop { var,
                                start,
                                end,
                                direction,
                                step,
                                body,
                                pos: keyword.pos }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{Position, Program},
        interpreter::{
            lexer::tokenize,
            parser::core::{ParseOptions, parse_program},
        },
    };

    fn program(source: &str) -> ParseResult<Program> {
        parse_program(&tokenize(source).unwrap(), ParseOptions::default())
    }

    fn lenient(source: &str) -> ParseResult<Program> {
        let options = ParseOptions { else_keyword: ElseKeyword::Lenient,
                                     ..ParseOptions::default() };
        parse_program(&tokenize(source).unwrap(), options)
    }

    #[test]
    fn if_with_else_arm() {
        let parsed = program("idan x > 5:\n    rubuta \"big\"\nin ba haka ba:\n    rubuta \"small\"\n")
            .unwrap();
        let Statement::If { then_body,
                            else_body, .. } = &parsed.statements[0]
        else {
            panic!("expected an if statement");
        };

        assert_eq!(then_body.len(), 1);
        assert_eq!(else_body.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn if_without_else_arm() {
        let parsed = program("idan x:\n    rubuta 1\nrubuta 2\n").unwrap();

        assert_eq!(parsed.statements.len(), 2);
        assert!(matches!(&parsed.statements[0], Statement::If { else_body: None, .. }));
    }

    #[test]
    fn shortened_else_is_rejected_in_strict_mode() {
        let source = "idan x:\n    rubuta 1\nin ba:\n    rubuta 2\n";

        assert_eq!(program(source),
                   Err(ParseError::IncompleteElse { found: 2,
                                                    pos:   Position::new(3, 1), }));
    }

    #[test]
    fn misspelled_else_word_is_rejected_in_strict_mode() {
        let source = "idan x:\n    rubuta 1\nin haka ba ba:\n    rubuta 2\n";

        assert!(matches!(program(source),
                         Err(ParseError::UnexpectedToken { ref expected, .. }) if expected == "'ba'"));
    }

    #[test]
    fn shortened_else_is_accepted_in_lenient_mode() {
        let source = "idan x:\n    rubuta 1\nin ba:\n    rubuta 2\n";
        let parsed = lenient(source).unwrap();

        assert!(matches!(&parsed.statements[0], Statement::If { else_body: Some(_), .. }));
    }

    #[test]
    fn block_requires_colon() {
        assert!(matches!(program("kadai x < 3\n    rubuta x\n"),
                         Err(ParseError::UnexpectedToken { ref expected, .. })
                             if expected == "':' after while condition"));
    }

    #[test]
    fn block_requires_indent() {
        assert!(matches!(program("kadai x < 3:\nrubuta x\n"),
                         Err(ParseError::UnexpectedToken { ref expected, .. })
                             if expected == "an indented block"));
    }

    #[test]
    fn for_loop_directions() {
        let parsed = program("don i = 0 zuwa 5:\n    rubuta i\ndon j = 5 ba 0 ta 2:\n    rubuta j\n")
            .unwrap();
        let [Statement::For(up), Statement::For(down)] = parsed.statements.as_slice() else {
            panic!("expected two for loops");
        };

        assert_eq!(up.direction, Direction::Ascending);
        assert!(up.step.is_none());
        assert_eq!(down.direction, Direction::Descending);
        assert!(down.step.is_some());
    }

    #[test]
    fn for_loop_requires_a_direction_word() {
        assert!(matches!(program("don i = 0 haka 5:\n    rubuta i\n"),
                         Err(ParseError::UnexpectedToken { ref expected, .. })
                             if expected == "'zuwa' or 'ba'"));
    }

    #[test]
    fn return_inside_nested_blocks_of_a_function() {
        let source = "aiki f(n):\n    kadai n > 0:\n        idan n == 3:\n            mayar n\n        n = n - 1\n    mayar 0\n";

        assert!(program(source).is_ok());
    }
}
