use crate::interpreter::{
    lexer::TokenKind,
    parser::core::{ParseResult, TokenCursor},
};

/// Parses a comma-separated list of items until a closing operator.
///
/// This utility is shared by function parameter lists and call argument
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing operator, to end it.
///
/// An immediately encountered closing operator produces an empty list. A
/// trailing comma is not permitted: the item after it fails to parse.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the opening parenthesis.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The operator that terminates the list, e.g. `)`.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing operator.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, T>(
    cursor: &mut TokenCursor<'a>,
    parse_item: impl Fn(&mut TokenCursor<'a>) -> ParseResult<T>,
    closing: &str)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if cursor.check_operator(closing) {
        cursor.advance();
        return Ok(items);
    }
    loop {
        items.push(parse_item(cursor)?);
        match cursor.peek() {
            Some(tok) if tok.is_operator(",") => {
                cursor.advance();
            },
            Some(tok) if tok.is_operator(closing) => {
                cursor.advance();
                break;
            },
            Some(tok) => {
                return Err(TokenCursor::unexpected(&format!("',' or '{closing}'"), tok));
            },
            None => return Err(cursor.end_of_input(&format!("',' or '{closing}'"))),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `cursor`: Token cursor positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier(cursor: &mut TokenCursor<'_>)
                                                       -> ParseResult<String> {
    cursor.expect(TokenKind::Identifier, "an identifier")
          .map(|token| token.value.clone())
}
