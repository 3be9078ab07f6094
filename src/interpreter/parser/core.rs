use tracing::debug;

use crate::{
    ast::{Expr, Position, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_comparison, statement::parse_statement},
    },
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How a `mayar` statement outside of any function body is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopLevelReturn {
    /// Reject it with [`ParseError::ReturnOutsideFunction`].
    #[default]
    Reject,
    /// Accept it; at run time the expression is evaluated and nothing else
    /// happens.
    Ignore,
}

/// How the four-word else keyword `in ba haka ba` is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElseKeyword {
    /// All four words must be present, in order.
    #[default]
    Strict,
    /// Up to four else-words are consumed, stopping at the first token that
    /// is not one.
    Lenient,
}

/// Parser settings for the grammar's two context-dependent decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Treatment of `mayar` at top level.
    pub top_level_return: TopLevelReturn,
    /// Treatment of a shortened else keyword.
    pub else_keyword:     ElseKeyword,
}

/// A cursor over a token sequence.
///
/// The cursor is an index into the slice: `peek` never advances, `advance`
/// consumes one token, `expect` consumes a required token or fails, and
/// `check` tests the current token without consuming it. It also tracks how
/// many function bodies enclose the current position.
pub struct TokenCursor<'a> {
    tokens:         &'a [Token],
    index:          usize,
    function_depth: usize,
    options:        ParseOptions,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token], options: ParseOptions) -> Self {
        Self { tokens,
               index: 0,
               function_depth: 0,
               options }
    }

    /// Returns the current token without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    /// Returns the token after the current one without advancing.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.index + 1)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index);
        if token.is_some() {
            self.index += 1;
        }
        token
    }

    /// Returns `true` if the current token has the given kind.
    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    /// Returns `true` if the current token is the operator `symbol`.
    #[must_use]
    pub fn check_operator(&self, symbol: &str) -> bool {
        self.peek().is_some_and(|t| t.is_operator(symbol))
    }

    /// Consumes a token of the given kind or fails.
    ///
    /// # Errors
    /// `UnexpectedToken` naming `expected` if the current token has another
    /// kind, or `UnexpectedEndOfInput` if no tokens remain.
    pub fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.index += 1;
                Ok(token)
            },
            Some(token) => Err(Self::unexpected(expected, token)),
            None => Err(self.end_of_input(expected)),
        }
    }

    /// Consumes the operator `symbol` or fails.
    ///
    /// # Errors
    /// `UnexpectedToken` if the current token is anything else, or
    /// `UnexpectedEndOfInput` if no tokens remain.
    pub fn expect_operator(&mut self, symbol: &str) -> ParseResult<&'a Token> {
        match self.peek() {
            Some(token) if token.is_operator(symbol) => {
                self.index += 1;
                Ok(token)
            },
            Some(token) => Err(Self::unexpected(&format!("'{symbol}'"), token)),
            None => Err(self.end_of_input(&format!("'{symbol}'"))),
        }
    }

    /// Consumes the current token, failing only at end of input.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` naming `expected` if no tokens remain.
    pub fn next_or_end(&mut self, expected: &str) -> ParseResult<&'a Token> {
        self.advance().ok_or_else(|| self.end_of_input(expected))
    }

    /// Skips any `Newline` tokens.
    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::Newline) {
            self.index += 1;
        }
    }

    /// Returns `true` when no statements remain: at `Eof` or past the end.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.peek().is_none_or(|t| t.kind == TokenKind::Eof)
    }

    /// Builds an `UnexpectedToken` error for `found`.
    #[must_use]
    pub fn unexpected(expected: &str, found: &Token) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    found.describe(),
                                      pos:      found.pos, }
    }

    /// Builds an `UnexpectedEndOfInput` error positioned after the last token.
    #[must_use]
    pub fn end_of_input(&self, expected: &str) -> ParseError {
        let pos = self.tokens.last().map_or(Position::new(1, 1), |t| t.pos);
        ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                           pos }
    }

    /// The active parser options.
    #[must_use]
    pub const fn options(&self) -> ParseOptions {
        self.options
    }

    /// Returns `true` while parsing inside at least one function body.
    #[must_use]
    pub const fn in_function(&self) -> bool {
        self.function_depth > 0
    }

    /// Marks entry into a function body.
    pub const fn enter_function(&mut self) {
        self.function_depth += 1;
    }

    /// Marks exit from a function body.
    pub const fn leave_function(&mut self) {
        self.function_depth = self.function_depth.saturating_sub(1);
    }
}

/// Parses a whole program.
///
/// Grammar: `program := NEWLINE* (statement NEWLINE*)* EOF`
///
/// # Parameters
/// - `tokens`: The full token sequence produced by the lexer.
/// - `options`: Settings for top-level `mayar` and the else keyword.
///
/// # Returns
/// The `Program` root with every top-level statement in source order.
///
/// # Errors
/// The first `ParseError` encountered; nothing parsed before it is kept.
pub fn parse_program(tokens: &[Token], options: ParseOptions) -> ParseResult<Program> {
    let mut cursor = TokenCursor::new(tokens, options);
    let mut statements = Vec::new();

    cursor.skip_newlines();
    while !cursor.at_end() {
        statements.push(parse_statement(&mut cursor)?);
        cursor.skip_newlines();
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `cursor`: Token cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(cursor: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    ensure_sufficient_stack(|| parse_comparison(cursor))
}
