use logos::Logos;
use tracing::debug;

use crate::{ast::Position, error::LexError};

/// The closed set of token kinds produced by [`tokenize`].
///
/// `Newline`, `Indent`, `Dedent` and `Eof` are synthesized by the indentation
/// layer; every other kind comes from source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal; the value keeps a `.` for reals.
    Number,
    /// String literal; the value holds the decoded contents without quotes.
    String,
    /// Variable or function name.
    Identifier,
    /// Operator or punctuation: `= + - * / % ( ) , : == != > < >= <=`.
    Operator,
    /// `aiki`
    Function,
    /// `idan`
    If,
    /// `in`, `ba` or `haka`, the words of `in ba haka ba`. `ba` also marks a
    /// descending `don` loop.
    Else,
    /// `kadai`
    While,
    /// `don`
    For,
    /// `mayar`
    Return,
    /// `rubuta`
    Print,
    /// `zuwa`
    To,
    /// `ta`
    Step,
    /// End of a non-blank line.
    Newline,
    /// The start of a more deeply indented block.
    Indent,
    /// The end of an indented block.
    Dedent,
    /// End of input.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Identifier => "IDENTIFIER",
            Self::Operator => "OPERATOR",
            Self::Function => "KEYWORD_FUNCTION",
            Self::If => "KEYWORD_IF",
            Self::Else => "KEYWORD_ELSE",
            Self::While => "KEYWORD_WHILE",
            Self::For => "KEYWORD_FOR",
            Self::Return => "KEYWORD_RETURN",
            Self::Print => "KEYWORD_PRINT",
            Self::To => "KEYWORD_TO",
            Self::Step => "KEYWORD_STEP",
            Self::Newline => "NEWLINE",
            Self::Indent => "INDENT",
            Self::Dedent => "DEDENT",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind, its text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind:  TokenKind,
    /// The token text. Empty for synthesized tokens.
    pub value: String,
    /// Position of the first character.
    pub pos:   Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, pos: Position) -> Self {
        Self { kind,
               value: value.into(),
               pos }
    }

    /// Returns `true` if this is an operator token spelled `symbol`.
    ///
    /// ## Example
    /// ```
    /// use hausalang::{
    ///     ast::Position,
    ///     interpreter::lexer::{Token, TokenKind},
    /// };
    ///
    /// let colon = Token::new(TokenKind::Operator, ":", Position::new(1, 8));
    /// assert!(colon.is_operator(":"));
    /// assert!(!colon.is_operator("="));
    /// ```
    #[must_use]
    pub fn is_operator(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Operator && self.value == symbol
    }

    /// Describes the token for error messages, e.g. `IDENTIFIER(x)`.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.value.is_empty() {
            self.kind.to_string()
        } else {
            format!("{}({})", self.kind, self.value)
        }
    }
}

/// Tokens recognised inside a single line, after indentation and comments
/// have been removed.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum LineToken {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `"..."`, with `\"` allowed inside.
    #[regex(r#""([^"\\]|\\.)*""#)]
    String,
    /// A quote that runs to the end of the line.
    #[regex(r#""([^"\\]|\\.)*\\?"#)]
    UnterminatedString,
    #[token("aiki")]
    Function,
    #[token("idan")]
    If,
    #[token("in")]
    #[token("ba")]
    #[token("haka")]
    Else,
    #[token("kadai")]
    While,
    #[token("don")]
    For,
    #[token("mayar")]
    Return,
    #[token("rubuta")]
    Print,
    #[token("zuwa")]
    To,
    #[token("ta")]
    Step,
    /// Identifier tokens; variable or function names such as `x` or `hada`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[token("==")]
    #[token("!=")]
    #[token(">=")]
    #[token("<=")]
    #[token("=")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("(")]
    #[token(")")]
    #[token(":")]
    #[token(",")]
    #[token("<")]
    #[token(">")]
    Operator,
    /// Tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Converts source text into a flat token sequence.
///
/// Each non-blank line is scanned for tokens and terminated by a `Newline`.
/// Changes in leading-space width against a stack of open widths emit
/// `Indent` and `Dedent` tokens before the line's first token. At end of input
/// every open block is closed with a `Dedent`, so the two always balance, and
/// an `Eof` token is appended.
///
/// # Errors
/// - `UnterminatedString` if a string literal is not closed on its line.
/// - `IllegalCharacter` for characters outside the language.
/// - `InconsistentDedent` if a line dedents to a width no enclosing block
///   uses.
///
/// # Example
/// ```
/// use hausalang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("idan x > 1:\n    rubuta x\n").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::If,
///                 TokenKind::Identifier,
///                 TokenKind::Operator,
///                 TokenKind::Number,
///                 TokenKind::Operator,
///                 TokenKind::Newline,
///                 TokenKind::Indent,
///                 TokenKind::Print,
///                 TokenKind::Identifier,
///                 TokenKind::Newline,
///                 TokenKind::Dedent,
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut indents = vec![0_usize];
    let mut last_line = 0;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        last_line = line;

        let code = strip_comment(raw);
        if code.trim().is_empty() {
            continue;
        }

        let width = code.len() - code.trim_start_matches(' ').len();
        let line_start = Position::new(line, width + 1);
        let top = indents.last().copied().unwrap_or(0);

        if width > top {
            indents.push(width);
            tokens.push(Token::new(TokenKind::Indent, "", line_start));
        } else if width < top {
            while indents.last().is_some_and(|&open| width < open) {
                indents.pop();
                tokens.push(Token::new(TokenKind::Dedent, "", line_start));
            }
            if indents.last() != Some(&width) {
                return Err(LexError::InconsistentDedent { width,
                                                          pos: line_start });
            }
        }

        scan_line(&code[width..], line, width, &mut tokens)?;

        let end = Position::new(line, code.trim_end().chars().count() + 1);
        tokens.push(Token::new(TokenKind::Newline, "", end));
    }

    let end = Position::new(last_line + 1, 1);
    for _ in 1..indents.len() {
        tokens.push(Token::new(TokenKind::Dedent, "", end));
    }
    tokens.push(Token::new(TokenKind::Eof, "", end));

    debug!(tokens = tokens.len(), lines = last_line, "tokenized source");
    Ok(tokens)
}

/// Scans the tokens of one line, starting after its indentation.
///
/// `offset` is the number of characters already consumed on the line, so
/// token columns count from the start of the physical line.
fn scan_line(text: &str,
             line: usize,
             offset: usize,
             tokens: &mut Vec<Token>)
             -> Result<(), LexError> {
    let mut lexer = LineToken::lexer(text);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let pos = Position::new(line, offset + text[..span.start].chars().count() + 1);

        let token = match result {
            Ok(LineToken::Number) => Token::new(TokenKind::Number, slice, pos),
            Ok(LineToken::String) => {
                Token::new(TokenKind::String, unescape(&slice[1..slice.len() - 1]), pos)
            },
            Ok(LineToken::UnterminatedString) => {
                return Err(LexError::UnterminatedString { pos });
            },
            Ok(LineToken::Identifier) => Token::new(TokenKind::Identifier, slice, pos),
            Ok(LineToken::Operator) => Token::new(TokenKind::Operator, slice, pos),
            Ok(LineToken::Function) => Token::new(TokenKind::Function, slice, pos),
            Ok(LineToken::If) => Token::new(TokenKind::If, slice, pos),
            Ok(LineToken::Else) => Token::new(TokenKind::Else, slice, pos),
            Ok(LineToken::While) => Token::new(TokenKind::While, slice, pos),
            Ok(LineToken::For) => Token::new(TokenKind::For, slice, pos),
            Ok(LineToken::Return) => Token::new(TokenKind::Return, slice, pos),
            Ok(LineToken::Print) => Token::new(TokenKind::Print, slice, pos),
            Ok(LineToken::To) => Token::new(TokenKind::To, slice, pos),
            Ok(LineToken::Step) => Token::new(TokenKind::Step, slice, pos),
            Ok(LineToken::Ignored) => continue,
            Err(()) => {
                return Err(LexError::IllegalCharacter { found: slice.to_string(),
                                                        pos });
            },
        };
        tokens.push(token);
    }

    Ok(())
}

/// Truncates a line at the first `#` that is not inside a string literal.
///
/// Inside a string, `\"` does not close the string.
///
/// # Example
/// ```
/// use hausalang::interpreter::lexer::strip_comment;
///
/// assert_eq!(strip_comment("x = 1 # note"), "x = 1 ");
/// assert_eq!(strip_comment("rubuta \"#1\""), "rubuta \"#1\"");
/// assert_eq!(strip_comment(r##"rubuta "a\"#" # b"##), r##"rubuta "a\"#" "##);
/// ```
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;
    for (index, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..index],
            _ => {},
        }
    }
    line
}

/// Resolves the escapes allowed in string literals.
///
/// `\"`, `\\`, `\n` and `\t` are decoded; any other backslash is kept as is.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            },
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_and_identifiers() {
        use TokenKind::{Else, Eof, Function, Identifier, Newline, Print, Return, Step, To, While};

        assert_eq!(kinds("aiki kadai mayar rubuta zuwa ta in ba haka ba inside"),
                   vec![Function, While, Return, Print, To, Step, Else, Else, Else, Else,
                        Identifier, Newline, Eof]);
    }

    #[test]
    fn longest_operator_wins() {
        let tokens = tokenize("a <= b == c != d >= e < f").unwrap();
        let ops: Vec<_> = tokens.iter()
                                .filter(|t| t.kind == TokenKind::Operator)
                                .map(|t| t.value.as_str())
                                .collect();

        assert_eq!(ops, vec!["<=", "==", "!=", ">=", "<"]);
    }

    #[test]
    fn numbers_keep_their_decimal_point() {
        let tokens = tokenize("x = 7.0 / 2").unwrap();

        assert_eq!(tokens[2].value, "7.0");
        assert_eq!(tokens[4].value, "2");
    }

    #[test]
    fn positions_are_one_based_and_include_indentation() {
        let tokens = tokenize("aiki f():\n    mayar 1\n").unwrap();
        let ret = tokens.iter().find(|t| t.kind == TokenKind::Return).unwrap();

        assert_eq!(ret.pos, Position::new(2, 5));
        assert_eq!(tokens[0].pos, Position::new(1, 1));
    }

    #[test]
    fn nested_blocks_balance() {
        let source = "don i = 0 zuwa 3:\n    idan i > 1:\n        rubuta i\nrubuta 0\n";
        let tokens = kinds(source);
        let indents = tokens.iter().filter(|k| **k == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|k| **k == TokenKind::Dedent).count();

        assert_eq!(indents, 2);
        assert_eq!(dedents, 2);
    }

    #[test]
    fn open_blocks_close_at_end_of_input() {
        let tokens = kinds("kadai x:\n    idan y:\n        rubuta 1");

        assert_eq!(&tokens[tokens.len() - 3..],
                   &[TokenKind::Dedent, TokenKind::Dedent, TokenKind::Eof]);
    }

    #[test]
    fn blank_and_comment_lines_are_ignored() {
        let with_noise = kinds("x = 1\n\n   # just a note\n        \ny = 2\n");
        let without = kinds("x = 1\ny = 2\n");

        assert_eq!(with_noise, without);
    }

    #[test]
    fn hash_inside_string_is_not_a_comment() {
        let tokens = tokenize("rubuta \"lamba #1\" # comment").unwrap();

        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].value, "lamba #1");
        assert_eq!(tokens[2].kind, TokenKind::Newline);
    }

    #[test]
    fn escaped_quote_does_not_end_the_string_for_comments() {
        let tokens = tokenize(r##"rubuta "\"#" # comment"##).unwrap();

        assert_eq!(tokens[1].value, "\"#");
        assert_eq!(tokens[2].kind, TokenKind::Newline);
    }

    #[test]
    fn escaped_quotes_stay_in_the_string() {
        let tokens = tokenize(r#"rubuta "ya ce \"sannu\"\n""#).unwrap();

        assert_eq!(tokens[1].value, "ya ce \"sannu\"\n");
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(tokenize("x = 1\nrubuta \"sannu"),
                   Err(LexError::UnterminatedString { pos: Position::new(2, 8) }));
    }

    #[test]
    fn illegal_character_is_an_error() {
        assert_eq!(tokenize("x = 3 $ 4"),
                   Err(LexError::IllegalCharacter { found: "$".to_string(),
                                                    pos:   Position::new(1, 7), }));
    }

    #[test]
    fn inconsistent_dedent_is_an_error() {
        let result = tokenize("idan x:\n    rubuta 1\n  rubuta 2\n");

        assert_eq!(result,
                   Err(LexError::InconsistentDedent { width: 2,
                                                      pos:   Position::new(3, 3), }));
    }
}
