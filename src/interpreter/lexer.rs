use std::{fmt, ops::Range};

use logos::Logos;

use crate::error::ParseError;

/// Errors the lexer can attach to a failed token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexError {
    /// No token rule matches the input.
    #[default]
    InvalidCharacter,
    /// An integer literal does not fit in an `i64`.
    IntegerTooLarge,
}

/// Represents a lexical token in the source input.
///
/// Whitespace and `//` line comments are skipped by the lexer itself, so the
/// parser never sees them.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(error = LexError)]
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*)")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `global`
    #[token("global")]
    Global,
    /// `define`
    #[token("define")]
    Define,
    /// `println`
    #[token("println")]
    Println,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `in`
    #[token("in")]
    In,
    /// `to`
    #[token("to")]
    To,
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Integer(n) => return write!(f, "integer {n}"),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::True => "true",
            Self::False => "false",
            Self::Global => "global",
            Self::Define => "define",
            Self::Println => "println",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::For => "for",
            Self::In => "in",
            Self::To => "to",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
        };
        write!(f, "'{text}'")
    }
}

/// A token together with the byte range it was read from.
pub type Spanned = (Token, Range<usize>);

/// Parses an integer literal from the current token slice.
///
/// Digits that do not fit in an `i64` are reported as
/// [`LexError::IntegerTooLarge`] rather than silently wrapping.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::IntegerTooLarge)
}

/// Byte offsets at which each line of a source text starts.
///
/// Built once per parse so that turning an offset into a position costs a
/// binary search, however large the source is. Sources containing non-ASCII
/// text (which can only appear in comments) also pay for counting the
/// characters of one line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
    /// With ASCII-only text a column is a plain byte distance.
    ascii:  bool,
}

impl LineIndex {
    /// Indexes the line starts of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                       .collect();
        Self { starts,
               ascii: source.is_ascii() }
    }

    /// Converts a byte offset into `source` (the text this index was built
    /// from) into a 1-based `(line, column)` pair.
    ///
    /// Columns count characters, not bytes. An offset past the end of
    /// `source` maps to the position just after the last character.
    #[must_use]
    pub fn line_column(&self, source: &str, offset: usize) -> (usize, usize) {
        let offset = offset.min(source.len());
        let line = self.starts.partition_point(|&start| start <= offset).max(1);
        let line_start = self.starts.get(line - 1).copied().unwrap_or(0);
        let column = if self.ascii {
            offset.saturating_sub(line_start)
        } else {
            source.get(line_start..offset)
                  .map_or(0, |text| text.chars().count())
        };
        (line, column + 1)
    }
}

/// Converts a byte offset into a 1-based `(line, column)` pair.
///
/// Indexes the whole source on every call; use [`LineIndex`] when many
/// offsets of the same source are converted.
///
/// # Example
/// ```
/// use toys::interpreter::lexer::line_column;
///
/// assert_eq!(line_column("a\nbc", 0), (1, 1));
/// assert_eq!(line_column("a\nbc", 3), (2, 2));
/// assert_eq!(line_column("a\nbc", 9), (2, 3));
/// ```
#[must_use]
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    LineIndex::new(source).line_column(source, offset)
}

/// Splits source text into spanned tokens.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for input no token matches and
/// [`ParseError::LiteralTooLarge`] for integer literals outside the `i64`
/// range.
///
/// # Example
/// ```
/// use toys::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x <= 10 // bound").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()), Token::LessEqual, Token::Integer(10)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(tok) => tokens.push((tok, span)),
            Err(kind) => {
                let (line, column) = line_column(source, span.start);
                let text = lexer.slice().to_string();
                return Err(match kind {
                               LexError::InvalidCharacter => {
                                   ParseError::InvalidCharacter { text, line, column }
                               },
                               LexError::IntegerTooLarge => {
                                   ParseError::LiteralTooLarge { text, line, column }
                               },
                           });
            },
        }
    }

    Ok(tokens)
}
