use tracing::trace;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::{LineIndex, Spanned, Token, tokenize},
        parser::{binary::parse_comparative, program::parse_top_level, statement::parse_line},
        stack::ensure_sufficient_stack,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsing alternative tried by [`one_of`].
pub type Alternative<T> = fn(&mut Cursor<'_>) -> ParseResult<T>;

/// A position in a token stream.
///
/// The cursor is the parser's only state. Every grammar rule takes it by
/// mutable reference; backtracking is done by saving [`Cursor::position`]
/// before an attempt and restoring it with [`Cursor::reset`] afterwards.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    tokens: &'a [Spanned],
    lines:  LineIndex,
    pos:    usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the first token of `tokens`, which must have been
    /// produced from `source`.
    #[must_use]
    pub fn new(source: &'a str, tokens: &'a [Spanned]) -> Self {
        Self { source,
               tokens,
               lines: LineIndex::new(source),
               pos: 0 }
    }

    /// The index of the next token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor back (or forward) to a previously saved position.
    pub const fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Returns `true` once every token has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|(tok, _)| tok)
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.peek()?;
        self.pos += 1;
        Some(tok)
    }

    /// Consumes the next token if it equals `token`.
    pub fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            return true;
        }
        false
    }

    /// Consumes `token` or fails with an error naming it.
    pub fn expect(&mut self, token: &Token) -> ParseResult<()> {
        if self.eat(token) {
            return Ok(());
        }
        Err(self.error(token.to_string()))
    }

    /// Builds an error reporting that `expected` was wanted at the current
    /// position.
    #[must_use]
    pub fn error(&self, expected: impl Into<String>) -> ParseError {
        let expected = expected.into();
        match self.tokens.get(self.pos) {
            Some((tok, span)) => {
                let (line, column) = self.lines.line_column(self.source, span.start);
                ParseError::UnexpectedToken { expected,
                                              found: tok.to_string(),
                                              line,
                                              column }
            },
            None => {
                let (line, column) = self.lines.line_column(self.source, self.source.len());
                ParseError::UnexpectedEndOfInput { expected, line, column }
            },
        }
    }

    /// Fails unless every token has been consumed.
    pub fn expect_end(&self) -> ParseResult<()> {
        if self.at_end() {
            return Ok(());
        }
        Err(self.error("end of input"))
    }
}

/// Tries each alternative in order from the same starting position.
///
/// The first alternative that succeeds wins. A failed alternative may have
/// consumed any number of tokens; the cursor is always restored before the
/// next one runs. When every alternative fails, the error that got furthest
/// into the input is returned; if none got past the starting token, the
/// error names `expected` instead.
pub fn one_of<T>(cursor: &mut Cursor<'_>,
                 expected: &str,
                 alternatives: &[Alternative<T>])
                 -> ParseResult<T> {
    let start = cursor.position();
    let mut furthest: Option<ParseError> = None;

    for alternative in alternatives {
        match alternative(cursor) {
            Ok(value) => return Ok(value),
            Err(err) => {
                trace!(position = start, %err, "alternative failed, backtracking");
                cursor.reset(start);
                if furthest.as_ref()
                           .is_none_or(|best| err.position() > best.position())
                {
                    furthest = Some(err);
                }
            },
        }
    }

    let start_error = cursor.error(expected);
    match furthest {
        Some(err) if err.position() > start_error.position() => Err(err),
        _ => Err(start_error),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, comparison, and recursively descends through the
/// precedence hierarchy.
///
/// Nesting recurses through here, so the native stack is grown on demand
/// instead of overflowing on deeply parenthesized input.
///
/// Grammar: `expression := comparative`
pub fn parse_expr(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    ensure_sufficient_stack(|| parse_comparative(cursor))
}

/// Parses a complete program: top-level definitions up to end of input.
///
/// Grammar: `program := topLevel*`
///
/// # Errors
/// Returns a [`ParseError`] describing the first position no grammar rule
/// could continue from.
///
/// # Example
/// ```
/// use toys::interpreter::parser::parse_program;
///
/// let program = parse_program("global v = 2; define main() { v + 1; }").unwrap();
/// assert_eq!(program.definitions.len(), 2);
/// ```
pub fn parse_program(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    let mut cursor = Cursor::new(source, &tokens);
    let mut definitions = Vec::new();

    while !cursor.at_end() {
        definitions.push(parse_top_level(&mut cursor)?);
    }

    tracing::debug!(definitions = definitions.len(), "parsed program");
    Ok(Program { definitions })
}

/// Parses one or more lines followed by end of input.
///
/// This is the script form of the grammar: statements without any enclosing
/// function, as evaluated by
/// [`Interpreter::run_lines`](crate::interpreter::evaluator::core::Interpreter::run_lines).
///
/// # Errors
/// Returns a [`ParseError`] if the input is empty or not a sequence of lines.
pub fn parse_lines(source: &str) -> ParseResult<Vec<Expression>> {
    let tokens = tokenize(source)?;
    let mut cursor = Cursor::new(source, &tokens);
    let mut lines = vec![parse_line(&mut cursor)?];

    while !cursor.at_end() {
        lines.push(parse_line(&mut cursor)?);
    }

    Ok(lines)
}

/// Parses a single expression followed by end of input.
///
/// # Errors
/// Returns a [`ParseError`] if the input is not exactly one expression.
///
/// # Example
/// ```
/// use toys::{
///     ast::{Expression, Operator, binary},
///     interpreter::parser::parse_expression,
/// };
///
/// let expr = parse_expression("1 + 2").unwrap();
/// assert_eq!(expr,
///            binary(Operator::Add, Expression::IntegerLiteral(1), Expression::IntegerLiteral(2)));
/// ```
pub fn parse_expression(source: &str) -> ParseResult<Expression> {
    let tokens = tokenize(source)?;
    let mut cursor = Cursor::new(source, &tokens);
    let expr = parse_expr(&mut cursor)?;
    cursor.expect_end()?;
    Ok(expr)
}
