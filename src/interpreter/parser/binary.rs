use crate::{
    ast::{Expression, Operator, binary},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Cursor, ParseResult},
            primary::parse_primary,
        },
    },
};

/// Parses a left-associative chain of one precedence level.
///
/// `operand` parses the next-higher level; `accepts` decides which operators
/// belong to this level. The chain is folded from the left, so `a - b - c`
/// becomes `(a - b) - c`.
fn parse_chain(cursor: &mut Cursor<'_>,
               operand: fn(&mut Cursor<'_>) -> ParseResult<Expression>,
               accepts: fn(Operator) -> bool)
               -> ParseResult<Expression> {
    let mut left = operand(cursor)?;
    while let Some(op) = cursor.peek().and_then(token_to_operator)
          && accepts(op)
    {
        cursor.advance();
        let right = operand(cursor)?;
        left = binary(op, left, right);
    }
    Ok(left)
}

/// Parses relational and equality operators.
///
/// The rule is:
/// `comparative := additive (("<" | "<=" | ">" | ">=" | "==" | "!=")
/// additive)*`
///
/// The two-character operators are single tokens, so `a <= b` can never be
/// read as `a < (= b)`.
pub fn parse_comparative(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    parse_chain(cursor, parse_additive, Operator::is_comparison)
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multitive (("+" | "-") multitive)*`
pub fn parse_additive(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    parse_chain(cursor, parse_multitive, |op| {
        matches!(op, Operator::Add | Operator::Subtract)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multitive := primary (("*" | "/") primary)*`
pub fn parse_multitive(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    parse_chain(cursor, parse_primary, |op| {
        matches!(op, Operator::Multiply | Operator::Divide)
    })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use toys::{
///     ast::Operator,
///     interpreter::{lexer::Token, parser::binary::token_to_operator},
/// };
///
/// assert_eq!(token_to_operator(&Token::LessEqual), Some(Operator::LessOrEqual));
/// assert_eq!(token_to_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Subtract),
        Token::Star => Some(Operator::Multiply),
        Token::Slash => Some(Operator::Divide),
        Token::Less => Some(Operator::LessThan),
        Token::LessEqual => Some(Operator::LessOrEqual),
        Token::Greater => Some(Operator::GreaterThan),
        Token::GreaterEqual => Some(Operator::GreaterOrEqual),
        Token::EqualEqual => Some(Operator::EqualEqual),
        Token::BangEqual => Some(Operator::NotEqual),
        _ => None,
    }
}
