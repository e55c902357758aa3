use crate::{
    ast::{Expression, LabelledArgument},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Alternative, Cursor, ParseResult, one_of, parse_expr},
            utils::{parse_comma_separated, parse_identifier},
        },
        stack::ensure_sufficient_stack,
    },
};

/// The alternatives of `primary`, in the order they are attempted.
///
/// Calls and labelled calls come before the bare identifier so that `f(1)`
/// and `f[x = 1]` are never read as a variable followed by garbage.
const PRIMARY: &[Alternative<Expression>] = &[parse_group,
                                              parse_integer,
                                              parse_function_call,
                                              parse_labelled_call,
                                              parse_array_literal,
                                              parse_bool_literal,
                                              parse_variable];

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
/// primary := "(" expr ")"
///          | INTEGER
///          | IDENT "(" (expr ("," expr)*)? ")"
///          | IDENT "[" (IDENT "=" expr ("," IDENT "=" expr)*)? "]"
///          | "[" (expr ("," expr)*)? "]"
///          | "true" | "false"
///          | IDENT
/// ```
pub fn parse_primary(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    ensure_sufficient_stack(|| one_of(cursor, "expression", PRIMARY))
}

/// `"(" expr ")"`
fn parse_group(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    cursor.expect(&Token::LParen)?;
    let expr = parse_expr(cursor)?;
    cursor.expect(&Token::RParen)?;
    Ok(expr)
}

fn parse_integer(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    match cursor.peek() {
        Some(Token::Integer(value)) => {
            cursor.advance();
            Ok(Expression::IntegerLiteral(*value))
        },
        _ => Err(cursor.error("integer literal")),
    }
}

/// Parses a positional call such as `fact(n - 1)`.
fn parse_function_call(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    let name = parse_identifier(cursor)?;
    cursor.expect(&Token::LParen)?;
    let args = parse_comma_separated(cursor, parse_expr, &Token::RParen)?;
    Ok(Expression::FunctionCall { name, args })
}

/// Parses a labelled call such as `power[n = 5]`.
///
/// Labels are kept in source order; matching them against the callee's
/// parameters is the evaluator's job.
fn parse_labelled_call(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    let name = parse_identifier(cursor)?;
    cursor.expect(&Token::LBracket)?;
    let args = parse_comma_separated(cursor, parse_labelled_argument, &Token::RBracket)?;
    Ok(Expression::LabelledCall { name, args })
}

fn parse_labelled_argument(cursor: &mut Cursor<'_>) -> ParseResult<LabelledArgument> {
    let label = parse_identifier(cursor)?;
    cursor.expect(&Token::Equals)?;
    let expression = parse_expr(cursor)?;
    Ok(LabelledArgument { label, expression })
}

fn parse_array_literal(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    cursor.expect(&Token::LBracket)?;
    let items = parse_comma_separated(cursor, parse_expr, &Token::RBracket)?;
    Ok(Expression::ArrayLiteral(items))
}

fn parse_bool_literal(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    if cursor.eat(&Token::True) {
        return Ok(Expression::BoolLiteral(true));
    }
    if cursor.eat(&Token::False) {
        return Ok(Expression::BoolLiteral(false));
    }
    Err(cursor.error("'true' or 'false'"))
}

fn parse_variable(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    parse_identifier(cursor).map(Expression::Identifier)
}
