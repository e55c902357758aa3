use crate::{
    ast::{Expression, Operator, assignment, binary, identifier},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Alternative, Cursor, ParseResult, one_of, parse_expr},
            utils::{parse_identifier, parse_parenthesized},
        },
        stack::ensure_sufficient_stack,
    },
};

/// The alternatives of `line`, in the order they are attempted.
///
/// Assignment must precede the expression statement: `x = 1;` would
/// otherwise fail as the expression `x` followed by `=`.
const LINE: &[Alternative<Expression>] = &[parse_println,
                                           parse_while,
                                           parse_if,
                                           parse_for,
                                           parse_assignment,
                                           parse_expression_line,
                                           parse_block];

/// Parses a single line (a statement-like unit).
///
/// A line may be one of:
/// - a `println(expr);` call,
/// - a `while` loop,
/// - an `if` with an optional `else`,
/// - a `for` loop (desugared, see [`parse_for`]),
/// - an assignment `name = expr;`,
/// - an expression statement `expr;`,
/// - a block `{ line* }`.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned.
pub fn parse_line(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    ensure_sufficient_stack(|| one_of(cursor, "statement", LINE))
}

/// Parses a block expression delimited by braces.
///
/// Grammar: `block := "{" line* "}"`
pub fn parse_block(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    cursor.expect(&Token::LBrace)?;
    let mut elements = Vec::new();

    while !cursor.eat(&Token::RBrace) {
        if cursor.at_end() {
            return Err(cursor.error("'}'"));
        }
        elements.push(parse_line(cursor)?);
    }

    Ok(Expression::Block(elements))
}

/// `"println" "(" expr ")" ";"`
fn parse_println(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    cursor.expect(&Token::Println)?;
    let arg = parse_parenthesized(cursor, parse_expr)?;
    cursor.expect(&Token::Semicolon)?;
    Ok(Expression::Println(Box::new(arg)))
}

/// `"while" "(" expr ")" line`
fn parse_while(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    cursor.expect(&Token::While)?;
    let condition = parse_parenthesized(cursor, parse_expr)?;
    let body = parse_line(cursor)?;
    Ok(Expression::While { condition: Box::new(condition),
                           body:      Box::new(body), })
}

/// Parses an `if` line with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>) <line>
///     else <line>
/// ```
/// A dangling `else` binds to the nearest `if`.
fn parse_if(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    cursor.expect(&Token::If)?;
    let condition = parse_parenthesized(cursor, parse_expr)?;
    let then_clause = parse_line(cursor)?;

    let else_clause = if cursor.eat(&Token::Else) {
        Some(Box::new(parse_line(cursor)?))
    } else {
        None
    };

    Ok(Expression::If { condition: Box::new(condition),
                        then_clause: Box::new(then_clause),
                        else_clause })
}

/// Parses a `for` loop and desugars it on the spot.
///
/// ```text
///     for (i in from to to) body
/// ```
/// becomes
/// ```text
///     { i = from; while (i < to) { body; i = i + 1; } }
/// ```
/// The upper bound is re-evaluated before every iteration and is exclusive.
/// No dedicated AST node exists for `for`.
fn parse_for(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    cursor.expect(&Token::For)?;
    cursor.expect(&Token::LParen)?;
    let name = parse_identifier(cursor)?;
    cursor.expect(&Token::In)?;
    let from = parse_expr(cursor)?;
    cursor.expect(&Token::To)?;
    let to = parse_expr(cursor)?;
    cursor.expect(&Token::RParen)?;
    let body = parse_line(cursor)?;

    let increment = assignment(&name,
                               binary(Operator::Add,
                                      identifier(&name),
                                      Expression::IntegerLiteral(1)));
    let condition = binary(Operator::LessThan, identifier(&name), to);

    Ok(Expression::Block(vec![assignment(&name, from),
                              Expression::While { condition: Box::new(condition),
                                                  body:      Box::new(Expression::Block(vec![body, increment])), }]))
}

/// `IDENT "=" expr ";"`
fn parse_assignment(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    let name = parse_identifier(cursor)?;
    cursor.expect(&Token::Equals)?;
    let value = parse_expr(cursor)?;
    cursor.expect(&Token::Semicolon)?;
    Ok(assignment(name, value))
}

/// `expr ";"`
fn parse_expression_line(cursor: &mut Cursor<'_>) -> ParseResult<Expression> {
    let expr = parse_expr(cursor)?;
    cursor.expect(&Token::Semicolon)?;
    Ok(expr)
}
