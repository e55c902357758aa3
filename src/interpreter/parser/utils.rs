use crate::interpreter::{
    lexer::Token,
    parser::core::{Cursor, ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call argument lists, labelled
/// argument lists and parameter lists. The opening token must already have
/// been consumed. An immediately encountered closing token produces an empty
/// list; a trailing comma is not accepted.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    cursor: &mut Cursor<'_>,
    parse_item: impl Fn(&mut Cursor<'_>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if cursor.eat(closing) {
        return Ok(items);
    }
    loop {
        items.push(parse_item(cursor)?);
        if cursor.eat(&Token::Comma) {
            continue;
        }
        if cursor.eat(closing) {
            break;
        }
        return Err(cursor.error(format!("',' or {closing}")));
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// Keywords are separate tokens, so they are never accepted here.
pub(in crate::interpreter::parser) fn parse_identifier(cursor: &mut Cursor<'_>)
                                                       -> ParseResult<String> {
    match cursor.peek() {
        Some(Token::Identifier(name)) => {
            cursor.advance();
            Ok(name.clone())
        },
        _ => Err(cursor.error("identifier")),
    }
}

/// Parses `"(" item ")"`, the shape shared by `println`, `if` and `while`
/// headers.
pub(in crate::interpreter::parser) fn parse_parenthesized<T>(
    cursor: &mut Cursor<'_>,
    parse_item: impl Fn(&mut Cursor<'_>) -> ParseResult<T>)
    -> ParseResult<T> {
    cursor.expect(&Token::LParen)?;
    let item = parse_item(cursor)?;
    cursor.expect(&Token::RParen)?;
    Ok(item)
}
