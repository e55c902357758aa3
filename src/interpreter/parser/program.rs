use std::rc::Rc;

use crate::{
    ast::{FunctionDefinition, TopLevel},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Alternative, Cursor, ParseResult, one_of, parse_expr},
            statement::parse_block,
            utils::{parse_comma_separated, parse_identifier},
        },
    },
};

const TOP_LEVEL: &[Alternative<TopLevel>] = &[parse_global_variable, parse_function_definition];

/// Parses one top-level definition.
///
/// Grammar: `topLevel := globalVariableDefinition | functionDefinition`
pub fn parse_top_level(cursor: &mut Cursor<'_>) -> ParseResult<TopLevel> {
    one_of(cursor, "'global' or 'define'", TOP_LEVEL)
}

/// Parses `global <name> = <expression>;`.
fn parse_global_variable(cursor: &mut Cursor<'_>) -> ParseResult<TopLevel> {
    cursor.expect(&Token::Global)?;
    let name = parse_identifier(cursor)?;
    cursor.expect(&Token::Equals)?;
    let expression = parse_expr(cursor)?;
    cursor.expect(&Token::Semicolon)?;
    Ok(TopLevel::GlobalVariableDefinition { name, expression })
}

/// Parses a function definition of the form
/// `define <name>(param1, param2, ...) { ... }`.
///
/// The body is always a block; parameter names are plain identifiers.
fn parse_function_definition(cursor: &mut Cursor<'_>) -> ParseResult<TopLevel> {
    cursor.expect(&Token::Define)?;
    let name = parse_identifier(cursor)?;
    cursor.expect(&Token::LParen)?;
    let params = parse_comma_separated(cursor, parse_identifier, &Token::RParen)?;
    let body = parse_block(cursor)?;
    Ok(TopLevel::FunctionDefinition(Rc::new(FunctionDefinition { name, params, body })))
}
