use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `expected`: The token the grammar requires.
///
/// # Returns
/// The line the token was found on.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is a different one,
/// - the stream ends unexpectedly.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: expected.to_string(),
                                                               found:    tok.to_string(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The identifier and the line it was found on.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), line)) => Ok((s.clone(), *line)),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                                               found:    tok.to_string(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// Used for the conditions of `jodi` and `jotokhon` and the argument of
/// `lekho` / `ullekho`.
pub(in crate::interpreter::parser) fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>)
                                                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}
