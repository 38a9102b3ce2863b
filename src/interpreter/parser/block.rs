use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::expect},
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until a
/// closing `}` token is encountered; `{}` yields an empty sequence.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The statements of the block in source order.
///
/// # Errors
/// - `UnexpectedToken` if the opening `{` is missing.
/// - `UnterminatedBlock` if the end of file is reached before `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LBrace)?;

    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some((Token::Eof, line)) => return Err(ParseError::UnterminatedBlock { line: *line }),
            None => return Err(ParseError::UnterminatedBlock { line: 0 }),
            Some(_) => statements.push(parse_statement(tokens)?),
        }
    }

    Ok(statements)
}
