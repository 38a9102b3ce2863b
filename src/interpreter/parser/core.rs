use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{binary::parse_binary, statement::parse_statement, utils::expect},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a [`Program`].
///
/// # Errors
/// Returns a `ParseError` for any violation of the grammar, including tokens
/// left over after `kaj shesh`.
///
/// # Example
/// ```
/// use bongscript::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("kaj shuru eta holo x = 1; lekho(x); kaj shesh").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses a program.
///
/// Grammar: `program := "kaj" "shuru" statement* "kaj" "shesh" EOF`
///
/// Statements are collected until the closing `kaj` (or the end of input,
/// which then fails on the missing `kaj`).
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The program with its top-level statements in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Keyword(Keyword::Kaj))?;
    expect(tokens, &Token::Keyword(Keyword::Shuru))?;

    let mut statements = Vec::new();
    while let Some((token, _)) = tokens.peek() {
        if matches!(token, Token::Keyword(Keyword::Kaj) | Token::Eof) {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    expect(tokens, &Token::Keyword(Keyword::Kaj))?;
    expect(tokens, &Token::Keyword(Keyword::Shesh))?;

    match tokens.next() {
        Some((Token::Eof, _)) | None => Ok(Program { statements }),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                                        line:  *line, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts precedence
/// climbing at the lowest threshold, so every binary operator is accepted.
///
/// Grammar: `expression := term (operator term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary(tokens, 1)
}
