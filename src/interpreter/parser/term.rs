use std::iter::Peekable;

use crate::{
    ast::{Expr, InputKind, NumberLiteral},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect,
        },
    },
};

/// Parses a term, the operand of a binary expression.
///
/// Grammar:
/// ```text
///     term := number | string | boolean | identifier | input
///           | "(" expression ")"
/// ```
/// A parenthesized expression restarts precedence climbing at the lowest
/// threshold.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a term.
///
/// # Returns
/// The parsed term.
///
/// # Errors
/// - `UnexpectedToken` if the token cannot start a term, or a `)` is missing.
pub(crate) fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), _)) => Ok(Expr::Number(NumberLiteral::Integer(*n))),
        Some((Token::Float(r), _)) => Ok(Expr::Number(NumberLiteral::Float(*r))),
        Some((Token::Str(s), _)) => Ok(Expr::String(s.clone())),
        Some((Token::Bool(b), _)) => Ok(Expr::Boolean(*b)),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Some((Token::Keyword(keyword @ (Keyword::Sonkhya | Keyword::Dosomik | Keyword::Bhasha)),
              line)) => parse_input(tokens, *keyword, *line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { expected: "expression".to_string(),
                                                               found:    tok.to_string(),
                                                               line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the rest of an input expression after its type keyword.
///
/// Syntax:
/// ```text
///     sonkhya nao()
///     dosomik nao()        or    dosomik sonkhya nao()
///     bhasha nao()
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned after the type keyword.
/// - `keyword`: The type keyword already consumed.
/// - `line`: Line number of the type keyword.
///
/// # Returns
/// An `Expr::Input` of the matching kind.
fn parse_input<'a, I>(tokens: &mut Peekable<I>, keyword: Keyword, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let kind = match keyword {
        Keyword::Sonkhya => InputKind::Int,
        Keyword::Dosomik => {
            if let Some((Token::Keyword(Keyword::Sonkhya), _)) = tokens.peek() {
                tokens.next();
            }
            InputKind::Float
        },
        _ => InputKind::String,
    };

    expect(tokens, &Token::Keyword(Keyword::Nao))?;
    expect(tokens, &Token::LParen)?;
    expect(tokens, &Token::RParen)?;

    Ok(Expr::Input { kind, line })
}
