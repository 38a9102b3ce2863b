use std::iter::Peekable;

use crate::{
    ast::{ElseBranch, IfStatement, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, parse_parenthesized},
        },
    },
};

/// Parses a single statement.
///
/// The first token decides the statement kind:
/// - `lekho` / `ullekho`: a print.
/// - `eta`: a declaration.
/// - `jodi`: a conditional.
/// - `jotokhon`: a loop.
/// - `theme`: a break.
/// - `egiye`: a continue.
/// - an identifier: an assignment.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// `UnexpectedStatement` if no statement starts with the next token.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Keyword(Keyword::Lekho | Keyword::Ullekho), _)) => parse_print(tokens),
        Some((Token::Keyword(Keyword::Eta), _)) => parse_declaration(tokens),
        Some((Token::Keyword(Keyword::Jodi), _)) => Ok(Statement::If(parse_if(tokens)?)),
        Some((Token::Keyword(Keyword::Jotokhon), _)) => parse_while(tokens),
        Some((Token::Keyword(Keyword::Theme | Keyword::Egiye), _)) => parse_loop_signal(tokens),
        Some((Token::Identifier(_), _)) => parse_assignment(tokens),
        Some((tok, line)) => Err(ParseError::UnexpectedStatement { found: tok.to_string(),
                                                                   line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a print statement.
///
/// Grammar: `print := ("lekho" | "ullekho") "(" expression ")" ";"`
///
/// `lekho` prints with a trailing newline, `ullekho` without.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (with_newline, line) = match tokens.next() {
        Some((Token::Keyword(keyword), line)) => (*keyword == Keyword::Lekho, *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { expected: "'lekho' or 'ullekho'".to_string(),
                                                     found:    tok.to_string(),
                                                     line:     *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let expr = parse_parenthesized(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Print { expr,
                          with_newline,
                          line })
}

/// Parses a variable declaration.
///
/// Grammar: `declaration := "eta" "holo" identifier "=" expression ";"`
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Keyword(Keyword::Eta))?;
    expect(tokens, &Token::Keyword(Keyword::Holo))?;

    parse_assignment_tail(tokens, true)
}

/// Parses a reassignment.
///
/// Grammar: `assignment := identifier "=" expression ";"`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment_tail(tokens, false)
}

/// Parses `identifier "=" expression ";"`, shared by declarations and
/// reassignments.
fn parse_assignment_tail<'a, I>(tokens: &mut Peekable<I>,
                                is_declaration: bool)
                                -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::Semicolon)?;

    Ok(Statement::Assign { name,
                           expr,
                           is_declaration,
                           line })
}

/// Parses a `jodi` statement with optional `nahole` and chained
/// `nahole jodi`.
///
/// Syntax:
/// ```text
///     jodi (<condition>) { ... }
///     nahole jodi (<condition>) { ... }
///     nahole { ... }
/// ```
/// Chained `nahole jodi` constructs are parsed recursively, so each nested
/// conditional owns the rest of the chain as its own else branch.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `jodi` keyword.
///
/// # Returns
/// The full conditional.
///
/// # Errors
/// - `UnexpectedToken` if parentheses or braces are missing, or `nahole` is
///   followed by neither `jodi` nor `{`.
/// - Propagates any errors from the condition and the blocks.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<IfStatement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Keyword(Keyword::Jodi))?;
    let condition = parse_parenthesized(tokens)?;
    let body = parse_block(tokens)?;

    let else_branch = match tokens.peek() {
        Some((Token::Keyword(Keyword::Nahole), _)) => {
            tokens.next();

            match tokens.peek() {
                Some((Token::Keyword(Keyword::Jodi), _)) => {
                    Some(ElseBranch::If(Box::new(parse_if(tokens)?)))
                },
                _ => Some(ElseBranch::Block(parse_block(tokens)?)),
            }
        },
        _ => None,
    };

    Ok(IfStatement { condition,
                     body,
                     else_branch })
}

/// Parses a loop.
///
/// Grammar: `while := "jotokhon" "(" expression ")" block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Keyword(Keyword::Jotokhon))?;
    let condition = parse_parenthesized(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body })
}

/// Parses `theme jao;` (break) or `egiye jao;` (continue).
fn parse_loop_signal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = match tokens.next() {
        Some((Token::Keyword(Keyword::Theme), line)) => Statement::Break { line: *line },
        Some((Token::Keyword(Keyword::Egiye), line)) => Statement::Continue { line: *line },
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { expected: "'theme' or 'egiye'".to_string(),
                                                     found:    tok.to_string(),
                                                     line:     *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    expect(tokens, &Token::Keyword(Keyword::Jao))?;
    expect(tokens, &Token::Semicolon)?;

    Ok(statement)
}
