use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, term::parse_term},
    },
};

/// Parses a binary expression by precedence climbing.
///
/// A term is parsed first. Then, while the next token is an operator whose
/// precedence is at least `min_precedence`, the operator is consumed and its
/// right operand is parsed with a threshold one above the operator's own
/// precedence. The result is folded into the left operand, which makes
/// operators of equal precedence associate to the left: `10 - 3 - 2` parses as
/// `(10 - 3) - 2`.
///
/// Precedence levels, lowest first: `||`, `&&`, comparisons, `+ -`,
/// `* / %`.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `min_precedence`: Operators binding weaker than this end the expression.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or a single term.
///
/// # Example
/// ```
/// use bongscript::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::binary::parse_binary},
/// };
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let expr = parse_binary(&mut tokens.iter().peekable(), 1).unwrap();
///
/// let Expr::BinaryOp { op, right, .. } = expr else {
///     panic!("expected a binary operation");
/// };
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
/// ```
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>, min_precedence: u8) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens)?;

    while let Some((Token::Operator(op), line)) = tokens.peek() {
        let precedence = op.precedence();
        if precedence < min_precedence {
            break;
        }

        let (op, line) = (*op, *line);
        tokens.next(); // consume operator

        let right = parse_binary(tokens, precedence + 1)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}
