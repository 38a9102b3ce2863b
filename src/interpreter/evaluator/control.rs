use std::io::{BufRead, Write};

use crate::{
    ast::{ElseBranch, Expr, IfStatement, Statement},
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

/// The outcome of executing a statement.
///
/// `Break` and `Continue` travel upwards through blocks and conditionals until
/// the nearest enclosing loop consumes them. One that reaches the program
/// level is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Carry on with the next statement.
    Normal,
    /// `theme jao`: leave the loop.
    Break {
        /// Line of the statement that raised the signal.
        line: usize,
    },
    /// `egiye jao`: skip to the next condition check.
    Continue {
        /// Line of the statement that raised the signal.
        line: usize,
    },
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Executes a `jodi` statement.
    ///
    /// The condition is tested for truthiness. If it holds the body runs;
    /// otherwise the else branch runs if there is one, recursing into a nested
    /// `jodi` for an else-if chain. Signals raised inside either branch are
    /// passed on unchanged.
    pub fn exec_if(&mut self, statement: &IfStatement) -> EvalResult<Signal> {
        if self.eval(&statement.condition)?.is_truthy() {
            return self.exec_block(&statement.body);
        }

        match &statement.else_branch {
            Some(ElseBranch::Block(statements)) => self.exec_block(statements),
            Some(ElseBranch::If(nested)) => self.exec_if(nested),
            None => Ok(Signal::Normal),
        }
    }

    /// Executes a `jotokhon` loop.
    ///
    /// The condition is evaluated before every iteration. A `Break` from the
    /// body ends the loop at once, without another condition check. A
    /// `Continue` abandons the rest of the body and goes back to the
    /// condition. The loop itself always completes with `Signal::Normal`.
    ///
    /// # Example
    /// ```
    /// use bongscript::{
    ///     ast::{Expr, Statement},
    ///     interpreter::evaluator::{control::Signal, core::Interpreter},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(&b""[..], Vec::<u8>::new());
    ///
    /// // jotokhon (true) { theme jao; }
    /// let signal = interpreter.exec_while(&Expr::Boolean(true), &[Statement::Break { line: 1 }])
    ///                         .unwrap();
    /// assert_eq!(signal, Signal::Normal);
    /// ```
    pub fn exec_while(&mut self, condition: &Expr, body: &[Statement]) -> EvalResult<Signal> {
        while self.eval(condition)?.is_truthy() {
            match self.exec_block(body)? {
                Signal::Break { .. } => break,
                Signal::Continue { .. } | Signal::Normal => {},
            }
        }
        Ok(Signal::Normal)
    }
}
