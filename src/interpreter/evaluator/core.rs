use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, control::Signal, environment::Environment},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one program execution.
///
/// The interpreter owns the [`Environment`] together with the console it
/// reads from and writes to. It is generic over both so that tests can drive
/// it with in-memory buffers; the `bong` binary uses locked stdin and stdout.
///
/// ## Usage
///
/// Create one interpreter per run and call [`Interpreter::execute`] with the
/// parsed program.
pub struct Interpreter<R, W> {
    environment:       Environment,
    pub(crate) input:  R,
    pub(crate) output: W,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Creates an interpreter with an empty environment.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { environment: Environment::new(),
               input,
               output }
    }

    /// Consumes the interpreter and hands back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes a program from top to bottom.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised. Output written before the
    /// error stays written. A `theme jao` or `egiye jao` that is not inside a
    /// loop surfaces here as `RuntimeError::SignalOutsideLoop`.
    ///
    /// # Example
    /// ```
    /// use bongscript::interpreter::{
    ///     evaluator::core::Interpreter, lexer::tokenize, parser::core::parse,
    /// };
    ///
    /// let tokens = tokenize("kaj shuru lekho(1); ullekho(2); lekho(3); kaj shesh").unwrap();
    /// let program = parse(&tokens).unwrap();
    ///
    /// let mut interpreter = Interpreter::new(&b""[..], Vec::<u8>::new());
    /// interpreter.execute(&program).unwrap();
    ///
    /// assert_eq!(interpreter.into_output(), b"1\n23\n");
    /// ```
    pub fn execute(&mut self, program: &Program) -> EvalResult<()> {
        match self.exec_block(&program.statements)? {
            Signal::Normal => Ok(()),
            Signal::Break { line } => Err(RuntimeError::SignalOutsideLoop { signal:
                                                                                "theme jao".to_string(),
                                                                            line }),
            Signal::Continue { line } => {
                Err(RuntimeError::SignalOutsideLoop { signal: "egiye jao".to_string(),
                                                      line })
            },
        }
    }

    /// Executes statements in order until one of them raises a signal.
    ///
    /// A `Break` or `Continue` abandons the remaining statements and is handed
    /// to the caller; only a loop consumes it.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Signal> {
        for statement in statements {
            let signal = self.exec_statement(statement)?;
            if signal != Signal::Normal {
                return Ok(signal);
            }
        }
        Ok(Signal::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Signal::Normal` unless the statement is, or contains outside of any
    /// loop, a `theme jao` / `egiye jao`.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Signal> {
        match statement {
            Statement::Assign { name, expr, .. } => {
                let value = self.eval(expr)?;
                self.environment.set(name, value);
                Ok(Signal::Normal)
            },
            Statement::Print { expr,
                               with_newline,
                               line, } => {
                let value = self.eval(expr)?;
                self.print(&value, *with_newline, *line)?;
                Ok(Signal::Normal)
            },
            Statement::If(statement) => self.exec_if(statement),
            Statement::While { condition, body } => self.exec_while(condition, body),
            Statement::Break { line } => Ok(Signal::Break { line: *line }),
            Statement::Continue { line } => Ok(Signal::Continue { line: *line }),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Binary operands are evaluated eagerly, left before right.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number(n) => Ok((*n).into()),
            Expr::String(s) => Ok(Value::Str(s.clone())),
            Expr::Boolean(b) => Ok(Value::Bool(*b)),
            Expr::Variable { name, line } => self.environment.lookup(name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *line)
            },
            Expr::Input { kind, line } => self.read_input(*kind, *line),
        }
    }

    /// Writes a value, and a newline if requested, then flushes so the text
    /// appears before any following read.
    fn print(&mut self, value: &Value, with_newline: bool, line: usize) -> EvalResult<()> {
        let written = if with_newline {
            writeln!(self.output, "{value}")
        } else {
            write!(self.output, "{value}")
        };

        written.and_then(|()| self.output.flush())
               .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                               line })
    }
}
