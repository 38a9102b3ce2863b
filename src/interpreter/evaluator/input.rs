use std::io::{BufRead, Write};

use crate::{
    ast::InputKind,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Evaluates an input expression.
    ///
    /// Blocks until one line is available, strips its line terminator, and
    /// converts it according to `kind`. Surrounding whitespace is ignored for
    /// numbers; strings are kept verbatim.
    ///
    /// # Errors
    /// - `InvalidInput` if the line is not a valid integer or float.
    /// - `EndOfInput` if no line is left to read.
    /// - `Io` if reading fails.
    ///
    /// # Example
    /// ```
    /// use bongscript::{
    ///     ast::InputKind,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(&b"42\n2.5\nhello world\n"[..], Vec::<u8>::new());
    ///
    /// assert_eq!(interpreter.read_input(InputKind::Int, 1).unwrap(), Value::Integer(42));
    /// assert_eq!(interpreter.read_input(InputKind::Float, 2).unwrap(), Value::Float(2.5));
    /// assert_eq!(interpreter.read_input(InputKind::String, 3).unwrap(),
    ///            Value::from("hello world"));
    /// assert!(interpreter.read_input(InputKind::Int, 4).is_err());
    /// ```
    pub fn read_input(&mut self, kind: InputKind, line: usize) -> EvalResult<Value> {
        let mut buffer = String::new();
        let read = self.input
                       .read_line(&mut buffer)
                       .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                       line })?;
        if read == 0 {
            return Err(RuntimeError::EndOfInput { line });
        }

        let text = buffer.strip_suffix('\n')
                         .map_or(buffer.as_str(), |s| s.strip_suffix('\r').unwrap_or(s));

        let invalid = || RuntimeError::InvalidInput { kind: kind.to_string(),
                                                      input: text.to_string(),
                                                      line };

        match kind {
            InputKind::Int => text.trim().parse().map(Value::Integer).map_err(|_| invalid()),
            InputKind::Float => text.trim().parse().map(Value::Float).map_err(|_| invalid()),
            InputKind::String => Ok(Value::Str(text.to_string())),
        }
    }
}
