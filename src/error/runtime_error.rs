#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operator parses but has no evaluation rule.
    UnknownOperator {
        /// The operator as written.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operands have types the operator cannot combine.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string operation would build a string beyond the size limit.
    StringTooLong {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line read from the console is not a valid number of the requested
    /// kind.
    InvalidInput {
        /// The requested kind (`int` or `float`).
        kind:  String,
        /// The text that was read.
        input: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The console input was exhausted.
    EndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from or writing to the console failed.
    Io {
        /// Details reported by the operating system.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `theme jao` or `egiye jao` executed with no enclosing loop.
    SignalOutsideLoop {
        /// The statement as written.
        signal: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::UnknownOperator { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::StringTooLong { line }
            | Self::InvalidInput { line, .. }
            | Self::EndOfInput { line }
            | Self::Io { line, .. }
            | Self::SignalOutsideLoop { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UnknownOperator { op, line } => {
                write!(f, "Error on line {line}: Unknown operator '{op}'.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::StringTooLong { line } => {
                write!(f, "Error on line {line}: Resulting string is too long.")
            },
            Self::InvalidInput { kind, input, line } => write!(f,
                                                               "Error on line {line}: Cannot read '{input}' as {kind}."),
            Self::EndOfInput { line } => {
                write!(f, "Error on line {line}: Input ended while waiting for a line.")
            },
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O error: {details}."),
            Self::SignalOutsideLoop { signal, line } => write!(f,
                                                               "Error on line {line}: '{signal}' used outside of a loop."),
        }
    }
}

impl std::error::Error for RuntimeError {}
