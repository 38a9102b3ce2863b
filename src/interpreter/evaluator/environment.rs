use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// The single, flat variable store of one program run.
///
/// There is no nesting: a variable assigned inside a loop or conditional body
/// stays visible and mutable for the rest of the run. Declaring and reassigning
/// both overwrite whatever binding the name had.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Looks up `name` for evaluation.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` naming the variable if it was never
    /// assigned.
    ///
    /// # Example
    /// ```
    /// use bongscript::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::environment::Environment, value::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(1));
    ///
    /// assert_eq!(env.lookup("x", 1).unwrap(), Value::Integer(1));
    /// assert!(matches!(env.lookup("y", 2),
    ///                  Err(RuntimeError::UndefinedVariable { line: 2, .. })));
    /// ```
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }
}
