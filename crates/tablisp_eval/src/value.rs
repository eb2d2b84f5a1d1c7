//! Runtime values

use crate::builtins::Builtin;
use crate::error::EvalError;
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use tablisp_ast::Node;

/// A value produced by evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    /// An item that was neither an integer nor bound
    String(String),
    List(Vec<Value>),
    Function(Rc<Function>),
    Builtin(&'static Builtin),
    Nil,
    Error(EvalError),
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        if let Self::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Whether this value can be called
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_) | Self::Builtin(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(values) => write!(f, "[{}]", values.iter().join(" ")),
            Value::Function(function) => write!(f, "<fn {}>", function.name()),
            Value::Builtin(builtin) => write!(f, "<fn {}>", builtin.name()),
            Value::Nil => write!(f, "nil"),
            Value::Error(error) => write!(f, "error: {error}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<EvalError> for Value {
    fn from(value: EvalError) -> Self {
        Self::Error(value)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

/// A function created by `define`, an immutable piece of code.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    name: String,
    params: Vec<String>,
    body: Vec<Node>,
}

impl Function {
    pub fn new(name: impl Into<String>, params: Vec<String>, body: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            params,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
