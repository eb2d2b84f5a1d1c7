#![doc = include_str!("../README.md")]

pub mod builtins;
pub mod environment;
mod error;
mod interpreter;
pub mod value;

pub use environment::Environment;
pub use error::EvalError;
pub use interpreter::{eval, evaluate, Interpreter};
pub use value::{Function, Value};
