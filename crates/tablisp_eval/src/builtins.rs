//! default builtin functions

use crate::environment::Environment;
use crate::value::Value;
use itertools::Itertools as _;
use std::fmt::{Debug, Formatter};

pub type BuiltinFn = fn(&[Value]) -> Value;

/// A function implemented by the host. Builtins take any number of arguments.
pub struct Builtin {
    name: &'static str,
    native: BuiltinFn,
}

impl Builtin {
    /// Creates a new builtin function
    pub const fn new(name: &'static str, native: BuiltinFn) -> Self {
        Self { name, native }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.native)(args)
    }
}

impl Debug for Builtin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Sums its integer arguments, ignoring everything else
pub static PLUS: Builtin = Builtin::new("plus", plus);

/// print function, emitting its arguments separated by spaces to stdout
pub static PRINT: Builtin = Builtin::new("print", print);

/// A slice of all builtins that [register] binds
pub static BUILTINS: &[&Builtin] = &[&PLUS, &PRINT];

/// Binds every builtin by its name in `env`
pub fn register(env: &mut Environment<'_>) {
    for builtin in BUILTINS {
        env.set(builtin.name(), Value::Builtin(*builtin));
    }
}

fn plus(args: &[Value]) -> Value {
    let sum = args
        .iter()
        .filter_map(Value::as_integer)
        .fold(0_i64, i64::wrapping_add);
    Value::Integer(sum)
}

fn print(args: &[Value]) -> Value {
    println!("{}", args.iter().join(" "));
    Value::Nil
}
