//! Walks the syntax tree

use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::{Function, Value};
use std::rc::Rc;
use tablisp_ast::{Node, LIST_TAG};
use tracing::{debug, trace};

/// Evaluates a parsed root, `None` evaluating to nil
pub fn evaluate(root: Option<&Node>, env: &mut Environment<'_>) -> Value {
    root.map(|node| eval(node, env)).unwrap_or(Value::Nil)
}

/// Evaluates a node in the given environment
pub fn eval(node: &Node, env: &mut Environment<'_>) -> Value {
    match node {
        Node::Item(name) => eval_item(name, env),
        Node::List(tag, children) => match tag.as_str() {
            "" => eval_sequence(children, env),
            "define" => define(children, env),
            "set" => set(children, env),
            LIST_TAG => children.iter().map(|child| eval(child, env)).collect(),
            _ => call(tag, children, env),
        },
    }
}

fn eval_item(name: &str, env: &Environment<'_>) -> Value {
    if let Ok(i) = name.parse::<i64>() {
        return Value::Integer(i);
    }
    match env.get(name) {
        Some(value) => value.clone(),
        None => Value::String(name.to_string()),
    }
}

/// Evaluates every node in order, giving back the last value
fn eval_sequence(nodes: &[Node], env: &mut Environment<'_>) -> Value {
    nodes
        .iter()
        .fold(Value::Nil, |_, node| eval(node, env))
}

/// `define name(params...) body...`
///
/// A bare name defines a function without parameters. With less than two children nothing is
/// defined.
fn define(children: &[Node], env: &mut Environment<'_>) -> Value {
    let [signature, body @ ..] = children else {
        return Value::Nil;
    };
    if body.is_empty() {
        return Value::Nil;
    }
    let (name, params) = match signature {
        Node::Item(name) => (name, vec![]),
        Node::List(name, params) => {
            let Some(params) = params
                .iter()
                .map(|param| match param {
                    Node::Item(param) => Some(param.clone()),
                    Node::List(..) => None,
                })
                .collect::<Option<Vec<_>>>()
            else {
                return EvalError::malformed("define", "parameters must be names").into();
            };
            (name, params)
        }
    };
    if name.is_empty() || name == LIST_TAG {
        return EvalError::malformed("define", "a function needs a name").into();
    }
    debug!("defining {name}({})", params.join(", "));
    let function = Function::new(name.clone(), params, body.to_vec());
    env.set(name.clone(), Value::Function(Rc::new(function)));
    Value::Nil
}

/// `set name value`, binding in the current frame and giving back the value
fn set(children: &[Node], env: &mut Environment<'_>) -> Value {
    let [target, value, ..] = children else {
        return Value::Nil;
    };
    let Node::Item(name) = target else {
        return EvalError::malformed("set", "the target must be a name").into();
    };
    let value = eval(value, env);
    env.set(name.clone(), value.clone());
    value
}

fn call(name: &str, children: &[Node], env: &mut Environment<'_>) -> Value {
    let Some(callee) = env.get(name).cloned() else {
        return EvalError::UndefinedFunction(name.to_string()).into();
    };
    let args = children
        .iter()
        .map(|child| eval(child, env))
        .collect::<Vec<_>>();
    trace!("calling {name} with {args:?}");
    match callee {
        Value::Builtin(builtin) => builtin.call(&args),
        Value::Function(function) => call_function(&function, args, env),
        _ => EvalError::NotAFunction(name.to_string()).into(),
    }
}

/// Binds the parameters positionally in a fresh child of the calling frame, then evaluates the
/// body. Parameters without an argument stay unbound and extra arguments are ignored.
fn call_function(function: &Function, args: Vec<Value>, env: &Environment<'_>) -> Value {
    let mut frame = env.child();
    for (param, arg) in function.params().iter().zip(args) {
        frame.set(param.as_str(), arg);
    }
    eval_sequence(function.body(), &mut frame)
}

/// Evaluates roots against one root environment, keeping bindings between them
#[derive(Debug)]
pub struct Interpreter {
    env: Environment<'static>,
}

impl Interpreter {
    /// Creates an interpreter over a root environment the host has already filled
    pub fn new(env: Environment<'static>) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &Environment<'static> {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    pub fn eval(&mut self, root: Option<&Node>) -> Value {
        evaluate(root, &mut self.env)
    }

    /// Parses the source then evaluates it, ignoring diagnostics
    pub fn eval_source(&mut self, src: &str) -> Value {
        let parsed = tablisp_ast_parsing::parse_source(src);
        if !parsed.is_clean() {
            debug!("evaluating source with {} diagnostics", parsed.errors.len());
        }
        self.eval(parsed.root.as_ref())
    }
}
