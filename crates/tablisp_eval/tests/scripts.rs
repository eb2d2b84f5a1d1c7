use tablisp_ast_parsing::{parse, tokenize};
use tablisp_eval::{builtins, evaluate, Environment, EvalError, Interpreter, Value};

fn interpreter() -> Interpreter {
    let mut root = Environment::new();
    builtins::register(&mut root);
    Interpreter::new(root)
}

#[test]
fn set_then_lookup() {
    let mut root = Environment::new();
    builtins::register(&mut root);
    let tree = parse(tokenize("set(x,42)"));
    assert_eq!(evaluate(tree.as_ref(), &mut root), Value::Integer(42));
    let tree = parse(tokenize("x"));
    assert_eq!(evaluate(tree.as_ref(), &mut root), Value::Integer(42));
}

#[test]
fn builtins_are_not_ambient() {
    let mut root = Environment::new();
    let tree = parse(tokenize("plus(1, 2)"));
    assert_eq!(
        evaluate(tree.as_ref(), &mut root),
        Value::Error(EvalError::UndefinedFunction("plus".to_string()))
    );
}

#[test]
fn script_in_every_notation() {
    let src = "\
define add3(a, b, c)
\tplus a plus(b, c)
set x do
\t1
end
set y add3(x, 2, 3)
add3 do
y
y
plus(y, 1)
end
";
    let mut interpreter = interpreter();
    // `set x do ... end` binds the grouped list
    assert_eq!(interpreter.eval_source(src), Value::Integer(16));
    assert_eq!(
        interpreter.env().get("x"),
        Some(&Value::List(vec![Value::Integer(1)]))
    );
}

#[test]
fn definitions_persist_between_roots() {
    let mut interpreter = interpreter();
    interpreter.eval_source("define double(n)\n\tplus n n");
    interpreter.eval_source("set four double(2)");
    assert_eq!(interpreter.eval_source("double four"), Value::Integer(8));
}

#[test]
fn redefinition_replaces() {
    let mut interpreter = interpreter();
    interpreter.eval_source("define f\n\t1");
    interpreter.eval_source("define f\n\t2");
    assert_eq!(interpreter.eval_source("f()"), Value::Integer(2));
}

#[test]
fn shadowing_a_builtin_in_a_function() {
    let mut interpreter = interpreter();
    interpreter.eval_source("define g(plus)\n\tplus");
    assert_eq!(interpreter.eval_source("g(7)"), Value::Integer(7));
    assert_eq!(interpreter.eval_source("plus 1 1"), Value::Integer(2));
}
