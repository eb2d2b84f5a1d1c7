use tablisp_ast_parsing::{parse, tokenize};
use tablisp_transpile::{print_explicit, transpile};

fn prefix(src: &str) -> String {
    transpile(parse(tokenize(src)).as_ref())
}

fn explicit(src: &str) -> String {
    print_explicit(parse(tokenize(src)).as_ref())
}

#[test]
fn transpile_cases() {
    let cases = [
        ("plus(1, 2)", "(plus 1 2)"),
        ("plus(1, 2, 3)", "(plus 1 2 3)"),
        ("print(hello)", "(print hello)"),
        ("plus(plus(1, 2), 3)", "(plus (plus 1 2) 3)"),
        ("set(x, 42)", "(set x 42)"),
        ("set(y, plus(5, 10))", "(set y (plus 5 10))"),
        ("define(myfunc(a, b), plus(a, b))", "(define (myfunc a b) (plus a b))"),
        (
            "define(complex(x, y), set(temp, plus(x, y)), plus(temp, 1))",
            "(define (complex x y) (set temp (plus x y)) (plus temp 1))",
        ),
        ("42", "42"),
        ("hello", "hello"),
        ("x", "x"),
        ("list(1, 2, 3)", "(list 1 2 3)"),
        ("plus 1 2", "(plus 1 2)"),
        ("print hello", "(print hello)"),
        ("print()", "(print)"),
        ("funcname (arg1, arg2)", "(funcname (list arg1 arg2))"),
        ("funcname((arg1, arg2))", "(funcname (list arg1 arg2))"),
        ("func do\n\targ1\n\targ2\nend", "(func (list arg1 arg2))"),
        ("func do\nend", "(func)"),
    ];
    for (src, expected) in cases {
        assert_eq!(prefix(src), expected, "for {src:?}");
    }
}

#[test]
fn transpile_multiple_expressions() {
    assert_eq!(
        prefix("set(x, 10)\nset(y, 20)\nplus(x, y)"),
        "(set x 10) (set y 20) (plus x y)"
    );
    assert_eq!(prefix("print(hello)\nprint(world)"), "(print hello) (print world)");
}

#[test]
fn transpile_empty_source() {
    assert_eq!(prefix(""), "");
}

#[test]
fn notations_render_identically() {
    let notations = [
        "f(a, b)",
        "f(a,b)",
        "f a b",
        "f do a b end",
        "f do\na\nb\nend",
        "f a do\nb\nend",
        "f a\n\tb",
    ];
    for src in notations {
        assert_eq!(prefix(src), "(f a b)", "for {src:?}");
    }
}

#[test]
fn explicit_cases() {
    let cases = [
        ("otherfunc", "otherfunc"),
        ("otherfunc()", "otherfunc()"),
        ("otherfunc arg", "otherfunc(arg)"),
        ("funcname arg1 arg2 arg3", "funcname(arg1, arg2, arg3)"),
        ("funcname arg1\n\targ2 arg3", "funcname(arg1, arg2(arg3))"),
        ("funcname(arg1)", "funcname(arg1)"),
        ("funcname(arg1, arg2)", "funcname(arg1, arg2)"),
        ("funcname (arg1, arg2)", "funcname((arg1, arg2))"),
        ("funcname((arg1, arg2))", "funcname((arg1, arg2))"),
        ("funcname otherfunc(arg)", "funcname(otherfunc(arg))"),
        ("funcname otherfunc", "funcname(otherfunc)"),
        (
            "define myfunc\n\tprint hello\nother",
            "(define(myfunc, print(hello)), other)",
        ),
    ];
    for (src, expected) in cases {
        assert_eq!(explicit(src), expected, "for {src:?}");
    }
}

#[test]
fn explicit_output_parses_to_the_same_call() {
    for src in ["f a\n\tg b\n\t\tc", "f do\ng(h i)\nend", "plus plus(1, 1) 2"] {
        let rewritten = explicit(src);
        assert_eq!(parse(tokenize(&rewritten)), parse(tokenize(src)), "for {src:?}");
    }
}
