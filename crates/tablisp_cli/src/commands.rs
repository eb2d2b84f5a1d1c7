//! What each subcommand does

use crate::args::{Args, Command, SourceArgs, DEFAULT_RACKET};
use crate::exec::{Executor, RacketExecutor};
use crate::source::Source;
use eyre::WrapErr;
use owo_colors::{OwoColorize, Stream};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tablisp_ast_parsing::parser::Parsed;
use tablisp_ast_parsing::tokenize;
use tablisp_eval::{builtins, Environment, Interpreter, Value};
use tablisp_transpile::{print_explicit, transpile};
use tracing::{debug, info};

/// Whether a command did what was asked of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Runs the command given on the command line
pub fn execute<O: Write, E: Write>(args: &Args, out: &mut O, err: &mut E) -> eyre::Result<Outcome> {
    let source = Source::read(&args.command.source().file)?;
    let racket = match &args.command {
        Command::Run { racket, .. } => racket.as_path(),
        _ => Path::new(DEFAULT_RACKET),
    };
    let executor = RacketExecutor::new(racket);
    run_command(&args.command, &source, args.deny_warnings, &executor, out, err)
}

/// Runs a command over an already read source
pub fn run_command<O: Write, E: Write>(
    command: &Command,
    source: &Source,
    deny_warnings: bool,
    executor: &dyn Executor,
    out: &mut O,
    err: &mut E,
) -> eyre::Result<Outcome> {
    let Some(parsed) = front_end(source, command.source(), deny_warnings, out, err)? else {
        return Ok(Outcome::Failure);
    };
    let root = parsed.root.as_ref();
    match command {
        Command::Transpile(_) => {
            writeln!(out, "{}", transpile(root))?;
            Ok(Outcome::Success)
        }
        Command::Explicit(_) => {
            writeln!(out, "{}", print_explicit(root))?;
            Ok(Outcome::Success)
        }
        Command::Eval(_) => {
            let mut env = Environment::new();
            builtins::register(&mut env);
            let mut interpreter = Interpreter::new(env);
            let value = interpreter.eval(root);
            writeln!(out, "{value}")?;
            if let Value::Error(error) = &value {
                debug!("evaluation failed: {error}");
                Ok(Outcome::Failure)
            } else {
                Ok(Outcome::Success)
            }
        }
        Command::Run { .. } => {
            let code = transpile(root);
            writeln!(out, "Transpiled code:\n{code}\n")?;
            info!("running transpiled code");
            let execution = executor
                .execute(&code)
                .wrap_err("could not run transpiled code")?;
            if execution.success {
                write!(out, "Output:\n{}", execution.output)?;
                Ok(Outcome::Success)
            } else {
                let status = execution
                    .code
                    .map(|code| format!("exit status {code}"))
                    .unwrap_or_else(|| "no exit status".to_string());
                writeln!(
                    err,
                    "{}: {status}",
                    "racket failed".if_supports_color(Stream::Stderr, |text| text.bright_red())
                )?;
                write!(err, "Racket output: {}", execution.output)?;
                Ok(Outcome::Failure)
            }
        }
    }
}

/// Prints what was asked of the front end and reports diagnostics, giving back nothing if
/// diagnostics are denied
fn front_end<O: Write, E: Write>(
    source: &Source,
    source_args: &SourceArgs,
    deny_warnings: bool,
    out: &mut O,
    err: &mut E,
) -> eyre::Result<Option<Parsed>> {
    if source_args.show_tokens {
        for token in tokenize(source.text()) {
            writeln!(out, "{token:?}")?;
        }
    }
    let parsed = source.parse();
    if source_args.show_tree {
        writeln!(out, "{:#?}", parsed.root)?;
    }
    source.report(&parsed, deny_warnings, &mut *err)?;
    if deny_warnings && !parsed.is_clean() {
        return Ok(None);
    }
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::tests::FakeExecutor;
    use std::io::Write as _;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;
    use test_log::test;

    fn source_file(text: &str) -> (NamedTempFile, Source) {
        let mut file = NamedTempFile::new().expect("could not create temp file");
        write!(file, "{text}").expect("could not write");
        let source = Source::read(file.path()).expect("could not read");
        (file, source)
    }

    fn source_args() -> SourceArgs {
        SourceArgs {
            file: PathBuf::new(),
            show_tokens: false,
            show_tree: false,
        }
    }

    fn run(command: Command, text: &str, deny: bool) -> (Outcome, String, String) {
        run_with(command, text, deny, &FakeExecutor::new(true, ""))
    }

    fn run_with(
        command: Command,
        text: &str,
        deny: bool,
        executor: &dyn Executor,
    ) -> (Outcome, String, String) {
        let (_file, source) = source_file(text);
        let mut out = vec![];
        let mut err = vec![];
        let outcome = run_command(&command, &source, deny, executor, &mut out, &mut err)
            .expect("command failed");
        (
            outcome,
            String::from_utf8(out).expect("utf8"),
            String::from_utf8(err).expect("utf8"),
        )
    }

    #[test]
    fn test_transpile() {
        let (outcome, out, err) = run(Command::Transpile(source_args()), "plus 1 2\nprint x", false);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "(plus 1 2) (print x)\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_explicit() {
        let (_, out, _) = run(
            Command::Explicit(source_args()),
            "funcname arg1\n\targ2 arg3",
            false,
        );
        assert_eq!(out, "funcname(arg1, arg2(arg3))\n");
    }

    #[test]
    fn test_eval() {
        let (outcome, out, _) = run(
            Command::Eval(source_args()),
            "set x 10\nset y 20\nplus(x, y)",
            false,
        );
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "30\n");
    }

    #[test]
    fn test_eval_error_value_fails() {
        let (outcome, out, _) = run(Command::Eval(source_args()), "nope(1)", false);
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out, "error: undefined function: nope\n");
    }

    #[test]
    fn test_warnings_are_reported() {
        let (outcome, out, err) = run(Command::Transpile(source_args()), "plus(1, 2", false);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "(plus 1 2)\n");
        assert!(err.contains("warning"), "{err}");
    }

    #[test]
    fn test_deny_warnings() {
        let (outcome, out, err) = run(Command::Transpile(source_args()), "plus(1, 2", true);
        assert_eq!(outcome, Outcome::Failure);
        assert!(out.is_empty());
        assert!(err.contains("error"), "{err}");
    }

    #[test]
    fn test_show_tokens_and_tree() {
        let args = SourceArgs {
            show_tokens: true,
            show_tree: true,
            ..source_args()
        };
        let (_, out, _) = run(Command::Transpile(args), "f(a)", false);
        assert!(out.contains("LPAREN"), "{out}");
        assert!(out.contains(r#"Item("a")"#), "{out}");
        assert!(out.ends_with("(f a)\n"), "{out}");
    }

    #[test]
    fn test_run_success() {
        let executor = FakeExecutor::new(true, "3\n");
        let command = Command::Run {
            source: source_args(),
            racket: PathBuf::from("racket"),
        };
        let (outcome, out, _) = run_with(command, "plus(1, 2)", false, &executor);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(executor.received.borrow().as_slice(), ["(plus 1 2)"]);
        assert_eq!(out, "Transpiled code:\n(plus 1 2)\n\nOutput:\n3\n");
    }

    #[test]
    fn test_run_failure_surfaces_output() {
        let executor = FakeExecutor::new(false, "plus: unbound identifier\n");
        let command = Command::Run {
            source: source_args(),
            racket: PathBuf::from("racket"),
        };
        let (outcome, _, err) = run_with(command, "plus(1, 2)", false, &executor);
        assert_eq!(outcome, Outcome::Failure);
        assert!(err.contains("exit status 1"), "{err}");
        assert!(err.ends_with("Racket output: plus: unbound identifier\n"), "{err}");
    }
}
