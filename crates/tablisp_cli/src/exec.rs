//! Runs transpiled code with an external runtime

use std::io;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Something that can run prefix notation code
pub trait Executor {
    fn execute(&self, code: &str) -> Result<Execution, ExecError>;
}

/// The outcome of running code to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Whether the runtime exited successfully
    pub success: bool,
    /// The exit code, if the runtime exited with one
    pub code: Option<i32>,
    /// Everything written to stdout followed by everything written to stderr
    pub output: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error("could not start {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Runs code with `racket -e <code>`
#[derive(Debug, Clone)]
pub struct RacketExecutor {
    program: PathBuf,
}

impl RacketExecutor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Executor for RacketExecutor {
    fn execute(&self, code: &str) -> Result<Execution, ExecError> {
        debug!("running {} -e {code:?}", self.program.display());
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(code)
            .output()
            .map_err(|source| ExecError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        debug!("{} exited with {}", self.program.display(), output.status);
        Ok(Execution {
            success: output.status.success(),
            code: output.status.code(),
            output: combined,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records the code it was given, answering with a fixed execution
    pub struct FakeExecutor {
        pub received: RefCell<Vec<String>>,
        pub answer: Execution,
    }

    impl FakeExecutor {
        pub fn new(success: bool, output: &str) -> Self {
            Self {
                received: RefCell::default(),
                answer: Execution {
                    success,
                    code: Some(if success { 0 } else { 1 }),
                    output: output.to_string(),
                },
            }
        }
    }

    impl Executor for FakeExecutor {
        fn execute(&self, code: &str) -> Result<Execution, ExecError> {
            self.received.borrow_mut().push(code.to_string());
            Ok(self.answer.clone())
        }
    }

    #[test]
    fn test_missing_program() {
        let executor = RacketExecutor::new("/definitely/not/a/racket");
        let error = executor.execute("(+ 1 2)").expect_err("should not start");
        assert!(error.to_string().contains("/definitely/not/a/racket"));
    }

    #[test]
    #[cfg(unix)]
    fn test_runs_program_with_code() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("could not create temp dir");
        let path = dir.path().join("racket");
        let mut file = std::fs::File::create(&path).expect("could not create script");
        // prints the code it was given, then fails
        writeln!(file, "#!/bin/sh\nprintf '%s\\n' \"$1 $2\"\necho oops >&2\nexit 3").expect("could not write");
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("could not make executable");

        let execution = RacketExecutor::new(&path)
            .execute("(plus 1 2)")
            .expect("should run");
        assert!(!execution.success);
        assert_eq!(execution.code, Some(3));
        assert_eq!(execution.output, "-e (plus 1 2)\noops\n");
    }
}
