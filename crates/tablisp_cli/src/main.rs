use crate::args::Args;
use clap::Parser;
use std::io;
use std::io::{stderr, stdout, Stderr, StderrLock, Stdout, StdoutLock};
use std::process::ExitCode;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace, Level, Metadata};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::{format, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

mod args;
mod commands;
mod exec;
mod source;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting tablisp with args: {args:?}");
    debug!("tablisp version: {}", env!("CARGO_PKG_VERSION"));

    let outcome = commands::execute(&args, &mut stdout().lock(), &mut stderr().lock())?;
    Ok(outcome.into())
}

/// Sends warnings and errors to stdout, everything more verbose to stderr
struct StdioWriter {
    stdout: Stdout,
    stderr: Stderr,
}

enum StdioLock<'a> {
    Stdout(StdoutLock<'a>),
    Stderr(StderrLock<'a>),
}

impl<'a> io::Write for StdioLock<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write(buf),
            StdioLock::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.flush(),
            StdioLock::Stderr(stderr) => stderr.flush(),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write_all(buf),
            StdioLock::Stderr(stderr) => stderr.write_all(buf),
        }
    }
}

impl<'a> MakeWriter<'a> for StdioWriter {
    type Writer = StdioLock<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        StdioLock::Stdout(self.stdout.lock())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        if meta.level() > &Level::WARN {
            StdioLock::Stderr(self.stderr.lock())
        } else {
            StdioLock::Stdout(self.stdout.lock())
        }
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().without_time().with_target(true))
                .with_writer(StdioWriter {
                    stdout: stdout(),
                    stderr: stderr(),
                })
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
