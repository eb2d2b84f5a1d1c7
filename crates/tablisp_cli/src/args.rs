//! the args for running tablisp

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tablisp_cli_common::LoggingArgs;

pub const DEFAULT_RACKET: &str = "racket";

/// The args struct
#[derive(Debug, Parser)]
#[clap(author, version, about = "Parses tablisp source, then evaluates, transpiles or runs it")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// Fail when the source has any diagnostic
    #[clap(long, global = true)]
    pub deny_warnings: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the source as Racket readable prefix notation
    Transpile(SourceArgs),
    /// Prints the source with every call written as `name(args...)`
    Explicit(SourceArgs),
    /// Evaluates the source, printing the final value
    Eval(SourceArgs),
    /// Transpiles the source and runs it with Racket
    Run {
        #[command(flatten)]
        source: SourceArgs,
        /// The Racket executable
        #[clap(long, env = "TABLISP_RACKET", default_value = DEFAULT_RACKET, value_hint = clap::ValueHint::ExecutablePath)]
        racket: PathBuf,
    },
}

impl Command {
    pub fn source(&self) -> &SourceArgs {
        match self {
            Command::Transpile(source) | Command::Explicit(source) | Command::Eval(source) => {
                source
            }
            Command::Run { source, .. } => source,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct SourceArgs {
    /// The source file
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,
    /// Print the tokens before anything else
    #[clap(long)]
    pub show_tokens: bool,
    /// Print the syntax tree before anything else
    #[clap(long)]
    pub show_tree: bool,
}
