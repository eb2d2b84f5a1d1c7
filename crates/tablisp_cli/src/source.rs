//! Loads source files and reports their diagnostics

use eyre::WrapErr;
use owo_colors::{OwoColorize, Stream};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tablisp_ast_parsing::parser::Parsed;
use tracing::debug;

/// A source file read as a whole
#[derive(Debug)]
pub struct Source {
    path: PathBuf,
    text: String,
}

impl Source {
    pub fn read(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read {}", path.display()))?;
        debug!("read {} bytes from {}", text.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parse(&self) -> Parsed {
        tablisp_ast_parsing::parse_source(&self.text)
    }

    /// Writes every diagnostic with the lines it points at, as errors when `deny` is set and as
    /// warnings otherwise.
    pub fn report<W: Write>(&self, parsed: &Parsed, deny: bool, mut err: W) -> eyre::Result<()> {
        for error in &parsed.errors {
            let header = if deny {
                "error"
                    .if_supports_color(Stream::Stderr, |text| text.bright_red())
                    .to_string()
            } else {
                "warning"
                    .if_supports_color(Stream::Stderr, |text| text.bright_yellow())
                    .to_string()
            };
            writeln!(err, "{header}: {}", self.path.display())?;
            writeln!(err, "{}", error.render(&self.text))?;
        }
        Ok(())
    }
}
