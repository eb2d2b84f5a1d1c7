#![doc = include_str!("../README.md")]

use crate::spanned::{LineReader, Span};
use std::fmt::{Display, Formatter, Write as _};

pub mod spanned;
pub mod token;

/// An error with a location
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct SpannedError<E> {
    error: E,
    location: Option<Span>,
}

impl<E> SpannedError<E> {
    pub fn new(error: E, location: impl Into<Option<Span>>) -> Self {
        Self {
            error,
            location: location.into(),
        }
    }

    /// Gets the wrapped error
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Gets where the error occurred, if known
    pub fn location(&self) -> Option<Span> {
        self.location
    }
}

impl<E: Display> SpannedError<E> {
    /// Renders this error along with the lines of `src` around its location.
    ///
    /// ```text
    /// expected RPAREN, got EOF
    ///   -> 1:7
    /// 1 | plus(1
    ///           ^
    /// ```
    pub fn render(&self, src: &str) -> String {
        let mut f = String::new();
        let _ = writeln!(f, "{}", self.error);
        let Some(location) = &self.location else {
            return f;
        };
        let _ = writeln!(f, "  -> {}:{}", location.line() + 1, location.column() + 1);
        let Some(lines) = LineReader::new(2, 2).lines(location, src) else {
            return f;
        };
        let width = lines.iter().map(|line| line.line).max().unwrap_or(0) / 10 + 1;
        for line in &lines {
            let _ = writeln!(f, "{:width$} | {}", line.line, line.src.trim_end());
            if line.is_base {
                let col = line.col;
                if location.len() > 0 {
                    let _ = writeln!(
                        f,
                        "{}{}{}",
                        " ".repeat(width + 3),
                        " ".repeat(col),
                        "~".repeat(location.len())
                    );
                } else {
                    let _ = writeln!(f, "{}{}^", " ".repeat(width + 3), "-".repeat(col));
                }
            }
        }
        f
    }
}

impl<E: Display> Display for SpannedError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(location) = &self.location {
            write!(f, " at {}:{}", location.line() + 1, location.column() + 1)?;
        }
        Ok(())
    }
}
