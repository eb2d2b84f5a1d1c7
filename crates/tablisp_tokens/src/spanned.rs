//! A trait that can provide the [Span] of a token or a run of tokens

/// A trait that can provide the [Span] of something taken from source text
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A location in source text.
///
/// Lines and columns are 0-based, columns count characters. The offset and length are in bytes.
#[derive(Debug, Copy, Clone, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
    line: usize,
    column: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            len,
            line,
            column,
        }
    }

    /// Creates an empty span at a position
    pub const fn empty(offset: usize, line: usize, column: usize) -> Self {
        Self::new(offset, 0, line, column)
    }

    /// Gets a span directly after this span.
    ///
    /// Only valid for spans that do not contain a newline.
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
            line: self.line,
            column: self.column + self.len,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let first = if self.offset <= other.offset {
            *self
        } else {
            other
        };
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: min,
            len: max - min,
            line: first.line,
            column: first.column,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn line(&self) -> usize {
        self.line
    }

    pub const fn column(&self) -> usize {
        self.column
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// A line reader that's responsible for getting the lines surrounding a span
#[derive(Debug, Default)]
pub struct LineReader {
    before: usize,
    after: usize,
}

impl LineReader {
    /// Creates a new line reader that gets `before` number of lines before a span and `after` number
    /// of lines after.
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Gets the lines of `src` around the span. Line numbers in the result are 1-based.
    ///
    /// Returns `None` if the span's line is not in `src`.
    pub fn lines<'s>(&self, span: &Span, src: &'s str) -> Option<Vec<Line<'s>>> {
        let first = span.line.saturating_sub(self.before);
        let last = span.line.saturating_add(self.after);
        let lines = src
            .split('\n')
            .enumerate()
            .skip(first)
            .take_while(|(idx, _)| *idx <= last)
            .map(|(idx, text)| Line {
                line: idx + 1,
                col: if idx == span.line { span.column } else { 0 },
                is_base: idx == span.line,
                src: text,
            })
            .collect::<Vec<_>>();
        if lines.iter().any(|line| line.is_base) {
            Some(lines)
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct Line<'s> {
    pub line: usize,
    pub col: usize,
    pub is_base: bool,
    pub src: &'s str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_is_spanned() {
        let p = Span::new(3, 2, 0, 3).span();
        assert_eq!(p.offset(), 3);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_span_end() {
        let p = Span::new(0, 5, 1, 2).end();
        assert_eq!(p.offset(), 5);
        assert_eq!(p.len(), 0);
        assert_eq!(p.column(), 7);
    }

    #[test]
    fn test_join() {
        let p1 = Span::new(16, 8, 1, 4);
        let p2 = Span::new(0, 8, 0, 0);
        assert_eq!(p1.join(p2), Span::new(0, 24, 0, 0));
    }

    #[test]
    fn test_line_reader() {
        let src = "one\ntwo\nthree\nfour";
        let lines = LineReader::new(1, 1)
            .lines(&Span::new(9, 2, 2, 1), src)
            .expect("line in bounds");
        let texts = lines.iter().map(|line| line.src).collect::<Vec<_>>();
        assert_eq!(texts, ["two", "three", "four"]);
        let base = lines.iter().find(|line| line.is_base).unwrap();
        assert_eq!(base.line, 3);
        assert_eq!(base.col, 1);
    }

    #[test]
    fn test_line_reader_out_of_bounds() {
        assert!(LineReader::new(0, 0)
            .lines(&Span::new(0, 0, 5, 0), "only line")
            .is_none());
    }
}
