//! Splits source text into lines.

use crate::Line;
use tracing::trace;

/// Iterator over the [`Line`]s of a document.
///
/// Lines end at `\n`; a `\r` immediately before it is dropped. A final
/// terminator does not produce an extra empty line, so `"a\n"` and `"a"`
/// both scan to one line.
#[derive(Clone)]
pub struct Scanner<'src> {
    /// The remaining source text.
    remaining: &'src str,
    /// Current byte position in the source.
    pos: u32,
    /// Index of the next line.
    index: usize,
}

impl<'src> Scanner<'src> {
    /// Create a scanner over the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            remaining: source,
            pos: 0,
            index: 0,
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Line<'src>;

    fn next(&mut self) -> Option<Line<'src>> {
        if self.remaining.is_empty() {
            return None;
        }

        let (raw, consumed) = match self.remaining.find('\n') {
            Some(nl) => (&self.remaining[..nl], nl + 1),
            None => (self.remaining, self.remaining.len()),
        };
        let text = raw.strip_suffix('\r').unwrap_or(raw);

        let line = Line::new(self.index, text, self.pos);
        trace!(index = line.index, indent = line.indent, "scanned line");

        self.remaining = &self.remaining[consumed..];
        self.pos = self.pos.saturating_add(saturating_u32(consumed));
        self.index += 1;
        Some(line)
    }
}

/// Byte offsets past `u32::MAX` clamp to it.
pub(crate) fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Scan a whole document into lines.
pub fn scan(source: &str) -> Vec<Line<'_>> {
    Scanner::new(source).collect()
}
