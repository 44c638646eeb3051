//! A single source line with its indentation.

use crate::Span;
use crate::scanner::saturating_u32;

/// One line of a document, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'src> {
    /// Zero-based line index.
    pub index: usize,
    /// Line text, excluding `\n` and a trailing `\r`.
    pub text: &'src str,
    /// Number of leading U+0020 characters. Tabs never count.
    pub indent: usize,
    /// Byte span of `text` in the source.
    pub span: Span,
}

impl<'src> Line<'src> {
    /// Build a line from its text, measuring indentation.
    pub fn new(index: usize, text: &'src str, start: u32) -> Self {
        let indent = text.bytes().take_while(|&b| b == b' ').count();
        Self {
            index,
            text,
            indent,
            span: Span::new(start, start.saturating_add(saturating_u32(text.len()))),
        }
    }

    /// One-based line number, for humans.
    #[inline]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// True when the line is empty or whitespace only.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// True when the first non-whitespace character is `#`.
    #[inline]
    pub fn is_comment(&self) -> bool {
        self.text.trim_start().starts_with('#')
    }

    /// Blank and comment lines carry no structure.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.is_blank() || self.is_comment()
    }

    /// The text with all leading whitespace removed.
    #[inline]
    pub fn stripped(&self) -> &'src str {
        self.text.trim_start()
    }

    /// The text after the leading spaces.
    #[inline]
    pub fn content(&self) -> &'src str {
        &self.text[self.indent..]
    }

    /// The text with exactly `n` leading characters removed.
    ///
    /// Callers only dedent by at most `self.indent`, which are all single-byte
    /// spaces; a shorter line yields the empty string.
    #[inline]
    pub fn dedent(&self, n: usize) -> &'src str {
        self.text.get(n.min(self.indent)..).unwrap_or("")
    }

    /// True when the content starts a sequence item (`- `).
    #[inline]
    pub fn is_item(&self) -> bool {
        self.content().starts_with("- ")
    }

    /// True when a tab appears in the leading whitespace run.
    pub fn has_tab_indent(&self) -> bool {
        self.text
            .chars()
            .take_while(|c| c.is_whitespace())
            .any(|c| c == '\t')
    }

    /// Span of the dedented content.
    pub fn content_span(&self) -> Span {
        self.span.sub(saturating_u32(self.indent), self.span.len())
    }
}
