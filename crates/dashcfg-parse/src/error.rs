//! Parse errors.

use dashcfg_scan::{Line, Span};

/// The kind of a parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The top-level block is not a mapping.
    #[error("document root must be a mapping, found {found}")]
    StructureError {
        /// What was found instead (`sequence`, `scalar` or `empty`).
        found: &'static str,
    },

    /// A line is indented deeper than its block (strict indentation only).
    #[error("unexpected indentation: expected {expected} spaces, found {found}")]
    UnexpectedIndent {
        /// Indentation of the enclosing block.
        expected: usize,
        /// Indentation of the offending line.
        found: usize,
    },

    /// A mapping line has no `:` (strict keys only).
    #[error("expected `key: value`, found a line without `:`")]
    MissingColon,

    /// A tab appears in leading whitespace (`TabPolicy::Reject` only).
    #[error("tab character in indentation")]
    TabIndent,

    /// Lines remain after the top-level block ended (strict indentation only).
    #[error("content after the end of the top-level block")]
    TrailingContent,

    /// Blocks are nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels")]
    DepthLimit {
        /// The configured `max_depth`.
        limit: usize,
    },
}

/// A parse error with source location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} (line {line})")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Source location of the offending line.
    pub span: Span,
    /// One-based line number.
    pub line: usize,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span, line: usize) -> Self {
        Self { kind, span, line }
    }

    /// Create an error pointing at the content of `line`.
    pub fn at(kind: ParseErrorKind, line: &Line<'_>) -> Self {
        Self::new(kind, line.content_span(), line.number())
    }

    /// True for root-contract violations.
    pub fn is_structure_error(&self) -> bool {
        matches!(self.kind, ParseErrorKind::StructureError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line() {
        let line = Line::new(2, "    - x", 20);
        let err = ParseError::at(
            ParseErrorKind::UnexpectedIndent {
                expected: 2,
                found: 4,
            },
            &line,
        );
        assert_eq!(
            err.to_string(),
            "unexpected indentation: expected 2 spaces, found 4 (line 3)"
        );
        assert_eq!(err.span, Span::new(24, 27));
        assert!(!err.is_structure_error());
    }
}
