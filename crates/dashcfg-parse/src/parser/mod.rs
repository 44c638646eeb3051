//! Indentation-driven recursive-descent parser.
//!
//! Every block is parsed by [`Parser::parse_block`], which looks at the
//! first substantive line at the expected indentation and hands off to the
//! mapping or sequence parser. Those recurse back into `parse_block` at
//! `indent + 2` for nested values, so nesting depth equals indent / 2.

mod block_scalar;
mod mapping;
mod sequence;

use dashcfg_scan::{Line, Span, scan};
use dashcfg_tree::{Mapping, Node};
use tracing::{debug, trace};

use crate::scalar::normalize_scalar;
use crate::{ParseError, ParseErrorKind, ParseOptions, TabPolicy};

/// Indentation added for every nested block.
pub const INDENT_STEP: usize = 2;

/// Parser over one document's lines.
#[derive(Clone)]
pub struct Parser<'src> {
    lines: Vec<Line<'src>>,
    options: ParseOptions,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source, with default options.
    pub fn new(source: &'src str) -> Self {
        Self {
            lines: scan(source),
            options: ParseOptions::default(),
        }
    }

    /// Replace the parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// The scanned lines.
    pub fn lines(&self) -> &[Line<'src>] {
        &self.lines
    }

    /// Parse the whole document and enforce a mapping root.
    pub fn parse_document(&self) -> Result<Mapping, ParseError> {
        let (root, next) = self.parse_block(0, 0)?;

        let map = match root {
            Node::Mapping(map) => map,
            other => return Err(self.structure_error(other.kind_name())),
        };

        // Only colon-less lines at the root: the document is a bare scalar.
        if map.is_empty()
            && let Some(first) = self.first_substantive(0)
            && split_entry(first.content()).is_none()
        {
            return Err(self.structure_error("scalar"));
        }

        if self.options.strict_indentation
            && let Some(line) = self.first_substantive(next)
        {
            return Err(ParseError::at(ParseErrorKind::TrailingContent, line));
        }

        debug!(entries = map.len(), lines = self.lines.len(), "parsed document");
        Ok(map)
    }

    /// Parse the block starting at or after line `start` at indentation `indent`.
    ///
    /// Returns the block and the index of the first line it did not consume.
    /// `Node::Empty` means the first substantive line was not at `indent`;
    /// in that case the returned index points at that line.
    pub fn parse_block(&self, start: usize, indent: usize) -> Result<(Node, usize), ParseError> {
        let Some(idx) = self.skip_trivia(start) else {
            return Ok((Node::Empty, self.lines.len()));
        };
        let line = &self.lines[idx];
        self.check_tabs(line)?;

        if line.indent < indent {
            return Ok((Node::Empty, idx));
        }
        if line.indent > indent {
            self.over_indented(line, indent)?;
            return Ok((Node::Empty, idx));
        }

        let depth = indent / INDENT_STEP;
        if depth > self.options.max_depth {
            return Err(ParseError::at(
                ParseErrorKind::DepthLimit {
                    limit: self.options.max_depth,
                },
                line,
            ));
        }

        trace!(line = line.number(), indent, depth, item = line.is_item(), "block");
        if line.is_item() {
            let (seq, next) = self.parse_sequence(idx, indent)?;
            Ok((Node::Sequence(seq), next))
        } else {
            let (map, next) = self.parse_mapping(idx, indent)?;
            Ok((Node::Mapping(map), next))
        }
    }

    /// Parse the value of a `key: rest` entry found on line `idx` of a block
    /// at `indent`. Nested values live at `indent + 2`.
    fn parse_entry_value(
        &self,
        idx: usize,
        indent: usize,
        rest: &str,
    ) -> Result<(Node, usize), ParseError> {
        match rest {
            "|" => {
                let (text, next) = self.read_block_scalar(idx + 1, indent + INDENT_STEP);
                Ok((Node::Scalar(text), next))
            }
            "" => self.parse_block(idx + 1, indent + INDENT_STEP),
            _ => Ok((Node::scalar(normalize_scalar(rest)), idx + 1)),
        }
    }

    /// Index of the first non-trivia line at or after `start`.
    fn skip_trivia(&self, start: usize) -> Option<usize> {
        (start..self.lines.len()).find(|&i| !self.lines[i].is_trivia())
    }

    fn first_substantive(&self, start: usize) -> Option<&Line<'src>> {
        self.skip_trivia(start).map(|i| &self.lines[i])
    }

    fn check_tabs(&self, line: &Line<'_>) -> Result<(), ParseError> {
        if self.options.tabs == TabPolicy::Reject && line.has_tab_indent() {
            return Err(ParseError::at(ParseErrorKind::TabIndent, line));
        }
        Ok(())
    }

    /// A line deeper than its block ends the block, or fails in strict mode.
    fn over_indented(&self, line: &Line<'_>, expected: usize) -> Result<(), ParseError> {
        if self.options.strict_indentation {
            return Err(ParseError::at(
                ParseErrorKind::UnexpectedIndent {
                    expected,
                    found: line.indent,
                },
                line,
            ));
        }
        debug!(line = line.number(), expected, found = line.indent, "over-indented line ends block");
        Ok(())
    }

    fn structure_error(&self, found: &'static str) -> ParseError {
        let kind = ParseErrorKind::StructureError { found };
        match self.first_substantive(0) {
            Some(line) => ParseError::at(kind, line),
            None => ParseError::new(kind, Span::empty(0), 1),
        }
    }
}

/// Split `key: value` at the first `:`, trimming both sides.
pub(crate) fn split_entry(content: &str) -> Option<(&str, &str)> {
    content
        .split_once(':')
        .map(|(key, rest)| (key.trim(), rest.trim()))
}
