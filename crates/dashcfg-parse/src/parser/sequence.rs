//! `- item` blocks.

use dashcfg_tree::{Mapping, Node, Sequence};

use super::{INDENT_STEP, Parser, split_entry};
use crate::ParseError;
use crate::scalar::normalize_scalar;

impl Parser<'_> {
    /// Parse `- ` items at exactly `indent`, starting at line `start`.
    ///
    /// The sequence ends at the first substantive line that is shallower,
    /// deeper, or not an item.
    pub(crate) fn parse_sequence(
        &self,
        start: usize,
        indent: usize,
    ) -> Result<(Sequence, usize), ParseError> {
        let mut seq = Sequence::default();
        let mut i = start;

        while let Some(idx) = self.skip_trivia(i) {
            let line = &self.lines[idx];
            self.check_tabs(line)?;

            if line.indent < indent {
                return Ok((seq, idx));
            }
            if line.indent > indent {
                self.over_indented(line, indent)?;
                return Ok((seq, idx));
            }
            if !line.is_item() {
                return Ok((seq, idx));
            }

            let (item, next) = self.parse_item(idx, indent)?;
            seq.push(item);
            i = next;
        }

        Ok((seq, self.lines.len()))
    }

    /// Parse the item on line `idx`.
    ///
    /// `- key: value` starts a mapping item; when the very next line sits at
    /// `indent + 2` and is not itself an item, its `key: value` lines are
    /// further fields of the same item:
    ///
    /// ```text
    /// - name: x
    ///   value: 1
    /// ```
    fn parse_item(&self, idx: usize, indent: usize) -> Result<(Node, usize), ParseError> {
        let line = &self.lines[idx];
        let item = line.content().strip_prefix("- ").unwrap_or_default().trim();

        if item.is_empty() {
            return self.parse_block(idx + 1, indent + INDENT_STEP);
        }

        let Some((key, rest)) = split_entry(item) else {
            return Ok((Node::scalar(normalize_scalar(item)), idx + 1));
        };

        let (value, mut next) = self.parse_entry_value(idx, indent, rest)?;
        let mut fields = Mapping::new();
        fields.insert(key, value);

        let field_indent = indent + INDENT_STEP;
        if let Some(following) = self.lines.get(next)
            && following.indent == field_indent
            && !following.stripped().starts_with("- ")
        {
            let (extra, after) = self.parse_mapping(next, field_indent)?;
            fields.merge(extra);
            next = after;
        }

        Ok((Node::Mapping(fields), next))
    }
}
