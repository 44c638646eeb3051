//! `key: value` blocks.

use dashcfg_tree::Mapping;
use tracing::debug;

use super::{Parser, split_entry};
use crate::{ParseError, ParseErrorKind};

impl Parser<'_> {
    /// Parse `key: value` lines at exactly `indent`, starting at line `start`.
    ///
    /// The mapping ends at the first substantive line that is shallower,
    /// deeper, or a sequence item. Lines without a `:` are skipped unless
    /// `strict_keys` is set.
    pub(crate) fn parse_mapping(
        &self,
        start: usize,
        indent: usize,
    ) -> Result<(Mapping, usize), ParseError> {
        let mut map = Mapping::new();
        let mut i = start;

        while let Some(idx) = self.skip_trivia(i) {
            let line = &self.lines[idx];
            self.check_tabs(line)?;

            if line.indent < indent {
                return Ok((map, idx));
            }
            if line.indent > indent {
                self.over_indented(line, indent)?;
                return Ok((map, idx));
            }
            if line.is_item() {
                return Ok((map, idx));
            }

            let Some((key, rest)) = split_entry(line.content()) else {
                if self.options.strict_keys {
                    return Err(ParseError::at(ParseErrorKind::MissingColon, line));
                }
                debug!(line = line.number(), "skipping line without `:`");
                i = idx + 1;
                continue;
            };

            let (value, next) = self.parse_entry_value(idx, indent, rest)?;
            map.insert(key, value);
            i = next;
        }

        Ok((map, self.lines.len()))
    }
}
