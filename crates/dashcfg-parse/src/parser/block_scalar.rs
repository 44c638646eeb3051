//! Literal `|` block scalars.

use super::Parser;

impl Parser<'_> {
    /// Read every line from `start` indented by at least `indent` spaces.
    ///
    /// Content is opaque: comments, `key: value` and `- ` lines inside the
    /// block are text. Each line loses exactly `indent` leading spaces. The
    /// first line indented less than `indent` ends the block, and an empty
    /// line counts as indentation 0. Trailing whitespace of the joined text
    /// is trimmed.
    pub(crate) fn read_block_scalar(&self, start: usize, indent: usize) -> (String, usize) {
        let body: Vec<&str> = self.lines[start.min(self.lines.len())..]
            .iter()
            .take_while(|line| line.indent >= indent)
            .map(|line| line.dedent(indent))
            .collect();
        let next = start + body.len();

        (body.join("\n").trim_end().to_string(), next)
    }
}
