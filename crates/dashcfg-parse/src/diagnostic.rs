//! Diagnostic rendering for parse errors.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::{ParseError, ParseErrorKind};

impl ParseError {
    /// Render this error with ariadne.
    ///
    /// Returns a string containing the formatted error message with source context.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let mut output = Vec::new();
        self.write_report(filename, source, &mut output);
        String::from_utf8(output).unwrap_or_else(|_| format!("{}", self))
    }

    /// Write the error report to a writer.
    pub fn write_report<W: std::io::Write>(&self, filename: &str, source: &str, writer: W) {
        let report = self.build_report(filename);
        let _ = report
            .finish()
            .write((filename, Source::from(source)), writer);
    }

    fn build_report<'a>(
        &self,
        filename: &'a str,
    ) -> ariadne::ReportBuilder<'static, (&'a str, std::ops::Range<usize>)> {
        let range: std::ops::Range<usize> = self.span.into();
        let report = Report::build(ReportKind::Error, (filename, range.clone()))
            .with_message(self.kind.to_string());

        match &self.kind {
            ParseErrorKind::StructureError { found } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("top-level block is {found}"))
                        .with_color(Color::Red),
                )
                .with_help("start the document with `key: value` lines at column 0"),

            ParseErrorKind::UnexpectedIndent { expected, found } => report
                .with_label(
                    Label::new((filename, range))
                        .with_message(format!("indented {found} spaces"))
                        .with_color(Color::Red),
                )
                .with_help(format!(
                    "lines in this block are indented {expected} spaces; nested blocks go exactly 2 deeper"
                )),

            ParseErrorKind::MissingColon => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("no `:` on this line")
                        .with_color(Color::Red),
                )
                .with_help("mapping lines have the form `key: value`"),

            ParseErrorKind::TabIndent => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("tab before content")
                        .with_color(Color::Red),
                )
                .with_help("indent with spaces only"),

            ParseErrorKind::TrailingContent => report
                .with_label(
                    Label::new((filename, range))
                        .with_message("not part of the document")
                        .with_color(Color::Red),
                )
                .with_help("a document is one top-level mapping; sequence items need a parent key"),

            ParseErrorKind::DepthLimit { .. } => report.with_label(
                Label::new((filename, range))
                    .with_message("too deeply nested")
                    .with_color(Color::Red),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ParseOptions, Parser};

    fn render_error(source: &str, options: ParseOptions) -> String {
        let err = Parser::new(source)
            .with_options(options)
            .parse_document()
            .unwrap_err();
        let rendered = err.render("dashboard.yaml", source);
        String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap()
    }

    #[test]
    fn test_structure_error_diagnostic() {
        let out = render_error("- a\n- b\n", ParseOptions::default());
        assert!(out.contains("document root must be a mapping, found sequence"), "{out}");
        assert!(out.contains("dashboard.yaml"), "{out}");
        assert!(out.contains("top-level block is sequence"), "{out}");
    }

    #[test]
    fn test_unexpected_indent_diagnostic() {
        let source = "title: Gas\n    description: x\n";
        let out = render_error(source, ParseOptions::new().strict_indentation(true));
        assert!(out.contains("unexpected indentation"), "{out}");
        assert!(out.contains("indented 4 spaces"), "{out}");
        assert!(out.contains("description: x"), "{out}");
    }

    #[test]
    fn test_missing_colon_diagnostic() {
        let out = render_error("title Gas\n", ParseOptions::new().strict_keys(true));
        assert!(out.contains("no `:` on this line"), "{out}");
        assert!(out.contains("key: value"), "{out}");
    }
}
