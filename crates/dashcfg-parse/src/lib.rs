//! Parser for dashcfg configuration documents.
//!
//! The format is a small, indentation-sensitive subset of YAML: block
//! mappings (`key: value`), block sequences (`- item`, including items with
//! several fields) and literal block scalars (`key: |`). Indentation is
//! counted in spaces and grows by exactly two per nested block. Scalars
//! are strings; there are no flow collections, anchors, tags or escapes.
//!
//! ```
//! let doc = dashcfg_parse::parse_document("title: Gas storage\nauthors:\n  - A\n").unwrap();
//! assert_eq!(doc.str_or("title", ""), "Gas storage");
//! assert_eq!(doc.str_list("authors"), vec!["A"]);
//! ```

pub use dashcfg_scan::{Line, Span};
pub use dashcfg_tree::{Mapping, Node, Sequence};

mod diagnostic;

mod error;
pub use error::{ParseError, ParseErrorKind};

mod options;
pub use options::{ParseOptions, TabPolicy};

mod parser;
pub use parser::{INDENT_STEP, Parser};

mod scalar;
pub use scalar::normalize_scalar;

/// Parse a document with default (lenient) options.
///
/// The root must be a mapping; anything else is a `StructureError`.
pub fn parse_document(source: &str) -> Result<Mapping, ParseError> {
    Parser::new(source).parse_document()
}

/// Parse a document with the given options.
pub fn parse_document_with(source: &str, options: ParseOptions) -> Result<Mapping, ParseError> {
    Parser::new(source).with_options(options).parse_document()
}
