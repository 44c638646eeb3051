//! Line scanner for dashcfg documents.
//!
//! The format is line-oriented: every structural decision is made from a
//! line's indentation (leading spaces) and its dedented content. This crate
//! splits source text into [`Line`]s carrying both, plus the byte span of
//! each line for diagnostics.

mod span;
pub use span::Span;

mod line;
pub use line::Line;

mod scanner;
pub use scanner::{Scanner, scan};
