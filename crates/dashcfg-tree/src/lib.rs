//! Document tree representation for dashcfg configuration files.
//!
//! Nodes own their children directly; a parsed document is immutable and
//! read through the accessors on [`Node`] and [`Mapping`].

mod outline;
mod value;

pub use outline::{outline, outline_mapping};
pub use value::{Mapping, Node, Sequence};
