//! Human-readable tree layout.

use std::fmt::Write;

use crate::{Mapping, Node};

/// Render a node as an indented outline, one node per line.
///
/// ```text
/// Mapping {
///   title: Scalar("Gas storage")
///   authors: Sequence [
///     Scalar("A. Author")
///   ]
/// }
/// ```
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

/// Render a mapping as an outline.
pub fn outline_mapping(map: &Mapping) -> String {
    let mut out = String::new();
    write_mapping(&mut out, map, 0);
    out
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    match node {
        Node::Mapping(map) => write_mapping(out, map, indent),
        Node::Sequence(seq) => {
            if seq.is_empty() {
                out.push_str("Sequence []\n");
                return;
            }
            out.push_str("Sequence [\n");
            let pad = "  ".repeat(indent + 1);
            for item in seq.iter() {
                out.push_str(&pad);
                write_node(out, item, indent + 1);
            }
            let _ = writeln!(out, "{}]", "  ".repeat(indent));
        }
        Node::Scalar(s) => {
            let _ = writeln!(out, "Scalar({s:?})");
        }
        Node::Empty => out.push_str("Empty\n"),
    }
}

fn write_mapping(out: &mut String, map: &Mapping, indent: usize) {
    if map.is_empty() {
        out.push_str("Mapping {}\n");
        return;
    }
    out.push_str("Mapping {\n");
    let pad = "  ".repeat(indent + 1);
    for (key, value) in map.iter() {
        let _ = write!(out, "{pad}{key}: ");
        write_node(out, value, indent + 1);
    }
    let _ = writeln!(out, "{}}}", "  ".repeat(indent));
}
