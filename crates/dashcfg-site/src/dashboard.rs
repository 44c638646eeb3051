//! Typed view over a parsed dashboard document.
//!
//! Every accessor is forgiving: a missing key, or a value of the wrong
//! shape, reads as an empty string or an empty list.

use dashcfg_parse::{Mapping, Node};

/// A dashboard document.
#[derive(Debug, Clone, Copy)]
pub struct Dashboard<'a> {
    root: &'a Mapping,
}

/// The `summary` section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary<'a> {
    /// `summary.heading`.
    pub heading: &'a str,
    /// Scalar items of `summary.bullets`.
    pub bullets: Vec<&'a str>,
    /// Mapping items of `summary.sources`.
    pub sources: Vec<SourceLink<'a>>,
}

/// One entry of `summary.sources`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink<'a> {
    /// Link text; the URL is shown when empty.
    pub label: &'a str,
    /// Target; an empty URL renders the label as plain text.
    pub url: &'a str,
}

/// One entry of `panels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel<'a> {
    /// Panel heading, also the expanded view's title.
    pub title: &'a str,
    /// Path of the plot HTML, relative to the page.
    pub plot: &'a str,
    /// Scalar items of `bullets`.
    pub bullets: Vec<&'a str>,
    /// Optional note shown under the plot.
    pub note: &'a str,
    /// Optional data source shown under the plot.
    pub source: &'a str,
}

impl<'a> Dashboard<'a> {
    pub fn new(root: &'a Mapping) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &'a Mapping {
        self.root
    }

    pub fn title(&self) -> &'a str {
        self.root.str_or("title", "")
    }

    pub fn description(&self) -> &'a str {
        self.root.str_or("description", "")
    }

    pub fn authors(&self) -> Vec<&'a str> {
        self.root.str_list("authors")
    }

    pub fn contributors(&self) -> Vec<&'a str> {
        self.root.str_list("contributors")
    }

    pub fn contact(&self) -> &'a str {
        self.root.str_or("contact", "")
    }

    /// Logo image paths, in source order.
    pub fn logos(&self) -> Vec<&'a str> {
        self.root.str_list("logos")
    }

    pub fn tip(&self) -> &'a str {
        self.root.str_or("tip", "")
    }

    pub fn summary(&self) -> Summary<'a> {
        let Some(summary) = self.root.mapping("summary") else {
            return Summary::default();
        };
        Summary {
            heading: summary.str_or("heading", ""),
            bullets: summary.str_list("bullets"),
            sources: mappings(summary, "sources")
                .map(|src| SourceLink {
                    label: src.str_or("label", ""),
                    url: src.str_or("url", ""),
                })
                .collect(),
        }
    }

    /// Panels in source order. Items that are not mappings are skipped.
    pub fn panels(&self) -> Vec<Panel<'a>> {
        mappings(self.root, "panels")
            .map(|panel| Panel {
                title: panel.str_or("title", ""),
                plot: panel.str_or("plot", ""),
                bullets: panel.str_list("bullets"),
                note: panel.str_or("note", ""),
                source: panel.str_or("source", ""),
            })
            .collect()
    }
}

/// The mapping items of the sequence at `key`.
fn mappings<'a>(map: &'a Mapping, key: &str) -> impl Iterator<Item = &'a Mapping> {
    map.get(key)
        .and_then(Node::as_sequence)
        .into_iter()
        .flat_map(|seq| seq.iter())
        .filter_map(Node::as_mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashcfg_parse::parse_document;

    #[test]
    fn test_reads_documented_keys() {
        let doc = parse_document(
            "\
title: Gas storage
description: Weekly
authors:
  - A
  - B
contact: team@example.org
logos:
  - logos/one.png
summary:
  heading: Key points
  bullets:
    - High
  sources:
    - label: GIE
      url: https://agsi.gie.eu
    - just text
panels:
  - title: Storage
    plot: plots/storage.html
    bullets:
      - Above average
    note: Weekly
  - stray scalar
",
        )
        .unwrap();
        let dash = Dashboard::new(&doc);

        assert_eq!(dash.title(), "Gas storage");
        assert_eq!(dash.description(), "Weekly");
        assert_eq!(dash.authors(), vec!["A", "B"]);
        assert!(dash.contributors().is_empty());
        assert_eq!(dash.contact(), "team@example.org");
        assert_eq!(dash.logos(), vec!["logos/one.png"]);
        assert_eq!(dash.tip(), "");

        let summary = dash.summary();
        assert_eq!(summary.heading, "Key points");
        assert_eq!(summary.bullets, vec!["High"]);
        assert_eq!(
            summary.sources,
            vec![SourceLink {
                label: "GIE",
                url: "https://agsi.gie.eu"
            }]
        );

        assert_eq!(
            dash.panels(),
            vec![Panel {
                title: "Storage",
                plot: "plots/storage.html",
                bullets: vec!["Above average"],
                note: "Weekly",
                source: "",
            }]
        );
    }

    #[test]
    fn test_missing_and_misshapen_values() {
        let doc = parse_document("title:\nsummary: text\npanels: none\nauthors: solo\n").unwrap();
        let dash = Dashboard::new(&doc);

        assert_eq!(dash.title(), "");
        assert_eq!(dash.summary(), Summary::default());
        assert!(dash.panels().is_empty());
        assert!(dash.authors().is_empty());
    }
}
