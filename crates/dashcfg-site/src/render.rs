//! HTML fragments for a dashboard page.
//!
//! Values are inserted verbatim: dashboard files may carry inline HTML in
//! titles, bullets and notes.

use std::fmt::Write;

use crate::dashboard::Dashboard;

/// Title used for `{{TITLE}}` when the document has none.
pub const DEFAULT_TITLE: &str = "Dashboard";

/// Render the page header: title, description, authors, optional
/// contributors and contact lines, and the logo bar.
pub fn render_header(dash: &Dashboard<'_>) -> String {
    let logos: String = dash
        .logos()
        .iter()
        .map(|path| format!("<img src=\"{path}\" alt=\"logo\">"))
        .collect();
    let authors = dash.authors().join(", ");
    let contributors = dash.contributors().join(", ");
    let title = dash.title().replace(" | ", "<br>");

    let mut out = String::from("<header><div>");
    let _ = write!(out, "<h1 class=\"title\">{title}</h1>");
    let _ = write!(out, "<p class=\"description\">{}</p>", dash.description());
    let _ = write!(out, "<div class=\"authors\">{authors}</div>");
    if !contributors.is_empty() {
        let _ = write!(out, "<div class=\"authors\">Contributors: {contributors}</div>");
    }
    if !dash.contact().is_empty() {
        let _ = write!(out, "<div class=\"authors\">Contact: {}</div>", dash.contact());
    }
    let _ = write!(out, "</div><div class=\"logo-bar\">{logos}</div></header>");
    out
}

/// Render the summary section with its bullets and source links.
pub fn render_summary(dash: &Dashboard<'_>) -> String {
    let summary = dash.summary();

    let sources: String = summary
        .sources
        .iter()
        .map(|src| {
            if src.url.is_empty() {
                format!("<li>{}</li>", src.label)
            } else {
                let text = if src.label.is_empty() { src.url } else { src.label };
                format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{text}</a></li>",
                    src.url
                )
            }
        })
        .collect();
    let sources = if sources.is_empty() {
        String::new()
    } else {
        format!("<h3>Sources</h3><ul class=\"sources\">{sources}</ul>")
    };

    format!(
        "<section class=\"summary\"><h2>{}</h2><ul>{}</ul>{sources}</section>",
        summary.heading,
        list_items(&summary.bullets)
    )
}

/// Render the tip box, or nothing when there is no tip.
pub fn render_tip(dash: &Dashboard<'_>) -> String {
    match dash.tip() {
        "" => String::new(),
        tip => format!("<section class=\"tip\">{tip}</section>"),
    }
}

/// Render every panel as an `<article>` with an embedded plot.
pub fn render_panels(dash: &Dashboard<'_>) -> String {
    let mut out = String::new();
    for panel in dash.panels() {
        let mut meta = String::new();
        if !panel.note.is_empty() {
            let _ = write!(meta, "<div><strong>Note:</strong> {}</div>", panel.note);
        }
        if !panel.source.is_empty() {
            let _ = write!(meta, "<div><strong>Source:</strong> {}</div>", panel.source);
        }
        if !meta.is_empty() {
            meta = format!("<div class=\"meta\">{meta}</div>");
        }

        let _ = write!(
            out,
            "<article class=\"panel\"><h3>{title}</h3>\
             <button class=\"expand-btn\" data-expand data-title=\"{title}\" data-src=\"{plot}\">Expand</button>\
             <iframe src=\"{plot}\" loading=\"lazy\"></iframe>\
             {meta}<ul>{bullets}</ul></article>",
            title = panel.title,
            plot = panel.plot,
            bullets = list_items(&panel.bullets),
        );
    }
    out
}

/// Substitute the page placeholders in `template`.
///
/// Recognized placeholders: `{{TITLE}}`, `{{HEADER}}`, `{{SUMMARY}}`,
/// `{{TIP}}` and `{{PANELS}}`. Anything else is left untouched.
pub fn fill_template(template: &str, dash: &Dashboard<'_>) -> String {
    let title = match dash.root().get("title").and_then(|node| node.as_str()) {
        Some(title) => title,
        None => DEFAULT_TITLE,
    };
    template
        .replace("{{TITLE}}", title)
        .replace("{{HEADER}}", &render_header(dash))
        .replace("{{SUMMARY}}", &render_summary(dash))
        .replace("{{TIP}}", &render_tip(dash))
        .replace("{{PANELS}}", &render_panels(dash))
}

fn list_items(items: &[&str]) -> String {
    items.iter().map(|item| format!("<li>{item}</li>")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashcfg_parse::parse_document;

    const SAMPLE: &str = "\
title: Gas storage | January
description: Weekly <em>view</em>
authors:
  - A
  - B
contributors:
  - C
contact: team@example.org
logos:
  - logos/one.png
  - logos/two.png
summary:
  heading: Key points
  bullets:
    - High
    - Rising
  sources:
    - label: GIE
      url: https://agsi.gie.eu
    - url: https://example.org
    - label: Internal
tip: Click a panel to expand it.
panels:
  - title: Storage
    plot: plots/storage.html
    bullets:
      - Above average
    note: Weekly
    source: GIE
  - title: Flows
    plot: plots/flows.html
";

    #[test]
    fn test_render_header() {
        let doc = parse_document(SAMPLE).unwrap();
        let html = render_header(&Dashboard::new(&doc));
        insta::assert_snapshot!(html, @r#"<header><div><h1 class="title">Gas storage<br>January</h1><p class="description">Weekly <em>view</em></p><div class="authors">A, B</div><div class="authors">Contributors: C</div><div class="authors">Contact: team@example.org</div></div><div class="logo-bar"><img src="logos/one.png" alt="logo"><img src="logos/two.png" alt="logo"></div></header>"#);
    }

    #[test]
    fn test_render_header_without_optional_lines() {
        let doc = parse_document("title: Plain\n").unwrap();
        let html = render_header(&Dashboard::new(&doc));
        assert_eq!(
            html,
            "<header><div><h1 class=\"title\">Plain</h1><p class=\"description\"></p>\
             <div class=\"authors\"></div></div><div class=\"logo-bar\"></div></header>"
        );
    }

    #[test]
    fn test_render_summary() {
        let doc = parse_document(SAMPLE).unwrap();
        let html = render_summary(&Dashboard::new(&doc));
        insta::assert_snapshot!(html, @r#"<section class="summary"><h2>Key points</h2><ul><li>High</li><li>Rising</li></ul><h3>Sources</h3><ul class="sources"><li><a href="https://agsi.gie.eu" target="_blank" rel="noopener">GIE</a></li><li><a href="https://example.org" target="_blank" rel="noopener">https://example.org</a></li><li>Internal</li></ul></section>"#);
    }

    #[test]
    fn test_render_summary_without_sources() {
        let doc = parse_document("title: x\n").unwrap();
        let html = render_summary(&Dashboard::new(&doc));
        assert_eq!(html, "<section class=\"summary\"><h2></h2><ul></ul></section>");
    }

    #[test]
    fn test_render_tip() {
        let doc = parse_document(SAMPLE).unwrap();
        assert_eq!(
            render_tip(&Dashboard::new(&doc)),
            "<section class=\"tip\">Click a panel to expand it.</section>"
        );

        let doc = parse_document("tip:\n").unwrap();
        assert_eq!(render_tip(&Dashboard::new(&doc)), "");
    }

    #[test]
    fn test_render_panels() {
        let doc = parse_document(SAMPLE).unwrap();
        let html = render_panels(&Dashboard::new(&doc));
        insta::assert_snapshot!(html, @r#"<article class="panel"><h3>Storage</h3><button class="expand-btn" data-expand data-title="Storage" data-src="plots/storage.html">Expand</button><iframe src="plots/storage.html" loading="lazy"></iframe><div class="meta"><div><strong>Note:</strong> Weekly</div><div><strong>Source:</strong> GIE</div></div><ul><li>Above average</li></ul></article><article class="panel"><h3>Flows</h3><button class="expand-btn" data-expand data-title="Flows" data-src="plots/flows.html">Expand</button><iframe src="plots/flows.html" loading="lazy"></iframe><ul></ul></article>"#);
    }

    #[test]
    fn test_fill_template() {
        let doc = parse_document("title: Gas\ntip: Hi\n").unwrap();
        let dash = Dashboard::new(&doc);
        let page = fill_template("<title>{{TITLE}}</title>{{TIP}}{{OTHER}}", &dash);
        assert_eq!(
            page,
            "<title>Gas</title><section class=\"tip\">Hi</section>{{OTHER}}"
        );

        let doc = parse_document("description: untitled\n").unwrap();
        let page = fill_template("{{TITLE}}", &Dashboard::new(&doc));
        assert_eq!(page, DEFAULT_TITLE);
    }
}
