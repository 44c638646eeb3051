use std::fs;
use std::path::Path;

use dashcfg_parse::{ParseErrorKind, ParseOptions};
use dashcfg_site::{SiteError, SiteLayout, build_site};

const PERIOD: &str = "Jan_2026";

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn project(document: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(&root.join("dashboards/Jan_2026/dashboard.yaml"), document);
    write(
        &root.join("dashboards/Jan_2026/template.html"),
        "<title>{{TITLE}}</title>\n{{HEADER}}\n{{TIP}}\n",
    );
    write(&root.join("plots/Jan_2026/storage.html"), "<p>storage</p>");
    write(&root.join("plots/Jan_2026/flows.html"), "<p>flows</p>");
    write(&root.join("plots/Jan_2026/notes.txt"), "not a plot");
    write(&root.join("logos/acme.png"), "png");
    dir
}

#[test]
fn builds_page_and_copies_assets() {
    let dir = project("title: Gas storage\ntip: Click to expand\n");
    let layout = SiteLayout::new(dir.path());

    let report = build_site(&layout, PERIOD, &ParseOptions::default()).unwrap();

    let out = dir.path().join("docs/Jan_2026");
    assert_eq!(report.index, out.join("index.html"));
    let page = fs::read_to_string(&report.index).unwrap();
    assert!(page.starts_with("<title>Gas storage</title>\n<header>"), "{page}");
    assert!(page.contains("<section class=\"tip\">Click to expand</section>"), "{page}");

    assert_eq!(
        report.plots,
        vec![out.join("plots/flows.html"), out.join("plots/storage.html")]
    );
    assert_eq!(
        fs::read_to_string(out.join("plots/storage.html")).unwrap(),
        "<p>storage</p>"
    );
    assert!(!out.join("plots/notes.txt").exists());
    assert_eq!(report.logos, vec![out.join("logos/acme.png")]);
}

#[test]
fn missing_plots_directory_copies_nothing() {
    let dir = project("title: x\n");
    fs::remove_dir_all(dir.path().join("plots/Jan_2026")).unwrap();

    let report = build_site(&SiteLayout::new(dir.path()), PERIOD, &ParseOptions::default()).unwrap();
    assert!(report.plots.is_empty());
    assert!(dir.path().join("docs/Jan_2026/plots").is_dir());
}

#[test]
fn missing_logos_directory_is_an_error() {
    let dir = project("title: x\n");
    fs::remove_dir_all(dir.path().join("logos")).unwrap();

    let err = build_site(&SiteLayout::new(dir.path()), PERIOD, &ParseOptions::default()).unwrap_err();
    match err {
        SiteError::Io { path, .. } => assert_eq!(path, dir.path().join("logos")),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn missing_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = build_site(&SiteLayout::new(dir.path()), PERIOD, &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, SiteError::Io { .. }), "{err:?}");
}

#[test]
fn parse_errors_carry_the_source() {
    let dir = project("- a\n- b\n");
    let err = build_site(&SiteLayout::new(dir.path()), PERIOD, &ParseOptions::default()).unwrap_err();
    let SiteError::Parse { error, text, .. } = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(
        error.kind,
        ParseErrorKind::StructureError { found: "sequence" }
    );
    assert_eq!(text, "- a\n- b\n");
    assert!(err.to_string().ends_with("document root must be a mapping, found sequence (line 1)"));
    assert!(!dir.path().join("docs/Jan_2026/index.html").exists());
}

#[test]
fn strict_options_reach_the_parser() {
    let dir = project("title: x\nno colon here\n");
    let layout = SiteLayout::new(dir.path());

    build_site(&layout, PERIOD, &ParseOptions::default()).unwrap();

    let err = build_site(&layout, PERIOD, &ParseOptions::new().strict_keys(true)).unwrap_err();
    assert!(
        matches!(&err, SiteError::Parse { error, .. } if error.kind == ParseErrorKind::MissingColon),
        "{err:?}"
    );
}
