//! Building a dashboard page and its assets into the output tree.

use std::fs;
use std::path::{Path, PathBuf};

use dashcfg_parse::{ParseOptions, parse_document_with};
use glob::Pattern;
use tracing::{debug, info};

use crate::dashboard::Dashboard;
use crate::error::SiteError;
use crate::render::fill_template;

/// Directory layout of a dashboard project.
///
/// ```text
/// <root>/dashboards/<period>/dashboard.yaml
/// <root>/dashboards/<period>/template.html
/// <root>/plots/<period>/*.html
/// <root>/logos/*
/// <root>/docs/<period>/{index.html,plots/,logos/}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Project root; every other directory is relative to it.
    pub root: PathBuf,
    /// Per-period inputs (default `dashboards`).
    pub dashboards: String,
    /// Generated output (default `docs`).
    pub docs: String,
    /// Per-period plot HTML (default `plots`).
    pub plots: String,
    /// Shared logo images (default `logos`).
    pub logos: String,
}

impl SiteLayout {
    /// The default layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dashboards: "dashboards".into(),
            docs: "docs".into(),
            plots: "plots".into(),
            logos: "logos".into(),
        }
    }

    pub fn dashboard_dir(&self, period: &str) -> PathBuf {
        self.root.join(&self.dashboards).join(period)
    }

    pub fn document_path(&self, period: &str) -> PathBuf {
        self.dashboard_dir(period).join("dashboard.yaml")
    }

    pub fn template_path(&self, period: &str) -> PathBuf {
        self.dashboard_dir(period).join("template.html")
    }

    /// Where the period's plot HTML files are read from.
    pub fn plots_source(&self, period: &str) -> PathBuf {
        self.root.join(&self.plots).join(period)
    }

    /// Shared logo images, copied into every period.
    pub fn logos_source(&self) -> PathBuf {
        self.root.join(&self.logos)
    }

    pub fn output_dir(&self, period: &str) -> PathBuf {
        self.root.join(&self.docs).join(period)
    }
}

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// The generated page.
    pub index: PathBuf,
    /// Copied plot files, sorted by name.
    pub plots: Vec<PathBuf>,
    /// Copied logo files, sorted by name.
    pub logos: Vec<PathBuf>,
}

/// Build `docs/<period>/` from the period's document and template.
///
/// Plots are the `*.html` files of `plots/<period>/`; a missing plots
/// directory copies nothing. The logos directory must exist.
pub fn build_site(
    layout: &SiteLayout,
    period: &str,
    options: &ParseOptions,
) -> Result<BuildReport, SiteError> {
    let doc_path = layout.document_path(period);
    let text = fs::read_to_string(&doc_path).map_err(SiteError::io(&doc_path))?;
    let root = match parse_document_with(&text, options.clone()) {
        Ok(root) => root,
        Err(error) => {
            return Err(SiteError::Parse {
                path: doc_path,
                text,
                error,
            });
        }
    };
    debug!(path = %doc_path.display(), entries = root.len(), "parsed dashboard");

    let template_path = layout.template_path(period);
    let template = fs::read_to_string(&template_path).map_err(SiteError::io(&template_path))?;
    let html = fill_template(&template, &Dashboard::new(&root));

    let out_dir = layout.output_dir(period);
    let plots_out = out_dir.join("plots");
    let logos_out = out_dir.join("logos");
    for dir in [&out_dir, &plots_out, &logos_out] {
        fs::create_dir_all(dir).map_err(SiteError::io(dir))?;
    }

    let index = out_dir.join("index.html");
    fs::write(&index, html).map_err(SiteError::io(&index))?;
    info!(path = %index.display(), "wrote dashboard page");

    let plots = copy_all(&find_plots(&layout.plots_source(period))?, &plots_out)?;
    let logos = copy_all(&list_files(&layout.logos_source())?, &logos_out)?;
    info!(plots = plots.len(), logos = logos.len(), "copied assets");

    Ok(BuildReport {
        index,
        plots,
        logos,
    })
}

fn find_plots(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let pattern = format!("{}/*.html", Pattern::escape(&dir.to_string_lossy()));
    let mut found = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(SiteError::io(dir))? {
        let path = entry.map_err(SiteError::io(dir))?.path();
        if path.is_file() {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn copy_all(files: &[PathBuf], dest: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let mut copied = Vec::with_capacity(files.len());
    for file in files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = dest.join(name);
        fs::copy(file, &target).map_err(SiteError::io(&target))?;
        debug!(from = %file.display(), to = %target.display(), "copied");
        copied.push(target);
    }
    Ok(copied)
}
