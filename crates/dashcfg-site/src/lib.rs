//! Static dashboard pages from dashcfg documents.
//!
//! [`Dashboard`] reads the documented keys out of a parsed root mapping,
//! the `render_*` functions turn it into HTML fragments, and
//! [`build_site`] fills a period's template and copies its assets.

mod build;
pub use build::{BuildReport, SiteLayout, build_site};

mod dashboard;
pub use dashboard::{Dashboard, Panel, SourceLink, Summary};

mod error;
pub use error::SiteError;

mod render;
pub use render::{
    DEFAULT_TITLE, fill_template, render_header, render_panels, render_summary, render_tip,
};
