//! Site builder errors.

use std::path::PathBuf;

use dashcfg_parse::ParseError;

/// An error raised while building a dashboard site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Reading, writing or copying a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dashboard document did not parse.
    #[error("{}: {error}", path.display())]
    Parse {
        path: PathBuf,
        /// Source text, kept for diagnostic rendering.
        text: String,
        #[source]
        error: ParseError,
    },

    #[error("invalid plot pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("plot discovery failed: {0}")]
    Glob(#[from] glob::GlobError),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    /// Render this error for a terminal. Parse errors include source context.
    pub fn render(&self) -> String {
        match self {
            Self::Parse { path, text, error } => error.render(&path.display().to_string(), text),
            other => other.to_string(),
        }
    }
}
