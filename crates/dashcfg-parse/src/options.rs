//! Parser strictness options.

/// How tab characters in a line's leading whitespace are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPolicy {
    /// Tabs are ordinary content: they never count as indentation, so a
    /// tab-indented line is measured by its leading spaces only.
    #[default]
    Content,
    /// A tab in the leading whitespace of a structural line is an error.
    Reject,
}

/// Options for parsing.
///
/// The defaults reproduce the lenient behavior existing dashboard files
/// rely on; every strict switch is opt-in.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Raise on over-indented lines instead of ending the block there
    /// (default: false)
    pub strict_indentation: bool,

    /// Raise on mapping lines without a `:` instead of skipping them
    /// (default: false)
    pub strict_keys: bool,

    /// Tab handling in indentation (default: `TabPolicy::Content`)
    pub tabs: TabPolicy,

    /// Maximum number of nested blocks below the root (default: 64)
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_indentation: false,
            strict_keys: false,
            tabs: TabPolicy::Content,
            max_depth: 64,
        }
    }
}

impl ParseOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every strict switch turned on.
    pub fn strict() -> Self {
        Self {
            strict_indentation: true,
            strict_keys: true,
            tabs: TabPolicy::Reject,
            ..Self::default()
        }
    }

    /// Raise `UnexpectedIndent` on over-indented lines.
    pub fn strict_indentation(mut self, strict: bool) -> Self {
        self.strict_indentation = strict;
        self
    }

    /// Raise `MissingColon` on mapping lines without a `:`.
    pub fn strict_keys(mut self, strict: bool) -> Self {
        self.strict_keys = strict;
        self
    }

    /// Set the tab policy.
    pub fn tabs(mut self, tabs: TabPolicy) -> Self {
        self.tabs = tabs;
        self
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
