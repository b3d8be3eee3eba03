//! Traversal policies chosen by the caller.

/// Which import category the root package follows.
///
/// Only the root is affected; every deeper node follows its direct imports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    #[default]
    Direct,
    Test,
    ExternalTest,
}

impl ImportMode {
    /// Pick the mode from the `--test` / `--xtest` flags. Test imports win
    /// when both are set.
    pub fn from_flags(test: bool, xtest: bool) -> Self {
        if test {
            Self::Test
        } else if xtest {
            Self::ExternalTest
        } else {
            Self::Direct
        }
    }

    /// The mode that applies to a node at `depth`.
    pub fn at_depth(self, depth: usize) -> Self {
        if depth == 0 {
            self
        } else {
            Self::Direct
        }
    }
}

/// Options controlling a single traversal.
#[derive(Debug, Clone, Default)]
pub struct TraversalOptions {
    /// Render and descend into standard-library packages.
    pub include_std: bool,
    /// Import category followed at the root.
    pub mode: ImportMode,
    /// Deepest depth that may be rendered. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl TraversalOptions {
    /// Whether a node at `depth` may be visited.
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}
