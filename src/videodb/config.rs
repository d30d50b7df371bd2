//! Parser configuration

/// Entity count above which parallel parsing kicks in by default
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Configuration for assembling a [`Database`](crate::model::Database)
///
/// The parsed result never depends on these settings, only how the work
/// is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Parse movie and series subtrees on the rayon thread pool
    pub parallel: bool,

    /// Minimum number of entities of one kind before going parallel
    pub parallel_threshold: usize,
}

impl ParseConfig {
    /// Sequential parsing
    pub fn new() -> Self {
        Self {
            parallel: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Enable or disable parallel parsing
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the entity count needed before parallel parsing is used
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether `count` entities should be parsed in parallel
    pub(crate) fn use_parallel(&self, count: usize) -> bool {
        self.parallel && count >= self.parallel_threshold
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
