//! Validation configuration.

use serde::Deserialize;

/// Default candidate length ceiling (exclusive, in chars)
pub const DEFAULT_MAX_CANDIDATE_LEN: usize = 15;

/// Default number of ancestor hops when widening the labeled container
pub const DEFAULT_CONTAINER_WIDEN_HOPS: usize = 2;

/// Default ceiling on the label-bearing container's total text length
pub const DEFAULT_MAX_LABEL_SCOPE_LEN: usize = 100;

/// Default relative divergence tolerance (50%)
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Tuning knobs for one validation run.
///
/// All of these are heuristics, not structural guarantees; they are exposed
/// mainly so a harness can tighten or loosen the extraction on pages with
/// unusual markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// A text fragment is a price candidate only when its length is strictly
    /// below this bound (and above zero). Filters prose out of the corpus.
    pub max_candidate_len: usize,
    /// How many ancestor levels to widen from the label-bearing node when
    /// harvesting candidates, so sibling price text is captured.
    pub container_widen_hops: usize,
    /// A container qualifies as the label scope only when its total text is
    /// shorter than this, so a page body that merely mentions the label in
    /// passing is never selected.
    pub max_label_scope_len: usize,
    /// Maximum accepted relative divergence between the two quotes
    pub tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_candidate_len: DEFAULT_MAX_CANDIDATE_LEN,
            container_widen_hops: DEFAULT_CONTAINER_WIDEN_HOPS,
            max_label_scope_len: DEFAULT_MAX_LABEL_SCOPE_LEN,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration with the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate length ceiling
    #[must_use]
    pub const fn with_max_candidate_len(mut self, len: usize) -> Self {
        self.max_candidate_len = len;
        self
    }

    /// Set the ancestor widening hop count
    #[must_use]
    pub const fn with_container_widen_hops(mut self, hops: usize) -> Self {
        self.container_widen_hops = hops;
        self
    }

    /// Set the label scope text-length ceiling
    #[must_use]
    pub const fn with_max_label_scope_len(mut self, len: usize) -> Self {
        self.max_label_scope_len = len;
        self
    }

    /// Set the divergence tolerance
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
