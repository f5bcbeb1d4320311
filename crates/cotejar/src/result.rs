//! Result and error types for Cotejar.

use thiserror::Error;

use crate::compare::DivergenceReport;

/// Result type for Cotejar operations
pub type CotejarResult<T> = Result<T, CotejarError>;

/// Errors that can occur while validating a pair of quotes.
///
/// Every variant is terminal for the run: the pipeline never retries
/// internally, the harness decides whether to start a fresh run.
#[derive(Debug, Error)]
pub enum CotejarError {
    /// No element containing the quote label was found in the snapshot
    #[error("no element containing label {label:?} found in snapshot")]
    LabelNotFound {
        /// The label that was searched for
        label: String,
    },

    /// No candidate matched a price shape, or the matched token did not
    /// normalize to a number. Carries the full candidate corpus so the
    /// failing container can be inspected without re-running.
    #[error("no usable price token in candidate corpus: {candidates:?}")]
    PriceNotExtractable {
        /// The raw candidate corpus that was searched
        candidates: Vec<String>,
    },

    /// Relative divergence is undefined when the first quote is zero
    #[error("relative divergence is undefined: first quote is zero")]
    DivisionByZero,

    /// The quotes diverged beyond the configured tolerance. This is the
    /// expected "validation failed" outcome and carries the full diagnostic.
    #[error("quotes diverge beyond tolerance: {report}")]
    ToleranceExceeded {
        /// The full divergence diagnostic
        report: DivergenceReport,
    },

    /// The page driver failed to produce a snapshot
    #[error("page render failed: {message}")]
    Render {
        /// Error message reported by the driver
        message: String,
    },

    /// I/O error (snapshot fixture loading)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (snapshot fixture parsing, report serialization)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
