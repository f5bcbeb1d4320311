//! Error types for the CLI.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// The validation ran to completion and the quotes diverged beyond
    /// tolerance. The diagnostic has already been printed; this variant only
    /// drives the exit code.
    #[error("quotes diverge beyond tolerance")]
    ToleranceExceeded,

    /// Cotejar library error
    #[error("Cotejar error: {0}")]
    Cotejar(#[from] cotejar::CotejarError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot fixture parse error
    #[error("snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_conversion() {
        let err = CliError::from(cotejar::CotejarError::DivisionByZero);
        assert!(matches!(err, CliError::Cotejar(_)));
        assert!(err.to_string().contains("relative divergence"));
    }
}
