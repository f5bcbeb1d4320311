//! Divergence computation and tolerance gating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::result::{CotejarError, CotejarResult};

/// The outcome of comparing two quotes.
///
/// `relative_diff` is `|a - b| / a`: deliberately asymmetric, the denominator
/// is always the first operand. Do not symmetrize it; recorded thresholds
/// depend on this orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergenceReport {
    /// First quote (the divergence baseline)
    pub a: f64,
    /// Second quote
    pub b: f64,
    /// `|a - b|`
    pub absolute_diff: f64,
    /// `|a - b| / a`
    pub relative_diff: f64,
    /// Whether `relative_diff <= tolerance` held
    pub within_tolerance: bool,
}

impl fmt::Display for DivergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={:.2} b={:.2} absolute={:.2} relative={:.2}%",
            self.a,
            self.b,
            self.absolute_diff,
            self.relative_diff * 100.0
        )
    }
}

/// Compare two quotes against a relative tolerance.
///
/// # Errors
///
/// Returns [`CotejarError::DivisionByZero`] when `a` is zero: the relative
/// divergence would be meaningless and must never silently become
/// `Infinity`/`NaN`.
pub fn compare(a: f64, b: f64, tolerance: f64) -> CotejarResult<DivergenceReport> {
    if a == 0.0 {
        return Err(CotejarError::DivisionByZero);
    }
    let absolute_diff = (a - b).abs();
    let relative_diff = absolute_diff / a;
    Ok(DivergenceReport {
        a,
        b,
        absolute_diff,
        relative_diff,
        within_tolerance: relative_diff <= tolerance,
    })
}

/// Assertion-style gate: pass the report through when within tolerance, fail
/// the run otherwise.
///
/// # Errors
///
/// Returns [`CotejarError::ToleranceExceeded`] carrying the full diagnostic
/// when the divergence is out of tolerance.
pub fn enforce(report: DivergenceReport) -> CotejarResult<DivergenceReport> {
    if report.within_tolerance {
        Ok(report)
    } else {
        Err(CotejarError::ToleranceExceeded { report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod compare_tests {
        use super::*;

        #[test]
        fn test_relative_diff_is_asymmetric() {
            let forward = compare(100.0, 200.0, 0.5).unwrap();
            assert!((forward.relative_diff - 1.0).abs() < f64::EPSILON);

            let backward = compare(200.0, 100.0, 0.5).unwrap();
            assert!((backward.relative_diff - 0.5).abs() < f64::EPSILON);
        }

        #[test]
        fn test_tolerance_boundary_is_inclusive() {
            let at = compare(1000.0, 1500.0, 0.5).unwrap();
            assert!(at.within_tolerance);

            let over = compare(1000.0, 1501.0, 0.5).unwrap();
            assert!(!over.within_tolerance);
        }

        #[test]
        fn test_identical_quotes_have_zero_divergence() {
            let report = compare(1470.0, 1470.0, 0.5).unwrap();
            assert!(report.within_tolerance);
            assert!(report.absolute_diff.abs() < f64::EPSILON);
            assert!(report.relative_diff.abs() < f64::EPSILON);
        }

        #[test]
        fn test_zero_first_operand_is_an_error() {
            let err = compare(0.0, 100.0, 0.5).unwrap_err();
            assert!(matches!(err, CotejarError::DivisionByZero));
        }

        #[test]
        fn test_zero_second_operand_is_fine() {
            let report = compare(100.0, 0.0, 0.5).unwrap();
            assert!((report.relative_diff - 1.0).abs() < f64::EPSILON);
            assert!(!report.within_tolerance);
        }
    }

    mod enforce_tests {
        use super::*;

        #[test]
        fn test_enforce_passes_through_within_tolerance() {
            let report = compare(1470.0, 1550.0, 0.5).unwrap();
            let passed = enforce(report).unwrap();
            assert!((passed.relative_diff - 80.0 / 1470.0).abs() < 1e-12);
        }

        #[test]
        fn test_enforce_fails_with_full_diagnostic() {
            let report = compare(1000.0, 2000.0, 0.5).unwrap();
            let err = enforce(report).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("a=1000.00"));
            assert!(msg.contains("b=2000.00"));
            assert!(msg.contains("absolute=1000.00"));
            assert!(msg.contains("relative=100.00%"));
        }
    }

    mod display_tests {
        use super::*;

        #[test]
        fn test_display_two_decimal_percentage() {
            let report = compare(1470.0, 1550.0, 0.5).unwrap();
            let rendered = report.to_string();
            assert!(rendered.contains("relative=5.44%"));
        }
    }
}
