//! Human-readable and machine-readable report rendering.

use crate::compare::DivergenceReport;
use crate::result::CotejarResult;

/// Render the acceptance diagnostic a human reviews: both quotes, the
/// absolute difference, the relative difference as a two-decimal percentage,
/// and the verdict.
#[must_use]
pub fn render_report(report: &DivergenceReport) -> String {
    let verdict = if report.within_tolerance {
        "within tolerance"
    } else {
        "tolerance exceeded"
    };
    format!(
        "first quote:         {:.2}\n\
         second quote:        {:.2}\n\
         absolute difference: {:.2}\n\
         relative difference: {:.2}%\n\
         verdict:             {verdict}",
        report.a,
        report.b,
        report.absolute_diff,
        report.relative_diff * 100.0
    )
}

/// Serialize the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::CotejarError::Json`] on serialization failure.
pub fn render_json(report: &DivergenceReport) -> CotejarResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
