//! The validation pipeline.
//!
//! One run is a strict linear sequence with no branching, retry, or backoff:
//!
//! ```text
//! render page -> locate -> extract quote A
//!   -> trigger view change -> locate -> extract quote B
//!   -> compare -> enforce tolerance
//! ```
//!
//! Every stage exclusively owns its input and produces a new immutable
//! output; any stage error aborts the run with that stage's error. A single
//! failed extraction fails the whole validation; the harness decides whether
//! to start over.

use crate::compare::{compare, enforce, DivergenceReport};
use crate::config::ValidationConfig;
use crate::driver::PageDriver;
use crate::extract::{resolve_quote, Quote};
use crate::locator::locate;
use crate::node::TextNode;
use crate::result::CotejarResult;

/// Locate the label scope in a snapshot and resolve its quote.
///
/// # Errors
///
/// Propagates [`crate::CotejarError::LabelNotFound`] and
/// [`crate::CotejarError::PriceNotExtractable`].
pub fn sample_quote(
    snapshot: &TextNode,
    label: &str,
    config: &ValidationConfig,
) -> CotejarResult<Quote> {
    let candidates = locate(snapshot, label, config)?;
    resolve_quote(&candidates)
}

/// Run one full validation: sample the quote labeled `quote_label` in the
/// default view, switch to the view labeled `view_label`, sample again, and
/// gate the divergence against the configured tolerance.
///
/// Returns the in-tolerance [`DivergenceReport`] on success.
///
/// # Errors
///
/// Any stage error aborts the run: driver failures surface as
/// [`crate::CotejarError::Render`], extraction failures as
/// [`crate::CotejarError::LabelNotFound`] /
/// [`crate::CotejarError::PriceNotExtractable`], and an out-of-tolerance
/// result as [`crate::CotejarError::ToleranceExceeded`] with the full
/// diagnostic.
pub fn run_validation<D: PageDriver>(
    driver: &mut D,
    url: &str,
    quote_label: &str,
    view_label: &str,
    config: &ValidationConfig,
) -> CotejarResult<DivergenceReport> {
    tracing::info!(url, "rendering default view");
    let before = driver.render_page(url)?;
    let first = sample_quote(&before, quote_label, config)?;
    tracing::info!(raw = %first.raw, value = first.value, "first quote resolved");

    tracing::info!(view = view_label, "triggering view change");
    let after = driver.trigger_view_change(view_label)?;
    let second = sample_quote(&after, quote_label, config)?;
    tracing::info!(raw = %second.raw, value = second.value, "second quote resolved");

    let report = compare(first.value, second.value, config.tolerance)?;
    tracing::info!(%report, within_tolerance = report.within_tolerance, "comparison complete");
    enforce(report)
}
