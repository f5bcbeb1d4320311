//! Report and inspection printing.

use cotejar::{render_json, render_report, Candidate, DivergenceReport, Quote};

use crate::error::CliResult;

/// Print the divergence report, human-readable or JSON.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub fn print_report(report: &DivergenceReport, json: bool) -> CliResult<()> {
    if json {
        println!("{}", render_json(report)?);
    } else {
        println!("{}", render_report(report));
    }
    Ok(())
}

/// Print the candidate corpus and the resolved quote (if any) for a
/// snapshot; this is the debugging view of the extraction heuristics.
pub fn print_inspection(candidates: &[Candidate], quote: Option<&Quote>) {
    println!("candidates ({}):", candidates.len());
    for candidate in candidates {
        println!("  [{:>2}] {}", candidate.len(), candidate.content());
    }
    match quote {
        Some(quote) => println!("resolved quote: {} -> {}", quote.raw, quote.value),
        None => println!("resolved quote: none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotejar::compare;

    #[test]
    fn test_print_report_json_mode_serializes() {
        let report = compare(1470.0, 1550.0, 0.5).unwrap();
        assert!(print_report(&report, true).is_ok());
        assert!(print_report(&report, false).is_ok());
    }
}
