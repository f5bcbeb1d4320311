//! Price token extraction and locale normalization.
//!
//! Recognizes two token shapes inside the candidate corpus:
//!
//! - grouped-thousands currency: `$ 1.470`, `$1.470`, `1.470`, `12,345`
//! - a bare 3-4 digit run: `1470`
//!
//! and normalizes comma-decimal locale text (`.` thousands, `,` decimal) into
//! an `f64`. The locale is deliberately fixed: a dot-decimal token such as
//! `"1470.50"` is misparsed as `147050`. That is a documented constraint,
//! not something to fix generically.

use std::sync::OnceLock;

use regex::Regex;

use crate::locator::Candidate;
use crate::result::{CotejarError, CotejarResult};

/// A resolved quote: the raw token as displayed plus its numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// The token as it appeared on the page
    pub raw: String,
    /// The normalized numeric value
    pub value: f64,
}

fn grouped_currency_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\$?\s*\d{1,2}[.,]\d{3}").expect("fixed pattern"))
}

fn bare_digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{3,4}$").expect("fixed pattern"))
}

/// Whether a text fragment has one of the recognized price shapes
#[must_use]
pub fn is_price_token(text: &str) -> bool {
    grouped_currency_re().is_match(text) || bare_digits_re().is_match(text)
}

/// First candidate matching a price shape, in input order.
///
/// No attempt is made to disambiguate multiple matches; first wins.
#[must_use]
pub fn extract_price_token(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().find(|c| is_price_token(c.content()))
}

/// Normalize a comma-decimal locale price token into a number.
///
/// The step ordering is load-bearing:
///
/// 1. strip every char that is not a digit, `.` or `,`
/// 2. remove all `.` (unconditionally thousands separators)
/// 3. replace the first remaining `,` with `.` (the decimal separator)
/// 4. parse as `f64`
///
/// `"1.470,50"` → `1470.5`; `"1470"` passes through unchanged. Returns `None`
/// when the residue does not parse to a finite number.
#[must_use]
pub fn normalize(token: &str) -> Option<f64> {
    let stripped: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let no_thousands = stripped.replace('.', "");
    let decimal = no_thousands.replacen(',', ".", 1);
    decimal.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Resolve the corpus to a [`Quote`]: extract the first price token and
/// normalize it.
///
/// # Errors
///
/// Returns [`CotejarError::PriceNotExtractable`] carrying the whole raw
/// corpus when no token matches or the token does not normalize; the corpus
/// is the diagnostic a human inspects instead of re-running the scrape.
pub fn resolve_quote(candidates: &[Candidate]) -> CotejarResult<Quote> {
    let token = extract_price_token(candidates).ok_or_else(|| corpus_error(candidates))?;
    let value = normalize(token.content()).ok_or_else(|| corpus_error(candidates))?;
    tracing::debug!(raw = token.content(), value, "price token resolved");
    Ok(Quote {
        raw: token.content().to_string(),
        value,
    })
}

fn corpus_error(candidates: &[Candidate]) -> CotejarError {
    CotejarError::PriceNotExtractable {
        candidates: candidates
            .iter()
            .map(|c| c.content().to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn corpus(texts: &[&str]) -> Vec<Candidate> {
        texts.iter().copied().map(Candidate::new).collect()
    }

    mod shape_tests {
        use super::*;

        #[test]
        fn test_grouped_currency_shapes() {
            assert!(is_price_token("$1.470"));
            assert!(is_price_token("$ 1.470"));
            assert!(is_price_token("1.470"));
            assert!(is_price_token("12,345"));
            assert!(is_price_token("$1.470,50"));
        }

        #[test]
        fn test_bare_digit_runs() {
            assert!(is_price_token("147"));
            assert!(is_price_token("1470"));
            assert!(!is_price_token("14705"));
            assert!(!is_price_token("14"));
        }

        #[test]
        fn test_prose_is_not_a_price() {
            assert!(!is_price_token("Dólar blue"));
            assert!(!is_price_token("Variación 0.5%"));
            assert!(!is_price_token(""));
        }

        #[test]
        fn test_first_match_wins() {
            let candidates = corpus(&["Dólar blue", "$1.470", "$1.550"]);
            let token = extract_price_token(&candidates).unwrap();
            assert_eq!(token.content(), "$1.470");
        }

        #[test]
        fn test_no_match_is_none() {
            let candidates = corpus(&["Dólar blue", "hoy"]);
            assert!(extract_price_token(&candidates).is_none());
        }
    }

    mod normalize_tests {
        use super::*;

        #[test]
        fn test_grouped_thousands() {
            assert_eq!(normalize("1.470"), Some(1470.0));
            assert_eq!(normalize("$1.470"), Some(1470.0));
        }

        #[test]
        fn test_thousands_and_decimal() {
            assert_eq!(normalize("1.470,50"), Some(1470.5));
        }

        #[test]
        fn test_bare_number_passes_through() {
            assert_eq!(normalize("1470"), Some(1470.0));
        }

        #[test]
        fn test_currency_symbol_and_spaces_stripped() {
            assert_eq!(normalize("$ 1.470"), Some(1470.0));
        }

        #[test]
        fn test_dot_decimal_locale_misparses() {
            // Fixed comma-decimal locale: this is the documented constraint.
            assert_eq!(normalize("1470.50"), Some(147050.0));
        }

        #[test]
        fn test_second_comma_does_not_parse() {
            // Only the first comma becomes a decimal point; the residue is
            // not a number.
            assert_eq!(normalize("1,2,3"), None);
        }

        #[test]
        fn test_no_digits_does_not_parse() {
            assert_eq!(normalize("$$"), None);
            assert_eq!(normalize(""), None);
        }
    }

    mod resolve_tests {
        use super::*;

        #[test]
        fn test_resolve_quote_from_widget_corpus() {
            let candidates = corpus(&["Dólar blue", "$1.470", "Variación 0.5%"]);
            let quote = resolve_quote(&candidates).unwrap();
            assert_eq!(quote.raw, "$1.470");
            assert!((quote.value - 1470.0).abs() < f64::EPSILON);
        }

        #[test]
        fn test_resolve_failure_carries_corpus() {
            let candidates = corpus(&["Dólar blue", "sin datos"]);
            let err = resolve_quote(&candidates).unwrap_err();
            match err {
                CotejarError::PriceNotExtractable { candidates } => {
                    assert_eq!(candidates, vec!["Dólar blue", "sin datos"]);
                }
                other => panic!("expected PriceNotExtractable, got {other:?}"),
            }
        }

        #[test]
        fn test_resolve_empty_corpus_fails() {
            assert!(resolve_quote(&[]).is_err());
        }
    }

    mod property_tests {
        use super::*;

        proptest! {
            /// Any grouped-thousands token normalizes to the expected value.
            #[test]
            fn grouped_tokens_normalize_exactly(head in 1u32..=99, tail in 0u32..=999) {
                let token = format!("{head}.{tail:03}");
                let expected = f64::from(head * 1000 + tail);
                prop_assert_eq!(normalize(&token), Some(expected));
            }

            /// Normalization is deterministic over arbitrary input.
            #[test]
            fn normalize_is_deterministic(token in ".{0,24}") {
                prop_assert_eq!(normalize(&token), normalize(&token));
            }

            /// Already-normalized integer text is a fixed point.
            #[test]
            fn plain_integers_pass_through(n in 0u32..=999) {
                let token = n.to_string();
                prop_assert_eq!(normalize(&token), Some(f64::from(n)));
            }
        }
    }
}
