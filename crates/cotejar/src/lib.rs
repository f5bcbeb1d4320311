//! Cotejar: heuristic price extraction and divergence validation.
//!
//! Validates that two related, independently-rendered currency quotes on a
//! third-party web page do not diverge beyond a configured tolerance. Given a
//! materialized text snapshot of a rendered page, the library
//!
//! 1. locates a labeled quote inside noisy, unstructured markup
//!    ([`locator`]),
//! 2. parses the locale-formatted price string into a number ([`extract`]),
//! 3. compares two such values and reports pass/fail with a human-readable
//!    diagnostic ([`compare`], [`reporter`]).
//!
//! Page navigation, rendering, and interaction belong to a collaborator
//! behind the [`driver::PageDriver`] trait; the core itself never blocks,
//! retries, or touches a browser.
//!
//! # Example
//!
//! ```
//! use cotejar::{run_validation, FixtureDriver, TextNode, ValidationConfig};
//!
//! let padding = "Cotizaciones del mercado paralelo de divisas, \
//!                actualizadas cada día hábil por la mañana, fuente dolarito";
//! let dolar = TextNode::container(vec![
//!     TextNode::new(padding),
//!     TextNode::container(vec![
//!         TextNode::new("Dólar blue"),
//!         TextNode::new("$1.470"),
//!     ]),
//! ]);
//! let euro = TextNode::container(vec![
//!     TextNode::new(padding),
//!     TextNode::container(vec![
//!         TextNode::new("Euro blue"),
//!         TextNode::new("$1.550"),
//!     ]),
//! ]);
//!
//! let mut driver = FixtureDriver::new(dolar).with_view("Euro", euro);
//! let report = run_validation(
//!     &mut driver,
//!     "https://example.test",
//!     "blue",
//!     "euro",
//!     &ValidationConfig::default(),
//! )
//! .expect("quotes within tolerance");
//! assert!(report.within_tolerance);
//! ```
//!
//! Extraction is best-effort heuristic matching over human-readable text,
//! not a structured data API client; the documented limitations (first
//! qualifying container wins, fixed ancestor widening, fixed comma-decimal
//! locale) are part of the contract.

#![warn(missing_docs)]

pub mod compare;
pub mod config;
pub mod driver;
pub mod extract;
pub mod locator;
pub mod node;
pub mod pipeline;
pub mod reporter;
pub mod result;

pub use compare::{compare, enforce, DivergenceReport};
pub use config::ValidationConfig;
pub use driver::{DriverOptions, FixtureDriver, PageDriver};
pub use extract::{extract_price_token, is_price_token, normalize, resolve_quote, Quote};
pub use locator::{locate, Candidate};
pub use node::TextNode;
pub use pipeline::{run_validation, sample_quote};
pub use reporter::{render_json, render_report};
pub use result::{CotejarError, CotejarResult};
