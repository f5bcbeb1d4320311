//! Page driver abstraction.
//!
//! The core never navigates, clicks, or waits by itself; a driver supplied by
//! the harness does all of that and hands back materialized [`TextNode`]
//! snapshots. The trait is abstract so implementations can be swapped: a real
//! browser-automation driver in the harness, [`FixtureDriver`] in tests and
//! in the CLI's snapshot mode.

use std::time::Duration;

use crate::node::TextNode;
use crate::result::{CotejarError, CotejarResult};

/// Default settle wait after initial navigation
pub const DEFAULT_RENDER_SETTLE_MS: u64 = 4000;

/// Default settle wait after a view change
pub const DEFAULT_VIEW_SETTLE_MS: u64 = 3000;

/// Options honored by page drivers.
///
/// The settle durations are a fixed-duration wait contract, not adaptive
/// polling: after navigating or switching views the driver sleeps for the
/// configured span before sampling the page, and the core never blocks on
/// its own. Snapshot-backed drivers are free to ignore them.
#[derive(Debug, Clone)]
pub struct DriverOptions {
    /// Wait after initial navigation before sampling
    pub render_settle: Duration,
    /// Wait after a view change before sampling
    pub view_settle: Duration,
    /// Swallow uncaught exceptions raised by the hosted page. Page errors are
    /// non-fatal to the validation run; suppression happens here at the
    /// collaborator boundary, never inside the core.
    pub swallow_page_errors: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            render_settle: Duration::from_millis(DEFAULT_RENDER_SETTLE_MS),
            view_settle: Duration::from_millis(DEFAULT_VIEW_SETTLE_MS),
            swallow_page_errors: true,
        }
    }
}

impl DriverOptions {
    /// Create options with the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the post-navigation settle wait
    #[must_use]
    pub const fn with_render_settle(mut self, settle: Duration) -> Self {
        self.render_settle = settle;
        self
    }

    /// Set the post-view-change settle wait
    #[must_use]
    pub const fn with_view_settle(mut self, settle: Duration) -> Self {
        self.view_settle = settle;
        self
    }

    /// Set whether hosted-page exceptions are suppressed
    #[must_use]
    pub const fn with_swallow_page_errors(mut self, swallow: bool) -> Self {
        self.swallow_page_errors = swallow;
        self
    }
}

/// The browser-automation collaborator.
///
/// Both operations block until the page is stable (per [`DriverOptions`])
/// and return a fresh snapshot. Implementations take their options at
/// construction; the trait deliberately has no options parameter because the
/// core never decides how long a page needs to settle. The pipeline is
/// strictly sequential, so the trait is synchronous; async drivers live
/// behind their own runtime in the harness.
pub trait PageDriver {
    /// Navigate to `url`, wait for the page to settle, snapshot it.
    ///
    /// # Errors
    ///
    /// Returns [`CotejarError::Render`] when navigation or rendering fails.
    fn render_page(&mut self, url: &str) -> CotejarResult<TextNode>;

    /// Trigger the view switch labeled `label` (a click-equivalent action),
    /// wait for the new view to settle, snapshot it.
    ///
    /// # Errors
    ///
    /// Returns [`CotejarError::Render`] when the switch cannot be performed.
    fn trigger_view_change(&mut self, label: &str) -> CotejarResult<TextNode>;
}

/// A driver backed by pre-materialized snapshots.
///
/// Serves the initial snapshot for any URL and a per-view snapshot for view
/// changes. View labels match case-insensitively by containment, mirroring
/// how a real driver would click the first control whose text matches.
///
/// Snapshots are already stable, so the settle waits in its
/// [`DriverOptions`] are never slept on; the options are carried anyway so a
/// harness can build one driver configuration and hand it to either a live
/// or a fixture driver.
#[derive(Debug, Clone)]
pub struct FixtureDriver {
    initial: TextNode,
    views: Vec<(String, TextNode)>,
    options: DriverOptions,
}

impl FixtureDriver {
    /// Create a driver serving `initial` as the default view
    #[must_use]
    pub fn new(initial: TextNode) -> Self {
        Self {
            initial,
            views: Vec::new(),
            options: DriverOptions::default(),
        }
    }

    /// Register the snapshot served after switching to `label`'s view
    #[must_use]
    pub fn with_view(mut self, label: impl Into<String>, snapshot: TextNode) -> Self {
        self.views.push((label.into().to_lowercase(), snapshot));
        self
    }

    /// Set the driver options (settle waits are not slept on; snapshots are
    /// already stable)
    #[must_use]
    pub fn with_options(mut self, options: DriverOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this driver was configured with
    #[must_use]
    pub const fn options(&self) -> &DriverOptions {
        &self.options
    }
}

impl PageDriver for FixtureDriver {
    fn render_page(&mut self, url: &str) -> CotejarResult<TextNode> {
        tracing::debug!(url, "serving initial fixture snapshot");
        Ok(self.initial.clone())
    }

    fn trigger_view_change(&mut self, label: &str) -> CotejarResult<TextNode> {
        let needle = label.to_lowercase();
        self.views
            .iter()
            .find(|(view, _)| view.contains(&needle))
            .map(|(_, snapshot)| snapshot.clone())
            .ok_or_else(|| CotejarError::Render {
                message: format!("no fixture view matching {label:?}"),
            })
    }
}
