//! Label-scoped candidate location.
//!
//! Finds the quote widget for a label inside noisy, unstructured markup and
//! harvests a bounded-size candidate corpus from it. Everything here is
//! best-effort heuristic text matching with documented limitations that are
//! part of the contract:
//!
//! - The label scope is the *first* qualifying container in document order,
//!   not necessarily the best one. Wrong-container selection on pathological
//!   pages is a documented limitation, not a bug.
//! - Widening climbs a fixed number of ancestor hops from the labeled node
//!   (default 2); it is not a structural guarantee that the price text lands
//!   inside the widened subtree.

use crate::config::ValidationConfig;
use crate::node::TextNode;
use crate::result::{CotejarError, CotejarResult};

/// A length-bounded text fragment considered as a possible price token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    content: String,
}

impl Candidate {
    /// Create a candidate from already-trimmed text
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The candidate's text
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters (not bytes)
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Whether the candidate is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Locate the quote widget for `label` and harvest its candidate corpus.
///
/// Scans the snapshot in document order for the first node whose lowercased
/// subtree text contains the lowercased label and whose total text length is
/// below `max_label_scope_len`, widens `container_widen_hops` ancestor levels
/// (saturating at the root), then collects every descendant's trimmed subtree
/// text satisfying `0 < len < max_candidate_len`, in traversal order.
///
/// # Errors
///
/// Returns [`CotejarError::LabelNotFound`] when no node qualifies; this is
/// fatal for the run.
pub fn locate(
    root: &TextNode,
    label: &str,
    config: &ValidationConfig,
) -> CotejarResult<Vec<Candidate>> {
    let needle = label.to_lowercase();
    let path = find_label_scope(root, &needle, config.max_label_scope_len).ok_or_else(|| {
        CotejarError::LabelNotFound {
            label: label.to_string(),
        }
    })?;

    // Widen from the matched node towards the root by a fixed hop count.
    let widened = path[path.len().saturating_sub(1 + config.container_widen_hops)];
    tracing::debug!(
        label,
        scope_len = path.last().map_or(0, |n| n.text_len()),
        depth = path.len() - 1,
        hops = config.container_widen_hops,
        "label scope located"
    );

    let candidates = harvest(widened, config.max_candidate_len);
    tracing::debug!(label, count = candidates.len(), "candidate corpus harvested");
    Ok(candidates)
}

/// Pre-order search for the first qualifying label scope. Returns the path
/// from `node` down to the match (inclusive) so the caller can widen.
fn find_label_scope<'a>(
    node: &'a TextNode,
    needle: &str,
    max_scope_len: usize,
) -> Option<Vec<&'a TextNode>> {
    let text = node.text();
    if text.chars().count() < max_scope_len && text.to_lowercase().contains(needle) {
        return Some(vec![node]);
    }
    for child in &node.children {
        if let Some(mut path) = find_label_scope(child, needle, max_scope_len) {
            path.insert(0, node);
            return Some(path);
        }
    }
    None
}

/// Collect the trimmed subtree text of every descendant of `container`
/// (excluding the container itself) that satisfies the candidate length
/// bound. Nested single-child chains can produce duplicate candidates; that
/// is acceptable because extraction is first-match-wins.
fn harvest(container: &TextNode, max_candidate_len: usize) -> Vec<Candidate> {
    container
        .preorder()
        .into_iter()
        .skip(1)
        .filter_map(|node| {
            let text = node.text();
            let trimmed = text.trim();
            let len = trimmed.chars().count();
            (len > 0 && len < max_candidate_len).then(|| Candidate::new(trimmed))
        })
        .collect()
}
