//! Materialized text snapshot of a rendered page.
//!
//! A [`TextNode`] tree is the only thing the core ever sees of a page: the
//! browser-automation collaborator walks the live DOM, materializes the text
//! it finds, and hands the tree over. Nodes have no identity beyond their
//! text; tag names, attributes and layout never cross the boundary.

use serde::{Deserialize, Serialize};

/// A node in a materialized page snapshot.
///
/// `content` is the node's own text (may be empty for pure containers);
/// `children` are its child nodes in document order. The tree is immutable
/// once constructed and is serde-serializable so harnesses can store
/// snapshots as JSON fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    /// The node's own text content
    #[serde(default)]
    pub content: String,
    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<TextNode>,
}

impl TextNode {
    /// Create a leaf node with the given text
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// Create a container node with no text of its own
    #[must_use]
    pub fn container(children: Vec<Self>) -> Self {
        Self {
            content: String::new(),
            children,
        }
    }

    /// Attach children to this node (builder-style)
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Flattened subtree text: the node's own trimmed content followed by
    /// each child's flattened text, joined by single spaces. Mirrors what a
    /// DOM `.text()` call on the corresponding element would return.
    #[must_use]
    pub fn text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        let own = self.content.trim();
        if !own.is_empty() {
            parts.push(own.to_string());
        }
        for child in &self.children {
            let t = child.text();
            if !t.is_empty() {
                parts.push(t);
            }
        }
        parts.join(" ")
    }

    /// All nodes of the subtree in pre-order (self first, then children
    /// left to right). Pure recursion, no shared accumulator.
    #[must_use]
    pub fn preorder(&self) -> Vec<&Self> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.preorder());
        }
        nodes
    }

    /// Number of characters (not bytes) in the flattened subtree text
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.text().chars().count()
    }
}
