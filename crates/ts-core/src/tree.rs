//! Merging task entries into a hierarchical category tree.

use chrono::TimeDelta;

use crate::builder::TaskEntry;
use crate::options::Options;

/// One node in the category tree.
///
/// Nodes are keyed by the lower-cased label; the displayed label keeps
/// the casing of the first occurrence. Children stay in first-seen order.
#[derive(Debug, Clone)]
pub struct CategoryNode {
    label: String,
    key: String,
    direct: TimeDelta,
    children: Vec<CategoryNode>,
}

impl CategoryNode {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            key: label.to_lowercase(),
            direct: TimeDelta::zero(),
            children: Vec::new(),
        }
    }

    /// The display label (casing of the first occurrence).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time attributed to entries whose path terminates exactly here.
    pub const fn direct(&self) -> TimeDelta {
        self.direct
    }

    /// Child categories in first-seen order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Direct time plus all descendants' totals.
    ///
    /// Computed on demand rather than stored, so repeated merges can
    /// never double-count.
    pub fn total(&self) -> TimeDelta {
        self.children
            .iter()
            .fold(self.direct, |acc, child| acc + child.total())
    }

    fn child_mut(&mut self, label: &str) -> &mut Self {
        let key = label.to_lowercase();
        let idx = self
            .children
            .iter()
            .position(|child| child.key == key)
            .unwrap_or_else(|| {
                self.children.push(Self::new(label));
                self.children.len() - 1
            });
        &mut self.children[idx]
    }
}

/// The aggregated tree plus the grand total over non-blacklisted entries.
#[derive(Debug, Clone)]
pub struct CategoryTree {
    root: CategoryNode,
    grand_total: TimeDelta,
}

impl Default for CategoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryTree {
    pub fn new() -> Self {
        Self {
            root: CategoryNode::new(""),
            grand_total: TimeDelta::zero(),
        }
    }

    /// Folds one entry into the tree.
    ///
    /// Entries with a blacklisted root label are dropped entirely: no
    /// nodes are created and nothing counts toward the grand total. The
    /// entry's duration lands in the leaf node's direct bucket only.
    pub fn insert(&mut self, entry: &TaskEntry, options: &Options) {
        let Some(root_label) = entry.path.first() else {
            return;
        };
        if options.is_blacklisted(root_label) {
            tracing::debug!(label = %root_label, "blacklisted root skipped");
            return;
        }

        let duration = entry.duration();
        let mut node = &mut self.root;
        for label in &entry.path {
            node = node.child_mut(label);
        }
        node.direct = node.direct + duration;
        self.grand_total = self.grand_total + duration;
    }

    /// Top-level categories in first-seen order.
    pub fn roots(&self) -> &[CategoryNode] {
        &self.root.children
    }

    /// Sum of all durations actually applied to the tree.
    pub const fn grand_total(&self) -> TimeDelta {
        self.grand_total
    }
}

/// Merges a sequence of entries into a tree.
pub fn merge(entries: &[TaskEntry], options: &Options) -> CategoryTree {
    let mut tree = CategoryTree::new();
    for entry in entries {
        tree.insert(entry, options);
    }
    tree
}
