use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Root of a hierarchical pie payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SliceTree {
    #[serde(default)]
    pub children: Vec<SliceNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub size: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SliceNode>,
}

impl SliceNode {
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            name: None,
            size,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<SliceNode>) -> Self {
        self.children = children;
        self
    }
}

impl SliceTree {
    #[must_use]
    pub fn new(children: Vec<SliceNode>) -> Self {
        Self { children }
    }

    /// Returns a copy of the tree without zero-sized nodes at any depth.
    ///
    /// A removed node takes its whole subtree with it. Sibling order is kept.
    #[must_use]
    pub fn remove_zero_slices(&self) -> SliceTree {
        SliceTree {
            children: non_zero_children(&self.children),
        }
    }

    /// Unique slice names in depth-first order of first appearance.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names = IndexSet::new();
        collect_names(&self.children, &mut names);
        names.into_iter().collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        count_nodes(&self.children)
    }
}

fn non_zero_children(children: &[SliceNode]) -> Vec<SliceNode> {
    children
        .iter()
        .filter(|child| child.size != 0.0)
        .map(|child| SliceNode {
            name: child.name.clone(),
            size: child.size,
            children: non_zero_children(&child.children),
        })
        .collect()
}

fn collect_names(children: &[SliceNode], names: &mut IndexSet<String>) {
    for child in children {
        if let Some(name) = &child.name {
            names.insert(name.clone());
        }
        collect_names(&child.children, names);
    }
}

fn count_nodes(children: &[SliceNode]) -> usize {
    children
        .iter()
        .map(|child| 1 + count_nodes(&child.children))
        .sum()
}
