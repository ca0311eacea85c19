//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of the AST
//! suitable for serialization to any output format (JSON, tag, etc.)
//!
//! The snapshot captures the tree structure with node types, labels and children,
//! allowing each serializer to focus solely on presentation without reimplementing
//! AST traversal logic. It is built purely through [AstNode] reflection, so any node
//! (a whole recipe, a single step, a bare quantity) can be snapshotted.

use super::traits::AstNode;
use serde::{Deserialize, Serialize};

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Recipe", "Step", "Ingredient")
    pub node_type: String,

    /// The display label of the node
    pub label: String,

    /// Child nodes in the tree
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    /// Create a new snapshot with the given node type and label
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            children: Vec::new(),
        }
    }

    /// Add a child snapshot
    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Total number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstSnapshot::node_count).sum::<usize>()
    }
}

/// Create a snapshot of a node and all its descendants
pub fn snapshot_node(node: &dyn AstNode) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(node.node_type().to_string(), node.display_label());
    for child in node.children() {
        snapshot.children.push(snapshot_node(child));
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cook::ast::{Direction, Recipe, Step};
    use crate::cook::quantity::Quantity;

    #[test]
    fn test_snapshot_recipe() {
        let recipe = Recipe::new()
            .with_step(Step::new().with(Direction::new("Mix")))
            .with_metadata("servings", "2");
        let snapshot = snapshot_node(&recipe);

        assert_eq!(snapshot.node_type, "Recipe");
        assert_eq!(snapshot.label, "recipe");
        assert_eq!(snapshot.children.len(), 2);
        assert_eq!(snapshot.children[0].node_type, "Step");
        assert_eq!(snapshot.children[0].children[0].label, "Mix");
        assert_eq!(snapshot.children[1].label, "servings => 2");
        assert_eq!(snapshot.node_count(), 4);
    }

    #[test]
    fn test_snapshot_leaf() {
        let snapshot = snapshot_node(&Quantity::fraction(1, 3));
        assert_eq!(
            snapshot,
            AstSnapshot::new("Quantity".to_string(), "1/3".to_string())
        );
    }

    #[test]
    fn test_snapshot_builder() {
        let snapshot = AstSnapshot::new("Step".to_string(), "step".to_string())
            .with_child(AstSnapshot::new("Direction".to_string(), "Mix".to_string()));
        assert_eq!(snapshot.node_count(), 2);
    }
}
