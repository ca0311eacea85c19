//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST, designed for quick human scanning of a
//! recipe's structure. It features a one line per node format with the node structure encoded
//! by heavy box-drawing connectors:
//!
//! ```text
//! recipe
//! ┣╸step
//! ┃ ┗╸Mix
//! ┗╸step
//!   ┗╸Bake
//! ```
//!
//! The root has no connector. Every other node is prefixed with `┣╸`, or `┗╸` when it is the
//! last of its siblings, and its own children are indented with `┃ ` or two spaces
//! accordingly. Labels and children come from [AstNode] reflection only.
//!
//! Output is produced lazily by [tree_lines], one line per call to `next`, in depth-first
//! order. The walk is finite since the tree has no cycles. A [TreeLines] is consumed once;
//! call [tree_lines] again to print again.

use crate::cook::ast::{AstNode, Recipe};
use crate::cook::error::FormatError;
use std::iter::FusedIterator;

const BRANCH: &str = "┣╸";
const LAST_BRANCH: &str = "┗╸";
const CONTINUATION: &str = "┃ ";
const LAST_CONTINUATION: &str = "  ";

struct Frame<'a> {
    node: &'a dyn AstNode,
    /// Printed before the label
    lead: String,
    /// Prefix for this node's children
    indent: String,
}

/// Lazy depth-first line iterator over a node tree
pub struct TreeLines<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Iterator for TreeLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let Frame { node, lead, indent } = self.stack.pop()?;

        let children = node.children();
        let last = children.len().saturating_sub(1);
        // Pushed in reverse so the first child is popped first
        for (i, child) in children.into_iter().enumerate().rev() {
            let (branch, continuation) = if i == last {
                (LAST_BRANCH, LAST_CONTINUATION)
            } else {
                (BRANCH, CONTINUATION)
            };
            self.stack.push(Frame {
                node: child,
                lead: format!("{indent}{branch}"),
                indent: format!("{indent}{continuation}"),
            });
        }

        Some(format!("{lead}{}", node.display_label()))
    }
}

impl FusedIterator for TreeLines<'_> {}

/// Lines of the printed tree rooted at `node`
pub fn tree_lines(node: &dyn AstNode) -> TreeLines<'_> {
    TreeLines {
        stack: vec![Frame {
            node,
            lead: String::new(),
            indent: String::new(),
        }],
    }
}

/// The printed tree rooted at `node`, lines joined by `\n` with no trailing newline
pub fn print_tree(node: &dyn AstNode) -> String {
    tree_lines(node).collect::<Vec<_>>().join("\n")
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl crate::cook::formats::registry::Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, recipe: &Recipe) -> Result<String, FormatError> {
        Ok(print_tree(recipe))
    }

    fn description(&self) -> &str {
        "Box-drawing tree, one line per node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cook::ast::{Direction, Step};
    use crate::cook::quantity::Quantity;

    fn mix_and_bake() -> Recipe {
        Recipe::new()
            .with_step(Step::new().with(Direction::new("Mix")))
            .with_step(Step::new().with(Direction::new("Bake")))
    }

    #[test]
    fn test_two_steps() {
        assert_eq!(
            print_tree(&mix_and_bake()),
            "recipe\n┣╸step\n┃ ┗╸Mix\n┗╸step\n  ┗╸Bake"
        );
    }

    #[test]
    fn test_printing_twice_is_identical() {
        let recipe = mix_and_bake();
        assert_eq!(print_tree(&recipe), print_tree(&recipe));
    }

    #[test]
    fn test_leaf_root_has_no_prefix() {
        assert_eq!(print_tree(&Quantity::fraction(3, 4)), "3/4");
        assert_eq!(print_tree(&Recipe::new()), "recipe");
    }

    #[test]
    fn test_lines_are_lazy_and_exhaust() {
        let recipe = mix_and_bake();
        let mut lines = tree_lines(&recipe);
        assert_eq!(lines.next().as_deref(), Some("recipe"));
        assert_eq!(lines.next().as_deref(), Some("┣╸step"));
        assert_eq!(lines.by_ref().count(), 3);
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_nested_continuation() {
        let recipe = Recipe::new()
            .with_step(
                Step::new()
                    .with(Direction::new("a"))
                    .with(Direction::new("b")),
            )
            .with_metadata("k", "v");
        assert_eq!(
            print_tree(&recipe),
            "recipe\n┣╸step\n┃ ┣╸a\n┃ ┗╸b\n┗╸k => v"
        );
    }
}
