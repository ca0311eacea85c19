//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{Amount, Direction, Equipment, Ingredient, Metadata, Recipe, Step, Timer};
use crate::cook::quantity::{Quantity, ValueList};

/// Visitor trait for traversing the AST
///
/// Implement this trait to walk the AST. Each visit method corresponds to a node type.
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// # Example
///
/// ```ignore
/// struct IngredientNames(Vec<String>);
///
/// impl Visitor for IngredientNames {
///     fn visit_ingredient(&mut self, ingredient: &Ingredient) {
///         self.0.push(ingredient.name.clone());
///     }
/// }
///
/// let mut visitor = IngredientNames(Vec::new());
/// recipe.accept(&mut visitor);
/// ```
pub trait Visitor {
    // Containers
    fn visit_recipe(&mut self, _recipe: &Recipe) {}
    fn leave_recipe(&mut self, _recipe: &Recipe) {}

    fn visit_step(&mut self, _step: &Step) {}
    fn leave_step(&mut self, _step: &Step) {}

    // Leaf nodes
    fn visit_direction(&mut self, _direction: &Direction) {}
    fn visit_ingredient(&mut self, _ingredient: &Ingredient) {}
    fn visit_equipment(&mut self, _equipment: &Equipment) {}
    fn visit_timer(&mut self, _timer: &Timer) {}
    fn visit_metadata(&mut self, _metadata: &Metadata) {}

    // Amount payloads
    fn visit_amount(&mut self, _amount: &Amount) {}
    fn visit_value_list(&mut self, _values: &ValueList) {}
    fn visit_quantity(&mut self, _quantity: &Quantity) {}
}

/// Common interface for all AST nodes
///
/// This is the reflection capability the tree printers and the snapshot builder rely on: a
/// node says what it is, how it reads in one line, and which nodes hang below it. Printers
/// never match on concrete types.
pub trait AstNode {
    fn node_type(&self) -> &'static str;

    /// One-line human readable label
    fn display_label(&self) -> String;

    /// Nodes shown below this one in the printable tree, in order
    ///
    /// Leaves return nothing even when they carry structured data (an ingredient's amount is
    /// part of its label, not a child).
    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cook::ast::elements::Instruction;

    #[test]
    fn test_visitor_traversal() {
        let recipe = Recipe::new()
            .with_step(
                Step::new()
                    .with(Direction::new("Mix"))
                    .with(Ingredient::new("flour", Amount::new(ValueList::single(2), "cups"))),
            )
            .with_step(Step::new().with(Timer::new("bake", ValueList::single(20), "minutes")))
            .with_metadata("servings", "4");

        #[derive(Default)]
        struct CountingVisitor {
            recipes: usize,
            steps: usize,
            leaves: usize,
            metadata: usize,
            left_steps: usize,
        }

        impl Visitor for CountingVisitor {
            fn visit_recipe(&mut self, _: &Recipe) {
                self.recipes += 1;
            }
            fn visit_step(&mut self, _: &Step) {
                self.steps += 1;
            }
            fn leave_step(&mut self, _: &Step) {
                self.left_steps += 1;
            }
            fn visit_direction(&mut self, _: &Direction) {
                self.leaves += 1;
            }
            fn visit_ingredient(&mut self, _: &Ingredient) {
                self.leaves += 1;
            }
            fn visit_timer(&mut self, _: &Timer) {
                self.leaves += 1;
            }
            fn visit_metadata(&mut self, _: &Metadata) {
                self.metadata += 1;
            }
        }

        let mut visitor = CountingVisitor::default();
        recipe.accept(&mut visitor);
        assert_eq!(visitor.recipes, 1);
        assert_eq!(visitor.steps, 2);
        assert_eq!(visitor.left_steps, 2);
        assert_eq!(visitor.leaves, 3);
        assert_eq!(visitor.metadata, 1);

        // Visiting a single instruction only reaches that node
        let mut visitor = CountingVisitor::default();
        Instruction::from(Direction::new("Stir")).accept(&mut visitor);
        assert_eq!(visitor.leaves, 1);
        assert_eq!(visitor.steps, 0);
    }

    #[test]
    fn test_children_are_trait_objects() {
        let recipe = Recipe::new()
            .with_step(Step::new().with(Direction::new("Mix")))
            .with_metadata("source", "grandma");
        let kinds: Vec<&str> = recipe.children().iter().map(|c| c.node_type()).collect();
        assert_eq!(kinds, vec!["Step", "Metadata"]);
    }
}
