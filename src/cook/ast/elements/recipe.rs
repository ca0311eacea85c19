//! Recipe element
//!
//! The recipe is the root of every document. It owns its steps, in the order they are
//! performed, and its metadata entries, in the order they were written.
//!
//! In the printed tree the steps come first, then the metadata:
//!
//! ```text
//! recipe
//! ┣╸step
//! ┃ ┗╸Preheat the oven.
//! ┗╸servings => 4
//! ```

use super::super::traits::{AstNode, Visitor};
use super::mentions::Ingredient;
use super::step::Step;
use super::Instruction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed recipe document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub metadata: Vec<Metadata>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(Metadata::new(key, value));
        self
    }

    /// Every ingredient mention, in document order
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.steps
            .iter()
            .flat_map(|step| step.instructions.iter())
            .filter_map(|instruction| match instruction {
                Instruction::Ingredient(ingredient) => Some(ingredient),
                _ => None,
            })
    }

    /// Value of the first metadata entry with the given key
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }
}

impl AstNode for Recipe {
    fn node_type(&self) -> &'static str {
        "Recipe"
    }

    fn display_label(&self) -> String {
        "recipe".to_string()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.steps
            .iter()
            .map(|step| step as &dyn AstNode)
            .chain(self.metadata.iter().map(|entry| entry as &dyn AstNode))
            .collect()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_recipe(self);
        for step in &self.steps {
            step.accept(visitor);
        }
        for entry in &self.metadata {
            entry.accept(visitor);
        }
        visitor.leave_recipe(self);
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Recipe({} steps, {} metadata)",
            self.steps.len(),
            self.metadata.len()
        )
    }
}

/// A `key => value` metadata entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub key: String,
    pub value: String,
}

impl Metadata {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl AstNode for Metadata {
    fn node_type(&self) -> &'static str {
        "Metadata"
    }

    fn display_label(&self) -> String {
        format!("{} => {}", self.key, self.value)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_metadata(self);
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Amount, Direction};
    use super::*;
    use crate::cook::quantity::ValueList;

    #[test]
    fn test_labels() {
        assert_eq!(Recipe::new().display_label(), "recipe");
        assert_eq!(
            Metadata::new("servings", "4").display_label(),
            "servings => 4"
        );
    }

    #[test]
    fn test_children_order_steps_then_metadata() {
        let recipe = Recipe::new()
            .with_metadata("source", "grandma")
            .with_step(Step::new().with(Direction::new("Mix")))
            .with_step(Step::new().with(Direction::new("Bake")));
        let labels: Vec<String> = recipe
            .children()
            .iter()
            .map(|c| c.display_label())
            .collect();
        assert_eq!(labels, vec!["step", "step", "source => grandma"]);
    }

    #[test]
    fn test_ingredients_in_document_order() {
        let recipe = Recipe::new()
            .with_step(
                Step::new()
                    .with(Ingredient::new("flour", Amount::new(ValueList::single(2), "cups")))
                    .with(Direction::new("and")),
            )
            .with_step(Step::new().with(Ingredient::new(
                "salt",
                Amount::new(ValueList::single("a pinch"), "pinch"),
            )));
        let names: Vec<&str> = recipe.ingredients().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "salt"]);
    }

    #[test]
    fn test_metadata_value() {
        let recipe = Recipe::new()
            .with_metadata("servings", "4")
            .with_metadata("servings", "6");
        assert_eq!(recipe.metadata_value("servings"), Some("4"));
        assert_eq!(recipe.metadata_value("source"), None);
    }
}
