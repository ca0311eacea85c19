//! Instruction
//!
//! `Instruction` is the common wrapper for everything a step can hold. It lets tooling
//! operate uniformly on a step's mixed content.
//!
//! Examples:
//! - "Add @flour{2%cups} to the #bowl" is Ingredient, Direction, Equipment
//! - "Bake for ~{25%minutes}." is Direction, Timer, Direction

use super::super::traits::{AstNode, Visitor};
use super::mentions::{Equipment, Ingredient, Timer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instruction represents any element that can appear in a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Instruction {
    Direction(Direction),
    Ingredient(Ingredient),
    Equipment(Equipment),
    Timer(Timer),
}

impl AstNode for Instruction {
    fn node_type(&self) -> &'static str {
        match self {
            Instruction::Direction(d) => d.node_type(),
            Instruction::Ingredient(i) => i.node_type(),
            Instruction::Equipment(e) => e.node_type(),
            Instruction::Timer(t) => t.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Instruction::Direction(d) => d.display_label(),
            Instruction::Ingredient(i) => i.display_label(),
            Instruction::Equipment(e) => e.display_label(),
            Instruction::Timer(t) => t.display_label(),
        }
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            Instruction::Direction(d) => d.children(),
            Instruction::Ingredient(i) => i.children(),
            Instruction::Equipment(e) => e.children(),
            Instruction::Timer(t) => t.children(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Instruction::Direction(d) => d.accept(visitor),
            Instruction::Ingredient(i) => i.accept(visitor),
            Instruction::Equipment(e) => e.accept(visitor),
            Instruction::Timer(t) => t.accept(visitor),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.node_type(), self.display_label())
    }
}

impl From<Direction> for Instruction {
    fn from(direction: Direction) -> Self {
        Instruction::Direction(direction)
    }
}

impl From<Ingredient> for Instruction {
    fn from(ingredient: Ingredient) -> Self {
        Instruction::Ingredient(ingredient)
    }
}

impl From<Equipment> for Instruction {
    fn from(equipment: Equipment) -> Self {
        Instruction::Equipment(equipment)
    }
}

impl From<Timer> for Instruction {
    fn from(timer: Timer) -> Self {
        Instruction::Timer(timer)
    }
}

/// Plain method text between mentions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub text: String,
}

impl Direction {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl AstNode for Direction {
    fn node_type(&self) -> &'static str {
        "Direction"
    }

    fn display_label(&self) -> String {
        self.text.clone()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_direction(self);
    }
}
