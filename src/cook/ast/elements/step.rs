//! Step element
//!
//! A step is one paragraph of the method. Its text is split into instructions: runs of plain
//! direction text interleaved with ingredient, equipment and timer mentions.

use super::super::traits::{AstNode, Visitor};
use super::Instruction;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl Step {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_instructions(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Append an instruction
    pub fn with(mut self, instruction: impl Into<Instruction>) -> Self {
        self.instructions.push(instruction.into());
        self
    }
}

impl AstNode for Step {
    fn node_type(&self) -> &'static str {
        "Step"
    }

    fn display_label(&self) -> String {
        "step".to_string()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.instructions
            .iter()
            .map(|instruction| instruction as &dyn AstNode)
            .collect()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_step(self);
        for instruction in &self.instructions {
            instruction.accept(visitor);
        }
        visitor.leave_step(self);
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step({} instructions)", self.instructions.len())
    }
}
