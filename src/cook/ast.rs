//! AST definitions and utilities for recipe documents
//!
//!     This module provides the Abstract Syntax Tree (AST) a parsed recipe is handed over as,
//!     along with the reflection used to print and snapshot it.
//!
//! Recipes and Steps
//!
//!     A recipe is an ordered list of steps plus an ordered list of metadata entries (servings,
//!     source, tags). A step is an ordered list of instructions, and an instruction is one of:
//!
//!         - Direction: plain text, "Preheat the oven."
//!         - Ingredient: a named ingredient with an amount, "@flour{2%cups}"
//!         - Equipment: a named piece of equipment, "#pot"
//!         - Timer: a named duration, "~rest{10%minutes}"
//!
//!     Ownership is strictly a tree: a recipe owns its steps and metadata, a step owns its
//!     instructions. Nothing is shared, so every walk terminates.
//!
//! Amounts
//!
//!     An amount is a [ValueList](crate::cook::quantity::ValueList) plus a unit string. Amounts
//!     and their quantities are nodes too (they have labels), but they are leaves in the printed
//!     tree: the tree view is for scanning recipe structure, not for dumping every value.
//!
//! Reflection
//!
//!     Every node implements [AstNode](traits::AstNode), which exposes a type name, a display
//!     label and the children to show below it. The [snapshot] builder and the tree printers
//!     in [formats](crate::cook::formats) work only through that trait. The set of node types
//!     is closed: [Instruction](elements::Instruction) is an enum, so every match over it is
//!     checked for exhaustiveness at compile time and there is no "unknown node" path.

pub mod elements;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Amount, Direction, Equipment, Ingredient, Instruction, Metadata, Recipe, Step, Timer,
};
pub use snapshot::{snapshot_node, AstSnapshot};
pub use traits::{AstNode, Visitor};
