//! Element types for the recipe AST
//!
//! - [Recipe] and [Metadata]: the document root and its key/value entries
//! - [Step] and [Instruction]: a paragraph of the method and what it is made of
//! - [Direction], [Ingredient], [Equipment], [Timer]: the instruction kinds
//! - [Amount]: quantity plus units, attached to ingredients
//!
//! `Quantity` and `ValueList` also implement `AstNode` (see the `constant` module) so a bare
//! value can be labelled like any other node.

pub mod amount;
pub mod constant;
pub mod instruction;
pub mod mentions;
pub mod recipe;
pub mod step;

pub use amount::Amount;
pub use instruction::{Direction, Instruction};
pub use mentions::{Equipment, Ingredient, Timer};
pub use recipe::{Metadata, Recipe};
pub use step::Step;
