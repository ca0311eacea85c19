//! Output format implementations for recipe serialization
//!
//! This module contains the format implementations a recipe can be written out as:
//! - treeviz: the box-drawing tree used for debugging and scanning structure
//! - tag: XML-like nested tags
//! - json: the AST snapshot as JSON
//! - shopping-list: aggregated ingredient totals, one line per ingredient

pub mod json;
pub mod registry;
pub mod shopping_list;
pub mod tag;
pub mod treeviz;

pub use json::JsonFormatter;
pub use registry::{FormatRegistry, Formatter};
pub use shopping_list::{shopping_list, ShoppingListFormatter};
pub use tag::{serialize_node as serialize_tag, TagFormatter};
pub use treeviz::{print_tree, tree_lines, TreeLines, TreevizFormatter};
