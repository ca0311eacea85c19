//! XML-like AST tag serialization
//!
//! Serializes AST snapshots to an XML-like format.
//! Consumes the normalized AST snapshot representation and applies
//! XML/tag-specific formatting.
//!
//! ## Format
//!
//! - Node type → tag name (kebab-case)
//! - Label → text content
//! - Children → nested tags (no wrapper)
//!
//! ## Example
//!
//! ```text
//! <recipe>recipe
//!   <step>step
//!     <direction>Mix</direction>
//!     <ingredient>ING: flour [2 cups]</ingredient>
//!   </step>
//!   <metadata>servings =&gt; 4</metadata>
//! </recipe>
//! ```

use crate::cook::ast::{snapshot_node, AstNode, AstSnapshot, Recipe};
use crate::cook::error::FormatError;

/// Tag serializer that converts AstSnapshot to XML-like format
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn serialize_snapshot(&mut self, snapshot: &AstSnapshot) {
        let tag = to_tag_name(&snapshot.node_type);

        self.push_indent(&format!("<{}>", tag));
        self.output.push_str(&escape_xml(&snapshot.label));

        if snapshot.children.is_empty() {
            self.output.push_str(&format!("</{}>", tag));
            self.output.push('\n');
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            for child in &snapshot.children {
                self.serialize_snapshot(child);
            }
            self.indent_level -= 1;
            self.push_indent(&format!("</{}>", tag));
            self.output.push('\n');
        }
    }
}

/// Convert a node type name to a tag name (e.g., "ValueList" → "value-list")
fn to_tag_name(node_type: &str) -> String {
    let mut tag = String::new();
    for (i, c) in node_type.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            tag.push('-');
        }
        tag.extend(c.to_lowercase());
    }
    tag
}

/// Serialize any node to AST tag format
pub fn serialize_node(node: &dyn AstNode) -> String {
    let mut serializer = TagSerializer::new();
    serializer.serialize_snapshot(&snapshot_node(node));
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

/// Formatter implementation for XML-like tag format
pub struct TagFormatter;

impl crate::cook::formats::registry::Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, recipe: &Recipe) -> Result<String, FormatError> {
        Ok(serialize_node(recipe))
    }

    fn description(&self) -> &str {
        "XML-like tag format with hierarchical structure"
    }
}
