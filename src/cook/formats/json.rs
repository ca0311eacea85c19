//! JSON snapshot format
//!
//! The AST snapshot pretty-printed as JSON. Leaves carry no `children` key.

use crate::cook::ast::{snapshot_node, Recipe};
use crate::cook::error::FormatError;

pub struct JsonFormatter;

impl crate::cook::formats::registry::Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, recipe: &Recipe) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_node(recipe))
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "AST snapshot as pretty-printed JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cook::ast::AstSnapshot;
    use crate::cook::formats::Formatter;
    use crate::cook::testing::sample_recipe;

    #[test]
    fn test_json_round_trips_through_snapshot() {
        let output = JsonFormatter.serialize(&sample_recipe()).unwrap();
        let snapshot: AstSnapshot = serde_json::from_str(&output).unwrap();
        assert_eq!(snapshot, snapshot_node(&sample_recipe()));
        assert_eq!(snapshot.children.len(), 3);
    }
}
