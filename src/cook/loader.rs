//! Loading serialized recipe trees
//!
//! Recipes arrive here already structured: a JSON or YAML rendering of [Recipe], as written by
//! an upstream parser or by hand for tests. Markup parsing is not done here.
//!
//! ```text
//! steps:
//!   - instructions:
//!       - type: ingredient
//!         name: flour
//!         amount: { quantity: [{ integer: 2 }], units: cups }
//! metadata:
//!   - { key: servings, value: "4" }
//! ```

use crate::cook::ast::Recipe;
use crate::cook::error::CookError;
use log::debug;
use std::fs;
use std::path::Path;

/// Serialization a recipe file is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Json,
    Yaml,
}

impl SourceKind {
    /// Pick the serialization from a file extension
    pub fn from_path(path: &Path) -> Result<Self, CookError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "json" => Ok(SourceKind::Json),
            "yaml" | "yml" => Ok(SourceKind::Yaml),
            _ => Err(CookError::UnsupportedExtension(extension)),
        }
    }
}

/// Decode a recipe from text already in memory
pub fn recipe_from_str(source: &str, kind: SourceKind) -> Result<Recipe, CookError> {
    let recipe = match kind {
        SourceKind::Json => serde_json::from_str(source)?,
        SourceKind::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(recipe)
}

/// Read and decode a recipe file, choosing the decoder by extension
pub fn load_recipe(path: impl AsRef<Path>) -> Result<Recipe, CookError> {
    let path = path.as_ref();
    let kind = SourceKind::from_path(path)?;
    let source = fs::read_to_string(path)?;
    let recipe = recipe_from_str(&source, kind)?;
    debug!(
        "loaded {} ({} steps, {} metadata)",
        path.display(),
        recipe.steps.len(),
        recipe.metadata.len()
    );
    Ok(recipe)
}
