//! Format registry for recipe serialization
//!
//! This module provides a pluggable registry system for recipe serialization formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::cook::ast::Recipe;
use crate::cook::config::CookConfig;
use crate::cook::error::FormatError;
use std::collections::HashMap;

/// Trait for recipe formatters
///
/// Implementors provide a way to serialize a Recipe to a string representation.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "tag")
    fn name(&self) -> &str;

    /// Serialize a recipe to this format
    fn serialize(&self, recipe: &Recipe) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of recipe formatters
///
/// Provides a centralized registry for all available serialization formats.
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a recipe using the specified format
    pub fn serialize(&self, recipe: &Recipe, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(recipe)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Register built-in formatters
        registry.register(super::TreevizFormatter);
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::ShoppingListFormatter::default());

        registry
    }

    /// Built-in formatters, with the shopping list following `config`
    pub fn with_config(config: &CookConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::ShoppingListFormatter::from_config(config));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
