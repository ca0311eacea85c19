//! Shopping list format
//!
//! Accumulates a recipe's ingredient mentions into an [IngredientTable] and prints one line
//! per ingredient, sorted by name:
//!
//! ```text
//! flour: 3 cups
//! milk: 0.5 cups
//! salt: a pinch
//! ```

use crate::cook::aggregation::IngredientTable;
use crate::cook::ast::Recipe;
use crate::cook::config::CookConfig;
use crate::cook::error::FormatError;
use crate::cook::inflection::{Inflector, UnitNormalizer};
use crate::cook::quantity::DEFAULT_SIGNIFICANT_DIGITS;

/// Render an accumulated table, inflecting units with the table's own normalizer
pub fn shopping_list<N: UnitNormalizer>(table: &IngredientTable<N>, significant_digits: u32) -> String {
    table
        .iter()
        .map(|(name, amounts)| {
            let items = amounts.describe(significant_digits, table.normalizer());
            format!("{}: {}", name, items.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct ShoppingListFormatter {
    significant_digits: u32,
    inflector: Inflector,
}

impl ShoppingListFormatter {
    pub fn new(significant_digits: u32, inflector: Inflector) -> Self {
        Self {
            significant_digits,
            inflector,
        }
    }

    pub fn from_config(config: &CookConfig) -> Self {
        Self::new(
            config.display.significant_digits,
            Inflector::from_config(&config.units),
        )
    }
}

impl Default for ShoppingListFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNIFICANT_DIGITS, Inflector::new())
    }
}

impl crate::cook::formats::registry::Formatter for ShoppingListFormatter {
    fn name(&self) -> &str {
        "shopping-list"
    }

    fn serialize(&self, recipe: &Recipe) -> Result<String, FormatError> {
        let mut table = IngredientTable::with_normalizer(self.inflector.clone());
        table.accumulate(recipe);
        Ok(shopping_list(&table, self.significant_digits))
    }

    fn description(&self) -> &str {
        "Aggregated ingredient totals, one line per ingredient"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cook::aggregation::IngredientAmount;
    use crate::cook::ast::{Amount, Ingredient, Step};
    use crate::cook::formats::Formatter;
    use crate::cook::quantity::{Quantity, ValueList};
    use crate::cook::testing::sample_recipe;

    #[test]
    fn test_sample_recipe() {
        let output = ShoppingListFormatter::default()
            .serialize(&sample_recipe())
            .unwrap();
        assert_eq!(output, "flour: 3 cups\nmilk: 0.5 cups\nsalt: a pinch");
    }

    #[test]
    fn test_multiple_buckets_and_digits() {
        let mut table = IngredientTable::new();
        table.add("sugar", IngredientAmount::new(ValueList::single(Quantity::fraction(1, 3)), "cup"));
        table.add("sugar", IngredientAmount::new(ValueList::single(15), "g"));
        assert_eq!(shopping_list(&table, 3), "sugar: 0.333 cups, 15 g");
    }

    #[test]
    fn test_unitless_amounts() {
        let recipe = Recipe::new().with_step(
            Step::new()
                .with(Ingredient::new("egg", Amount::new(ValueList::single(3), "")))
                .with(Ingredient::new("egg", Amount::new(ValueList::single(1), ""))),
        );
        let output = ShoppingListFormatter::default().serialize(&recipe).unwrap();
        assert_eq!(output, "egg: 4");
    }
}
