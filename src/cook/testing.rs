//! Shared test fixtures
//!
//! Unit and integration tests build the same handful of recipes and stubs over and over.
//! They live here so a change to the node model is fixed in one place.
//!
//! - [IdentityNormalizer]: a unit normalizer that changes nothing, for tests that need to
//!   control exactly which units share a bucket
//! - [sample_recipe]: a small pancake recipe touching every node type
//! - [int], [dec], [frac], [text]: quantity shorthands

use crate::cook::aggregation::IngredientAmount;
use crate::cook::ast::{Amount, Direction, Equipment, Ingredient, Recipe, Step, Timer};
use crate::cook::inflection::UnitNormalizer;
use crate::cook::quantity::{Quantity, ValueList};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Normalizer that returns units untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl UnitNormalizer for IdentityNormalizer {
    fn singularize(&self, unit: &str) -> String {
        unit.to_string()
    }

    fn pluralize(&self, unit: &str, _count: i64) -> String {
        unit.to_string()
    }
}

pub fn int(value: i64) -> Quantity {
    Quantity::Integer(value)
}

/// Decimal from its string form, e.g. `dec("1.5")`
///
/// # Panics
///
/// Panics on a malformed literal; fixtures are expected to be well formed.
pub fn dec(value: &str) -> Quantity {
    Quantity::Decimal(decimal(value))
}

/// Raw decimal from its string form
pub fn decimal(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap_or_else(|e| panic!("bad decimal fixture '{value}': {e}"))
}

pub fn frac(numerator: i64, denominator: i64) -> Quantity {
    Quantity::Fraction(numerator, denominator)
}

pub fn text(value: &str) -> Quantity {
    Quantity::Text(value.to_string())
}

/// Single-value ingredient amount
pub fn amount(value: Quantity, units: &str) -> IngredientAmount {
    IngredientAmount::new(ValueList::single(value), units)
}

/// Single-value ingredient mention
pub fn ingredient(name: &str, value: Quantity, units: &str) -> Ingredient {
    Ingredient::new(name, Amount::new(ValueList::single(value), units))
}

/// Two-step recipe with every node type in it
///
/// ```text
/// recipe
/// ┣╸step
/// ┃ ┣╸Whisk
/// ┃ ┣╸ING: flour [2 cups]
/// ┃ ┣╸with
/// ┃ ┣╸ING: milk [1/2 cup]
/// ┃ ┗╸EQ: bowl
/// ┣╸step
/// ┃ ┣╸ING: flour [1 cup]
/// ┃ ┣╸ING: salt [a pinch ]
/// ┃ ┗╸TIMER(rest): 10 minutes
/// ┗╸servings => 4
/// ```
pub fn sample_recipe() -> Recipe {
    Recipe::new()
        .with_step(
            Step::new()
                .with(Direction::new("Whisk"))
                .with(ingredient("flour", int(2), "cup"))
                .with(Direction::new("with"))
                .with(ingredient("milk", frac(1, 2), "cups"))
                .with(Equipment::new("bowl")),
        )
        .with_step(
            Step::new()
                .with(ingredient("flour", int(1), "cups"))
                .with(ingredient("salt", text("a pinch"), ""))
                .with(Timer::new("rest", ValueList::single(10), "minutes")),
        )
        .with_metadata("servings", "4")
}
