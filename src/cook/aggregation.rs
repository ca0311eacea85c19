//! Ingredient quantity aggregation
//!
//! A recipe mentions the same ingredient in several places: "2 cups of flour" in the dough,
//! "1 cup of flour" for dusting. Aggregation folds those mentions into one running total per
//! ingredient and unit, which is what a shopping list needs.
//!
//! Each ingredient gets an [IngredientAmountCollection] with two maps:
//!
//!     countable    singular unit -> running decimal total
//!     uncountable  unit as written -> last free-text amount seen ("a pinch")
//!
//! Only the first value of a mention's value list is used. Units are singularized before
//! they become countable keys, so "cup" and "cups" share a bucket. Units are never converted:
//! "cup" and "ml" stay in separate buckets. Free-text amounts are keyed by the unit exactly
//! as written and overwrite each other rather than accumulating.
//!
//! [IngredientTable] maps ingredient names to their collections, creating them on first
//! mention. It is an ordinary value owned by whoever drives the accumulation pass; there is
//! no shared state between tables.
//!
//! An empty value list reaching the aggregator is a broken parser contract and panics.

use crate::cook::ast::{Amount, AstNode, Ingredient, Recipe, Visitor};
use crate::cook::inflection::{default_inflector, Inflector, UnitNormalizer};
use crate::cook::quantity::{render_decimal, Quantity, ValueList};
use log::{debug, trace};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single amount on its way into the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub quantity: ValueList,
    pub units: String,
}

impl IngredientAmount {
    pub fn new(quantity: impl Into<ValueList>, units: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            units: units.into(),
        }
    }
}

impl From<&Amount> for IngredientAmount {
    fn from(amount: &Amount) -> Self {
        Self {
            quantity: amount.quantity.clone(),
            units: amount.units.clone(),
        }
    }
}

impl From<Amount> for IngredientAmount {
    fn from(amount: Amount) -> Self {
        Self {
            quantity: amount.quantity,
            units: amount.units,
        }
    }
}

/// Running totals for one ingredient
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngredientAmountCollection {
    countable: BTreeMap<String, Decimal>,
    uncountable: BTreeMap<String, String>,
}

impl IngredientAmountCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount, singularizing units with the default English rules
    pub fn add(&mut self, amount: IngredientAmount) {
        self.add_with(amount, default_inflector());
    }

    /// Add an amount, singularizing units with `normalizer`
    ///
    /// # Panics
    ///
    /// Panics if the amount's value list is empty, or if its first value is a fraction with a
    /// zero denominator.
    pub fn add_with(&mut self, amount: IngredientAmount, normalizer: &impl UnitNormalizer) {
        let IngredientAmount { quantity, units } = amount;
        let key = normalizer.singularize(&units);

        // Only the first value counts; the rest of the list is ignored.
        let Some(first) = quantity.into_iter().next() else {
            panic!("amount in '{units}' has an empty value list; every quantity needs a value");
        };

        let value = match first {
            Quantity::Integer(v) => Decimal::from(v),
            Quantity::Decimal(v) => v,
            Quantity::Fraction(n, d) => Decimal::from(n) / Decimal::from(d),
            Quantity::Text(text) => {
                debug!("uncountable '{units}' set to '{text}'");
                self.uncountable.insert(units, text);
                return;
            }
        };

        let total = self.countable.entry(key).or_insert(Decimal::ZERO);
        *total += value;
        debug!("countable '{units}' += {value} (now {total})");
    }

    /// Singular unit -> running total
    pub fn countable(&self) -> &BTreeMap<String, Decimal> {
        &self.countable
    }

    /// Unit as written -> last free-text amount
    pub fn uncountable(&self) -> &BTreeMap<String, String> {
        &self.uncountable
    }

    /// Running total for an already-singular unit key
    pub fn total(&self, unit: &str) -> Option<Decimal> {
        self.countable.get(unit).copied()
    }

    pub fn text(&self, unit: &str) -> Option<&str> {
        self.uncountable.get(unit).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.countable.is_empty() && self.uncountable.is_empty()
    }

    /// One display line per bucket: countable totals first, then free-text amounts
    ///
    /// Totals are rounded to `significant_digits` and their unit inflected: singular for a
    /// total of exactly one, plural otherwise.
    pub fn describe(&self, significant_digits: u32, normalizer: &impl UnitNormalizer) -> Vec<String> {
        let countable = self.countable.iter().map(|(unit, total)| {
            let count = if *total == Decimal::ONE { 1 } else { 2 };
            let line = format!(
                "{} {}",
                render_decimal(*total, significant_digits),
                normalizer.pluralize(unit, count)
            );
            line.trim_end().to_string()
        });
        let uncountable = self
            .uncountable
            .iter()
            .map(|(unit, text)| format!("{text} {unit}").trim_end().to_string());
        countable.chain(uncountable).collect()
    }
}

/// Ingredient name -> running totals, for one recipe's accumulation pass
#[derive(Debug, Clone)]
pub struct IngredientTable<N: UnitNormalizer = Inflector> {
    ingredients: BTreeMap<String, IngredientAmountCollection>,
    normalizer: N,
}

impl IngredientTable<Inflector> {
    /// Table normalizing units with the default English rules
    pub fn new() -> Self {
        Self::with_normalizer(Inflector::new())
    }
}

impl Default for IngredientTable<Inflector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: UnitNormalizer> IngredientTable<N> {
    pub fn with_normalizer(normalizer: N) -> Self {
        Self {
            ingredients: BTreeMap::new(),
            normalizer,
        }
    }

    /// Add one amount for `name`, creating its collection on first mention
    pub fn add(&mut self, name: &str, amount: IngredientAmount) {
        let collection = self.ingredients.entry(name.to_string()).or_insert_with(|| {
            trace!("new ingredient '{name}'");
            IngredientAmountCollection::new()
        });
        collection.add_with(amount, &self.normalizer);
    }

    /// Add each amount for `name`, in order
    ///
    /// There is no atomicity: if an amount panics partway through, the earlier ones stay
    /// applied.
    pub fn add_all<I>(&mut self, name: &str, amounts: I)
    where
        I: IntoIterator<Item = IngredientAmount>,
    {
        for amount in amounts {
            self.add(name, amount);
        }
    }

    /// Feed every ingredient mention of `recipe` into the table
    pub fn accumulate(&mut self, recipe: &Recipe) {
        recipe.accept(self);
    }

    pub fn get(&self, name: &str) -> Option<&IngredientAmountCollection> {
        self.ingredients.get(name)
    }

    /// Name -> collection, sorted by name
    pub fn ingredients(&self) -> &BTreeMap<String, IngredientAmountCollection> {
        &self.ingredients
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IngredientAmountCollection)> {
        self.ingredients.iter()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }
}

impl<N: UnitNormalizer> Visitor for IngredientTable<N> {
    fn visit_ingredient(&mut self, ingredient: &Ingredient) {
        self.add(&ingredient.name, IngredientAmount::from(&ingredient.amount));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cook::ast::{Direction, Step};
    use crate::cook::testing::IdentityNormalizer;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_integers_accumulate_per_unit() {
        let mut collection = IngredientAmountCollection::new();
        collection.add_with(IngredientAmount::new(ValueList::single(100), "g"), &IdentityNormalizer);
        collection.add_with(IngredientAmount::new(ValueList::single(50), "g"), &IdentityNormalizer);
        assert_eq!(collection.total("g"), Some(dec("150")));
    }

    #[test]
    fn test_identity_keeps_spellings_apart() {
        let mut collection = IngredientAmountCollection::new();
        collection.add_with(IngredientAmount::new(ValueList::single(100), "g"), &IdentityNormalizer);
        collection.add_with(
            IngredientAmount::new(ValueList::single(50), "grams"),
            &IdentityNormalizer,
        );
        assert_eq!(collection.total("g"), Some(dec("100")));
        assert_eq!(collection.total("grams"), Some(dec("50")));
    }

    #[test]
    fn test_mixed_numeric_variants_sum_exactly() {
        let mut collection = IngredientAmountCollection::new();
        collection.add(IngredientAmount::new(ValueList::single(1), "cup"));
        collection.add(IngredientAmount::new(ValueList::single(dec("0.25")), "cups"));
        collection.add(IngredientAmount::new(ValueList::single(Quantity::fraction(1, 2)), "cups"));
        assert_eq!(collection.total("cup"), Some(dec("1.75")));
        assert_eq!(collection.countable().len(), 1);
    }

    #[test]
    fn test_text_overwrites_and_keeps_raw_unit() {
        let mut collection = IngredientAmountCollection::new();
        collection.add(IngredientAmount::new(ValueList::single("some"), "pinches"));
        collection.add(IngredientAmount::new(ValueList::single("a pinch"), "pinches"));
        assert_eq!(collection.text("pinches"), Some("a pinch"));
        assert_eq!(collection.text("pinch"), None);
        assert!(collection.countable().is_empty());
    }

    #[test]
    fn test_text_and_numeric_share_a_unit_independently() {
        let mut collection = IngredientAmountCollection::new();
        collection.add(IngredientAmount::new(ValueList::single(2), "cup"));
        collection.add(IngredientAmount::new(ValueList::single("a splash"), "cup"));
        assert_eq!(collection.total("cup"), Some(dec("2")));
        assert_eq!(collection.text("cup"), Some("a splash"));
    }

    #[test]
    fn test_only_first_value_is_used() {
        let mut collection = IngredientAmountCollection::new();
        collection.add(IngredientAmount::new(
            ValueList::new(vec![Quantity::Integer(2), Quantity::Integer(40)]),
            "cup",
        ));
        assert_eq!(collection.total("cup"), Some(dec("2")));
    }

    #[test]
    #[should_panic(expected = "empty value list")]
    fn test_empty_value_list_panics() {
        let mut collection = IngredientAmountCollection::new();
        collection.add(IngredientAmount::new(ValueList::default(), "cup"));
    }

    #[test]
    fn test_describe() {
        let mut collection = IngredientAmountCollection::new();
        collection.add(IngredientAmount::new(ValueList::single(1), "cup"));
        collection.add(IngredientAmount::new(ValueList::single(Quantity::fraction(1, 3)), "tbsp"));
        collection.add(IngredientAmount::new(ValueList::single("a pinch"), ""));
        assert_eq!(
            collection.describe(2, default_inflector()),
            vec!["1 cup", "0.33 tbsp", "a pinch"]
        );
    }

    #[test]
    fn test_table_creates_lazily_and_accumulates() {
        let mut table = IngredientTable::new();
        assert!(table.is_empty());
        table.add("flour", IngredientAmount::new(ValueList::single(2), "cup"));
        table.add("flour", IngredientAmount::new(ValueList::single(1), "cups"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("flour").unwrap().total("cup"), Some(dec("3")));
        assert!(table.get("sugar").is_none());
    }

    #[test]
    fn test_table_add_all_in_order() {
        let mut table = IngredientTable::with_normalizer(IdentityNormalizer);
        table.add_all(
            "salt",
            vec![
                IngredientAmount::new(ValueList::single("a little"), "pinch"),
                IngredientAmount::new(ValueList::single("a lot"), "pinch"),
            ],
        );
        assert_eq!(table.get("salt").unwrap().text("pinch"), Some("a lot"));
    }

    #[test]
    fn test_accumulate_walks_recipe() {
        let recipe = Recipe::new()
            .with_step(
                Step::new()
                    .with(Direction::new("Mix"))
                    .with(Ingredient::new("flour", Amount::new(ValueList::single(2), "cups")))
                    .with(Ingredient::new("egg", Amount::new(ValueList::single(3), ""))),
            )
            .with_step(Step::new().with(Ingredient::new(
                "flour",
                Amount::new(ValueList::single(Quantity::fraction(1, 2)), "cup"),
            )));

        let mut table = IngredientTable::new();
        table.accumulate(&recipe);

        let names: Vec<&String> = table.ingredients().keys().collect();
        assert_eq!(names, vec!["egg", "flour"]);
        assert_eq!(table.get("flour").unwrap().total("cup"), Some(dec("2.5")));
        assert_eq!(table.get("egg").unwrap().total(""), Some(dec("3")));
    }

    #[test]
    fn test_unit_case_shares_a_bucket() {
        let mut collection = IngredientAmountCollection::new();
        collection.add(IngredientAmount::new(ValueList::single(1), "Cups"));
        collection.add(IngredientAmount::new(ValueList::single(2), "cups"));
        collection.add(IngredientAmount::new(ValueList::single(1), "CUP"));
        assert_eq!(collection.countable().len(), 1);
        assert_eq!(collection.total("cup"), Some(dec("4")));
    }
}
