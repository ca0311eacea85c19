//! Unit inflection
//!
//! Units are written however reads best in the sentence: "1 cup", "2 cups", "a few pinches".
//! Aggregation needs one key per unit, so units are folded to their singular form before they
//! are used as bucket keys, and inflected back for display.
//!
//! The [UnitNormalizer] trait is the seam: the aggregator and the tree labels only ever talk to
//! it, and tests swap in a stub. [Inflector] is the rule-based English implementation:
//!
//!     1. Invariant units (metric and kitchen abbreviations) never change.
//!     2. Irregular pairs are looked up in a table (leaf/leaves, tomato/tomatoes).
//!     3. Otherwise suffix rules apply, first match wins.
//!
//! Units are folded to lowercase before any rule runs, and both functions return lowercase, so
//! "Cups" and "cups" share one bucket. Singularizing is idempotent, and `pluralize` always goes
//! through the singular form first so already-plural input is fine. An empty unit stays empty.

use crate::cook::config::UnitsConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Folds units to a canonical singular form and inflects them for a count.
pub trait UnitNormalizer {
    fn singularize(&self, unit: &str) -> String;
    fn pluralize(&self, unit: &str, count: i64) -> String;
}

const INVARIANT_UNITS: &[&str] = &[
    "g", "kg", "mg", "ml", "l", "dl", "cl", "oz", "fl oz", "tsp", "tbsp", "°c", "°f",
];

const IRREGULAR_UNITS: &[(&str, &str)] = &[
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("half", "halves"),
    ("knife", "knives"),
    ("tomato", "tomatoes"),
    ("potato", "potatoes"),
    ("cookie", "cookies"),
    ("lb", "lbs"),
];

static IES_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.+[^aeiou])ies$").unwrap());
static ES_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.*(?:ch|sh|x|z|ss))es$").unwrap());
static S_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.*[^s])s$").unwrap());

static CONSONANT_Y: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.*[^aeiou])y$").unwrap());
static SIBILANT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:ch|sh|x|z|s)$").unwrap());

static DEFAULT_INFLECTOR: Lazy<Inflector> = Lazy::new(Inflector::new);

/// Rule-based English unit inflector
#[derive(Debug, Clone)]
pub struct Inflector {
    invariant: BTreeSet<String>,
    /// singular -> plural
    plurals: BTreeMap<String, String>,
    /// plural -> singular
    singulars: BTreeMap<String, String>,
}

impl Inflector {
    /// Inflector with the built-in English rules.
    pub fn new() -> Self {
        let mut inflector = Self {
            invariant: BTreeSet::new(),
            plurals: BTreeMap::new(),
            singulars: BTreeMap::new(),
        };
        for unit in INVARIANT_UNITS {
            inflector.add_invariant(unit);
        }
        for (singular, plural) in IRREGULAR_UNITS {
            inflector.add_irregular(singular, plural);
        }
        inflector
    }

    /// Built-in rules extended with the configured units.
    pub fn from_config(config: &UnitsConfig) -> Self {
        let mut inflector = Self::new();
        for unit in &config.invariant {
            inflector.add_invariant(unit);
        }
        for (singular, plural) in &config.irregular {
            inflector.add_irregular(singular, plural);
        }
        inflector
    }

    pub fn add_invariant(&mut self, unit: &str) {
        self.invariant.insert(unit.to_lowercase());
    }

    pub fn add_irregular(&mut self, singular: &str, plural: &str) {
        let singular = singular.to_lowercase();
        let plural = plural.to_lowercase();
        self.plurals.insert(singular.clone(), plural.clone());
        self.singulars.insert(plural, singular);
    }

    fn is_fixed(&self, lower: &str) -> bool {
        self.invariant.contains(lower) || self.plurals.contains_key(lower)
    }
}

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitNormalizer for Inflector {
    fn singularize(&self, unit: &str) -> String {
        let lower = unit.to_lowercase();
        if lower.is_empty() || self.is_fixed(&lower) {
            return lower;
        }
        if let Some(singular) = self.singulars.get(&lower) {
            return singular.clone();
        }
        if IES_SUFFIX.is_match(&lower) {
            return IES_SUFFIX.replace(&lower, "${1}y").into_owned();
        }
        if ES_SUFFIX.is_match(&lower) {
            return ES_SUFFIX.replace(&lower, "${1}").into_owned();
        }
        S_SUFFIX.replace(&lower, "${1}").into_owned()
    }

    fn pluralize(&self, unit: &str, count: i64) -> String {
        let singular = self.singularize(unit);
        // Unitless amounts stay unitless
        if count == 1 || singular.is_empty() || self.invariant.contains(&singular) {
            return singular;
        }
        if let Some(plural) = self.plurals.get(&singular) {
            return plural.clone();
        }
        if CONSONANT_Y.is_match(&singular) {
            return CONSONANT_Y.replace(&singular, "${1}ies").into_owned();
        }
        if SIBILANT.is_match(&singular) {
            return format!("{}es", singular);
        }
        format!("{}s", singular)
    }
}

/// Singular form of `unit` under the default English rules.
pub fn singularize(unit: &str) -> String {
    DEFAULT_INFLECTOR.singularize(unit)
}

/// `unit` inflected for `count` under the default English rules.
pub fn pluralize(unit: &str, count: i64) -> String {
    DEFAULT_INFLECTOR.pluralize(unit, count)
}

/// The shared default inflector.
pub fn default_inflector() -> &'static Inflector {
    &DEFAULT_INFLECTOR
}
