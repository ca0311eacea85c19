//! # cook
//!
//! A document tree for recipe markup and an aggregator that folds scattered ingredient
//! mentions into per-ingredient totals.
//!
//! File Layout
//!
//! The tokenizer and grammar that turn markup into nodes live outside this crate. What lives
//! here is everything downstream of a parsed tree:
//!
//! src/cook
//!   ├── quantity      Numeric-or-text amounts and value lists
//!   ├── ast           Node types, tree reflection, snapshot and treeviz
//!   ├── aggregation   Per-ingredient totals keyed by normalized unit
//!   ├── inflection    Unit singular/plural normalization
//!   ├── formats       Pluggable serializers (treeviz, tag, json, shopping-list)
//!   ├── config        Layered TOML configuration
//!   └── loader        Reading serialized recipe trees from disk
//!
//! For shared fixtures used across tests, see the [testing module](cook::testing).

pub mod cook;
