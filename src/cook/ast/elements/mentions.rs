//! Mentions
//!
//! Named references inside a step's text: the ingredients that go in, the equipment used and
//! the timers to set. They are leaves in the printed tree.
//!
//! | Element    | Label                         |
//! |------------|-------------------------------|
//! | Ingredient | `ING: flour [2 cups]`         |
//! | Equipment  | `EQ: pot`                     |
//! | Timer      | `TIMER(rest): 10 minutes`     |

use super::super::traits::{AstNode, Visitor};
use super::amount::Amount;
use crate::cook::inflection::UnitNormalizer;
use crate::cook::quantity::ValueList;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: Amount,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: Amount) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Label with units inflected by `normalizer`
    pub fn label_with(&self, normalizer: &impl UnitNormalizer) -> String {
        format!("ING: {} [{}]", self.name, self.amount.label_with(normalizer))
    }
}

impl AstNode for Ingredient {
    fn node_type(&self) -> &'static str {
        "Ingredient"
    }

    fn display_label(&self) -> String {
        format!("ING: {} [{}]", self.name, self.amount.display_label())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_ingredient(self);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
}

impl Equipment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AstNode for Equipment {
    fn node_type(&self) -> &'static str {
        "Equipment"
    }

    fn display_label(&self) -> String {
        format!("EQ: {}", self.name)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_equipment(self);
    }
}

/// A named duration. The name may be empty for anonymous timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    #[serde(default)]
    pub name: String,
    pub quantity: ValueList,
    pub units: String,
}

impl Timer {
    pub fn new(name: impl Into<String>, quantity: ValueList, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            units: units.into(),
        }
    }
}

impl AstNode for Timer {
    fn node_type(&self) -> &'static str {
        "Timer"
    }

    fn display_label(&self) -> String {
        format!("TIMER({}): {} {}", self.name, self.quantity, self.units)
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_timer(self);
    }
}
