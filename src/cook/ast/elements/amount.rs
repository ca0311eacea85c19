//! Amount element
//!
//! An amount is the `{2%cups}` part of an ingredient mention: a value list and a unit. Its
//! label reads like a phrase, with the unit inflected for the first value:
//!
//! | First value   | Label            | Unit inflected as |
//! |---------------|------------------|-------------------|
//! | Integer(3)    | `3 cups`         | count 3           |
//! | Integer(1)    | `1 cup`          | count 1           |
//! | Decimal(1.5)  | `1.5 cups`       | always plural     |
//! | Fraction(1,2) | `1/2 cup`        | always singular   |
//! | Text / none   | `a pinch pinch`  | verbatim          |

use super::super::traits::{AstNode, Visitor};
use crate::cook::inflection::{default_inflector, UnitNormalizer};
use crate::cook::quantity::{Quantity, ValueList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub quantity: ValueList,
    #[serde(default)]
    pub units: String,
}

impl Amount {
    pub fn new(quantity: ValueList, units: impl Into<String>) -> Self {
        Self {
            quantity,
            units: units.into(),
        }
    }

    /// Label with units inflected by `normalizer`
    pub fn label_with(&self, normalizer: &impl UnitNormalizer) -> String {
        match self.quantity.first() {
            Some(Quantity::Integer(value)) => {
                format!("{} {}", value, normalizer.pluralize(&self.units, *value))
            }
            Some(value @ Quantity::Decimal(_)) => {
                format!("{} {}", value, normalizer.pluralize(&self.units, 2))
            }
            Some(value @ Quantity::Fraction(..)) => {
                format!("{} {}", value, normalizer.pluralize(&self.units, 1))
            }
            _ => format!("{} {}", self.quantity, self.units),
        }
    }
}

impl AstNode for Amount {
    fn node_type(&self) -> &'static str {
        "Amount"
    }

    fn display_label(&self) -> String {
        self.label_with(default_inflector())
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_amount(self);
        self.quantity.accept(visitor);
    }
}
