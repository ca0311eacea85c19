//! Constant nodes
//!
//! Bare values label themselves with their display rendering, so a quantity or a value list
//! can be printed or snapshotted like any other node.

use super::super::traits::{AstNode, Visitor};
use crate::cook::quantity::{Quantity, ValueList};

impl AstNode for Quantity {
    fn node_type(&self) -> &'static str {
        "Quantity"
    }

    fn display_label(&self) -> String {
        self.render()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_quantity(self);
    }
}

impl AstNode for ValueList {
    fn node_type(&self) -> &'static str {
        "ValueList"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_value_list(self);
        for quantity in self {
            quantity.accept(visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_constant_labels() {
        assert_eq!(Quantity::Integer(4).display_label(), "4");
        assert_eq!(Quantity::Decimal(Decimal::new(314159, 5)).display_label(), "3.1");
        assert_eq!(
            ValueList::new(vec![Quantity::Integer(1), Quantity::fraction(1, 2)]).display_label(),
            "1|1/2"
        );
    }

    #[test]
    fn test_value_list_visits_each_quantity() {
        struct Count(usize);
        impl crate::cook::ast::Visitor for Count {
            fn visit_quantity(&mut self, _: &Quantity) {
                self.0 += 1;
            }
        }

        let mut count = Count(0);
        ValueList::new(vec![Quantity::Integer(1), Quantity::text("some")]).accept(&mut count);
        assert_eq!(count.0, 2);
        assert!(ValueList::single(1).children().is_empty());
    }
}
