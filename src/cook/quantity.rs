//! Quantities and value lists
//!
//! A quantity is how much of something a recipe asks for. Recipe authors write amounts in
//! whatever shape is natural to them, so a quantity is one of four things:
//!
//! | Variant  | Written as  | Numeric value           |
//! |----------|-------------|-------------------------|
//! | Integer  | `3`         | 3                       |
//! | Decimal  | `1.5`       | 1.5, exactly            |
//! | Fraction | `3/4`       | numerator / denominator |
//! | Text     | `a pinch`   | none                    |
//!
//! The three numeric variants compare by value, so `Integer(2)`, `Fraction(4, 2)` and
//! `Decimal(2.0)` are all equal. Text never compares equal to anything, not even an identical
//! text. Whether two free-text amounts ought to count as the same quantity is still an open
//! product question; until it is answered the comparison stays false.
//!
//! Decimals are `rust_decimal::Decimal` values: a 96 bit mantissa with a scale, so `0.1 + 0.2`
//! really is `0.3` and comparing a decimal with an integer never goes through a float.
//!
//! A [ValueList] is the ordered sequence of quantities attached to one amount mention, e.g. the
//! `1|2` in an amount that scales with servings.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Significant digits used when a decimal is rendered for display.
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 2;

/// A numeric-or-text amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Integer(i64),
    Decimal(Decimal),
    /// Numerator and denominator. The denominator is not validated here.
    Fraction(i64, i64),
    Text(String),
}

impl Quantity {
    pub fn fraction(numerator: i64, denominator: i64) -> Self {
        Quantity::Fraction(numerator, denominator)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Quantity::Text(value.into())
    }

    /// The common decimal value of a numeric quantity, `None` for text.
    ///
    /// # Panics
    ///
    /// A fraction with a zero denominator panics on division.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Quantity::Integer(v) => Some(Decimal::from(*v)),
            Quantity::Decimal(v) => Some(*v),
            Quantity::Fraction(n, d) => Some(Decimal::from(*n) / Decimal::from(*d)),
            Quantity::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Quantity::Text(_))
    }

    /// Render for display, rounding decimals to at most `significant_digits` digits.
    ///
    /// Integers print their digits, fractions print `numerator/denominator` as written (not
    /// reduced, not evaluated) and text prints itself.
    pub fn render_with(&self, significant_digits: u32) -> String {
        match self {
            Quantity::Integer(v) => v.to_string(),
            Quantity::Decimal(v) => render_decimal(*v, significant_digits),
            Quantity::Fraction(n, d) => format!("{}/{}", n, d),
            Quantity::Text(v) => v.clone(),
        }
    }

    pub fn render(&self) -> String {
        self.render_with(DEFAULT_SIGNIFICANT_DIGITS)
    }
}

/// Round a decimal to `significant_digits` and drop trailing zeros.
pub fn render_decimal(value: Decimal, significant_digits: u32) -> String {
    value
        .round_sf_with_strategy(
            significant_digits.max(1),
            RoundingStrategy::MidpointAwayFromZero,
        )
        .unwrap_or(value)
        .normalize()
        .to_string()
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (self.to_decimal(), other.to_decimal()) {
            (Some(a), Some(b)) => a == b,
            // Text on either side is never equal, Text vs Text included.
            _ => false,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Integer(value)
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Quantity::Decimal(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

/// Ordered quantities attached to a single amount mention.
///
/// Lists coming out of the parser are never empty. Consumers that need a value look only at
/// the first element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueList {
    values: Vec<Quantity>,
}

impl ValueList {
    pub fn new(values: Vec<Quantity>) -> Self {
        Self { values }
    }

    pub fn single(value: impl Into<Quantity>) -> Self {
        Self {
            values: vec![value.into()],
        }
    }

    pub fn first(&self) -> Option<&Quantity> {
        self.values.first()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quantity> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Quantity] {
        &self.values
    }
}

/// Positional comparison over the overlapping prefix of two lists.
///
/// Lengths are not compared: `[1]` equals `[1, 2, 3]`. This is the current contract of
/// `ValueList` equality; a length check would go here.
pub fn prefix_eq(a: &ValueList, b: &ValueList) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

impl PartialEq for ValueList {
    fn eq(&self, other: &Self) -> bool {
        prefix_eq(self, other)
    }
}

impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.values.iter().map(Quantity::render).collect();
        f.write_str(&rendered.join("|"))
    }
}

impl From<Vec<Quantity>> for ValueList {
    fn from(values: Vec<Quantity>) -> Self {
        Self::new(values)
    }
}

impl From<Quantity> for ValueList {
    fn from(value: Quantity) -> Self {
        Self::single(value)
    }
}

impl FromIterator<Quantity> for ValueList {
    fn from_iter<I: IntoIterator<Item = Quantity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ValueList {
    type Item = Quantity;
    type IntoIter = std::vec::IntoIter<Quantity>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a Quantity;
    type IntoIter = std::slice::Iter<'a, Quantity>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_numeric_variants_compare_by_value() {
        let two = Quantity::Integer(2);
        assert_eq!(two, Quantity::fraction(4, 2));
        assert_eq!(two, Quantity::Decimal(dec("2.0")));
        assert_eq!(Quantity::fraction(1, 2), Quantity::Decimal(dec("0.5")));
        assert_ne!(two, Quantity::Integer(3));
    }

    #[test]
    fn test_text_is_never_equal() {
        assert_ne!(Quantity::text("a pinch"), Quantity::Integer(1));
        assert_ne!(Quantity::Integer(1), Quantity::text("1"));
        // Identical text still compares unequal; see the module docs.
        assert_ne!(Quantity::text("a pinch"), Quantity::text("a pinch"));
    }

    #[test]
    fn test_render() {
        assert_eq!(Quantity::Integer(150).render(), "150");
        assert_eq!(Quantity::fraction(3, 4).render(), "3/4");
        assert_eq!(Quantity::fraction(4, 2).render(), "4/2");
        assert_eq!(Quantity::text("to taste").render(), "to taste");
        assert_eq!(Quantity::Decimal(dec("3.14159")).render(), "3.1");
        assert_eq!(Quantity::Decimal(dec("2.50")).render(), "2.5");
        assert_eq!(Quantity::Decimal(dec("2.0")).render(), "2");
        assert_eq!(Quantity::Decimal(dec("0.3333")).render(), "0.33");
    }

    #[test]
    fn test_render_with_more_digits() {
        assert_eq!(Quantity::Decimal(dec("3.14159")).render_with(4), "3.142");
    }

    #[test]
    #[should_panic]
    fn test_zero_denominator_panics() {
        Quantity::fraction(1, 0).to_decimal();
    }

    #[test]
    fn test_value_list_display() {
        let list = ValueList::new(vec![
            Quantity::Integer(1),
            Quantity::fraction(1, 2),
            Quantity::text("some"),
        ]);
        assert_eq!(list.to_string(), "1|1/2|some");
    }

    #[test]
    fn test_value_list_prefix_equality() {
        let short = ValueList::single(1);
        let long = ValueList::new(vec![
            Quantity::Integer(1),
            Quantity::Integer(2),
            Quantity::Integer(3),
        ]);
        assert_eq!(short, long);
        assert_ne!(ValueList::single(2), long);
    }

    #[test]
    fn test_value_list_iterates_in_order() {
        let list: ValueList = vec![Quantity::Integer(1), Quantity::Integer(2)].into();
        let rendered: Vec<String> = list.iter().map(|q| q.render()).collect();
        assert_eq!(rendered, vec!["1", "2"]);
        assert_eq!(list.into_iter().count(), 2);
    }

    #[test]
    fn test_serde_shape() {
        let list = ValueList::new(vec![Quantity::Integer(2), Quantity::fraction(1, 2)]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"integer":2},{"fraction":[1,2]}]"#);
        let back: ValueList = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
    }
}
