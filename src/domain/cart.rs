use serde::{Deserialize, Serialize};

use crate::domain::menu_item::MenuItem;

/// One candidate purchase line in the cart. Prices are captured at the time
/// the line is added and are not re-read from the catalog afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: i32,
    pub name: String,
    pub unit_price_cents: i32,
    pub quantity: i32,
    pub line_total_cents: i32,
}

/// Session-scoped accumulator for the order currently being built. The cart
/// is never persisted; it lives in the session cookie until the order is
/// submitted, the user clears it, or the session ends.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for `quantity` units of `item`. Repeated additions of
    /// the same item stay separate lines; nothing is merged.
    pub fn add(&mut self, item: &MenuItem, quantity: i32) {
        self.lines.push(CartLine {
            item_id: item.id,
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity,
            line_total_cents: item.price_cents * quantity,
        });
    }

    /// Drop every line. Invoked on explicit clear, successful submission and
    /// logout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line totals; 0 for an empty cart.
    pub fn total_cents(&self) -> i32 {
        self.lines.iter().map(|line| line.line_total_cents).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, name: &str, price_cents: i32) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: None,
            price_cents,
            category_id: None,
            is_available: true,
        }
    }

    #[test]
    fn total_accumulates_over_added_lines() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_cents(), 0);

        cart.add(&item(1, "Burger", 800), 2);
        cart.add(&item(2, "Soda", 200), 3);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_cents(), 2200);
        assert_eq!(cart.lines()[0].line_total_cents, 1600);
        assert_eq!(cart.lines()[1].line_total_cents, 600);
    }

    #[test]
    fn repeated_items_are_not_merged() {
        let mut cart = Cart::new();
        let burger = item(1, "Burger", 800);

        cart.add(&burger, 1);
        cart.add(&burger, 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_cents(), 1600);
        assert_eq!(cart.lines()[0], cart.lines()[1]);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(&item(1, "Burger", 800), 4);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn line_captures_price_at_add_time() {
        let mut cart = Cart::new();
        let mut espresso = item(7, "Espresso", 250);
        cart.add(&espresso, 1);

        // A later catalog price change must not affect the captured line.
        espresso.price_cents = 300;

        assert_eq!(cart.lines()[0].unit_price_cents, 250);
        assert_eq!(cart.total_cents(), 250);
    }
}
