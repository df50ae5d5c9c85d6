use bigdecimal::{BigDecimal, RoundingMode};

use crate::domain::catalog::CoffeeItem;
use crate::domain::order::CartItem;

/// The customer's selection. It lives only in the client and is never
/// persisted; checkout sends it once and clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one of `item`, bumping the quantity if it is already in the cart.
    pub fn add(&mut self, item: &CoffeeItem) {
        match self.items.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartItem::new(item.clone())),
        }
    }

    /// Applies `change` to the quantity of item `id`. A line whose quantity
    /// would reach zero or below is dropped. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: u32, change: i64) {
        self.items.retain_mut(|line| {
            if line.item.id != id {
                return true;
            }
            let quantity = i64::from(line.quantity) + change;
            match u32::try_from(quantity) {
                Ok(q) if q > 0 => {
                    line.quantity = q;
                    true
                }
                _ => false,
            }
        });
    }

    /// Σ price × quantity, rounded to cents.
    pub fn total_price(&self) -> BigDecimal {
        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(BigDecimal::from(0), |acc, line| acc + line)
            .with_scale_round(2, RoundingMode::HalfUp)
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
