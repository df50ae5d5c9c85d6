//! The fixed café menu. There is no inventory behind it: items are built on
//! demand and never change for the lifetime of the process.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CoffeeItem {
    pub id: u32,
    pub name: String,
    /// Decimal price serialised as a string, e.g. "3.75"
    #[schema(value_type = String, example = "3.75")]
    #[serde(deserialize_with = "crate::domain::money::deserialize")]
    pub price: BigDecimal,
    pub description: String,
}

/// (id, name, price in cents, description)
const MENU: [(u32, &str, i64, &str); 6] = [
    (1, "Espresso", 250, "Rich and bold espresso shot"),
    (2, "Cappuccino", 375, "Creamy cappuccino with foam art"),
    (3, "Latte", 425, "Smooth latte with steamed milk"),
    (4, "Americano", 300, "Classic black coffee"),
    (5, "Mocha", 475, "Rich chocolate coffee blend"),
    (6, "Cold Brew", 350, "Smooth cold brewed coffee"),
];

fn build(entry: &(u32, &str, i64, &str)) -> CoffeeItem {
    let (id, name, cents, description) = *entry;
    CoffeeItem {
        id,
        name: name.to_string(),
        price: BigDecimal::new(cents.into(), 2),
        description: description.to_string(),
    }
}

/// The whole menu, in display order.
pub fn coffee_items() -> Vec<CoffeeItem> {
    MENU.iter().map(build).collect()
}

pub fn find(id: u32) -> Option<CoffeeItem> {
    MENU.iter().find(|entry| entry.0 == id).map(build)
}
