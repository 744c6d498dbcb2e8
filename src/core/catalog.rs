//! The product catalog shown on the storefront screen.
//!
//! Items can be supplied through `[[products]]` entries in the config
//! file; without any, the built-in demo inventory is used.

use serde::{Deserialize, Serialize};

/// A single storefront item. Prices are display strings (the demo never
/// does arithmetic on them).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub price: String,
}

/// The demo inventory.
pub fn default_catalog() -> Vec<Product> {
    [
        ("Camisa Polo", "R$ 79,90"),
        ("Calça Jeans", "R$ 120,00"),
        ("Jaqueta Verde", "R$ 199,90"),
    ]
    .into_iter()
    .map(|(name, price)| Product {
        name: name.to_string(),
        price: price.to_string(),
    })
    .collect()
}
