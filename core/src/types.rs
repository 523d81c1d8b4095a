//! Domain DTOs for the pizza API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A named ingredient option. Identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topping {
    pub id: i64,
    pub name: String,
}

/// A menu item returned by the API.
///
/// `toppings` is a set in meaning: order carries no weight for identity or
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub toppings: Vec<Topping>,
}

impl Pizza {
    pub fn topping_ids(&self) -> Vec<i64> {
        self.toppings.iter().map(|t| t.id).collect()
    }
}

/// Request payload for creating or updating a pizza.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PizzaPayload {
    pub name: String,
    pub topping_ids: Vec<i64>,
}

impl PizzaPayload {
    pub fn new(name: &str, toppings: &[Topping]) -> Self {
        Self {
            name: name.to_string(),
            topping_ids: toppings.iter().map(|t| t.id).collect(),
        }
    }
}
