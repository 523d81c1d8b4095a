//! Caller-owned state the command functions read from and write back to.
//!
//! The collection is always replaced wholesale, never patched in place.

use crate::types::Pizza;

/// The menu as currently displayed.
pub trait PizzaStore {
    /// A snapshot of the current collection.
    fn list(&self) -> Vec<Pizza>;

    fn replace(&mut self, pizzas: Vec<Pizza>);
}

impl PizzaStore for Vec<Pizza> {
    fn list(&self) -> Vec<Pizza> {
        self.clone()
    }

    fn replace(&mut self, pizzas: Vec<Pizza>) {
        *self = pizzas;
    }
}

/// Inputs of the "new pizza" form, cleared after a successful create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPizzaForm {
    pub name: String,
    pub topping_ids: Vec<i64>,
}

impl NewPizzaForm {
    pub fn new(name: &str, topping_ids: Vec<i64>) -> Self {
        Self {
            name: name.to_string(),
            topping_ids,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.topping_ids.clear();
    }
}

/// Blocking user dialogs: a Yes/No prompt and a message box.
pub trait Interaction {
    fn confirm(&self, message: &str) -> bool;

    fn notify(&self, message: &str);
}
