//! Client-side checks for a proposed pizza edit.

use crate::error::ValidationError;
use crate::types::{Pizza, Topping};

/// Decide whether `pizza` may be saved as `new_name` with `new_toppings`,
/// given the rest of the menu in `all_pizzas`.
///
/// Checks run in order and the first failure wins: blank name, name clash
/// with another pizza (case-insensitive), then another pizza carrying exactly
/// the same set of topping ids. The entry sharing `pizza.id` is excluded from
/// both comparisons.
///
/// Two pizzas without toppings count as the same topping set.
pub fn validate_edit(
    pizza: &Pizza,
    new_name: &str,
    new_toppings: &[Topping],
    all_pizzas: &[Pizza],
) -> Result<(), ValidationError> {
    if new_name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }

    let mut others = all_pizzas.iter().filter(|other| other.id != pizza.id);

    let normalized = new_name.to_lowercase();
    if others.clone().any(|other| other.name.to_lowercase() == normalized) {
        return Err(ValidationError::DuplicateName);
    }

    let new_ids: Vec<i64> = new_toppings.iter().map(|t| t.id).collect();
    if others.any(|other| {
        other.toppings.len() == new_toppings.len()
            && other.toppings.iter().all(|t| new_ids.contains(&t.id))
    }) {
        return Err(ValidationError::DuplicateToppings);
    }

    Ok(())
}
