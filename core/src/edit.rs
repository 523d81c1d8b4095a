//! Committing an in-place edit of a pizza.

use tracing::{info, instrument, warn};

use crate::commands::PizzaService;
use crate::error::PizzaError;
use crate::store::{Interaction, PizzaStore};
use crate::transport::Transport;
use crate::types::{Pizza, Topping};
use crate::validate::validate_edit;

impl<T: Transport> PizzaService<T> {
    /// Validate, send and apply an edit of `pizza`, then leave edit mode.
    ///
    /// A rejected edit is shown to the user and never reaches the network.
    /// If the update request fails, the error has already been shown by
    /// [`PizzaService::update_pizza`]; the store is left untouched and
    /// `on_cancel_edit` is not called, so edit mode stays open for a retry.
    #[instrument(skip(self, pizza, edited_toppings, store, ui, on_cancel_edit), fields(id = pizza.id))]
    pub fn save_edit(
        &self,
        pizza: &Pizza,
        edited_name: &str,
        edited_toppings: &[Topping],
        store: &mut impl PizzaStore,
        ui: &impl Interaction,
        on_cancel_edit: impl FnOnce(),
    ) -> Result<(), PizzaError> {
        let current = store.list();

        if let Err(invalid) = validate_edit(pizza, edited_name, edited_toppings, &current) {
            warn!(reason = %invalid, "edit rejected");
            ui.notify(&invalid.to_string());
            return Err(invalid.into());
        }

        self.update_pizza(pizza.id, edited_name, edited_toppings, ui)?;

        let updated: Vec<Pizza> = current
            .into_iter()
            .map(|mut entry| {
                if entry.id == pizza.id {
                    entry.name = edited_name.to_string();
                    entry.toppings = edited_toppings.to_vec();
                }
                entry
            })
            .collect();
        store.replace(updated);
        on_cancel_edit();

        info!("edit saved");
        Ok(())
    }
}
