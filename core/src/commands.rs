//! The four pizza commands: list, create, delete and update.
//!
//! # Design
//! `PizzaService` pairs the stateless `PizzaClient` with an injected
//! `Transport`. Each command does exactly one round-trip and, on success,
//! hands a replacement snapshot to the caller's `PizzaStore`. Failure
//! reporting differs per command:
//! - list: logged, store untouched
//! - create: returned to the caller untouched
//! - delete and update: shown to the user through `Interaction`, then returned

use tracing::{error, info, instrument, warn};

use crate::client::PizzaClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::store::{Interaction, NewPizzaForm, PizzaStore};
use crate::transport::Transport;
use crate::types::{Pizza, PizzaPayload, Topping};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this pizza?";

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Declined,
}

pub struct PizzaService<T> {
    client: PizzaClient,
    transport: T,
}

impl<T: Transport> PizzaService<T> {
    pub fn new(client: PizzaClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn from_config(config: &ClientConfig, transport: T) -> Self {
        Self::new(PizzaClient::from_config(config), transport)
    }

    /// Replace the store's collection with the server's menu.
    #[instrument(skip_all)]
    pub fn fetch_pizzas(&self, store: &mut impl PizzaStore) -> Result<(), ApiError> {
        let result = self
            .transport
            .execute(self.client.build_list_pizzas())
            .and_then(|response| self.client.parse_list_pizzas(response));

        match result {
            Ok(pizzas) => {
                store.replace(pizzas);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "error fetching pizzas");
                Err(e)
            }
        }
    }

    /// Create a pizza from the form, append it to the store and clear the form.
    #[instrument(skip_all, fields(name = %form.name))]
    pub fn add_pizza(
        &self,
        form: &mut NewPizzaForm,
        store: &mut impl PizzaStore,
    ) -> Result<Pizza, ApiError> {
        let payload = PizzaPayload {
            name: form.name.clone(),
            topping_ids: form.topping_ids.clone(),
        };
        let request = self.client.build_create_pizza(&payload)?;
        let created = self
            .client
            .parse_create_pizza(self.transport.execute(request)?)?;

        let mut pizzas = store.list();
        pizzas.push(created.clone());
        store.replace(pizzas);
        form.clear();

        info!(id = created.id, "pizza created");
        Ok(created)
    }

    /// Delete pizza `id` after the user confirms.
    #[instrument(skip(self, store, ui))]
    pub fn delete_pizza(
        &self,
        id: i64,
        store: &mut impl PizzaStore,
        ui: &impl Interaction,
    ) -> Result<Deletion, ApiError> {
        if !ui.confirm(DELETE_PROMPT) {
            warn!("delete declined");
            return Ok(Deletion::Declined);
        }

        let result = self
            .transport
            .execute(self.client.build_delete_pizza(id))
            .and_then(|response| self.client.parse_delete_pizza(response));

        if let Err(e) = result {
            error!(error = %e, "error deleting pizza");
            ui.notify(&format!("Error deleting pizza: {e}"));
            return Err(e);
        }

        let remaining: Vec<Pizza> = store.list().into_iter().filter(|p| p.id != id).collect();
        store.replace(remaining);
        info!("pizza deleted");
        Ok(Deletion::Deleted)
    }

    /// Send an edit to the server. The store is left to the caller.
    #[instrument(skip(self, toppings, ui))]
    pub fn update_pizza(
        &self,
        id: i64,
        name: &str,
        toppings: &[Topping],
        ui: &impl Interaction,
    ) -> Result<Pizza, ApiError> {
        let result = self
            .client
            .build_update_pizza(id, &PizzaPayload::new(name, toppings))
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update_pizza(response));

        match result {
            Ok(pizza) => {
                info!("pizza updated");
                Ok(pizza)
            }
            Err(e) => {
                error!(error = %e, "error updating pizza");
                ui.notify(&format!("Error updating pizza: {e}"));
                Err(e)
            }
        }
    }
}
