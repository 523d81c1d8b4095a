//! Synchronous API client core for the pizza menu service.
//!
//! # Overview
//! `PizzaClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `PizzaService` runs
//! those requests through an injected `Transport` and writes the results back
//! into a caller-owned `PizzaStore`, reporting failures through an
//! `Interaction`.
//!
//! # Design
//! - `PizzaClient` is stateless; it holds only the base URL.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Edits are checked by `validate_edit` before anything is sent.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod commands;
pub mod config;
mod edit;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

pub use client::PizzaClient;
pub use commands::{Deletion, PizzaService};
pub use config::ClientConfig;
pub use error::{ApiError, PizzaError, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{Interaction, NewPizzaForm, PizzaStore};
pub use transport::{Transport, UreqTransport};
pub use types::{Pizza, PizzaPayload, Topping};
pub use validate::validate_edit;
