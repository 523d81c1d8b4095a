//! Error types for the pizza API client.
//!
//! # Design
//! `ApiError` covers everything that can go wrong around a network call.
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." `ValidationError` is raised before any request is built, and its
//! display text is the exact message shown to the user.

use thiserror::Error;

/// Errors from building, sending or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Reasons a proposed pizza edit is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Pizza name cannot be blank.")]
    BlankName,

    #[error("New Pizza name already exists elsewhere on the menu.")]
    DuplicateName,

    #[error("There is a pizza with the exact set of toppings already on the menu.")]
    DuplicateToppings,
}

/// Outcome of the edit workflow when it does not complete.
#[derive(Debug, Error)]
pub enum PizzaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
