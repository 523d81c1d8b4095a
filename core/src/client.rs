//! Stateless HTTP request builder and response parser for the pizza API.
//!
//! # Design
//! `PizzaClient` holds only the configured base URL and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Something else executes the round-trip in between.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Pizza, PizzaPayload};

const PIZZAS_PATH: &str = "/api/v1/pizzas";

/// Synchronous, stateless client for the pizza API.
#[derive(Debug, Clone)]
pub struct PizzaClient {
    base_url: String,
}

impl PizzaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn build_list_pizzas(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_pizza(&self, input: &PizzaPayload) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_pizza(&self, id: i64, input: &PizzaPayload) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.member_url(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_pizza(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_pizzas(&self, response: HttpResponse) -> Result<Vec<Pizza>, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    /// Rails answers 201, some servers answer 200; both carry the new pizza.
    pub fn parse_create_pizza(&self, response: HttpResponse) -> Result<Pizza, ApiError> {
        check_status(&response, &[201, 200])?;
        from_json(&response.body)
    }

    pub fn parse_update_pizza(&self, response: HttpResponse) -> Result<Pizza, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    pub fn parse_delete_pizza(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[204, 200])?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}{PIZZAS_PATH}", self.base_url)
    }

    fn member_url(&self, id: i64) -> String {
        format!("{}{PIZZAS_PATH}/{id}", self.base_url)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &PizzaPayload) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
