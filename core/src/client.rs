//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ShoppingClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`; the caller runs the round-trip in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{DeleteConfirmation, ItemFields, ShoppingItem};

/// Synchronous, stateless client for the `/items` API.
///
/// `base_url` is the API root, e.g. `http://localhost:5000/api`.
#[derive(Debug, Clone)]
pub struct ShoppingClient {
    base_url: String,
}

impl ShoppingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/items", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &ItemFields) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/items", self.base_url),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_item(&self, id: &str, input: &ItemFields) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/items/{id}", self.base_url),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_item(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/items/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<ShoppingItem>, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    /// Both 200 and 201 are accepted; deployed servers disagree on which one
    /// a create answers with.
    pub fn parse_create_item(&self, response: HttpResponse) -> Result<ShoppingItem, ApiError> {
        check_status(&response, &[200, 201])?;
        from_json(&response.body)
    }

    /// `Ok(None)` means the server no longer has the item (it answers `null`).
    pub fn parse_update_item(
        &self,
        response: HttpResponse,
    ) -> Result<Option<ShoppingItem>, ApiError> {
        check_status(&response, &[200])?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        from_json(&response.body)
    }

    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<DeleteConfirmation, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &ItemFields) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
