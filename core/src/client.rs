//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each route is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{codes, CreateTodo, ErrorBody, Todo, UpdateTodo, ValidationErrorBody};

/// Result of a successful create: the todo plus the `Location` it lives at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub todo: Todo,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    fn without_body(method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        Self::without_body(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        Self::without_body(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Self::with_json(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_replace_todo(&self, id: i64, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Self::with_json(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_patch_todo(&self, id: i64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        Self::with_json(HttpMethod::Patch, self.item_url(id), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        Self::without_body(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Created, ApiError> {
        check_status(&response, 201)?;
        Ok(Created {
            todo: decode(&response.body)?,
            location: response.header("location").map(str::to_string),
        })
    }

    pub fn parse_replace_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_patch_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => {
            let body = serde_json::from_str::<ErrorBody>(&response.body).unwrap_or_else(|_| ErrorBody {
                message: "resource not found".to_string(),
                code: codes::TODO_NOT_FOUND,
                field: None,
            });
            Err(ApiError::NotFound(body))
        }
        400 => match serde_json::from_str::<ValidationErrorBody>(&response.body) {
            Ok(body) => Err(ApiError::Validation(body)),
            Err(_) => Err(http_error(response)),
        },
        _ => Err(http_error(response)),
    }
}

fn http_error(response: &HttpResponse) -> ApiError {
    ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    }
}
