//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TaskService` holds only the resolved base path and carries no mutable
//! state between calls. Each operation is a `build_*` method producing an
//! `HttpRequest`; every operation returns the same `CommonResponse` envelope,
//! so a single `parse_response` consumes the `HttpResponse`. The transport
//! executes the actual round trip between the two, keeping this layer
//! deterministic and free of I/O.
//!
//! No retries, no timeouts, no caching. Calls are independent; concurrent
//! calls are not deduplicated or coordinated.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CommonResponse, TaskRequest};

/// Stateless client for the three task API operations.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct TaskService {
    task_base_url: String,
}

impl TaskService {
    /// `base_url` is the server root; the `/task` prefix shared by every
    /// operation is appended here once.
    pub fn new(base_url: &str) -> Self {
        Self {
            task_base_url: format!("{}/task", base_url.trim_end_matches('/')),
        }
    }

    /// POST `/task/create` with the creation DTO as the JSON body.
    pub fn build_create_task(&self, request: &TaskRequest) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(request)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/create", self.task_base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// GET `/task/get-all-pending-todos`.
    pub fn build_pending_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/get-all-pending-todos", self.task_base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST `/task/make-todo-completed` with the id as a query parameter.
    ///
    /// TODO: confirm the parameter style against the real backend — the
    /// contract is ambiguous about whether the id travels as a query
    /// parameter or inside a JSON body; the query form is the evident
    /// intent.
    pub fn build_complete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/make-todo-completed?id={id}", self.task_base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Deserialize the `CommonResponse` envelope out of any 2xx response.
    ///
    /// A non-2xx status is a hard failure; the envelope's own `status` field
    /// is NOT interpreted here — soft failures are the component's concern.
    pub fn parse_response(&self, response: HttpResponse) -> Result<CommonResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-2xx status codes to `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
