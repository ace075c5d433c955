//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the `Transport` implementation supplied by the
//! host executes the actual I/O. This separation keeps the core deterministic
//! and easy to test: unit tests script a fake transport, integration tests
//! plug in a real HTTP agent.
//!
//! All fields use owned types (`String`, `Vec`) so values carry no lifetime
//! concerns across the transport boundary.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `TaskService::build_*` methods and handed to a [`Transport`] for
/// execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`] after executing an `HttpRequest`, then passed
/// to `TaskService::parse_response` for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes HTTP round trips on behalf of the core.
///
/// A non-2xx response is NOT a transport failure: it must be returned as an
/// `HttpResponse` so the caller can interpret the status. `Err` is reserved
/// for network-level failures — connection refused, DNS, timeouts — where no
/// response exists at all.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// A network-level failure for which no HTTP response exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failed: {}", self.0)
    }
}

impl std::error::Error for TransportError {}
