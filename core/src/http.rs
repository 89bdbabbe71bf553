//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values; a host-supplied [`Transport`]
//! performs the network round-trip in between.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes requests on behalf of the core.
///
/// Implementations return non-2xx responses as data; `Err` is reserved for
/// failures where no response arrived at all.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F> Transport for F
where
    F: FnMut(HttpRequest) -> Result<HttpResponse, ApiError>,
{
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}
