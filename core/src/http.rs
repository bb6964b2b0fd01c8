//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! stateless client builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; an executor (`HttpStore`, or a
//! test harness) performs the actual round-trip in between. This keeps the
//! wire layer deterministic and easy to test.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved into
//! detached tasks without lifetime concerns.

/// HTTP method for a request. Only the methods the todo API surface uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods. The executor is responsible for
/// performing this request against the network and returning the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after performing an `HttpRequest`, then passed
/// to `TodoClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
