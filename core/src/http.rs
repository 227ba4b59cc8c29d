//! HTTP request and response types for the trip API.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The client builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network — executing the round-trip belongs to a
//! [`crate::Transport`] implementation (or any other host). The trip API
//! only ever uses GET and POST, so `HttpMethod` carries nothing else.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across task and thread boundaries.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `TripClient::build_*` methods. Whoever executes this request
/// is responsible for returning the corresponding `HttpResponse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor of an `HttpRequest`, then passed to
/// `TripClient::parse_*` methods for status handling and deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
