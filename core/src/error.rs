//! Error types for the trip API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently
//! distinguish "the trip does not exist" from "the server returned an
//! unexpected status." All other non-2xx responses land in `HttpError`
//! with the raw status code and body. `TransportError` is produced only by
//! [`crate::Transport`] implementations; the client never remaps it, so a
//! transport failure reaches the caller exactly as the transport reported
//! it.

/// Errors returned by `TripClient` parse methods and `Transport` sends.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested trip does not exist.
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

    /// The transport collaborator failed to complete the round-trip.
    #[error("transport error: {0}")]
    TransportError(String),
}
