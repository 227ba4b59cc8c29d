//! API client for the trip service.
//!
//! # Overview
//! `TripClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern), keeping the
//! request/response handling fully deterministic and testable.
//! `TripService` layers an async [`Transport`] on top so each operation is
//! a single awaitable call that delegates the actual round-trip to the
//! transport collaborator.
//!
//! # Design
//! - `TripClient` is stateless — it holds only `base_url`.
//! - Each endpoint is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `Transport` implementations own network I/O and auth header
//!   injection; their errors reach the caller unaltered.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::TripClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::TripService;
pub use transport::Transport;
pub use types::{NewTrip, Trip, TripLocation, TripPassenger, TripStatus};
