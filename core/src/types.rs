//! Domain DTOs for the trip API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined
//! independently from the mock-server crate; integration tests catch any
//! schema drift between the two. Timestamps travel as RFC 3339 strings on
//! the wire and as `OffsetDateTime` in memory.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Lifecycle state of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    NotStarted,
    InProgress,
    Finished,
}

/// A named geographic point along a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripLocation {
    pub name: String,
    pub place_id: String,
    pub lat: f64,
    pub lon: f64,
}

/// A trip as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub passenger_limit: u32,
    pub source: TripLocation,
    pub destination: TripLocation,
    /// Intermediate stops, in driving order.
    #[serde(default)]
    pub mid: Vec<TripLocation>,
    pub status: TripStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Request payload for creating a new trip.
///
/// The server assigns `id`, `status`, and `created_at`; everything else is
/// forwarded as given, with no local validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTrip {
    pub driver_id: Uuid,
    pub passenger_limit: u32,
    pub source: TripLocation,
    pub destination: TripLocation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mid: Vec<TripLocation>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

/// A passenger's membership in a trip.
///
/// `status` is a server-defined open set ("pending", "accepted", ...), so
/// it stays a plain string rather than an enum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripPassenger {
    pub trip_id: Uuid,
    pub passenger_id: Uuid,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
