//! Stateless HTTP request builder and response parser for the trip API.
//!
//! # Design
//! `TripClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip (see
//! [`crate::TripService`] for the async wiring), keeping this layer
//! deterministic and free of I/O dependencies.
//!
//! Urls are built by plain string concatenation on top of `base_url`; no
//! encoding or local validation happens here — a bad page number or id is
//! the server's problem to reject.

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTrip, Trip, TripPassenger};

/// Stateless request builder / response parser for the trip API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TripClient {
    base_url: String,
}

impl TripClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/trips/my` — the calling user's trip history. The transport is
    /// expected to attach the `authorization` header identifying the user.
    pub fn build_history(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/trips/my", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST `/trips` with the trip serialized as the JSON body.
    pub fn build_create_trip(&self, input: &NewTrip) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/trips", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// GET `/trips` — the full trip collection.
    pub fn build_list_trips(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/trips", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// GET `/trips?page=<page>` — one page of the trip collection. The
    /// page number is forwarded as-is; bounds are the server's concern.
    pub fn build_trip_page(&self, page: u32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/trips?page={page}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// GET `/trips/<id>` — a single trip.
    pub fn build_get_trip(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/trips/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST `/trips/<id>/join` with no body. The joining user is
    /// identified by the transport's `authorization` header.
    pub fn build_join_trip(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/trips/{id}/join", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// GET `/trips/<id>/passengers` — the passengers of a trip.
    pub fn build_list_passengers(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/trips/{id}/passengers", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_history(&self, response: HttpResponse) -> Result<Vec<Trip>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_trip(&self, response: HttpResponse) -> Result<Trip, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_list_trips(&self, response: HttpResponse) -> Result<Vec<Trip>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_trip_page(&self, response: HttpResponse) -> Result<Vec<Trip>, ApiError> {
        self.parse_list_trips(response)
    }

    pub fn parse_get_trip(&self, response: HttpResponse) -> Result<Trip, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_join_trip(&self, response: HttpResponse) -> Result<TripPassenger, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_list_passengers(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<TripPassenger>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
