//! Async trip operations over a [`Transport`].
//!
//! # Design
//! `TripService` glues the deterministic build/parse layer to a transport
//! collaborator: every operation builds its request, awaits exactly one
//! `send`, and parses the response. Concurrent calls are independent and
//! unordered; there is no local retry, caching, cancellation, or timeout —
//! if any of those exist, they live in the transport.

use uuid::Uuid;

use crate::client::TripClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{NewTrip, Trip, TripPassenger};

/// Trip API operations bound to a transport.
#[derive(Debug)]
pub struct TripService<T> {
    client: TripClient,
    transport: T,
}

impl<T: Transport> TripService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TripClient::new(base_url),
            transport,
        }
    }

    /// GET `/trips/my` — the calling user's trip history.
    pub async fn get_history(&self) -> Result<Vec<Trip>, ApiError> {
        let req = self.client.build_history();
        let resp = self.dispatch(req).await?;
        self.client.parse_history(resp)
    }

    /// POST `/trips` — create a trip from the given payload.
    pub async fn create_trip(&self, input: &NewTrip) -> Result<Trip, ApiError> {
        let req = self.client.build_create_trip(input)?;
        let resp = self.dispatch(req).await?;
        self.client.parse_create_trip(resp)
    }

    /// GET `/trips` — the full trip collection.
    pub async fn get_all_trips(&self) -> Result<Vec<Trip>, ApiError> {
        let req = self.client.build_list_trips();
        let resp = self.dispatch(req).await?;
        self.client.parse_list_trips(resp)
    }

    /// GET `/trips?page=<page>` — one page of the trip collection.
    pub async fn get_trip_page(&self, page: u32) -> Result<Vec<Trip>, ApiError> {
        let req = self.client.build_trip_page(page);
        let resp = self.dispatch(req).await?;
        self.client.parse_trip_page(resp)
    }

    /// GET `/trips/<id>` — a single trip, or `NotFound`.
    pub async fn get_trip(&self, id: Uuid) -> Result<Trip, ApiError> {
        let req = self.client.build_get_trip(id);
        let resp = self.dispatch(req).await?;
        self.client.parse_get_trip(resp)
    }

    /// POST `/trips/<id>/join` — join a trip as the calling user.
    pub async fn join_trip(&self, id: Uuid) -> Result<TripPassenger, ApiError> {
        let req = self.client.build_join_trip(id);
        let resp = self.dispatch(req).await?;
        self.client.parse_join_trip(resp)
    }

    /// GET `/trips/<id>/passengers` — the passengers of a trip.
    pub async fn get_passengers(&self, id: Uuid) -> Result<Vec<TripPassenger>, ApiError> {
        let req = self.client.build_list_passengers(id);
        let resp = self.dispatch(req).await?;
        self.client.parse_list_passengers(resp)
    }

    async fn dispatch(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{:?} {}", req.method, req.path);
        self.transport.send(req).await
    }
}
