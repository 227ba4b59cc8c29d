//! In-memory trip API server used by integration tests.
//!
//! Implements the trip endpoints over a `HashMap` behind an `RwLock`. The
//! caller is identified by the `authorization: Bearer <uuid>` header, the
//! same header the real service authenticates; here the token is taken at
//! face value as the user id.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Trips per page for `GET /trips?page=n`.
pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TripLocation {
    pub name: String,
    pub place_id: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub passenger_limit: u32,
    pub source: TripLocation,
    pub destination: TripLocation,
    #[serde(default)]
    pub mid: Vec<TripLocation>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Deserialize)]
pub struct NewTrip {
    pub driver_id: Uuid,
    pub passenger_limit: u32,
    pub source: TripLocation,
    pub destination: TripLocation,
    #[serde(default)]
    pub mid: Vec<TripLocation>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripPassenger {
    pub trip_id: Uuid,
    pub passenger_id: Uuid,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
}

#[derive(Default)]
pub struct AppState {
    pub trips: HashMap<Uuid, Trip>,
    pub passengers: HashMap<Uuid, Vec<TripPassenger>>,
}

pub type Db = Arc<RwLock<AppState>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(AppState::default()));
    Router::new()
        .route("/trips", get(list_trips).post(create_trip))
        .route("/trips/my", get(my_trips))
        .route("/trips/{id}", get(get_trip))
        .route("/trips/{id}/join", post(join_trip))
        .route("/trips/{id}/passengers", get(list_passengers))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Extract the caller's id from `authorization: Bearer <uuid>`.
fn bearer_user(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token).ok()
}

/// Stable listing order: oldest first, ties broken by id.
fn sorted_trips(trips: impl Iterator<Item = Trip>) -> Vec<Trip> {
    let mut trips: Vec<Trip> = trips.collect();
    trips.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    trips
}

async fn list_trips(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Trip>> {
    let state = db.read().await;
    let trips = sorted_trips(state.trips.values().cloned());
    let trips = match params.page {
        // Pages are 1-based; page 0 is treated as page 1. Out-of-range
        // pages yield an empty list.
        Some(page) => {
            let start = (page.max(1) as usize - 1) * PAGE_SIZE;
            trips.into_iter().skip(start).take(PAGE_SIZE).collect()
        }
        None => trips,
    };
    Json(trips)
}

async fn create_trip(
    State(db): State<Db>,
    Json(input): Json<NewTrip>,
) -> (StatusCode, Json<Trip>) {
    let trip = Trip {
        id: Uuid::new_v4(),
        driver_id: input.driver_id,
        passenger_limit: input.passenger_limit,
        source: input.source,
        destination: input.destination,
        mid: input.mid,
        status: "not_started".to_string(),
        start_time: input.start_time,
        created_at: OffsetDateTime::now_utc(),
    };
    db.write().await.trips.insert(trip.id, trip.clone());
    (StatusCode::CREATED, Json(trip))
}

async fn my_trips(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<Vec<Trip>>, StatusCode> {
    let user = bearer_user(&headers).ok_or(StatusCode::UNAUTHORIZED)?;
    let state = db.read().await;
    let mine = state.trips.values().filter(|trip| {
        trip.driver_id == user
            || state
                .passengers
                .get(&trip.id)
                .is_some_and(|ps| ps.iter().any(|p| p.passenger_id == user))
    });
    Ok(Json(sorted_trips(mine.cloned())))
}

async fn get_trip(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, StatusCode> {
    let state = db.read().await;
    state.trips.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn join_trip(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<TripPassenger>), StatusCode> {
    let user = bearer_user(&headers).ok_or(StatusCode::UNAUTHORIZED)?;
    let mut state = db.write().await;
    let limit = state
        .trips
        .get(&id)
        .map(|trip| trip.passenger_limit)
        .ok_or(StatusCode::NOT_FOUND)?;

    let passengers = state.passengers.entry(id).or_default();
    if passengers.iter().any(|p| p.passenger_id == user) {
        return Err(StatusCode::CONFLICT);
    }
    if passengers.len() as u32 >= limit {
        return Err(StatusCode::CONFLICT);
    }

    let passenger = TripPassenger {
        trip_id: id,
        passenger_id: user,
        status: "pending".to_string(),
        created_at: OffsetDateTime::now_utc(),
    };
    passengers.push(passenger.clone());
    Ok((StatusCode::CREATED, Json(passenger)))
}

async fn list_passengers(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TripPassenger>>, StatusCode> {
    let state = db.read().await;
    if !state.trips.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(state.passengers.get(&id).cloned().unwrap_or_default()))
}
