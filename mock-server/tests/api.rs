use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Trip, TripPassenger, PAGE_SIZE};
use tower::ServiceExt;

const DRIVER: &str = "00000000-0000-0000-0000-00000000000a";
const RIDER: &str = "00000000-0000-0000-0000-00000000000b";

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<String> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(String::new()).unwrap()
}

fn post_request(uri: &str, body: String, token: Option<&str>) -> Request<String> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(body).unwrap()
}

fn new_trip_body(driver: &str) -> String {
    serde_json::json!({
        "driver_id": driver,
        "passenger_limit": 2,
        "source": {"name": "Taipei Main Station", "place_id": "place-tms", "lat": 25.047, "lon": 121.517},
        "destination": {"name": "NTU", "place_id": "place-ntu", "lat": 25.017, "lon": 121.54},
        "start_time": "2024-01-15T08:00:00Z"
    })
    .to_string()
}

async fn create_trip(app: &axum::Router, driver: &str) -> Trip {
    let resp = app
        .clone()
        .oneshot(post_request("/trips", new_trip_body(driver), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- list ---

#[tokio::test]
async fn list_trips_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/trips", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let trips: Vec<Trip> = body_json(resp).await;
    assert!(trips.is_empty());
}

#[tokio::test]
async fn list_trips_returns_created_trips() {
    let app = app();
    create_trip(&app, DRIVER).await;
    create_trip(&app, DRIVER).await;

    let resp = app.oneshot(get_request("/trips", None)).await.unwrap();
    let trips: Vec<Trip> = body_json(resp).await;
    assert_eq!(trips.len(), 2);
}

#[tokio::test]
async fn page_param_slices_results() {
    let app = app();
    for _ in 0..PAGE_SIZE + 2 {
        create_trip(&app, DRIVER).await;
    }

    let resp = app.clone().oneshot(get_request("/trips?page=1", None)).await.unwrap();
    let page_one: Vec<Trip> = body_json(resp).await;
    assert_eq!(page_one.len(), PAGE_SIZE);

    let resp = app.clone().oneshot(get_request("/trips?page=2", None)).await.unwrap();
    let page_two: Vec<Trip> = body_json(resp).await;
    assert_eq!(page_two.len(), 2);

    let resp = app.oneshot(get_request("/trips?page=9", None)).await.unwrap();
    let far_page: Vec<Trip> = body_json(resp).await;
    assert!(far_page.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_trip_returns_201_with_server_fields() {
    let app = app();
    let trip = create_trip(&app, DRIVER).await;

    assert_eq!(trip.driver_id.to_string(), DRIVER);
    assert_eq!(trip.status, "not_started");
    assert_eq!(trip.passenger_limit, 2);
    assert_eq!(trip.source.name, "Taipei Main Station");
}

// --- get ---

#[tokio::test]
async fn get_trip_not_found() {
    let app = app();
    let resp = app
        .oneshot(get_request(
            "/trips/00000000-0000-0000-0000-0000000000ff",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_then_get_returns_same_trip() {
    let app = app();
    let created = create_trip(&app, DRIVER).await;

    let resp = app
        .oneshot(get_request(&format!("/trips/{}", created.id), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Trip = body_json(resp).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.destination.place_id, "place-ntu");
}

// --- my trips ---

#[tokio::test]
async fn my_trips_requires_auth() {
    let app = app();
    let resp = app.oneshot(get_request("/trips/my", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn my_trips_filters_by_driver_and_membership() {
    let app = app();
    let driven = create_trip(&app, DRIVER).await;
    let other = create_trip(&app, RIDER).await;
    create_trip(&app, "00000000-0000-0000-0000-00000000000c").await;

    // DRIVER joins the RIDER's trip, so it counts as theirs too.
    let resp = app
        .clone()
        .oneshot(post_request(
            &format!("/trips/{}/join", other.id),
            String::new(),
            Some(DRIVER),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(get_request("/trips/my", Some(DRIVER)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let mine: Vec<Trip> = body_json(resp).await;
    let ids: Vec<_> = mine.iter().map(|t| t.id).collect();
    assert_eq!(mine.len(), 2);
    assert!(ids.contains(&driven.id));
    assert!(ids.contains(&other.id));
}

// --- join ---

#[tokio::test]
async fn join_trip_unknown_trip_is_404() {
    let app = app();
    let resp = app
        .oneshot(post_request(
            "/trips/00000000-0000-0000-0000-0000000000ff/join",
            String::new(),
            Some(RIDER),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn join_trip_requires_auth() {
    let app = app();
    let trip = create_trip(&app, DRIVER).await;
    let resp = app
        .oneshot(post_request(
            &format!("/trips/{}/join", trip.id),
            String::new(),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn join_trip_creates_pending_passenger() {
    let app = app();
    let trip = create_trip(&app, DRIVER).await;

    let resp = app
        .oneshot(post_request(
            &format!("/trips/{}/join", trip.id),
            String::new(),
            Some(RIDER),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let passenger: TripPassenger = body_json(resp).await;
    assert_eq!(passenger.trip_id, trip.id);
    assert_eq!(passenger.passenger_id.to_string(), RIDER);
    assert_eq!(passenger.status, "pending");
}

#[tokio::test]
async fn join_trip_twice_is_conflict() {
    let app = app();
    let trip = create_trip(&app, DRIVER).await;
    let join = || {
        post_request(
            &format!("/trips/{}/join", trip.id),
            String::new(),
            Some(RIDER),
        )
    };

    let resp = app.clone().oneshot(join()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let resp = app.oneshot(join()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn join_full_trip_is_conflict() {
    let app = app();
    // passenger_limit is 2 in the fixture.
    let trip = create_trip(&app, DRIVER).await;
    let riders = [
        "00000000-0000-0000-0000-000000000021",
        "00000000-0000-0000-0000-000000000022",
    ];
    for rider in riders {
        let resp = app
            .clone()
            .oneshot(post_request(
                &format!("/trips/{}/join", trip.id),
                String::new(),
                Some(rider),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app
        .oneshot(post_request(
            &format!("/trips/{}/join", trip.id),
            String::new(),
            Some("00000000-0000-0000-0000-000000000023"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

// --- passengers ---

#[tokio::test]
async fn list_passengers_unknown_trip_is_404() {
    let app = app();
    let resp = app
        .oneshot(get_request(
            "/trips/00000000-0000-0000-0000-0000000000ff/passengers",
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_passengers_returns_joined_users() {
    let app = app();
    let trip = create_trip(&app, DRIVER).await;

    let resp = app
        .clone()
        .oneshot(get_request(&format!("/trips/{}/passengers", trip.id), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let passengers: Vec<TripPassenger> = body_json(resp).await;
    assert!(passengers.is_empty());

    let resp = app
        .clone()
        .oneshot(post_request(
            &format!("/trips/{}/join", trip.id),
            String::new(),
            Some(RIDER),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(get_request(&format!("/trips/{}/passengers", trip.id), None))
        .await
        .unwrap();
    let passengers: Vec<TripPassenger> = body_json(resp).await;
    assert_eq!(passengers.len(), 1);
    assert_eq!(passengers[0].passenger_id.to_string(), RIDER);
}
