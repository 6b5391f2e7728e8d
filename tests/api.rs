use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use masjid_api::{
    config::Config,
    routes,
    store::{seed, ContentStore},
    AppState,
};

struct TestApp {
    router: Router,
    store: ContentStore,
}

async fn seeded_app() -> TestApp {
    let store = ContentStore::in_memory();
    seed::seed(&store).await.expect("seed content");
    app_with(store)
}

fn empty_app() -> TestApp {
    app_with(ContentStore::in_memory())
}

fn app_with(store: ContentStore) -> TestApp {
    let router = routes::router(AppState::new(store.clone(), Config::default()));
    TestApp { router, store }
}

impl TestApp {
    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(req).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, value)
    }
}

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .expect("array body")
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = empty_app();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn events_active_filter_returns_three_of_five() {
    let app = seeded_app().await;

    let (status, active) = app.get("/api/events?active=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active.as_array().unwrap().len(), 3);
    assert!(active.as_array().unwrap().iter().all(|e| e["isActive"] == true));

    let (_, inactive) = app.get("/api/events?active=false").await;
    let (_, all) = app.get("/api/events").await;
    assert_eq!(inactive.as_array().unwrap().len(), 2);
    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn invalid_active_filter_is_bad_request() {
    let app = seeded_app().await;
    let (status, body) = app.get("/api/programs?active=maybe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("active"));
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let app = seeded_app().await;

    let (status, event) = app.get("/api/events/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["title"], "Friday Night Halaqa");
    assert_eq!(event["recurringDay"], "Friday");
    assert_eq!(event["eventType"], "regular");

    let (status, body) = app.get("/api/announcements/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Announcement not found");

    let (status, body) = app.get("/api/programs/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Program not found");
}

#[tokio::test]
async fn contact_submission_is_stored_unread() {
    let app = empty_app();
    let (status, body) = app
        .post(
            "/api/contact",
            json!({
                "name": "Maryam",
                "email": "maryam@example.com",
                "subject": "Nikah booking",
                "message": "I would like to book the hall for a nikah in May."
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["isRead"], false);
    assert!(body["createdAt"].is_string());
    assert_eq!(app.store.contact_messages.count().await.unwrap(), 1);
}

#[tokio::test]
async fn contact_validation_reports_fields() {
    let app = empty_app();
    let (status, body) = app
        .post(
            "/api/contact",
            json!({ "name": "", "email": "nope", "subject": "Hi", "message": "short" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<_> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["name", "email", "message"]);
    assert_eq!(app.store.contact_messages.count().await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = empty_app();
    let (status, body) = app.post_raw("/api/donations", "{ not json".into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = app.post("/api/donations", json!({ "amount": 100 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn donation_created_with_optional_fields_empty() {
    let app = empty_app();
    let (status, body) = app
        .post(
            "/api/donations",
            json!({ "amount": 2500, "donationType": "one-time", "fund": "Masjid Expansion" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["amount"], 2500);
    assert!(body["name"].is_null());
    assert!(body["transactionId"].is_null());

    let (status, _) = app
        .post(
            "/api/donations",
            json!({ "amount": -5, "donationType": "one-time", "fund": "General" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn event_registration_checks_event_exists() {
    let app = seeded_app().await;

    let (status, body) = app
        .post(
            "/api/events/register",
            json!({ "name": "Omar", "email": "omar@example.com", "eventId": 42 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Event not found");
    assert_eq!(app.store.registrations.count().await.unwrap(), 0);

    let (status, body) = app
        .post(
            "/api/events/register",
            json!({ "name": "Omar", "email": "omar@example.com", "eventId": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["eventId"], 2);
    assert_eq!(body["attendees"], 1);
    assert_eq!(app.store.registrations.count().await.unwrap(), 1);
}

#[tokio::test]
async fn invalid_registrations_store_nothing() {
    let app = seeded_app().await;
    let cases = [
        json!({ "name": "Omar", "email": "omar@example.com", "eventId": 2, "attendees": 0 }),
        json!({ "name": "Omar", "email": "omar@example.com", "eventId": 2, "attendees": 21 }),
        json!({ "name": "Omar", "email": "omar@example.com", "eventId": 0 }),
        json!({ "name": "Omar", "email": "omar.example.com", "eventId": 2 }),
    ];

    for body in cases {
        let (status, res) = app.post("/api/events/register", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(res["details"].is_array(), "{body}");
    }
    assert_eq!(app.store.registrations.count().await.unwrap(), 0);
}

#[tokio::test]
async fn prayer_times_for_given_date() {
    let app = empty_app();

    let (status, body) = app.get("/api/prayer-times?date=2026-10-16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2026-10-16");
    assert_eq!(body["weekday"], "Friday");
    assert_eq!(body["prayers"].as_array().unwrap().len(), 6);
    assert_eq!(body["jumuah"]["iqamah"], "1:45 PM");

    let (status, _) = app.get("/api/prayer-times?date=16-10-2026").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn prayer_times_today_and_week() {
    let app = empty_app();

    let (status, today) = app.get("/api/prayer-times").await;
    assert_eq!(status, StatusCode::OK);
    assert!(today["date"].is_string());

    let (status, week) = app.get("/api/prayer-times/week").await;
    assert_eq!(status, StatusCode::OK);
    let days = week.as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days.iter().filter(|d| !d["jumuah"].is_null()).count(), 1);
}

#[tokio::test]
async fn business_directory_routes() {
    let app = seeded_app().await;

    let (_, featured) = app.get("/api/businesses/featured").await;
    assert_eq!(ids(&featured), vec![1, 2]);

    let (_, automotive) = app.get("/api/businesses/category/automotive").await;
    assert_eq!(ids(&automotive), vec![3]);

    let (status, business) = app.get("/api/businesses/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(business["category"], "Retail");

    let (_, all) = app.get("/api/businesses").await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

async fn scrape(app: &TestApp) -> String {
    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let res = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn metrics_exposes_content_gauge() {
    let app = seeded_app().await;
    assert!(scrape(&app).await.contains("masjid_content_items"));
}

#[tokio::test]
async fn donation_metrics_stay_bounded_for_free_text_funds() {
    let app = empty_app();
    for i in 0..40 {
        let body = json!({
            "amount": 100,
            "donationType": format!("plan-{i}"),
            "fund": format!("fund-{i}")
        });
        let (status, _) = app.post("/api/donations", body).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let text = scrape(&app).await;
    let series: Vec<_> = text.lines().filter(|l| l.starts_with("api_donations_total{")).collect();
    assert!(!series.is_empty());
    assert!(series.len() <= 18, "{series:?}");
    assert!(series.iter().all(|l| !l.contains("fund-")));
}

#[tokio::test]
async fn cors_allows_only_exact_local_hosts() {
    let app = empty_app();
    let preflight = |origin: &str| {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let res = app.router.clone().oneshot(preflight("http://localhost:5173")).await.unwrap();
    assert_eq!(
        res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );

    let res = app
        .router
        .clone()
        .oneshot(preflight("http://localhost.attacker.example"))
        .await
        .unwrap();
    assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
