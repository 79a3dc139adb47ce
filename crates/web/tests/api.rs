//! HTTP tests for the tournament API, run against the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storage::{
    InMemoryStore,
    catalog::standard_events,
    models::{Gender, NewBowler},
    repository::BowlerRepository,
};
use tokio::sync::Mutex;
use tower::ServiceExt;
use web::{
    AppState,
    mail::{ContactMessage, MailError, MailSender},
};

#[derive(Clone, Default)]
struct RecordingMailer {
    sent: Arc<Mutex<Vec<ContactMessage>>>,
}

#[async_trait]
impl MailSender for RecordingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.sent.lock().await.push(message.clone());
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl MailSender for FailingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        Err(MailError::Address {
            address: message.email.clone(),
            source: "@".parse::<lettre::Address>().unwrap_err(),
        })
    }
}

fn seeded_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::with_events(standard_events().unwrap()))
}

fn app_with(store: Arc<InMemoryStore>, mailer: impl MailSender + 'static) -> Router {
    web::app(AppState {
        store,
        mailer: Arc::new(mailer),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn add_bowler(store: &InMemoryStore, name: &str, gender: Gender, average: i32) {
    store
        .upsert_bowler(&NewBowler::new(name, gender, average))
        .await
        .unwrap();
}

async fn enroll(app: &Router, name: &str, event: &str, division: i32, lane: i32) -> Value {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/enrollments",
            json!({
                "bowler_name": name,
                "event_name": event,
                "division": division,
                "lane": lane,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

// ============================================================================
// Bowlers
// ============================================================================

#[tokio::test]
async fn test_root_responds() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, _) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_bowlers_defaults_to_all() {
    let store = seeded_store();
    add_bowler(&store, "Jane Doe", Gender::F, 172).await;
    add_bowler(&store, "John Roe", Gender::M, 201).await;
    let app = app_with(store, RecordingMailer::default());

    let (status, all) = send(&app, get("/api/bowlers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        all,
        json!([
            {"id": 1, "name": "Jane Doe", "gender": "F", "average": 172},
            {"id": 2, "name": "John Roe", "gender": "M", "average": 201},
        ])
    );

    let (_, explicit) = send(&app, get("/api/bowlers?id=all")).await;
    assert_eq!(explicit, all);
}

#[tokio::test]
async fn test_bowler_detail_by_id() {
    let store = seeded_store();
    add_bowler(&store, "Jane Doe", Gender::F, 172).await;
    let app = app_with(store, RecordingMailer::default());

    let (status, body) = send(&app, get("/api/bowlers?id=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Jane Doe",
            "gender": "F",
            "average": 172,
            "is_senior": false,
            "is_vet": false,
            "is_in_all_events": false,
            "is_in_senior_all_events": false,
        })
    );
}

#[tokio::test]
async fn test_unknown_bowler_id_is_null() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, body) = send(&app, get("/api/bowlers?id=42")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_non_numeric_bowler_id_is_bad_request() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, body) = send(&app, get("/api/bowlers?id=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid bowler id: abc");
}

#[tokio::test]
async fn test_upsert_bowler_replaces_flags() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, created) = send(
        &app,
        json_request(
            "PUT",
            "/api/bowlers",
            json!({
                "name": "Jane Doe",
                "gender": "f",
                "average": 160,
                "is_senior": true,
                "is_vet": true,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["is_senior"], true);

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            "/api/bowlers",
            json!({"name": "Jane Doe", "gender": "F", "average": 175}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["average"], 175);
    assert_eq!(updated["is_senior"], false);
    assert_eq!(updated["is_vet"], false);
}

#[tokio::test]
async fn test_upsert_bowler_validates_gender() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/bowlers",
            json!({"name": "Jane Doe", "gender": "Q", "average": 175}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
}

// ============================================================================
// Enrollment and rosters
// ============================================================================

#[tokio::test]
async fn test_enroll_unknown_bowler_is_not_found() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/enrollments",
            json!({"bowler_name": "Jane Doe", "event_name": "TEAM", "division": 1, "lane": 5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No bowler found");
}

#[tokio::test]
async fn test_enroll_unknown_division_is_not_found() {
    let store = seeded_store();
    add_bowler(&store, "Jane Doe", Gender::F, 172).await;
    let app = app_with(store, RecordingMailer::default());

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/enrollments",
            json!({"bowler_name": "Jane Doe", "event_name": "team", "division": 7, "lane": 5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No event found");
}

#[tokio::test]
async fn test_enroll_invalid_event_name_is_bad_request() {
    let store = seeded_store();
    add_bowler(&store, "Jane Doe", Gender::F, 172).await;
    let app = app_with(store, RecordingMailer::default());

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/api/enrollments",
            json!({"bowler_name": "Jane Doe", "event_name": "relay", "division": 1, "lane": 5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_roster_is_filtered_and_sorted_by_lane() {
    let store = seeded_store();
    add_bowler(&store, "Al", Gender::M, 190).await;
    add_bowler(&store, "Bo", Gender::M, 180).await;
    add_bowler(&store, "Cy", Gender::M, 170).await;
    add_bowler(&store, "Di", Gender::F, 160).await;
    let app = app_with(store, RecordingMailer::default());

    enroll(&app, "Al", "Team", 1, 7).await;
    enroll(&app, "Bo", "Team", 1, 3).await;
    enroll(&app, "Cy", "Team", 1, 5).await;
    enroll(&app, "Di", "Team", 1, 1).await;

    let (status, body) = send(&app, get("/api/event?event=team&div=1&gender=m")).await;
    assert_eq!(status, StatusCode::OK);

    let lanes: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["lane"].as_i64().unwrap())
        .collect();
    assert_eq!(lanes, vec![3, 5, 7]);
    assert_eq!(
        body[0],
        json!({
            "bowler_id": 2,
            "participation_id": 2,
            "name": "Bo",
            "gender": "M",
            "average": 180,
            "lane": 3,
            "division": 1,
        })
    );
}

#[tokio::test]
async fn test_roster_accepts_repeated_divisions() {
    let store = seeded_store();
    add_bowler(&store, "Al", Gender::F, 190).await;
    let app = app_with(store, RecordingMailer::default());

    enroll(&app, "Al", "singles", 1, 4).await;
    enroll(&app, "Al", "singles", 2, 2).await;
    enroll(&app, "Al", "singles", 3, 1).await;

    let (_, body) = send(&app, get("/api/event?event=SINGLES&div=1&div=2")).await;
    let divisions: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["division"].as_i64().unwrap())
        .collect();
    assert_eq!(divisions, vec![2, 1]);

    let (_, everything) = send(&app, get("/api/event?event=singles")).await;
    assert_eq!(everything.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_duplicate_enrollments_both_listed() {
    let store = seeded_store();
    add_bowler(&store, "Jane Doe", Gender::F, 172).await;
    let app = app_with(store, RecordingMailer::default());

    let first = enroll(&app, "Jane Doe", "doubles", 2, 6).await;
    let second = enroll(&app, "Jane Doe", "doubles", 2, 6).await;
    assert_ne!(first["participation_id"], second["participation_id"]);

    let (_, body) = send(&app, get("/api/event?event=doubles&div=2")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_mixed_roster_with_gender_is_empty() {
    let store = seeded_store();
    add_bowler(&store, "Al", Gender::M, 190).await;
    add_bowler(&store, "Di", Gender::F, 160).await;
    let app = app_with(store, RecordingMailer::default());

    enroll(&app, "Al", "mixed", 1, 1).await;
    enroll(&app, "Di", "mixed", 1, 2).await;

    let (status, body) = send(&app, get("/api/event?event=mixed&div=1&gender=M")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, get("/api/event?event=mixed&div=1")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_roster_unknown_event_is_bad_request() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, body) = send(&app, get("/api/event?event=relay")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid event name: \"relay\"");
}

#[tokio::test]
async fn test_roster_unknown_gender_is_bad_request() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, _) = send(&app, get("/api/event?event=team&gender=x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_events() {
    let app = app_with(seeded_store(), RecordingMailer::default());

    let (status, body) = send(&app, get("/api/events")).await;
    assert_eq!(status, StatusCode::OK);

    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 54);
    assert!(
        events
            .iter()
            .filter(|e| e["event_name"] == "Mixed")
            .all(|e| e["gender"].is_null())
    );
}

// ============================================================================
// Contact mail
// ============================================================================

fn contact_body() -> Value {
    json!({
        "name": "Pat Strike",
        "email": "pat@example.com",
        "phone": "555-0100",
        "subject": "Lane question",
        "message": "Which lane am I on?",
    })
}

#[tokio::test]
async fn test_mail_success() {
    let mailer = RecordingMailer::default();
    let app = app_with(seeded_store(), mailer.clone());

    let (status, body) = send(&app, json_request("POST", "/api/mail", contact_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "message": "Email sent successfully"})
    );

    let sent = mailer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Lane question");
    assert_eq!(sent[0].phone.as_deref(), Some("555-0100"));
}

#[tokio::test]
async fn test_mail_failure_is_reported_in_payload() {
    let app = app_with(seeded_store(), FailingMailer);

    let (status, body) = send(&app, json_request("POST", "/api/mail", contact_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("pat@example.com"));
}

#[tokio::test]
async fn test_mail_rejects_invalid_email() {
    let mailer = RecordingMailer::default();
    let app = app_with(seeded_store(), mailer.clone());

    let mut body = contact_body();
    body["email"] = json!("not-an-address");

    let (status, _) = send(&app, json_request("POST", "/api/mail", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(mailer.sent.lock().await.is_empty());
}
