use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use tower::ServiceExt;

use causehub::create_app;
use causehub::entities::Donation;

/// Fresh app over an in-memory SQLite database with the schema migrated and
/// the sample causes seeded. A single pooled connection keeps every query on
/// the same in-memory database.
async fn test_app() -> (Router, DatabaseConnection) {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);
    let db = Database::connect(opts).await.unwrap();
    causehub::db::init_db(&db).await.unwrap();
    (create_app(db.clone()), db)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_list_causes_returns_seeded_rows() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/api/causes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let causes = json.as_array().unwrap();
    assert_eq!(causes.len(), 3);
    assert_eq!(causes[0]["title"], "Educate a Child");
    assert_eq!(causes[0]["goalAmount"], 10000.0);
    assert_eq!(causes[0]["raisedAmount"], 7500.0);
}

#[tokio::test]
async fn test_get_cause_by_id() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/api/causes/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["title"], "Educate a Child");
}

#[tokio::test]
async fn test_get_cause_rejects_bad_id_format() {
    let (app, _db) = test_app().await;

    let response = app.clone().oneshot(get("/api/causes/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(
        json["error"],
        "Invalid cause ID format. ID must be a positive number."
    );

    // Zero and negative ids are rejected the same way
    let response = app.oneshot(get("/api/causes/-1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_cause_not_found() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/api/causes/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Cause not found");
}

#[tokio::test]
async fn test_donation_to_cause_updates_raised_amount() {
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/donations",
            json!({
                "causeId": 1,
                "donorName": "Jane Doe",
                "donorEmail": "jane@example.com",
                "amount": 100
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    assert_eq!(json["message"], "Donation successful");
    assert!(json["donationId"].as_i64().unwrap() > 0);

    // Seeded at 7500, so the credit lands at 7600
    let response = app.oneshot(get("/api/causes/1")).await.unwrap();
    let json = json_body(response).await;
    assert_eq!(json["raisedAmount"], 7600.0);
}

#[tokio::test]
async fn test_general_fund_donation_touches_no_cause() {
    let (app, db) = test_app().await;

    let before = app.clone().oneshot(get("/api/causes")).await.unwrap();
    let before = json_body(before).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/donations",
            json!({
                "donorName": "Jane Doe",
                "donorEmail": "jane@example.com",
                "amount": 50
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let after = app.oneshot(get("/api/causes")).await.unwrap();
    let after = json_body(after).await;
    assert_eq!(before, after);

    let donation = Donation::find().one(&db).await.unwrap().unwrap();
    assert_eq!(donation.cause_id, None);
    assert_eq!(donation.amount, 50.0);
}

#[tokio::test]
async fn test_donation_accepts_string_amount_and_cause_id() {
    // The form posts its fields as strings; the looser wire shape is parsed
    // server-side rather than rejected by the deserializer.
    let (app, _db) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/donations",
            json!({
                "causeId": "2",
                "donorName": "Jane Doe",
                "donorEmail": "jane@example.com",
                "amount": "25.50"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(get("/api/causes/2")).await.unwrap();
    let json = json_body(response).await;
    assert_eq!(json["raisedAmount"], 12025.5);
}

#[tokio::test]
async fn test_donation_empty_cause_id_means_general_fund() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/donations",
            json!({
                "causeId": "",
                "donorName": "Jane Doe",
                "donorEmail": "jane@example.com",
                "amount": 10
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let donation = Donation::find().one(&db).await.unwrap().unwrap();
    assert_eq!(donation.cause_id, None);
}

#[tokio::test]
async fn test_donation_missing_donor_fields() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/donations",
            json!({ "causeId": 1, "amount": 100 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(
        json["error"],
        "Invalid donation data. Required fields: donorName, donorEmail."
    );
}

#[tokio::test]
async fn test_donation_missing_amount() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/donations",
            json!({
                "donorName": "Jane Doe",
                "donorEmail": "jane@example.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Invalid donation data. Required field: amount.");
}

#[tokio::test]
async fn test_donation_rejects_non_positive_amount() {
    let (app, _db) = test_app().await;

    for amount in [json!(0), json!(-5), json!("not-a-number")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/donations",
                json!({
                    "donorName": "Jane Doe",
                    "donorEmail": "jane@example.com",
                    "amount": amount
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Donation amount must be a positive number.");
    }
}

#[tokio::test]
async fn test_donation_to_unknown_cause_is_rejected_without_a_row() {
    let (app, db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/donations",
            json!({
                "causeId": 999,
                "donorName": "Jane Doe",
                "donorEmail": "jane@example.com",
                "amount": 100
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Cause with ID 999 not found.");

    assert_eq!(Donation::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_contact_message_accepted() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/contact",
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "subject": "Question",
                "message": "How are donations allocated?"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    assert_eq!(json["message"], "Contact message received");
    assert!(json["contactId"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_contact_missing_fields() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/contact",
            json!({ "name": "Jane Doe", "email": "jane@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(
        json["error"],
        "Invalid contact data. Required fields: name, email, message."
    );
}

#[tokio::test]
async fn test_contact_rejects_malformed_email() {
    let (app, _db) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/contact",
            json!({
                "name": "Jane Doe",
                "email": "not-an-email",
                "message": "Hello"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["error"], "Invalid email format.");
}

#[tokio::test]
async fn test_health_check() {
    let (app, _db) = test_app().await;

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
