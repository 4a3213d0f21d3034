//! End-to-end API tests over the full router with an in-memory store.
//!
//! Covers the login/profile contract: credential checks, token transport,
//! the error envelope, and graceful health degradation.

use std::sync::Arc;

use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use authbase::auth::tokens::TokenKeys;
use authbase::identity::memory::MemoryIdentityStore;
use authbase::identity::{Identity, IdentityStore, NewIdentity, PgIdentityStore};
use authbase::routes::create_router;
use authbase::state::AppState;

const SECRET: &str = "correct horse battery";
const SIGNING_KEY: &str = "integration-test-key";

async fn seeded_server() -> TestServer {
    let store = MemoryIdentityStore::new();
    let now = chrono::Utc::now();
    store.seed(Identity {
        id: 282,
        username: "jane_d".to_string(),
        email: "a@b.com".to_string(),
        name: "Old Name".to_string(),
        password_hash: bcrypt::hash(SECRET, 4).unwrap(),
        created_at: now,
        updated_at: now,
    });
    let state = AppState::new(Arc::new(store), TokenKeys::from_secret(SIGNING_KEY));
    TestServer::new(create_router(state, "public")).unwrap()
}

async fn login_token(server: &TestServer) -> String {
    let response = server
        .post("/auth/login")
        .json(&json!({ "identifier": "a@b.com", "secret": SECRET }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_returns_token_with_matching_claims() {
    let server = seeded_server().await;

    let response = server
        .post("/auth/login")
        .json(&json!({ "identifier": "a@b.com", "secret": SECRET }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["user"]["id"], 282);
    assert_eq!(body["user"]["email"], "a@b.com");
    assert!(body["user"].get("password_hash").is_none());

    let claims = TokenKeys::from_secret(SIGNING_KEY)
        .validate(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.sub, "282");
    assert_eq!(claims.email, "a@b.com");
}

#[tokio::test]
async fn login_failures_use_the_error_envelope() {
    let server = seeded_server().await;

    // Wrong password and unknown identifier: same status, same body
    let wrong = server
        .post("/auth/login")
        .json(&json!({ "identifier": "a@b.com", "secret": "nope" }))
        .await;
    let unknown = server
        .post("/auth/login")
        .json(&json!({ "identifier": "who@b.com", "secret": "nope" }))
        .await;
    wrong.assert_status_unauthorized();
    unknown.assert_status_unauthorized();
    assert_eq!(wrong.json::<Value>(), unknown.json::<Value>());
    assert_eq!(wrong.json::<Value>()["success"], false);

    // Missing fields fail before any store access
    let missing = server
        .post("/auth/login")
        .json(&json!({ "identifier": "", "secret": "" }))
        .await;
    missing.assert_status_bad_request();
    assert_eq!(missing.json::<Value>()["success"], false);
}

#[tokio::test]
async fn profile_update_requires_token_and_persists() {
    let server = seeded_server().await;
    let token = login_token(&server).await;

    // No token
    let no_token = server
        .put("/auth/profile")
        .json(&json!({ "name": "Jane" }))
        .await;
    no_token.assert_status_unauthorized();

    // Tampered token (signed with a different key)
    let now = chrono::Utc::now();
    let forged = TokenKeys::from_secret("not-the-server-key")
        .issue(&Identity {
            id: 282,
            username: "jane_d".into(),
            email: "a@b.com".into(),
            name: "Old Name".into(),
            password_hash: String::new(),
            created_at: now,
            updated_at: now,
        })
        .unwrap();
    let bad_token = server
        .put("/auth/profile")
        .authorization_bearer(&forged)
        .json(&json!({ "name": "Jane" }))
        .await;
    bad_token.assert_status(axum::http::StatusCode::FORBIDDEN);

    // Valid token: update lands and a later read reflects it
    let updated = server
        .put("/auth/profile")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Jane" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["user"]["name"], "Jane");

    let read_back = server.get("/auth/profile").add_query_param("id", "282").await;
    read_back.assert_status_ok();
    assert_eq!(read_back.json::<Value>()["user"]["name"], "Jane");
}

#[tokio::test]
async fn profile_update_rejects_blank_and_overlong_names() {
    let server = seeded_server().await;
    let token = login_token(&server).await;

    let blank = server
        .put("/auth/profile")
        .authorization_bearer(&token)
        .json(&json!({ "name": "   " }))
        .await;
    blank.assert_status_bad_request();

    let overlong = server
        .put("/auth/profile")
        .authorization_bearer(&token)
        .json(&json!({ "name": "x".repeat(101) }))
        .await;
    overlong.assert_status_bad_request();

    // Neither attempt mutated the record
    let read_back = server.get("/auth/profile").add_query_param("id", "282").await;
    assert_eq!(read_back.json::<Value>()["user"]["name"], "Old Name");
}

#[tokio::test]
async fn profile_read_by_id_or_username() {
    let server = seeded_server().await;

    let by_id = server.get("/auth/profile").add_query_param("id", "282").await;
    by_id.assert_status_ok();
    assert_eq!(by_id.json::<Value>()["user"]["username"], "jane_d");

    let by_name = server
        .get("/auth/profile")
        .add_query_param("id", "jane_d")
        .await;
    by_name.assert_status_ok();
    assert_eq!(by_name.json::<Value>()["user"]["id"], 282);

    let missing = server.get("/auth/profile").await;
    missing.assert_status_bad_request();

    let unknown = server.get("/auth/profile").add_query_param("id", "999").await;
    unknown.assert_status_not_found();
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let store = MemoryIdentityStore::new();
    let state = AppState::new(Arc::new(store), TokenKeys::from_secret(SIGNING_KEY));
    let server = TestServer::new(create_router(state, "public")).unwrap();

    let created = server
        .post("/auth/register")
        .json(&json!({
            "username": "new_user",
            "email": "new@example.com",
            "name": "New User",
            "secret": "longenough",
        }))
        .await;
    created.assert_status_ok();
    assert_eq!(created.json::<Value>()["user"]["name"], "New User");

    let duplicate = server
        .post("/auth/register")
        .json(&json!({
            "username": "new_user",
            "email": "other@example.com",
            "secret": "longenough",
        }))
        .await;
    duplicate.assert_status(axum::http::StatusCode::CONFLICT);

    let login = server
        .post("/auth/login")
        .json(&json!({ "identifier": "new_user", "secret": "longenough" }))
        .await;
    login.assert_status_ok();
}

#[tokio::test]
async fn health_never_fails_even_without_a_store() {
    // Connected (memory store always answers)
    let healthy = seeded_server().await;
    let response = healthy.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["store"], "connected");

    // Degraded: Postgres store with no pool still answers 200
    let state = AppState::new(
        Arc::new(PgIdentityStore::new(None)),
        TokenKeys::from_secret(SIGNING_KEY),
    );
    let degraded = TestServer::new(create_router(state, "public")).unwrap();
    let response = degraded.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["store"], "unreachable");
}

#[tokio::test]
async fn store_backed_routes_fail_closed_without_a_store() {
    let state = AppState::new(
        Arc::new(PgIdentityStore::new(None)),
        TokenKeys::from_secret(SIGNING_KEY),
    );
    let server = TestServer::new(create_router(state, "public")).unwrap();

    let response = server
        .post("/auth/login")
        .json(&json!({ "identifier": "a@b.com", "secret": "anything" }))
        .await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn memory_store_create_is_visible_over_http() {
    let store = MemoryIdentityStore::new();
    store
        .create(NewIdentity {
            username: "seeded".into(),
            email: "seeded@example.com".into(),
            name: "Seeded".into(),
            password_hash: bcrypt::hash("irrelevant", 4).unwrap(),
        })
        .await
        .unwrap();
    let state = AppState::new(Arc::new(store), TokenKeys::from_secret(SIGNING_KEY));
    let server = TestServer::new(create_router(state, "public")).unwrap();

    let response = server
        .get("/auth/profile")
        .add_query_param("id", "seeded")
        .await;
    response.assert_status_ok();
}
