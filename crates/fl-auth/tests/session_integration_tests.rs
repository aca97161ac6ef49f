//! Integration tests for the session lifecycle using wiremock mock server

use fl_api::{ApiClient, BearerToken};
use fl_auth::{CredentialRecord, CredentialStore, SessionManager};
use fl_core::{AuthSession, UserProfile, UserRole};

use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

fn profile(name: &str) -> UserProfile {
    UserProfile {
        id: Uuid::nil(),
        name: name.to_string(),
        email: "asha@example.com".to_string(),
        phone: "555-0100".to_string(),
        user_type: UserRole::Farmer,
        city: Some("Fresno".to_string()),
        state: Some("CA".to_string()),
        created_at: None,
    }
}

fn user_json(name: &str) -> serde_json::Value {
    serde_json::to_value(profile(name)).unwrap()
}

/// Store seeded with a credential record, plus a manager wired to the
/// given mock server.
fn manager(server_url: &str, temp: &TempDir) -> (CredentialStore, SessionManager) {
    let store = CredentialStore::new(temp.path().to_path_buf());
    let api = ApiClient::new(server_url, 30, BearerToken::new());
    let manager = SessionManager::new(store.clone(), api);
    (store, manager)
}

fn seed(store: &CredentialStore, name: &str) {
    store
        .write(&CredentialRecord {
            token: "tok-abc123".to_string(),
            user: profile(name),
        })
        .unwrap();
}

// =========================================================================
// Bootstrap
// =========================================================================

#[tokio::test]
async fn test_bootstrap_with_echo_server_keeps_session_and_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer tok-abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("Asha Patel") })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let (store, manager) = manager(&mock_server.uri(), &temp);
    seed(&store, "Asha Patel");

    assert!(manager.is_loading().await);
    manager.bootstrap().await;

    let snapshot = manager.snapshot().await;
    assert!(!snapshot.loading);
    assert_eq!(snapshot.user.unwrap().name, "Asha Patel");
    assert_eq!(snapshot.token.as_deref(), Some("tok-abc123"));

    // Store re-persisted with the same pair
    let record = store.read().unwrap().unwrap();
    assert_eq!(record.token, "tok-abc123");
    assert_eq!(record.user.name, "Asha Patel");
}

#[tokio::test]
async fn test_bootstrap_with_rejected_token_clears_everything() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Token expired"
        })))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let (store, manager) = manager(&mock_server.uri(), &temp);
    seed(&store, "Asha Patel");

    manager.bootstrap().await;

    let snapshot = manager.snapshot().await;
    assert!(!snapshot.loading);
    assert!(snapshot.user.is_none());
    assert!(snapshot.token.is_none());
    assert!(store.read().unwrap().is_none());
}

#[tokio::test]
async fn test_bootstrap_with_unreachable_server_clears_everything() {
    // Nothing listens on port 9 - connection is refused immediately
    let temp = TempDir::new().unwrap();
    let (store, manager) = manager("http://127.0.0.1:9", &temp);
    seed(&store, "Asha Patel");

    manager.bootstrap().await;

    let snapshot = manager.snapshot().await;
    assert!(!snapshot.loading);
    assert!(snapshot.user.is_none());
    assert!(store.read().unwrap().is_none());
}

#[tokio::test]
async fn test_bootstrap_without_stored_credentials_issues_no_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let (_store, manager) = manager(&mock_server.uri(), &temp);

    assert!(manager.is_loading().await);
    manager.bootstrap().await;

    let snapshot = manager.snapshot().await;
    assert!(!snapshot.loading);
    assert!(snapshot.user.is_none());
    assert!(snapshot.token.is_none());
}

#[tokio::test]
async fn test_bootstrap_refreshes_drifted_profile_and_rewrites_store() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("Asha P. Patel") })),
        )
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let (store, manager) = manager(&mock_server.uri(), &temp);
    seed(&store, "Asha Patel");

    manager.bootstrap().await;

    let snapshot = manager.snapshot().await;
    assert_eq!(snapshot.user.unwrap().name, "Asha P. Patel");
    assert_eq!(snapshot.token.as_deref(), Some("tok-abc123"));

    let record = store.read().unwrap().unwrap();
    assert_eq!(record.user.name, "Asha P. Patel");
}

#[tokio::test]
async fn test_bootstrap_runs_only_once() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json("Asha Patel") })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let (store, manager) = manager(&mock_server.uri(), &temp);
    seed(&store, "Asha Patel");

    manager.bootstrap().await;
    manager.bootstrap().await;

    assert!(!manager.is_loading().await);
}

// =========================================================================
// Login / logout
// =========================================================================

#[tokio::test]
async fn test_login_commits_session_and_store_together() {
    let temp = TempDir::new().unwrap();
    let (store, manager) = manager("http://127.0.0.1:9", &temp);

    manager
        .login(AuthSession {
            user: profile("Asha Patel"),
            token: "tok-fresh".to_string(),
        })
        .await
        .unwrap();

    let snapshot = manager.snapshot().await;
    assert_eq!(snapshot.user.unwrap().name, "Asha Patel");
    assert_eq!(snapshot.token.as_deref(), Some("tok-fresh"));

    let record = store.read().unwrap().unwrap();
    assert_eq!(record.token, "tok-fresh");
    assert_eq!(record.user.name, "Asha Patel");
}

#[tokio::test]
async fn test_logout_clears_both_layers_and_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let (store, manager) = manager("http://127.0.0.1:9", &temp);

    manager
        .login(AuthSession {
            user: profile("Asha Patel"),
            token: "tok-fresh".to_string(),
        })
        .await
        .unwrap();

    manager.logout().await.unwrap();
    assert!(manager.current_user().await.is_none());
    assert!(manager.token().await.is_none());
    assert!(store.read().unwrap().is_none());

    // Second logout observes the same end state
    manager.logout().await.unwrap();
    assert!(manager.current_user().await.is_none());
    assert!(store.read().unwrap().is_none());
}

#[tokio::test]
async fn test_logout_before_any_login_is_harmless() {
    let temp = TempDir::new().unwrap();
    let (store, manager) = manager("http://127.0.0.1:9", &temp);

    manager.logout().await.unwrap();

    assert!(manager.current_user().await.is_none());
    assert!(store.read().unwrap().is_none());
}

// =========================================================================
// Sign-in / sign-up flows
// =========================================================================

#[tokio::test]
async fn test_sign_in_runs_login_operation_and_commits() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json("Asha Patel"),
            "token": "tok-signin"
        })))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let (store, manager) = manager(&mock_server.uri(), &temp);

    let user = manager
        .sign_in(&fl_core::Credentials {
            email: "asha@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.name, "Asha Patel");
    assert_eq!(manager.token().await.as_deref(), Some("tok-signin"));
    assert_eq!(store.read().unwrap().unwrap().token, "tok-signin");
}

#[tokio::test]
async fn test_failed_sign_in_leaves_session_untouched() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid email or password"
        })))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let (store, manager) = manager(&mock_server.uri(), &temp);

    let err = manager
        .sign_in(&fl_core::Credentials {
            email: "asha@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Invalid email or password"));
    assert!(manager.current_user().await.is_none());
    assert!(store.read().unwrap().is_none());
}
