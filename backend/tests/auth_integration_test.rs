//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use jobkonnect_backend::auth::AuthError;
use jobkonnect_backend::error::ApiError;
use jobkonnect_backend::repositories::{NewUser, UserRepository};
use jobkonnect_backend::services::UserService;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_success() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let body = json!({
        "username": format!("seeker_{}", suffix),
        "email": format!("register_test_{}@example.com", suffix),
        "password": "SecurePassword123!",
        "role": "job_seeker",
        "phone_number": "555-0100",
        "address": "1 Main St",
        "first_name": "Jane",
        "last_name": "Doe"
    });

    let (status, response) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["access_token"].as_str().unwrap().is_empty());
    assert_eq!(response["token_type"], "Bearer");
    assert_eq!(response["expires_in"], 3600);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let email = format!("duplicate_{}@example.com", suffix);
    let body = |username: &str| {
        json!({
            "username": username,
            "email": email,
            "password": "SecurePassword123!",
            "role": "job_seeker",
            "phone_number": "555-0100",
            "address": "1 Main St",
            "first_name": "Jane",
            "last_name": "Doe"
        })
    };

    let (status, _) = app
        .post("/api/v1/auth/register", &body(&format!("a_{}", suffix)).to_string())
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same email, different username
    let (status, _) = app
        .post("/api/v1/auth/register", &body(&format!("b_{}", suffix)).to_string())
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_invalid_email() {
    let app = common::TestApp::new().await;

    let body = json!({
        "username": "bademail",
        "email": "not-an-email",
        "password": "SecurePassword123!",
        "role": "job_seeker",
        "phone_number": "555-0100",
        "address": "1 Main St",
        "first_name": "Jane",
        "last_name": "Doe"
    });

    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_weak_password() {
    let app = common::TestApp::new().await;

    let body = json!({
        "username": "weakpass",
        "email": "weak_password@example.com",
        "password": "123",
        "role": "job_seeker",
        "phone_number": "555-0100",
        "address": "1 Main St",
        "first_name": "Jane",
        "last_name": "Doe"
    });

    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_employer_missing_company_fields() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let body = json!({
        "username": format!("acme_{}", suffix),
        "email": format!("acme_{}@example.com", suffix),
        "password": "SecurePassword123!",
        "role": "employer",
        "phone_number": "555-0100",
        "address": "1 Industrial Way"
    });

    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success_and_me_round_trip() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let username = format!("login_{}", suffix);
    let email = format!("login_test_{}@example.com", suffix);
    app.register_seeker(&username, &email).await;

    let login_body = json!({
        "email": email,
        "password": "SecurePassword123!"
    });
    let (status, response) = app.post("/api/v1/auth/login", &login_body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    let token = response["access_token"].as_str().unwrap();

    // A freshly issued token must authorize and yield the same identity
    let (status, profile) = app.get_auth("/api/v1/auth/me", token).await;
    assert_eq!(status, StatusCode::OK);

    let profile: serde_json::Value = serde_json::from_str(&profile).unwrap();
    assert_eq!(profile["username"], username.as_str());
    assert_eq!(profile["email"], email.as_str());
    assert_eq!(profile["role"], "job_seeker");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let email = format!("wrongpw_{}@example.com", suffix);
    app.register_seeker(&format!("wrongpw_{}", suffix), &email).await;

    let login_body = json!({
        "email": email,
        "password": "not-the-password"
    });
    let (status, _) = app.post("/api/v1/auth/login", &login_body.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_unknown_email_same_response_as_wrong_password() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let email = format!("known_{}@example.com", suffix);
    app.register_seeker(&format!("known_{}", suffix), &email).await;

    let unknown = json!({
        "email": format!("unknown_{}@example.com", suffix),
        "password": "SecurePassword123!"
    });
    let (unknown_status, unknown_body) =
        app.post("/api/v1/auth/login", &unknown.to_string()).await;

    let mismatch = json!({
        "email": email,
        "password": "not-the-password"
    });
    let (mismatch_status, mismatch_body) =
        app.post("/api/v1/auth/login", &mismatch.to_string()).await;

    // Both fail with an identical response, no account enumeration
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(mismatch_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_body, mismatch_body);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_authenticate_distinguishes_unknown_account_from_bad_password() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let email = format!("distinct_{}@example.com", suffix);
    app.register_seeker(&format!("distinct_{}", suffix), &email).await;

    // An unknown identifier is a NotFound at the service layer
    let err = UserService::authenticate(
        &app.pool,
        &format!("nobody_{}@example.com", suffix),
        "SecurePassword123!",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Auth(AuthError::NotFound)));

    // A credential mismatch is an InvalidCredential
    let err = UserService::authenticate(&app.pool, &email, "not-the-password")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Auth(AuthError::InvalidCredential)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_insert_bypassing_prechecks_is_conflict() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let user = |name: &str| NewUser {
        username: format!("{}_{}", name, suffix),
        email: format!("race_{}@example.com", suffix),
        password_hash: "x".to_string(),
        role: "job_seeker".to_string(),
        phone_number: "555-0100".to_string(),
        address: "1 Main St".to_string(),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        company_name: None,
        website: None,
        contact_info: None,
    };

    UserRepository::create(&app.pool, user("first")).await.unwrap();

    // Same email straight at the unique constraint, as a lost
    // registration race would land
    let err = UserRepository::create(&app.pool, user("second"))
        .await
        .unwrap_err();
    let api = ApiError::from_insert_error(err, "Email already registered");
    assert!(matches!(api, ApiError::Conflict(_)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_user_by_id() {
    let app = common::TestApp::new().await;

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let username = format!("byid_{}", suffix);
    let token = app
        .register_seeker(&username, &format!("byid_{}@example.com", suffix))
        .await;

    let (_, me) = app.get_auth("/api/v1/auth/me", &token).await;
    let me: serde_json::Value = serde_json::from_str(&me).unwrap();
    let id = me["id"].as_str().unwrap();

    let (status, _) = app.get(&format!("/api/v1/users/{}", id)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app.get_auth(&format!("/api/v1/users/{}", id), &token).await;
    assert_eq!(status, StatusCode::OK);
    let profile: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(profile["username"], username.as_str());
    assert!(!body.contains("password_hash"));

    let (status, _) = app
        .get_auth(&format!("/api/v1/users/{}", uuid::Uuid::new_v4()), &token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_users_list_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/users").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let token = app
        .register_seeker(&format!("lister_{}", suffix), &format!("lister_{}@example.com", suffix))
        .await;

    let (status, body) = app.get_auth("/api/v1/users", &token).await;
    assert_eq!(status, StatusCode::OK);
    // Password hashes never leave the API
    assert!(!body.contains("password_hash"));
}
