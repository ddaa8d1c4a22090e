//! API Integration Tests against PostgreSQL
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use authn_common::hash_password;
use authn_core::traits::UserRepository;
use authn_db::{create_pool, DatabaseConfig, PgUserRepository};
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;

/// Save a fresh user through the Postgres repository
async fn seed_user(password: &str) -> (PgUserRepository, authn_core::entities::User) {
    let config = test_config().expect("Failed to load config");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .expect("Failed to connect");
    authn_db::run_migrations(&pool, authn_db::MIGRATIONS_DIR)
        .await
        .expect("Failed to migrate");

    let repo = PgUserRepository::new(pool);
    let hash = hash_password(password).expect("Failed to hash");
    let user = repo
        .create(&unique_user(), &hash)
        .await
        .expect("Failed to create user");
    (repo, user)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.status, "ready");
    assert_eq!(body.checks.database, "healthy");
}

// ============================================================================
// Sign-in Tests
// ============================================================================

#[tokio::test]
async fn test_sign_in_against_database() {
    if !check_test_env().await {
        return;
    }

    let (_repo, user) = seed_user(SEEDED_PASSWORD).await;
    let server = TestServer::start().await.expect("Failed to start server");

    let form = SignInForm::new(user.number, SEEDED_PASSWORD);
    let body: AuthenticationBody = assert_json(
        server.sign_in(&form).await.unwrap(),
        StatusCode::ACCEPTED,
    )
    .await
    .unwrap();

    let profile = body.user.expect("profile missing");
    assert_eq!(profile.id, user.id);
    assert_eq!(profile.number, user.number.into_inner());
    assert_eq!(profile.mail, user.email);
}

#[tokio::test]
async fn test_sign_in_wrong_password_against_database() {
    if !check_test_env().await {
        return;
    }

    let (_repo, user) = seed_user(SEEDED_PASSWORD).await;
    let server = TestServer::start().await.expect("Failed to start server");

    let form = SignInForm::new(user.number, WRONG_PASSWORD);
    let body: AuthenticationBody = assert_json(
        server.sign_in(&form).await.unwrap(),
        StatusCode::UNAUTHORIZED,
    )
    .await
    .unwrap();
    assert!(body.user.is_none());
}

#[tokio::test]
async fn test_sign_in_with_explicit_repository() {
    if !check_test_env().await {
        return;
    }

    let (repo, user) = seed_user(SEEDED_PASSWORD).await;
    let server = TestServer::start_with_repo(Arc::new(repo))
        .await
        .expect("Failed to start server");

    let form = SignInForm::new(user.number, SEEDED_PASSWORD);
    let response = server.sign_in(&form).await.unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();
}
