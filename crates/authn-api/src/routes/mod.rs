//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{authentication, health};
use crate::state::AppState;

/// Path of the sign-in endpoint
pub const SIGN_IN_PATH: &str = "/Authentication/signin";

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(authentication_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn authentication_routes() -> Router<AppState> {
    Router::new().route(SIGN_IN_PATH, post(authentication::sign_in))
}
