//! Service context - dependency container for services
//!
//! Holds the database pool and the repositories services depend on.

use std::sync::Arc;

use authn_core::traits::UserRepository;
use authn_db::{PgPool, PgUserRepository};

/// Service context containing all dependencies
///
/// Cheap to clone; the pool and repositories are shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(pool: PgPool, user_repo: Arc<dyn UserRepository>) -> Self {
        Self { pool, user_repo }
    }

    /// Create a context backed by PostgreSQL repositories on `pool`
    pub fn from_pool(pool: PgPool) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        Self::new(pool, user_repo)
    }

    // === Database Pool ===

    /// Check that the database answers a trivial query
    pub async fn database_healthy(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}
