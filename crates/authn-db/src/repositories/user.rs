//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use authn_common::{verify_stored_password, warm_up_dummy_hash};
use authn_core::entities::{SignInCredentials, User};
use authn_core::error::DomainError;
use authn_core::traits::{RepoResult, UserRepository};
use authn_core::value_objects::PhoneNumber;

use crate::mappers::UserInsert;
use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

const USER_COLUMNS: &str = "id, name, number, mail, password_hash, gender, dob, location, pic, \
     bio, interests, last_login, created_at, updated_at, is_active, role";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        warm_up_dummy_hash();
        Self { pool }
    }

    async fn fetch_model(&self, number: PhoneNumber) -> RepoResult<Option<UserModel>> {
        sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE number = $1"
        ))
        .bind(number.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, credentials), fields(number = %credentials.number))]
    async fn find_by_credentials(
        &self,
        credentials: &SignInCredentials,
    ) -> RepoResult<Option<User>> {
        let model = self.fetch_model(credentials.number).await?;

        // An unknown number still pays for one verification
        let stored_hash = model.as_ref().map(|m| m.password_hash.as_str());
        let matches = verify_stored_password(&credentials.password, stored_hash).map_err(|e| {
            let user_id = model.as_ref().map(|m| m.id);
            tracing::error!(?user_id, error = %e, "Stored password hash is unreadable");
            DomainError::InternalError(format!("unreadable password hash for user {user_id:?}"))
        })?;

        Ok(model.filter(|_| matches).map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_number(&self, number: PhoneNumber) -> RepoResult<Option<User>> {
        Ok(self.fetch_model(number).await?.map(User::from))
    }

    #[instrument(skip(self, user, password_hash), fields(number = %user.number))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User> {
        let row = UserInsert::new(user, password_hash);

        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (name, number, mail, password_hash, gender, dob, location, pic,
                               bio, interests, last_login, created_at, updated_at, is_active, role)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    COALESCE($11, EXTRACT(EPOCH FROM NOW())::BIGINT),
                    COALESCE($12, EXTRACT(EPOCH FROM NOW())::BIGINT),
                    COALESCE($13, EXTRACT(EPOCH FROM NOW())::BIGINT),
                    $14, $15)
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(row.name)
        .bind(row.number)
        .bind(row.mail)
        .bind(row.password_hash)
        .bind(row.gender)
        .bind(row.dob)
        .bind(row.location)
        .bind(row.pic)
        .bind(row.bio)
        .bind(row.interests)
        .bind(row.last_login)
        .bind(row.created_at)
        .bind(row.updated_at)
        .bind(row.is_active)
        .bind(row.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NumberOrEmailAlreadyExists))?;

        tracing::info!(user_id = model.id, "User created");
        Ok(User::from(model))
    }
}
