//! MySQL implementation of the IdentityRepository trait.
//!
//! Identities live in the `users` table:
//!
//! ```sql
//! CREATE TABLE users (
//!     id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
//!     email VARCHAR(255) NOT NULL,
//!     email_norm VARCHAR(255) NOT NULL UNIQUE,
//!     is_pro TINYINT(1) NOT NULL DEFAULT 0,
//!     email_verified_at DATETIME(3) NULL,
//!     created_at DATETIME(3) NOT NULL,
//!     updated_at DATETIME(3) NOT NULL
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sr_core::domain::entities::identity::Identity;
use sr_core::errors::DomainError;
use sr_core::repositories::IdentityRepository;

const SELECT_COLUMNS: &str =
    "SELECT id, email, email_norm, is_pro, email_verified_at, created_at, updated_at FROM users";

/// MySQL implementation of IdentityRepository
pub struct MySqlIdentityRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlIdentityRepository {
    /// Create a new MySQL identity repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Map a `users` row to the Identity entity
    fn row_to_identity(row: &sqlx::mysql::MySqlRow) -> Result<Identity, DomainError> {
        Ok(Identity {
            id: row.try_get("id").map_err(column_error("id"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            email_norm: row
                .try_get("email_norm")
                .map_err(column_error("email_norm"))?,
            is_pro: row.try_get("is_pro").map_err(column_error("is_pro"))?,
            email_verified_at: row
                .try_get::<Option<DateTime<Utc>>, _>("email_verified_at")
                .map_err(column_error("email_verified_at"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}

fn query_error(action: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, "Failed to {}", action);
        DomainError::Internal {
            message: format!("Failed to {}: {}", action, e),
        }
    }
}

#[async_trait]
impl IdentityRepository for MySqlIdentityRepository {
    async fn find_by_email(&self, email_norm: &str) -> Result<Option<Identity>, DomainError> {
        let query = format!("{} WHERE email_norm = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(email_norm)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find identity by email"))?;

        row.as_ref().map(Self::row_to_identity).transpose()
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Identity>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find identity by id"))?;

        row.as_ref().map(Self::row_to_identity).transpose()
    }

    async fn create(&self, identity: Identity) -> Result<Identity, DomainError> {
        // A concurrent insert for the same email leaves the existing row untouched
        let query = r#"
            INSERT INTO users (
                email, email_norm, is_pro, email_verified_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE id = id
        "#;

        sqlx::query(query)
            .bind(&identity.email)
            .bind(&identity.email_norm)
            .bind(identity.is_pro)
            .bind(identity.email_verified_at)
            .bind(identity.created_at)
            .bind(identity.updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_error("create identity"))?;

        self.find_by_email(&identity.email_norm)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: "Identity missing after insert".to_string(),
            })
    }

    async fn mark_pro(&self, id: u64) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET is_pro = TRUE, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error("mark identity as pro"))?;

        // rows_affected is 0 for an already-pro row with an unchanged timestamp
        Ok(self.find_by_id(id).await?.is_some())
    }
}
