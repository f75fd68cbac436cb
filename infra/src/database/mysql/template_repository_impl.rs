//! MySQL implementation of the TemplateRepository trait.
//!
//! The catalog spans three tables:
//!
//! ```sql
//! CREATE TABLE categories (
//!     id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
//!     name VARCHAR(64) NOT NULL,
//!     description VARCHAR(255) NOT NULL DEFAULT '',
//!     icon VARCHAR(64) NOT NULL DEFAULT '',
//!     sort_order INT NOT NULL DEFAULT 0,
//!     is_active TINYINT(1) NOT NULL DEFAULT 1
//! );
//!
//! CREATE TABLE templates (
//!     id BIGINT UNSIGNED AUTO_INCREMENT PRIMARY KEY,
//!     category_id BIGINT UNSIGNED NOT NULL,
//!     title VARCHAR(128) NOT NULL,
//!     description VARCHAR(255) NOT NULL DEFAULT '',
//!     tags_text VARCHAR(255) NOT NULL DEFAULT '',
//!     is_pro TINYINT(1) NOT NULL DEFAULT 0,
//!     sort_order INT NOT NULL DEFAULT 0,
//!     is_active TINYINT(1) NOT NULL DEFAULT 1
//! );
//!
//! CREATE TABLE template_details (
//!     template_id BIGINT UNSIGNED PRIMARY KEY,
//!     headline VARCHAR(255) NOT NULL DEFAULT '',
//!     summary TEXT NOT NULL,
//!     reply_soft TEXT NOT NULL,
//!     reply_neutral TEXT NOT NULL,
//!     reply_firm TEXT NOT NULL,
//!     when_not_to_use TEXT NOT NULL,
//!     best_practices TEXT NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use sr_core::domain::entities::template::{Template, TemplateCategory, TemplateDetail};
use sr_core::errors::DomainError;
use sr_core::repositories::TemplateRepository;

const CATEGORY_COLUMNS: &str =
    "SELECT id, name, description, icon, sort_order, is_active FROM categories";

const TEMPLATE_COLUMNS: &str = "SELECT id, category_id, title, description, tags_text, is_pro, \
     sort_order, is_active FROM templates";

const DETAIL_COLUMNS: &str = "SELECT template_id, headline, summary, reply_soft, reply_neutral, \
     reply_firm, when_not_to_use, best_practices FROM template_details";

/// MySQL implementation of TemplateRepository
pub struct MySqlTemplateRepository {
    pool: MySqlPool,
}

impl MySqlTemplateRepository {
    /// Create a new MySQL template repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &MySqlRow) -> Result<TemplateCategory, DomainError> {
        Ok(TemplateCategory {
            id: row.try_get("id").map_err(column_error("id"))?,
            name: row.try_get("name").map_err(column_error("name"))?,
            description: row
                .try_get("description")
                .map_err(column_error("description"))?,
            icon: row.try_get("icon").map_err(column_error("icon"))?,
            sort_order: row
                .try_get("sort_order")
                .map_err(column_error("sort_order"))?,
            is_active: row
                .try_get("is_active")
                .map_err(column_error("is_active"))?,
        })
    }

    fn row_to_template(row: &MySqlRow) -> Result<Template, DomainError> {
        Ok(Template {
            id: row.try_get("id").map_err(column_error("id"))?,
            category_id: row
                .try_get("category_id")
                .map_err(column_error("category_id"))?,
            title: row.try_get("title").map_err(column_error("title"))?,
            description: row
                .try_get("description")
                .map_err(column_error("description"))?,
            tags: row.try_get("tags_text").map_err(column_error("tags_text"))?,
            is_pro: row.try_get("is_pro").map_err(column_error("is_pro"))?,
            sort_order: row
                .try_get("sort_order")
                .map_err(column_error("sort_order"))?,
            is_active: row
                .try_get("is_active")
                .map_err(column_error("is_active"))?,
        })
    }

    fn row_to_detail(row: &MySqlRow) -> Result<TemplateDetail, DomainError> {
        Ok(TemplateDetail {
            template_id: row
                .try_get("template_id")
                .map_err(column_error("template_id"))?,
            headline: row.try_get("headline").map_err(column_error("headline"))?,
            summary: row.try_get("summary").map_err(column_error("summary"))?,
            reply_soft: row
                .try_get("reply_soft")
                .map_err(column_error("reply_soft"))?,
            reply_neutral: row
                .try_get("reply_neutral")
                .map_err(column_error("reply_neutral"))?,
            reply_firm: row
                .try_get("reply_firm")
                .map_err(column_error("reply_firm"))?,
            when_not_to_use: row
                .try_get("when_not_to_use")
                .map_err(column_error("when_not_to_use"))?,
            best_practices: row
                .try_get("best_practices")
                .map_err(column_error("best_practices"))?,
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
impl TemplateRepository for MySqlTemplateRepository {
    async fn list_active_categories(&self) -> Result<Vec<TemplateCategory>, DomainError> {
        let query = format!(
            "{} WHERE is_active = 1 ORDER BY sort_order, id",
            CATEGORY_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("list categories"))?;

        rows.iter().map(Self::row_to_category).collect()
    }

    async fn list_active_templates(&self) -> Result<Vec<Template>, DomainError> {
        let query = format!(
            "{} WHERE is_active = 1 ORDER BY category_id, sort_order, id",
            TEMPLATE_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("list templates"))?;

        rows.iter().map(Self::row_to_template).collect()
    }

    async fn find_active_template(&self, id: u64) -> Result<Option<Template>, DomainError> {
        let query = format!("{} WHERE id = ? AND is_active = 1 LIMIT 1", TEMPLATE_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find template"))?;

        row.as_ref().map(Self::row_to_template).transpose()
    }

    async fn find_detail(&self, template_id: u64) -> Result<Option<TemplateDetail>, DomainError> {
        let query = format!("{} WHERE template_id = ? LIMIT 1", DETAIL_COLUMNS);

        let row = sqlx::query(&query)
            .bind(template_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find template detail"))?;

        row.as_ref().map(Self::row_to_detail).transpose()
    }

    async fn find_category(&self, id: u64) -> Result<Option<TemplateCategory>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", CATEGORY_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find category"))?;

        row.as_ref().map(Self::row_to_category).transpose()
    }
}
