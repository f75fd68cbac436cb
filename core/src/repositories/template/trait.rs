//! Template repository trait defining read access to the reply catalog.
//!
//! The catalog is read-only from the backend's point of view; rows are
//! curated out of band. Every lookup filters to active rows.

use async_trait::async_trait;

use crate::domain::entities::template::{Template, TemplateCategory, TemplateDetail};
use crate::errors::DomainError;

/// Repository trait for catalog reads
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Active categories ordered by `sort_order`, then id
    async fn list_active_categories(&self) -> Result<Vec<TemplateCategory>, DomainError>;

    /// Active templates ordered by category, `sort_order`, then id
    async fn list_active_templates(&self) -> Result<Vec<Template>, DomainError>;

    /// Find an active template by id
    ///
    /// # Returns
    /// * `Ok(Some(Template))` - Template exists and is active
    /// * `Ok(None)` - Unknown or inactive template
    async fn find_active_template(&self, id: u64) -> Result<Option<Template>, DomainError>;

    /// Find the detail row of a template
    async fn find_detail(&self, template_id: u64) -> Result<Option<TemplateDetail>, DomainError>;

    /// Find a category by id regardless of its active flag
    async fn find_category(&self, id: u64) -> Result<Option<TemplateCategory>, DomainError>;
}
