//! Catalog listing and detail lookup

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::identity::Identity;
use crate::domain::value_objects::SessionIdentity;
use crate::errors::{AuthError, CatalogError, DomainError, DomainResult};
use crate::repositories::{IdentityRepository, TemplateRepository};

use super::views::{CategoryView, TemplateDetailView, TemplateSummary};

/// Catalog service for authenticated identities
pub struct CatalogService<R, T>
where
    R: IdentityRepository,
    T: TemplateRepository,
{
    identity_repository: Arc<R>,
    template_repository: Arc<T>,
}

impl<R, T> CatalogService<R, T>
where
    R: IdentityRepository,
    T: TemplateRepository,
{
    /// Create a new catalog service
    pub fn new(identity_repository: Arc<R>, template_repository: Arc<T>) -> Self {
        Self {
            identity_repository,
            template_repository,
        }
    }

    /// List active categories with their active templates
    ///
    /// Pro templates stay listed for free accounts but carry `is_locked`.
    /// Categories without active templates are listed empty.
    pub async fn list_by_category(
        &self,
        session: &SessionIdentity,
    ) -> DomainResult<Vec<CategoryView>> {
        let viewer = self.viewer(session).await?;

        let categories = self.template_repository.list_active_categories().await?;
        let templates = self.template_repository.list_active_templates().await?;

        let mut by_category: HashMap<u64, Vec<TemplateSummary>> = HashMap::new();
        for template in templates {
            by_category
                .entry(template.category_id)
                .or_default()
                .push(TemplateSummary {
                    id: template.id,
                    tags: template.tag_list(),
                    is_locked: template.is_locked_for(viewer.is_pro),
                    is_pro: template.is_pro,
                    title: template.title,
                    description: template.description,
                });
        }

        Ok(categories
            .into_iter()
            .map(|category| CategoryView {
                templates: by_category.remove(&category.id).unwrap_or_default(),
                id: category.id,
                name: category.name,
                description: category.description,
                icon: category.icon,
            })
            .collect())
    }

    /// Full reply text of one template
    ///
    /// # Errors
    ///
    /// * `CatalogError::TemplateNotFound` - unknown, inactive or without detail
    /// * `CatalogError::ProRequired` - pro template requested by a free account
    /// * `DomainError::Internal` - the template's category row is missing
    pub async fn template_detail(
        &self,
        session: &SessionIdentity,
        template_id: u64,
    ) -> DomainResult<TemplateDetailView> {
        let viewer = self.viewer(session).await?;

        let template = self
            .template_repository
            .find_active_template(template_id)
            .await?
            .ok_or(CatalogError::TemplateNotFound)?;

        if template.is_locked_for(viewer.is_pro) {
            tracing::debug!(
                identity_id = viewer.id,
                template_id,
                event = "template_pro_required",
                "Free account requested a pro template"
            );
            return Err(CatalogError::ProRequired.into());
        }

        let detail = self
            .template_repository
            .find_detail(template.id)
            .await?
            .ok_or(CatalogError::TemplateNotFound)?;

        let category_name = self
            .template_repository
            .find_category(template.category_id)
            .await?
            .map(|category| category.name)
            .ok_or_else(|| {
                tracing::error!(
                    template_id = template.id,
                    category_id = template.category_id,
                    event = "template_category_missing",
                    "Template points at a missing category"
                );
                DomainError::Internal {
                    message: "Template category missing".to_string(),
                }
            })?;

        let title = if detail.headline.trim().is_empty() {
            template.title.clone()
        } else {
            detail.headline.clone()
        };

        Ok(TemplateDetailView {
            id: template.id,
            category_id: template.category_id,
            category_name,
            title,
            description: detail.summary.clone(),
            tags: template.tag_list(),
            is_pro: template.is_pro,
            best_practices: detail.best_practice_list(),
            reply_soft: detail.reply_soft,
            reply_neutral: detail.reply_neutral,
            reply_firm: detail.reply_firm,
            when_not_to_use: detail.when_not_to_use,
        })
    }

    async fn viewer(&self, session: &SessionIdentity) -> DomainResult<Identity> {
        self.identity_repository
            .find_by_id(session.id)
            .await?
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }
}
