//! In-memory implementation of TemplateRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::template::{Template, TemplateCategory, TemplateDetail};
use crate::errors::DomainError;

use super::trait_::TemplateRepository;

#[derive(Default)]
struct Catalog {
    categories: HashMap<u64, TemplateCategory>,
    templates: HashMap<u64, Template>,
    details: HashMap<u64, TemplateDetail>,
}

/// In-memory template repository seeded through its insert methods
#[derive(Default)]
pub struct MockTemplateRepository {
    catalog: RwLock<Catalog>,
}

impl MockTemplateRepository {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a category
    pub async fn insert_category(&self, category: TemplateCategory) {
        self.catalog
            .write()
            .await
            .categories
            .insert(category.id, category);
    }

    /// Insert or replace a template
    pub async fn insert_template(&self, template: Template) {
        self.catalog
            .write()
            .await
            .templates
            .insert(template.id, template);
    }

    /// Insert or replace the detail row of a template
    pub async fn insert_detail(&self, detail: TemplateDetail) {
        self.catalog
            .write()
            .await
            .details
            .insert(detail.template_id, detail);
    }
}

#[async_trait]
impl TemplateRepository for MockTemplateRepository {
    async fn list_active_categories(&self) -> Result<Vec<TemplateCategory>, DomainError> {
        let catalog = self.catalog.read().await;
        let mut categories: Vec<_> = catalog
            .categories
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        categories.sort_by_key(|c| (c.sort_order, c.id));
        Ok(categories)
    }

    async fn list_active_templates(&self) -> Result<Vec<Template>, DomainError> {
        let catalog = self.catalog.read().await;
        let mut templates: Vec<_> = catalog
            .templates
            .values()
            .filter(|t| t.is_active)
            .cloned()
            .collect();
        templates.sort_by_key(|t| (t.category_id, t.sort_order, t.id));
        Ok(templates)
    }

    async fn find_active_template(&self, id: u64) -> Result<Option<Template>, DomainError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.templates.get(&id).filter(|t| t.is_active).cloned())
    }

    async fn find_detail(&self, template_id: u64) -> Result<Option<TemplateDetail>, DomainError> {
        Ok(self.catalog.read().await.details.get(&template_id).cloned())
    }

    async fn find_category(&self, id: u64) -> Result<Option<TemplateCategory>, DomainError> {
        Ok(self.catalog.read().await.categories.get(&id).cloned())
    }
}
