use serde::Serialize;

use sr_core::services::catalog::CategoryView;

/// Body of `GET /templates`
#[derive(Debug, Clone, Serialize)]
pub struct TemplateListResponse {
    pub categories: Vec<CategoryView>,
}
