//! Serializable catalog views returned to clients

use serde::Serialize;

/// A template as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub is_pro: bool,

    /// Pro template viewed by a free account
    pub is_locked: bool,
}

/// An active category with its active templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub templates: Vec<TemplateSummary>,
}

/// The full reply text of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDetailView {
    pub id: u64,
    pub category_id: u64,
    pub category_name: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub is_pro: bool,
    pub reply_soft: String,
    pub reply_neutral: String,
    pub reply_firm: String,
    pub when_not_to_use: String,
    pub best_practices: Vec<String>,
}
