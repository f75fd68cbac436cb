//! Reply template catalog: categories, templates and their detail rows.

use serde::{Deserialize, Serialize};

/// A group of templates shown together in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCategory {
    pub id: u64,
    pub name: String,
    pub description: String,

    /// Icon identifier understood by the client
    pub icon: String,
    pub sort_order: i32,
    pub is_active: bool,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,
    pub category_id: u64,
    pub title: String,
    pub description: String,

    /// Raw tag list as stored, separated by ASCII or full-width commas
    pub tags: String,

    /// Whether the template requires a paid plan
    pub is_pro: bool,
    pub sort_order: i32,
    pub is_active: bool,
}

impl Template {
    /// Parsed tags, trimmed and without empty entries
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }

    /// Whether `viewer_is_pro` is barred from the full template
    pub fn is_locked_for(&self, viewer_is_pro: bool) -> bool {
        self.is_pro && !viewer_is_pro
    }
}

/// Full reply text for a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDetail {
    pub template_id: u64,

    /// Overrides the template title when non-empty
    pub headline: String,
    pub summary: String,
    pub reply_soft: String,
    pub reply_neutral: String,
    pub reply_firm: String,
    pub when_not_to_use: String,

    /// One practice per line
    pub best_practices: String,
}

impl TemplateDetail {
    /// Parsed best practices, one per non-blank line
    pub fn best_practice_list(&self) -> Vec<String> {
        split_lines(&self.best_practices)
    }
}

/// Split a tag string on `,` or `，`
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(|c| c == ',' || c == '，')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into trimmed, non-empty lines
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
