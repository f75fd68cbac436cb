//! Template catalog service module
//!
//! Serves the reply template catalog to authenticated identities and gates
//! pro templates behind the paid plan.

mod service;
mod views;

#[cfg(test)]
mod tests;

pub use service::CatalogService;
pub use views::{CategoryView, TemplateDetailView, TemplateSummary};
