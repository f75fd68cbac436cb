//! MySQL repository implementations

pub mod identity_repository_impl;
pub mod template_repository_impl;

pub use identity_repository_impl::MySqlIdentityRepository;
pub use template_repository_impl::MySqlTemplateRepository;
