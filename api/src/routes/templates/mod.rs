//! Template catalog route handlers
//!
//! Both routes require a session. Pro templates are listed for everyone but
//! only readable in full on a pro account.

pub mod detail;
pub mod list;

pub use detail::template_detail;
pub use list::list_templates;
