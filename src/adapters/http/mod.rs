//! HTTP adapters - server-rendered form page and JSON API.

pub mod app;
pub mod forms;

// Re-export key types for convenience
pub use app::build_app;
pub use forms::{forms_router, FormsAppState};
