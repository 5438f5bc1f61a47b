// survey-client/src/lib.rs
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod notify;

// Re-export commonly used types
pub use api::actions::RoleActions;
pub use api::client::ApiClient;
pub use api::envelope::Envelope;
pub use config::ApiConfig;
pub use domain::action::Action;
pub use domain::permission::PermissionChecker;
pub use domain::role::Role;
pub use error::{ApiError, ApiResult, ErrorKind};
