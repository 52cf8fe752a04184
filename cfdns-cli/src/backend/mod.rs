//! Backend layer: where the session's settings come from

pub mod config_service;
pub mod credential_service;

pub use config_service::{ConfigService, LocalConfigService};
pub use credential_service::resolve_credentials;
