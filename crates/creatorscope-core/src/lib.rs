//! Shared domain types and configuration for creatorscope.

pub mod app_config;
pub mod config;
pub mod content;
pub mod credentials;
pub mod error;
pub mod metrics;
pub mod platform;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::ContentItem;
pub use credentials::PlatformCredentials;
pub use error::ConfigError;
pub use metrics::{AggregatedPlatformData, ApiResponse, PlatformViewData};
pub use platform::Platform;
