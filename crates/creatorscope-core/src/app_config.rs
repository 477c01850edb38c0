use crate::credentials::PlatformCredentials;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Application configuration, loaded once at startup and passed by reference
/// to whatever needs it. There is no module-scope singleton; tests construct
/// their own instances with mock credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional fetch attempts after the first failure for transient errors.
    pub max_retries: u32,
    /// Base delay for exponential retry back-off, in milliseconds.
    pub retry_backoff_base_ms: u64,
    /// Delay between requests in sequential batch operations.
    pub inter_request_delay_ms: u64,
    /// Per-platform credentials; `Debug` on this field is redacted.
    pub credentials: PlatformCredentials,
}
