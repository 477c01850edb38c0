use crate::app_config::{AppConfig, Environment};
use crate::credentials::PlatformCredentials;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed. Every platform credential is optional;
/// the fetch layer reports missing ones per call.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|s| !s.is_empty()) };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("CREATORSCOPE_ENV", "development"));
    let log_level = or_default("CREATORSCOPE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("CREATORSCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "CREATORSCOPE_USER_AGENT",
        "creatorscope/0.1 (creator-analytics)",
    );
    let max_retries = parse_u32("CREATORSCOPE_MAX_RETRIES", "3")?;
    let retry_backoff_base_ms = parse_u64("CREATORSCOPE_RETRY_BACKOFF_BASE_MS", "1000")?;
    let inter_request_delay_ms = parse_u64("CREATORSCOPE_INTER_REQUEST_DELAY_MS", "250")?;

    let credentials = PlatformCredentials {
        youtube_api_key: optional("CREATORSCOPE_YOUTUBE_API_KEY"),
        instagram_access_token: optional("CREATORSCOPE_INSTAGRAM_ACCESS_TOKEN"),
        tiktok_access_token: optional("CREATORSCOPE_TIKTOK_ACCESS_TOKEN"),
        facebook_access_token: optional("CREATORSCOPE_FACEBOOK_ACCESS_TOKEN"),
        pinterest_access_token: optional("CREATORSCOPE_PINTEREST_ACCESS_TOKEN"),
        spotify_access_token: optional("CREATORSCOPE_SPOTIFY_ACCESS_TOKEN"),
        spotify_client_id: optional("CREATORSCOPE_SPOTIFY_CLIENT_ID"),
        spotify_client_secret: optional("CREATORSCOPE_SPOTIFY_CLIENT_SECRET"),
    };

    Ok(AppConfig {
        env,
        log_level,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        inter_request_delay_ms,
        credentials,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
