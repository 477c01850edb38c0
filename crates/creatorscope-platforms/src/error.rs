use creatorscope_core::Platform;
use thiserror::Error;

/// Errors raised by the platform fetch layer.
///
/// Every variant is converted into the uniform `ApiResponse` failure shape at
/// the orchestrator boundary; callers of the public fetch methods never see
/// these directly.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The credential required for the requested platform is not configured.
    /// Detected before any network call.
    #[error("no credential configured for {platform}")]
    MissingCredential { platform: Platform },

    /// The URL could not be parsed into a platform-native content ID.
    /// Detected before any network call.
    #[error("could not extract a {platform} content ID from \"{url}\"")]
    IdentifierExtraction { platform: Platform, url: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 429 from the upstream API.
    #[error("rate limited by {platform} (retry after {retry_after_secs}s)")]
    RateLimited {
        platform: Platform,
        retry_after_secs: u64,
    },

    /// Any other non-2xx HTTP status; `detail` carries the status text and,
    /// where available, the upstream error body.
    #[error("unexpected HTTP status {status}: {detail}")]
    UnexpectedStatus { status: u16, detail: String },

    /// A 2xx response whose JSON body itself signals failure, e.g. TikTok's
    /// embedded `error` object or YouTube's empty `items` array.
    #[error("{platform} API error: {message}")]
    Payload { platform: Platform, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A configured base URL does not parse as a URL base.
    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
