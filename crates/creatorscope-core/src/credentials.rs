//! Per-platform API credentials.

use crate::platform::Platform;

/// Credential bag for every supported platform.
///
/// All fields are optional: the fetch layer checks presence per call and
/// short-circuits with a configuration error naming the platform when the
/// required credential is missing. The owning client replaces the whole bag
/// on reload; nothing mutates individual fields after construction.
#[derive(Clone, Default)]
pub struct PlatformCredentials {
    /// YouTube Data API v3 key, sent as the `key` query parameter.
    pub youtube_api_key: Option<String>,
    pub instagram_access_token: Option<String>,
    pub tiktok_access_token: Option<String>,
    pub facebook_access_token: Option<String>,
    pub pinterest_access_token: Option<String>,
    /// Spotify bearer token, either user-supplied or obtained via the
    /// client-credentials token exchange.
    pub spotify_access_token: Option<String>,
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
}

impl PlatformCredentials {
    /// The credential required to call `platform`'s metrics endpoint, or
    /// `None` when it is not configured.
    #[must_use]
    pub fn for_platform(&self, platform: Platform) -> Option<&str> {
        let credential = match platform {
            Platform::Youtube => &self.youtube_api_key,
            Platform::Instagram => &self.instagram_access_token,
            Platform::Tiktok => &self.tiktok_access_token,
            Platform::Facebook => &self.facebook_access_token,
            Platform::Pinterest => &self.pinterest_access_token,
            Platform::Spotify => &self.spotify_access_token,
        };
        credential.as_deref().filter(|s| !s.is_empty())
    }
}

impl std::fmt::Debug for PlatformCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[redacted]");
        f.debug_struct("PlatformCredentials")
            .field("youtube_api_key", &redact(&self.youtube_api_key))
            .field(
                "instagram_access_token",
                &redact(&self.instagram_access_token),
            )
            .field("tiktok_access_token", &redact(&self.tiktok_access_token))
            .field(
                "facebook_access_token",
                &redact(&self.facebook_access_token),
            )
            .field(
                "pinterest_access_token",
                &redact(&self.pinterest_access_token),
            )
            .field("spotify_access_token", &redact(&self.spotify_access_token))
            .field("spotify_client_id", &redact(&self.spotify_client_id))
            .field(
                "spotify_client_secret",
                &redact(&self.spotify_client_secret),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_platform_returns_configured_credential() {
        let credentials = PlatformCredentials {
            youtube_api_key: Some("yt-key".to_owned()),
            ..PlatformCredentials::default()
        };
        assert_eq!(credentials.for_platform(Platform::Youtube), Some("yt-key"));
        assert_eq!(credentials.for_platform(Platform::Tiktok), None);
    }

    #[test]
    fn for_platform_treats_empty_string_as_absent() {
        let credentials = PlatformCredentials {
            pinterest_access_token: Some(String::new()),
            ..PlatformCredentials::default()
        };
        assert_eq!(credentials.for_platform(Platform::Pinterest), None);
    }

    #[test]
    fn debug_redacts_secrets() {
        let credentials = PlatformCredentials {
            facebook_access_token: Some("EAAB-secret".to_owned()),
            ..PlatformCredentials::default()
        };
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("EAAB-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
