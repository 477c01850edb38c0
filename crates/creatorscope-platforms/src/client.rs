//! Fetch orchestration: extract ID → build endpoint URL → HTTP GET →
//! normalize → wrap in the uniform [`ApiResponse`] shape.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use creatorscope_core::{
    AggregatedPlatformData, ApiResponse, AppConfig, ContentItem, Platform, PlatformCredentials,
    PlatformViewData,
};

use crate::aggregate::aggregate_platform_data;
use crate::error::PlatformError;
use crate::extract::{self, SpotifyResourceKind};
use crate::normalize;
use crate::retry::retry_with_backoff;
use crate::types::SpotifyTokenResponse;

/// Per-platform API base URLs.
///
/// The defaults point at production; tests override individual entries to
/// point at a wiremock server.
#[derive(Debug, Clone)]
pub struct PlatformEndpoints {
    pub youtube: String,
    pub instagram: String,
    pub tiktok: String,
    pub facebook: String,
    pub pinterest: String,
    pub spotify: String,
    /// Spotify's accounts service, used only for the token exchange.
    pub spotify_accounts: String,
}

impl Default for PlatformEndpoints {
    fn default() -> Self {
        Self {
            youtube: "https://www.googleapis.com/youtube/v3".to_owned(),
            instagram: "https://graph.instagram.com/v12.0".to_owned(),
            tiktok: "https://open.tiktokapis.com/v2".to_owned(),
            facebook: "https://graph.facebook.com/v18.0".to_owned(),
            pinterest: "https://api.pinterest.com/v5".to_owned(),
            spotify: "https://api.spotify.com/v1".to_owned(),
            spotify_accounts: "https://accounts.spotify.com".to_owned(),
        }
    }
}

/// Client for the per-platform metrics APIs.
///
/// Owns the HTTP client, the credential map, and the endpoint table.
/// Constructed once from an [`AppConfig`] and passed by reference to callers;
/// there is no module-scope singleton. The credential map is read-only during
/// a fetch cycle and only replaced wholesale via
/// [`PlatformClient::reload_credentials`].
///
/// The public fetch methods never return an error: every failure is folded
/// into the [`ApiResponse`] / failure-row shape so callers can always render
/// a consistent result per platform.
pub struct PlatformClient {
    client: Client,
    credentials: PlatformCredentials,
    endpoints: PlatformEndpoints,
    max_retries: u32,
    backoff_base_ms: u64,
    inter_request_delay_ms: u64,
}

impl PlatformClient {
    /// Creates a client pointed at the production APIs.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, PlatformError> {
        Self::with_endpoints(config, PlatformEndpoints::default())
    }

    /// Creates a client with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_endpoints(
        config: &AppConfig,
        endpoints: PlatformEndpoints,
    ) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            credentials: config.credentials.clone(),
            endpoints,
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
            inter_request_delay_ms: config.inter_request_delay_ms,
        })
    }

    /// Replaces the whole credential map, e.g. after an OAuth flow completes
    /// and a fresh token becomes available. No per-field mutation.
    pub fn reload_credentials(&mut self, credentials: PlatformCredentials) {
        self.credentials = credentials;
    }

    /// Fetches and normalizes metrics for one content item on one platform.
    ///
    /// Transient upstream errors are retried with back-off; every remaining
    /// failure — missing credential, unextractable ID, HTTP error, embedded
    /// payload error, network failure — is converted into
    /// `ApiResponse { success: false, error }`. Nothing throws past this
    /// boundary.
    pub async fn fetch_platform_views(
        &self,
        item: &ContentItem,
        platform: Platform,
    ) -> ApiResponse {
        let result = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.fetch_views_inner(item, platform)
        })
        .await;

        match result {
            Ok((data, rate_limit_remaining)) => ApiResponse::ok(data, rate_limit_remaining),
            Err(err) => {
                tracing::warn!(
                    platform = %platform,
                    url = %item.original_url,
                    error = %err,
                    "platform fetch failed"
                );
                ApiResponse::failure(err.to_string())
            }
        }
    }

    /// Fetches metrics for every platform the item declares, sequentially.
    ///
    /// Continues past individual failures: a failing platform produces a
    /// zeroed row with `error` set, and the remaining platforms are still
    /// fetched. Platform names the system does not recognize are skipped
    /// with a warning.
    pub async fn fetch_all_platform_views(&self, item: &ContentItem) -> Vec<PlatformViewData> {
        let mut results = Vec::with_capacity(item.platforms.len());
        let mut first = true;
        for name in &item.platforms {
            let Ok(platform) = name.parse::<Platform>() else {
                tracing::warn!(platform = %name, "skipping unknown platform name");
                continue;
            };
            if !first && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }
            first = false;
            results.push(self.fetch_row(item, platform).await);
        }
        results
    }

    /// Fetches one platform's metrics for every item, then aggregates.
    ///
    /// Items are processed **sequentially** — one await per item — because
    /// several upstream APIs enforce tight per-minute quotas. Do not fan
    /// this out without re-checking those limits. A failing item stays in
    /// the aggregate's `total_videos` and contributes 0 to the sums.
    pub async fn fetch_aggregated_data(
        &self,
        items: &[ContentItem],
        platform: Platform,
    ) -> AggregatedPlatformData {
        let mut rows = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if index > 0 && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }
            rows.push(self.fetch_row(item, platform).await);
        }
        aggregate_platform_data(platform, &rows)
    }

    /// Exchanges Spotify client credentials for a bearer token.
    ///
    /// The caller feeds the returned token back through
    /// [`PlatformClient::reload_credentials`] to enable Spotify fetches.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::MissingCredential`] when the client ID or secret is
    ///   not configured.
    /// - [`PlatformError::UnexpectedStatus`] / [`PlatformError::Http`] /
    ///   [`PlatformError::Deserialize`] on exchange failure.
    pub async fn exchange_spotify_token(&self) -> Result<String, PlatformError> {
        let client_id = self
            .credentials
            .spotify_client_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(PlatformError::MissingCredential {
                platform: Platform::Spotify,
            })?;
        let client_secret = self
            .credentials
            .spotify_client_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(PlatformError::MissingCredential {
                platform: Platform::Spotify,
            })?;

        let url = format!(
            "{}/api/token",
            self.endpoints.spotify_accounts.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let detail = Self::status_detail(status, response.text().await.ok());
            return Err(PlatformError::UnexpectedStatus {
                status: status.as_u16(),
                detail,
            });
        }
        let body = response.text().await?;
        let token: SpotifyTokenResponse =
            serde_json::from_str(&body).map_err(|e| PlatformError::Deserialize {
                context: "spotify token response".to_owned(),
                source: e,
            })?;
        Ok(token.access_token)
    }

    /// One fetch folded into a row: data on success, zeroed failure row
    /// otherwise. Used by the batch operations.
    async fn fetch_row(&self, item: &ContentItem, platform: Platform) -> PlatformViewData {
        let response = self.fetch_platform_views(item, platform).await;
        match response.data {
            Some(data) => data,
            None => PlatformViewData::failure(
                platform,
                response
                    .error
                    .unwrap_or_else(|| "unknown error".to_owned()),
            ),
        }
    }

    /// The full per-call sequence for one platform, with typed errors.
    async fn fetch_views_inner(
        &self,
        item: &ContentItem,
        platform: Platform,
    ) -> Result<(PlatformViewData, Option<u64>), PlatformError> {
        let credential = self
            .credentials
            .for_platform(platform)
            .ok_or(PlatformError::MissingCredential { platform })?
            .to_owned();

        match platform {
            Platform::Youtube => {
                let id = Self::require_id(item, platform)?;
                self.fetch_youtube(&id, &credential).await
            }
            Platform::Instagram => {
                let id = Self::require_id(item, platform)?;
                let url = Self::instagram_media_url(&self.endpoints.instagram, &id, &credential)?;
                let (raw, rate_limit) = self.request_json(url, None, platform).await?;
                Ok((normalize::normalize_instagram(raw)?, rate_limit))
            }
            Platform::Tiktok => {
                let id = Self::require_id(item, platform)?;
                let url = Self::tiktok_video_url(&self.endpoints.tiktok, &id, &credential)?;
                let (raw, rate_limit) = self.request_json(url, None, platform).await?;
                Ok((normalize::normalize_tiktok(raw)?, rate_limit))
            }
            Platform::Facebook => {
                let id = Self::require_id(item, platform)?;
                let url = Self::facebook_post_url(&self.endpoints.facebook, &id, &credential)?;
                let (raw, rate_limit) = self.request_json(url, None, platform).await?;
                Ok((normalize::normalize_facebook(raw)?, rate_limit))
            }
            Platform::Pinterest => {
                let id = Self::require_id(item, platform)?;
                let url = Self::pinterest_pin_url(&self.endpoints.pinterest, &id, &credential)?;
                let (raw, rate_limit) = self.request_json(url, None, platform).await?;
                Ok((normalize::normalize_pinterest(raw)?, rate_limit))
            }
            Platform::Spotify => {
                let resource = extract::extract_spotify_resource(&item.original_url).ok_or_else(
                    || PlatformError::IdentifierExtraction {
                        platform,
                        url: item.original_url.clone(),
                    },
                )?;
                let url = match resource.kind {
                    SpotifyResourceKind::Track => {
                        Self::spotify_track_url(&self.endpoints.spotify, &resource.id)?
                    }
                    SpotifyResourceKind::Playlist => {
                        Self::spotify_playlist_url(&self.endpoints.spotify, &resource.id)?
                    }
                };
                let (raw, rate_limit) = self.request_json(url, Some(&credential), platform).await?;
                let data = match resource.kind {
                    SpotifyResourceKind::Track => normalize::normalize_spotify_track(raw)?,
                    SpotifyResourceKind::Playlist => normalize::normalize_spotify_playlist(raw)?,
                };
                Ok((data, rate_limit))
            }
        }
    }

    /// YouTube needs a second fetch: the video's channel statistics supply
    /// the subscriber count. A failure there degrades to the zero default
    /// instead of failing the whole call.
    async fn fetch_youtube(
        &self,
        video_id: &str,
        api_key: &str,
    ) -> Result<(PlatformViewData, Option<u64>), PlatformError> {
        let url = Self::youtube_videos_url(&self.endpoints.youtube, video_id, api_key)?;
        let (raw, rate_limit) = self.request_json(url, None, Platform::Youtube).await?;
        let channel_id = normalize::youtube_channel_id(&raw);
        let mut data = normalize::normalize_youtube(raw)?;

        if let Some(channel_id) = channel_id {
            let channel_url =
                Self::youtube_channels_url(&self.endpoints.youtube, &channel_id, api_key)?;
            match self
                .request_json(channel_url, None, Platform::Youtube)
                .await
                .and_then(|(raw, _)| normalize::youtube_subscriber_count(raw))
            {
                Ok(subscribers) => data.subscriber_count = Some(subscribers),
                Err(err) => tracing::warn!(
                    %channel_id,
                    error = %err,
                    "channel statistics fetch failed; keeping zero subscriber count"
                ),
            }
        }

        Ok((data, rate_limit))
    }

    fn require_id(item: &ContentItem, platform: Platform) -> Result<String, PlatformError> {
        extract::extract_id(&item.original_url, platform).ok_or_else(|| {
            PlatformError::IdentifierExtraction {
                platform,
                url: item.original_url.clone(),
            }
        })
    }

    /// Sends a GET, triages the status, and parses the body as JSON.
    ///
    /// Returns the parsed body together with the upstream
    /// `x-ratelimit-remaining` value when the API exposes one.
    async fn request_json(
        &self,
        url: Url,
        bearer: Option<&str>,
        platform: Platform,
    ) -> Result<(Value, Option<u64>), PlatformError> {
        let mut request = self.client.get(url.clone());
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(PlatformError::RateLimited {
                platform,
                retry_after_secs,
            });
        }

        if !status.is_success() {
            let detail = Self::status_detail(status, response.text().await.ok());
            return Err(PlatformError::UnexpectedStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let rate_limit_remaining = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());

        let body = response.text().await?;
        let value = serde_json::from_str(&body).map_err(|e| PlatformError::Deserialize {
            context: url.to_string(),
            source: e,
        })?;
        Ok((value, rate_limit_remaining))
    }

    /// Status text plus the upstream error body, when it has one.
    fn status_detail(status: reqwest::StatusCode, body: Option<String>) -> String {
        let reason = status.canonical_reason().unwrap_or("unknown status");
        match body.as_deref().map(str::trim) {
            Some(body) if !body.is_empty() => format!("{reason}: {body}"),
            _ => reason.to_owned(),
        }
    }

    // -----------------------------------------------------------------------
    // Endpoint URL builders
    // -----------------------------------------------------------------------

    fn parse_endpoint(base: &str, path: &str) -> Result<Url, PlatformError> {
        let joined = format!("{}/{path}", base.trim_end_matches('/'));
        Url::parse(&joined).map_err(|e| PlatformError::InvalidEndpoint {
            url: joined,
            reason: e.to_string(),
        })
    }

    fn youtube_videos_url(base: &str, video_id: &str, api_key: &str) -> Result<Url, PlatformError> {
        let mut url = Self::parse_endpoint(base, "videos")?;
        url.query_pairs_mut()
            .append_pair("part", "statistics,contentDetails,snippet")
            .append_pair("id", video_id)
            .append_pair("key", api_key);
        Ok(url)
    }

    fn youtube_channels_url(
        base: &str,
        channel_id: &str,
        api_key: &str,
    ) -> Result<Url, PlatformError> {
        let mut url = Self::parse_endpoint(base, "channels")?;
        url.query_pairs_mut()
            .append_pair("part", "statistics")
            .append_pair("id", channel_id)
            .append_pair("key", api_key);
        Ok(url)
    }

    fn instagram_media_url(
        base: &str,
        media_id: &str,
        access_token: &str,
    ) -> Result<Url, PlatformError> {
        let mut url = Self::parse_endpoint(base, media_id)?;
        url.query_pairs_mut()
            .append_pair("fields", "like_count,comments_count")
            .append_pair("access_token", access_token);
        Ok(url)
    }

    fn tiktok_video_url(
        base: &str,
        video_id: &str,
        access_token: &str,
    ) -> Result<Url, PlatformError> {
        let mut url = Self::parse_endpoint(base, "video/query/")?;
        url.query_pairs_mut()
            .append_pair("access_token", access_token)
            .append_pair("fields", "play_count,like_count,share_count,comment_count")
            .append_pair("video_id", video_id);
        Ok(url)
    }

    fn facebook_post_url(
        base: &str,
        post_id: &str,
        access_token: &str,
    ) -> Result<Url, PlatformError> {
        let mut url = Self::parse_endpoint(base, post_id)?;
        url.query_pairs_mut()
            .append_pair(
                "fields",
                "insights.metric(post_impressions,post_reactions_by_type_total)",
            )
            .append_pair("access_token", access_token);
        Ok(url)
    }

    fn pinterest_pin_url(
        base: &str,
        pin_id: &str,
        access_token: &str,
    ) -> Result<Url, PlatformError> {
        let mut url = Self::parse_endpoint(base, &format!("pins/{pin_id}"))?;
        url.query_pairs_mut()
            .append_pair("access_token", access_token);
        Ok(url)
    }

    fn spotify_track_url(base: &str, track_id: &str) -> Result<Url, PlatformError> {
        Self::parse_endpoint(base, &format!("tracks/{track_id}"))
    }

    fn spotify_playlist_url(base: &str, playlist_id: &str) -> Result<Url, PlatformError> {
        Self::parse_endpoint(base, &format!("playlists/{playlist_id}"))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
