//! Raw per-platform API response types.
//!
//! ## Observed wire formats
//!
//! ### YouTube Data API v3
//! Every count in `statistics` is a **decimal string**, not a number
//! (`"viewCount": "100"`). Fields are omitted entirely when the channel has
//! disabled them (e.g. hidden like counts), so all of them are
//! `Option<String>` and parse with a zero default. `contentDetails.duration`
//! is an ISO-8601 duration string.
//!
//! ### TikTok
//! Counts arrive as JSON numbers inside a `data` envelope. A 2xx response may
//! still carry an `error` object; that embedded error takes precedence over
//! the HTTP status and fails the whole call.
//!
//! ### Facebook Graph
//! Metrics come back as an `insights.data` array whose element order is not
//! guaranteed; lookup is by the `name` field, never by index.
//! `post_reactions_by_type_total` values have been observed both as a plain
//! number and as an object keyed by reaction type (`{"like": 3, "love": 1}`),
//! so the value is kept as raw JSON and coerced during normalization.
//!
//! ### Counts in general
//! Upstream numeric fields arrive as strings, numbers, or are missing
//! entirely depending on platform and API version. [`RawCount`] accepts all
//! of those shapes; [`RawCount::as_u64`] clamps negatives and unparseable
//! strings to 0 so a `NaN`-equivalent can never leak into a record.

use serde::Deserialize;

/// A count that may arrive as a JSON number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl RawCount {
    /// The count as `u64`; negative or unparseable values collapse to 0.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        match self {
            RawCount::Unsigned(n) => *n,
            RawCount::Signed(n) => u64::try_from(*n).unwrap_or(0),
            RawCount::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

// ---------------------------------------------------------------------------
// YouTube
// ---------------------------------------------------------------------------

/// Envelope for `GET /videos` and the items inside it.
#[derive(Debug, Deserialize)]
pub struct YouTubeVideoListResponse {
    #[serde(default)]
    pub items: Vec<YouTubeVideoItem>,
}

#[derive(Debug, Deserialize)]
pub struct YouTubeVideoItem {
    #[serde(default)]
    pub snippet: Option<YouTubeSnippet>,
    #[serde(default)]
    pub statistics: Option<YouTubeVideoStatistics>,
    #[serde(default, rename = "contentDetails")]
    pub content_details: Option<YouTubeContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeVideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct YouTubeContentDetails {
    #[serde(default)]
    pub duration: Option<String>,
}

/// Envelope for `GET /channels` (subscriber statistics merge).
#[derive(Debug, Deserialize)]
pub struct YouTubeChannelListResponse {
    #[serde(default)]
    pub items: Vec<YouTubeChannelItem>,
}

#[derive(Debug, Deserialize)]
pub struct YouTubeChannelItem {
    #[serde(default)]
    pub statistics: Option<YouTubeChannelStatistics>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeChannelStatistics {
    #[serde(default)]
    pub subscriber_count: Option<String>,
}

// ---------------------------------------------------------------------------
// Instagram
// ---------------------------------------------------------------------------

/// A media object from the Instagram Graph API. The API surface in use does
/// not expose view counts at all.
#[derive(Debug, Deserialize)]
pub struct InstagramMedia {
    #[serde(default)]
    pub like_count: Option<RawCount>,
    #[serde(default)]
    pub comments_count: Option<RawCount>,
}

// ---------------------------------------------------------------------------
// TikTok
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TikTokVideoQueryResponse {
    #[serde(default)]
    pub data: Option<TikTokVideoData>,
    /// Present alongside HTTP 200 when the request failed inside TikTok's
    /// API layer. Takes precedence over the HTTP status.
    #[serde(default)]
    pub error: Option<TikTokError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TikTokVideoData {
    #[serde(default)]
    pub play_count: Option<RawCount>,
    #[serde(default)]
    pub like_count: Option<RawCount>,
    #[serde(default)]
    pub share_count: Option<RawCount>,
    #[serde(default)]
    pub comment_count: Option<RawCount>,
}

#[derive(Debug, Deserialize)]
pub struct TikTokError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Facebook
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct FacebookPostResponse {
    #[serde(default)]
    pub insights: Option<FacebookInsights>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FacebookInsights {
    #[serde(default)]
    pub data: Vec<FacebookInsightMetric>,
}

#[derive(Debug, Deserialize)]
pub struct FacebookInsightMetric {
    pub name: String,
    #[serde(default)]
    pub values: Vec<FacebookInsightValue>,
}

#[derive(Debug, Deserialize)]
pub struct FacebookInsightValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Pinterest
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PinterestPin {
    #[serde(default)]
    pub save_count: Option<RawCount>,
}

// ---------------------------------------------------------------------------
// Spotify
// ---------------------------------------------------------------------------

/// A track object. Spotify exposes no public engagement counts for tracks.
#[derive(Debug, Deserialize)]
pub struct SpotifyTrack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct SpotifyPlaylist {
    #[serde(default)]
    pub followers: Option<SpotifyFollowers>,
    #[serde(default)]
    pub tracks: Option<SpotifyTracksRef>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyFollowers {
    #[serde(default)]
    pub total: Option<RawCount>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpotifyTracksRef {
    #[serde(default)]
    pub total: Option<RawCount>,
}

/// Response from the client-credentials token exchange at
/// `accounts.spotify.com/api/token`.
#[derive(Debug, Deserialize)]
pub struct SpotifyTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
