//! Normalized metric records shared across the workspace.
//!
//! [`PlatformViewData`] is the single shape every platform-specific API
//! response is mapped onto. Exactly one of a populated data record or an
//! `error` string is meaningful per [`ApiResponse`]; the `success` flag
//! disambiguates. Counts are unsigned, so a negative or `NaN` value can
//! never appear in a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// One content item's metrics, normalized from a platform-specific API shape.
///
/// `views` is always present and defaults to 0 for platforms that expose no
/// view concept. The remaining counts are `None` when the platform's API
/// surface does not carry them at all, and `Some(0)` when it does but the
/// value is absent or unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformViewData {
    pub platform: Platform,
    pub views: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    /// ISO-8601 duration (`PT#H#M#S`) for video content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_count: Option<u64>,
    /// Set at normalization time.
    pub last_updated: DateTime<Utc>,
    /// Present only when the fetch or normalization failed; the numeric
    /// fields are zeroed in that case so the caller can always render a
    /// consistent row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlatformViewData {
    /// A record with every count zeroed and no optional metrics.
    #[must_use]
    pub fn zeroed(platform: Platform) -> Self {
        Self {
            platform,
            views: 0,
            likes: None,
            shares: None,
            comments: None,
            duration: None,
            subscriber_count: None,
            followers: None,
            track_count: None,
            last_updated: Utc::now(),
            error: None,
        }
    }

    /// A zeroed row carrying an error message, used when a fetch for one
    /// platform or item fails inside a batch operation.
    #[must_use]
    pub fn failure(platform: Platform, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::zeroed(platform)
        }
    }
}

/// The uniform result shape returned to callers for single-platform fetches.
///
/// `success: true` guarantees `data` is populated and `error` is `None`;
/// `success: false` guarantees the reverse. Nothing in the fetch layer
/// throws past this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PlatformViewData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Remaining request quota reported by the upstream API, when exposed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_remaining: Option<u64>,
}

impl ApiResponse {
    /// A successful response wrapping a normalized record.
    #[must_use]
    pub fn ok(data: PlatformViewData, rate_limit_remaining: Option<u64>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            rate_limit_remaining,
        }
    }

    /// A failure response carrying only the error message.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            rate_limit_remaining: None,
        }
    }
}

/// Metrics summed or averaged over a list of content items for one platform.
///
/// Recomputed from scratch on every aggregation call; never cached.
/// `total_videos` counts every input item including failed ones — failure
/// rows contribute 0 to the sums but still describe an item the caller asked
/// about. `average_subscriber_count` is the mean over items with a *positive*
/// subscriber count only; zero or missing counts are excluded from the
/// denominator, not treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPlatformData {
    pub platform: Platform,
    pub total_videos: usize,
    pub total_views: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    /// Sum of per-item durations, reformatted as ISO-8601.
    pub total_duration: String,
    pub average_subscriber_count: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_record_has_no_error_and_zero_views() {
        let data = PlatformViewData::zeroed(Platform::Instagram);
        assert_eq!(data.views, 0);
        assert!(data.error.is_none());
        assert!(data.likes.is_none());
    }

    #[test]
    fn failure_record_zeroes_metrics_and_sets_error() {
        let data = PlatformViewData::failure(Platform::Youtube, "boom");
        assert_eq!(data.views, 0);
        assert_eq!(data.error.as_deref(), Some("boom"));
    }

    #[test]
    fn api_response_ok_sets_success_and_data() {
        let response = ApiResponse::ok(PlatformViewData::zeroed(Platform::Spotify), Some(42));
        assert!(response.success);
        assert!(response.data.is_some());
        assert!(response.error.is_none());
        assert_eq!(response.rate_limit_remaining, Some(42));
    }

    #[test]
    fn api_response_failure_sets_error_only() {
        let response = ApiResponse::failure("no credential");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error.as_deref(), Some("no credential"));
    }

    #[test]
    fn optional_counts_are_omitted_from_json() {
        let data = PlatformViewData::zeroed(Platform::Pinterest);
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("likes").is_none());
        assert_eq!(json["views"], 0);
        assert_eq!(json["platform"], "pinterest");
    }
}
