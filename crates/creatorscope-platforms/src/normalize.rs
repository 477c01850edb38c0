//! Normalization from raw platform API payloads to
//! [`creatorscope_core::PlatformViewData`].
//!
//! Pure functions: no I/O. Each platform keeps only the metrics its API
//! actually exposes; forced zeros (Instagram views, Spotify track engagement)
//! are deliberate, not missing data. All numeric parsing funnels through one
//! safe-parse-with-default path so an unparseable upstream value becomes 0,
//! never an error or a silently propagated non-value.

use creatorscope_core::{Platform, PlatformViewData};
use serde_json::Value;

use crate::error::PlatformError;
use crate::types::{
    FacebookInsights, FacebookPostResponse, InstagramMedia, PinterestPin, RawCount,
    SpotifyPlaylist, SpotifyTrack, TikTokVideoQueryResponse, YouTubeChannelListResponse,
    YouTubeVideoListResponse,
};

/// Normalizes a raw platform payload into a [`PlatformViewData`] record.
///
/// Spotify payloads are dispatched on their `type` field (`"playlist"` vs
/// anything else, which is treated as a track); callers that already know the
/// resource kind use the specific functions directly.
///
/// # Errors
///
/// - [`PlatformError::Payload`] when a 2xx body signals failure (TikTok's
///   embedded `error` object, YouTube's empty `items` array).
/// - [`PlatformError::Deserialize`] when the body does not match the
///   platform's expected shape.
pub fn normalize(platform: Platform, raw: Value) -> Result<PlatformViewData, PlatformError> {
    match platform {
        Platform::Youtube => normalize_youtube(raw),
        Platform::Instagram => normalize_instagram(raw),
        Platform::Tiktok => normalize_tiktok(raw),
        Platform::Facebook => normalize_facebook(raw),
        Platform::Pinterest => normalize_pinterest(raw),
        Platform::Spotify => {
            if raw.get("type").and_then(Value::as_str) == Some("playlist") {
                normalize_spotify_playlist(raw)
            } else {
                normalize_spotify_track(raw)
            }
        }
    }
}

/// Centralized safe-parse-with-default for upstream counts.
fn count(value: Option<&RawCount>) -> u64 {
    value.map_or(0, RawCount::as_u64)
}

/// Safe-parse for YouTube's string-typed statistics fields.
fn count_str(value: Option<&str>) -> u64 {
    value.unwrap_or("0").trim().parse().unwrap_or(0)
}

fn deserialize<T: serde::de::DeserializeOwned>(
    raw: Value,
    context: &str,
) -> Result<T, PlatformError> {
    serde_json::from_value(raw).map_err(|e| PlatformError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

/// Maps a YouTube `videos.list` response onto the shared record.
///
/// An empty `items` array means the video is gone or not accessible and is a
/// payload error, not a zeroed success. `subscriber_count` starts at 0 here;
/// the fetch layer merges the channel statistics in afterwards.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_youtube(raw: Value) -> Result<PlatformViewData, PlatformError> {
    let response: YouTubeVideoListResponse = deserialize(raw, "youtube videos response")?;
    let item = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| PlatformError::Payload {
            platform: Platform::Youtube,
            message: "video not found or not accessible".to_owned(),
        })?;

    let stats = item.statistics.unwrap_or_default();
    let duration = item
        .content_details
        .and_then(|details| details.duration)
        .unwrap_or_else(|| "PT0S".to_owned());

    let mut data = PlatformViewData::zeroed(Platform::Youtube);
    data.views = count_str(stats.view_count.as_deref());
    data.likes = Some(count_str(stats.like_count.as_deref()));
    data.comments = Some(count_str(stats.comment_count.as_deref()));
    data.duration = Some(duration);
    data.subscriber_count = Some(0);
    Ok(data)
}

/// The channel ID of the first item in a `videos.list` response, used to
/// drive the follow-up subscriber-count fetch.
#[must_use]
pub fn youtube_channel_id(raw: &Value) -> Option<String> {
    raw.get("items")?
        .get(0)?
        .get("snippet")?
        .get("channelId")?
        .as_str()
        .map(str::to_owned)
}

/// Parses the subscriber count out of a `channels.list` response.
///
/// # Errors
///
/// - [`PlatformError::Payload`] when `items` is empty.
/// - [`PlatformError::Deserialize`] on a shape mismatch.
pub fn youtube_subscriber_count(raw: Value) -> Result<u64, PlatformError> {
    let response: YouTubeChannelListResponse = deserialize(raw, "youtube channels response")?;
    let item = response
        .items
        .into_iter()
        .next()
        .ok_or_else(|| PlatformError::Payload {
            platform: Platform::Youtube,
            message: "channel not found".to_owned(),
        })?;
    let stats = item.statistics.unwrap_or_default();
    Ok(count_str(stats.subscriber_count.as_deref()))
}

/// Maps an Instagram Graph media object onto the shared record.
///
/// `views` is always 0: the API surface in use does not expose view counts,
/// and the zero is deliberate regardless of what the payload contains.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_instagram(raw: Value) -> Result<PlatformViewData, PlatformError> {
    let media: InstagramMedia = deserialize(raw, "instagram media response")?;
    let mut data = PlatformViewData::zeroed(Platform::Instagram);
    data.views = 0;
    data.likes = Some(count(media.like_count.as_ref()));
    data.comments = Some(count(media.comments_count.as_ref()));
    Ok(data)
}

/// Maps a TikTok video-query response onto the shared record.
///
/// An embedded `error` object beats the HTTP status: a 200 body carrying one
/// is a failure, not a success with zeroed fields.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_tiktok(raw: Value) -> Result<PlatformViewData, PlatformError> {
    let response: TikTokVideoQueryResponse = deserialize(raw, "tiktok video query response")?;
    if let Some(error) = response.error {
        return Err(PlatformError::Payload {
            platform: Platform::Tiktok,
            message: error
                .message
                .or(error.code)
                .unwrap_or_else(|| "TikTok API error".to_owned()),
        });
    }
    let video = response.data.unwrap_or_default();
    let mut data = PlatformViewData::zeroed(Platform::Tiktok);
    data.views = count(video.play_count.as_ref());
    data.likes = Some(count(video.like_count.as_ref()));
    data.shares = Some(count(video.share_count.as_ref()));
    data.comments = Some(count(video.comment_count.as_ref()));
    Ok(data)
}

/// Maps a Facebook Graph post response onto the shared record.
///
/// `post_impressions` becomes `views` and `post_reactions_by_type_total`
/// becomes `likes`. The `insights.data` array order is not guaranteed by the
/// API, so metrics are looked up by name.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_facebook(raw: Value) -> Result<PlatformViewData, PlatformError> {
    let response: FacebookPostResponse = deserialize(raw, "facebook post response")?;
    let insights = response.insights.unwrap_or_default();
    let mut data = PlatformViewData::zeroed(Platform::Facebook);
    data.views = insight_value(&insights, "post_impressions");
    data.likes = Some(insight_value(&insights, "post_reactions_by_type_total"));
    Ok(data)
}

fn insight_value(insights: &FacebookInsights, name: &str) -> u64 {
    insights
        .data
        .iter()
        .find(|metric| metric.name == name)
        .and_then(|metric| metric.values.first())
        .map_or(0, |v| coerce_count(&v.value))
}

/// Coerces an insight value to a count. Reaction totals have been observed as
/// both a plain number and an object keyed by reaction type; the object form
/// sums its entries.
fn coerce_count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Object(map) => map.values().map(coerce_count).sum(),
        _ => 0,
    }
}

/// Maps a Pinterest pin onto the shared record.
///
/// Pinterest's "save" is modeled as a share in the unified vocabulary;
/// views and likes are forced to 0.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_pinterest(raw: Value) -> Result<PlatformViewData, PlatformError> {
    let pin: PinterestPin = deserialize(raw, "pinterest pin response")?;
    let mut data = PlatformViewData::zeroed(Platform::Pinterest);
    data.views = 0;
    data.likes = Some(0);
    data.shares = Some(count(pin.save_count.as_ref()));
    Ok(data)
}

/// Maps a Spotify track onto the shared record. Tracks expose no public
/// engagement counts, so everything is forced to 0; the track length is kept
/// as an ISO-8601 duration.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_spotify_track(raw: Value) -> Result<PlatformViewData, PlatformError> {
    let track: SpotifyTrack = deserialize(raw, "spotify track response")?;
    let mut data = PlatformViewData::zeroed(Platform::Spotify);
    data.views = 0;
    data.likes = Some(0);
    data.shares = Some(0);
    data.comments = Some(0);
    data.duration = track
        .duration_ms
        .map(|ms| crate::duration::format_duration(ms / 1000));
    Ok(data)
}

/// Maps a Spotify playlist onto the shared record: follower and track totals
/// are the only metrics the API exposes.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_spotify_playlist(raw: Value) -> Result<PlatformViewData, PlatformError> {
    let playlist: SpotifyPlaylist = deserialize(raw, "spotify playlist response")?;
    let mut data = PlatformViewData::zeroed(Platform::Spotify);
    data.views = 0;
    data.followers = Some(count(
        playlist
            .followers
            .unwrap_or_default()
            .total
            .as_ref(),
    ));
    data.track_count = Some(count(playlist.tracks.unwrap_or_default().total.as_ref()));
    Ok(data)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
