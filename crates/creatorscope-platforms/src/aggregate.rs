//! Aggregation of normalized metrics across content items.

use creatorscope_core::{AggregatedPlatformData, Platform, PlatformViewData};

use crate::duration::{format_duration, parse_duration_seconds};

/// Sums and averages a list of normalized records for one platform.
///
/// Recomputed from scratch on every call; nothing is cached. Failure rows
/// (records carrying `error`) stay in `total_videos` and contribute 0 to
/// every sum. The subscriber average is taken over items with a *positive*
/// subscriber count only; zero or missing counts are excluded from the
/// denominator rather than dragging the mean down.
#[must_use]
pub fn aggregate_platform_data(
    platform: Platform,
    items: &[PlatformViewData],
) -> AggregatedPlatformData {
    let total_views = items.iter().map(|data| data.views).sum();
    let total_likes = items.iter().filter_map(|data| data.likes).sum();
    let total_comments = items.iter().filter_map(|data| data.comments).sum();
    let total_seconds: u64 = items
        .iter()
        .filter_map(|data| data.duration.as_deref())
        .map(parse_duration_seconds)
        .sum();

    let subscriber_counts: Vec<u64> = items
        .iter()
        .filter_map(|data| data.subscriber_count)
        .filter(|&subscribers| subscribers > 0)
        .collect();
    #[allow(clippy::cast_precision_loss)]
    let average_subscriber_count = if subscriber_counts.is_empty() {
        0.0
    } else {
        subscriber_counts.iter().sum::<u64>() as f64 / subscriber_counts.len() as f64
    };

    AggregatedPlatformData {
        platform,
        total_videos: items.len(),
        total_views,
        total_likes,
        total_comments,
        total_duration: format_duration(total_seconds),
        average_subscriber_count,
    }
}
