//! Inbound content-item record supplied by callers.

use serde::{Deserialize, Serialize};

/// A piece of creator content the caller wants metrics for.
///
/// `platforms` holds the platform names the item is published on, as
/// user-supplied strings (matched case-insensitively when fetching).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub original_url: String,
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ContentItem {
    /// Convenience constructor for a single-platform item.
    #[must_use]
    pub fn new(original_url: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            platforms: vec![platform.into()],
            title: None,
        }
    }
}
