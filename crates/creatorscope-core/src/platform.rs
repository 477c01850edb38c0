//! The set of supported social platforms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A platform whose content metrics this system can fetch and normalize.
///
/// Each platform has its own URL shape, content-ID format, and REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
    Tiktok,
    Facebook,
    Pinterest,
    Spotify,
}

/// Error returned when a platform name string is not recognized.
#[derive(Debug, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Platform; 6] = [
        Platform::Youtube,
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Facebook,
        Platform::Pinterest,
        Platform::Spotify,
    ];

    /// The canonical lowercase name used in records and API payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Facebook => "facebook",
            Platform::Pinterest => "pinterest",
            Platform::Spotify => "spotify",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = UnknownPlatform;

    /// Parses a platform name case-insensitively. Callers pass through
    /// user-supplied strings (`"YouTube"`, `"TIKTOK"`) unmodified.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::Youtube),
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            "facebook" => Ok(Platform::Facebook),
            "pinterest" => Ok(Platform::Pinterest),
            "spotify" => Ok(Platform::Spotify),
            _ => Err(UnknownPlatform(s.to_owned())),
        }
    }
}
