//! Platform-URL identifier extraction.
//!
//! Takes an arbitrary pasted URL and a target platform and returns the
//! platform-native content ID, or `None`. Pure string work, no I/O, and no
//! panics: any parse failure is a `None`.
//!
//! YouTube is the richest case and sets the pattern: a structured
//! [`url::Url`] parse with host-specific rules tried in priority order,
//! falling back to an ordered regex list that covers the same URL shapes
//! textually (scheme-less pastes like `youtube.com/watch?v=…`). Every
//! candidate is validated against the platform's ID charset/length rule
//! *after* matching; a candidate that fails validation is discarded and
//! extraction moves on to the next rule instead of returning a malformed ID.
//! The other platforms expose only one canonical URL shape in the supported
//! inputs, so each gets a single regex.

use std::sync::LazyLock;

use creatorscope_core::Platform;
use regex::Regex;
use url::Url;

/// Ordered fallback patterns for YouTube URLs that fail structured parsing.
/// The query-parameter form comes first: it wins over path forms when a URL
/// carries both.
static YOUTUBE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[?&]v=([A-Za-z0-9_-]+)",
        r"youtu\.be/([A-Za-z0-9_-]+)",
        r"youtube\.com/shorts/([A-Za-z0-9_-]+)",
        r"youtube\.com/embed/([A-Za-z0-9_-]+)",
        r"youtube\.com/v/([A-Za-z0-9_-]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("hard-coded pattern compiles"))
    .collect()
});

static INSTAGRAM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"instagram\.com/(?:p|reel|tv)/([A-Za-z0-9_-]+)")
        .expect("hard-coded pattern compiles")
});

static TIKTOK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"tiktok\.com/@[\w.-]+/video/(\d+)").expect("hard-coded pattern compiles")
});

static FACEBOOK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"facebook\.com/(?:[^/?#]+/)*(?:posts|videos)/(\d+)")
        .expect("hard-coded pattern compiles")
});

static PINTEREST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"pinterest\.[a-z.]+/pin/(\d+)").expect("hard-coded pattern compiles")
});

static SPOTIFY_TRACK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"open\.spotify\.com/(?:intl-[a-z]{2}/)?track/([A-Za-z0-9]+)")
        .expect("hard-coded pattern compiles")
});

static SPOTIFY_PLAYLIST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"open\.spotify\.com/(?:intl-[a-z]{2}/)?playlist/([A-Za-z0-9]+)")
        .expect("hard-coded pattern compiles")
});

/// Extracts the platform-native content ID from a pasted URL.
///
/// Returns `None` when no rule matches or every candidate fails validation.
/// Never panics on malformed input.
#[must_use]
pub fn extract_id(url: &str, platform: Platform) -> Option<String> {
    let url = sanitize(url);
    if url.is_empty() {
        return None;
    }
    match platform {
        Platform::Youtube => extract_youtube(&url),
        Platform::Instagram => capture(&INSTAGRAM_PATTERN, &url, |id| !id.is_empty()),
        Platform::Tiktok => capture(&TIKTOK_PATTERN, &url, is_numeric),
        Platform::Facebook => capture(&FACEBOOK_PATTERN, &url, is_numeric),
        Platform::Pinterest => capture(&PINTEREST_PATTERN, &url, is_numeric),
        Platform::Spotify => spotify_resource(&url).map(|resource| resource.id),
    }
}

/// Which kind of Spotify resource a URL addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotifyResourceKind {
    Track,
    Playlist,
}

/// A Spotify content ID together with its resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyResource {
    pub kind: SpotifyResourceKind,
    pub id: String,
}

/// Extracts a Spotify track or playlist ID, distinguishing the two by path.
///
/// Shares the sanitisation and validation rules of [`extract_id`]; the fetch
/// layer uses the kind to pick the `/tracks` or `/playlists` endpoint.
#[must_use]
pub fn extract_spotify_resource(url: &str) -> Option<SpotifyResource> {
    let url = sanitize(url);
    if url.is_empty() {
        return None;
    }
    spotify_resource(&url)
}

fn spotify_resource(url: &str) -> Option<SpotifyResource> {
    if let Some(id) = capture(&SPOTIFY_TRACK_PATTERN, url, is_spotify_id) {
        return Some(SpotifyResource {
            kind: SpotifyResourceKind::Track,
            id,
        });
    }
    capture(&SPOTIFY_PLAYLIST_PATTERN, url, is_spotify_id).map(|id| SpotifyResource {
        kind: SpotifyResourceKind::Playlist,
        id,
    })
}

/// Strips stray whitespace, zero-width characters, and a leading `@` from
/// pasted input before any parsing attempt.
fn sanitize(url: &str) -> String {
    let cleaned: String = url
        .chars()
        .filter(|c| !matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}'))
        .collect();
    cleaned
        .trim()
        .trim_start_matches('@')
        .trim_start()
        .to_owned()
}

fn capture(pattern: &Regex, url: &str, valid: impl Fn(&str) -> bool) -> Option<String> {
    let candidate = pattern.captures(url)?.get(1)?.as_str();
    valid(candidate).then(|| candidate.to_owned())
}

fn extract_youtube(url: &str) -> Option<String> {
    if let Some(id) = extract_youtube_structured(url) {
        return Some(id);
    }
    // Textual fallback for inputs structured parsing rejects (no scheme,
    // stray garbage around an otherwise well-formed URL). First matching
    // pattern with a valid candidate wins.
    for pattern in YOUTUBE_PATTERNS.iter() {
        if let Some(id) = capture(pattern, url, is_youtube_id) {
            return Some(id);
        }
    }
    None
}

/// Structured extraction stage: scheme+host+path+query via [`Url`].
///
/// Host rules in priority order — the `v` query parameter beats every
/// path-based form when both are present.
fn extract_youtube_structured(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();

    if host == "youtu.be" || host.ends_with(".youtu.be") {
        let segment = parsed.path_segments()?.next()?;
        return is_youtube_id(segment).then(|| segment.to_owned());
    }

    if host == "youtube.com"
        || host.ends_with(".youtube.com")
        || host == "youtube-nocookie.com"
        || host.ends_with(".youtube-nocookie.com")
    {
        if let Some(id) = parsed
            .query_pairs()
            .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))
        {
            if is_youtube_id(&id) {
                return Some(id);
            }
            // Invalid candidate: discard and keep trying the path rules.
        }
        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        if segments.len() >= 2 && matches!(segments[0], "shorts" | "embed" | "v") {
            let candidate = segments[1];
            if is_youtube_id(candidate) {
                return Some(candidate.to_owned());
            }
        }
    }

    None
}

/// Exactly 11 characters from `[A-Za-z0-9_-]`. Length is checked post-match:
/// regex boundaries are ambiguous around characters like the `&t=30s` suffix,
/// so a 10- or 12-character candidate must be rejected here even when a
/// pattern loosely matched it.
fn is_youtube_id(candidate: &str) -> bool {
    candidate.len() == 11
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn is_numeric(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Spotify IDs are 22 base-62 characters.
fn is_spotify_id(candidate: &str) -> bool {
    candidate.len() == 22 && candidate.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
