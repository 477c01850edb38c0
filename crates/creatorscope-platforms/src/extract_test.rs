use creatorscope_core::Platform;

use super::*;

// ---------------------------------------------------------------------------
// YouTube
// ---------------------------------------------------------------------------

#[test]
fn youtube_watch_url() {
    assert_eq!(
        extract_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ", Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_watch_url_with_extra_query_params() {
    assert_eq!(
        extract_id(
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=30s",
            Platform::Youtube
        ),
        Some("dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(
        extract_id(
            "https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ&feature=share",
            Platform::Youtube
        ),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_short_link() {
    assert_eq!(
        extract_id("https://youtu.be/dQw4w9WgXcQ", Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(
        extract_id("https://youtu.be/dQw4w9WgXcQ?t=42", Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_shorts_embed_and_v_paths() {
    for url in [
        "https://www.youtube.com/shorts/dQw4w9WgXcQ",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "https://www.youtube.com/v/dQw4w9WgXcQ",
    ] {
        assert_eq!(
            extract_id(url, Platform::Youtube),
            Some("dQw4w9WgXcQ".to_owned()),
            "failed for {url}"
        );
    }
}

#[test]
fn youtube_query_param_beats_path_form() {
    // A URL carrying both an embed path and a ?v= parameter uses the query
    // parameter.
    assert_eq!(
        extract_id(
            "https://www.youtube.com/embed/aaaaaaaaaaa?v=dQw4w9WgXcQ",
            Platform::Youtube
        ),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_invalid_query_candidate_falls_through_to_path() {
    // ?v= holds a malformed candidate; the valid embed path segment wins.
    assert_eq!(
        extract_id(
            "https://www.youtube.com/embed/dQw4w9WgXcQ?v=short",
            Platform::Youtube
        ),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_scheme_less_paste() {
    assert_eq!(
        extract_id("youtube.com/watch?v=dQw4w9WgXcQ", Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(
        extract_id("youtu.be/dQw4w9WgXcQ", Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
    assert_eq!(
        extract_id("youtube.com/shorts/dQw4w9WgXcQ", Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_leading_at_and_whitespace_are_stripped() {
    assert_eq!(
        extract_id("  @https://youtu.be/dQw4w9WgXcQ  ", Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_zero_width_characters_are_stripped() {
    let url = "https://youtu.be/\u{200B}dQw4w9WgXcQ\u{FEFF}";
    assert_eq!(
        extract_id(url, Platform::Youtube),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn youtube_rejects_wrong_length_candidates() {
    // 10 characters.
    assert_eq!(
        extract_id("https://youtu.be/dQw4w9WgXc", Platform::Youtube),
        None
    );
    // 12 characters.
    assert_eq!(
        extract_id("https://www.youtube.com/watch?v=dQw4w9WgXcQQ", Platform::Youtube),
        None
    );
}

#[test]
fn youtube_no_id_yields_none() {
    assert_eq!(extract_id("https://example.com/", Platform::Youtube), None);
    assert_eq!(
        extract_id("https://www.youtube.com/feed/subscriptions", Platform::Youtube),
        None
    );
    assert_eq!(extract_id("", Platform::Youtube), None);
    assert_eq!(extract_id("not a url at all", Platform::Youtube), None);
}

// ---------------------------------------------------------------------------
// Single-regex platforms
// ---------------------------------------------------------------------------

#[test]
fn instagram_post_and_reel() {
    assert_eq!(
        extract_id("https://www.instagram.com/p/Cxyz_123-ab/", Platform::Instagram),
        Some("Cxyz_123-ab".to_owned())
    );
    assert_eq!(
        extract_id(
            "https://instagram.com/reel/Cab12de3FgH/?igshid=xyz",
            Platform::Instagram
        ),
        Some("Cab12de3FgH".to_owned())
    );
}

#[test]
fn tiktok_video() {
    assert_eq!(
        extract_id(
            "https://www.tiktok.com/@creator.name/video/7301234567890123456",
            Platform::Tiktok
        ),
        Some("7301234567890123456".to_owned())
    );
}

#[test]
fn tiktok_rejects_non_video_paths() {
    assert_eq!(
        extract_id("https://www.tiktok.com/@creator.name", Platform::Tiktok),
        None
    );
}

#[test]
fn facebook_post_and_video() {
    assert_eq!(
        extract_id(
            "https://www.facebook.com/somepage/posts/10158765432101234",
            Platform::Facebook
        ),
        Some("10158765432101234".to_owned())
    );
    assert_eq!(
        extract_id(
            "https://www.facebook.com/somepage/videos/98765432101234",
            Platform::Facebook
        ),
        Some("98765432101234".to_owned())
    );
}

#[test]
fn pinterest_pin_with_country_domain() {
    assert_eq!(
        extract_id("https://www.pinterest.com/pin/123456789012345678/", Platform::Pinterest),
        Some("123456789012345678".to_owned())
    );
    assert_eq!(
        extract_id("https://pinterest.co.uk/pin/9876543210/", Platform::Pinterest),
        Some("9876543210".to_owned())
    );
}

// ---------------------------------------------------------------------------
// Spotify
// ---------------------------------------------------------------------------

#[test]
fn spotify_track() {
    let resource =
        extract_spotify_resource("https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWqT").unwrap();
    assert_eq!(resource.kind, SpotifyResourceKind::Track);
    assert_eq!(resource.id, "4cOdK2wGLETKBW3PvgPWqT");
}

#[test]
fn spotify_playlist() {
    let resource = extract_spotify_resource(
        "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc",
    )
    .unwrap();
    assert_eq!(resource.kind, SpotifyResourceKind::Playlist);
    assert_eq!(resource.id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn spotify_intl_path_segment() {
    let resource =
        extract_spotify_resource("https://open.spotify.com/intl-de/track/4cOdK2wGLETKBW3PvgPWqT")
            .unwrap();
    assert_eq!(resource.kind, SpotifyResourceKind::Track);
}

#[test]
fn spotify_extract_id_returns_either_kind() {
    assert_eq!(
        extract_id(
            "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
            Platform::Spotify
        ),
        Some("37i9dQZF1DXcBWIGoYBM5M".to_owned())
    );
}

#[test]
fn spotify_rejects_wrong_length_ids() {
    // 21 characters.
    assert_eq!(
        extract_spotify_resource("https://open.spotify.com/track/4cOdK2wGLETKBW3PvgPWq"),
        None
    );
}

// ---------------------------------------------------------------------------
// Cross-platform behavior
// ---------------------------------------------------------------------------

#[test]
fn platform_mismatch_yields_none() {
    // A valid YouTube URL asked for as TikTok content matches nothing.
    assert_eq!(
        extract_id("https://youtu.be/dQw4w9WgXcQ", Platform::Tiktok),
        None
    );
}

#[test]
fn malformed_input_never_panics() {
    for url in ["https://", "http:///nohost", "ftp://weird", "::::", "\u{200B}\u{FEFF}"] {
        for platform in Platform::ALL {
            let _ = extract_id(url, platform);
        }
    }
}
