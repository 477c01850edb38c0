//! ISO-8601 duration (`PT#H#M#S`) conversion helpers.
//!
//! YouTube reports video length in this format; aggregation sums per-item
//! durations in seconds and reformats the total. Both directions are total
//! functions: unparseable input yields 0, never an error.

use std::sync::LazyLock;

use regex::Regex;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("hard-coded pattern compiles")
});

/// Parses an ISO-8601 duration into whole seconds.
///
/// Any absent component contributes 0; a string that does not match the
/// `PT#H#M#S` grammar at all yields 0.
#[must_use]
pub fn parse_duration_seconds(duration: &str) -> u64 {
    let Some(captures) = DURATION_PATTERN.captures(duration.trim()) else {
        return 0;
    };
    let component = |idx: usize| -> u64 {
        captures
            .get(idx)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };
    component(1) * 3600 + component(2) * 60 + component(3)
}

/// Formats whole seconds as an ISO-8601 duration.
///
/// Zero components are omitted (`90` → `"PT1M30S"`, `3600` → `"PT1H"`).
/// Zero total seconds formats as `"PT0S"` so that
/// `parse_duration_seconds(format_duration(n)) == n` holds for every `n`,
/// matching the `"PT0S"` default used during normalization.
#[must_use]
pub fn format_duration(total_seconds: u64) -> String {
    if total_seconds == 0 {
        return "PT0S".to_owned();
    }
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut formatted = String::from("PT");
    if hours > 0 {
        formatted.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        formatted.push_str(&format!("{minutes}M"));
    }
    if seconds > 0 {
        formatted.push_str(&format!("{seconds}S"));
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_duration() {
        assert_eq!(parse_duration_seconds("PT1H2M3S"), 3723);
    }

    #[test]
    fn parse_partial_components() {
        assert_eq!(parse_duration_seconds("PT1M30S"), 90);
        assert_eq!(parse_duration_seconds("PT2H"), 7200);
        assert_eq!(parse_duration_seconds("PT45S"), 45);
    }

    #[test]
    fn parse_zero_duration() {
        assert_eq!(parse_duration_seconds("PT0S"), 0);
        // All components absent is still a grammar match.
        assert_eq!(parse_duration_seconds("PT"), 0);
    }

    #[test]
    fn parse_garbage_yields_zero() {
        assert_eq!(parse_duration_seconds(""), 0);
        assert_eq!(parse_duration_seconds("ninety seconds"), 0);
        assert_eq!(parse_duration_seconds("P1DT2H"), 0);
    }

    #[test]
    fn format_omits_zero_components() {
        assert_eq!(format_duration(90), "PT1M30S");
        assert_eq!(format_duration(3600), "PT1H");
        assert_eq!(format_duration(3723), "PT1H2M3S");
        assert_eq!(format_duration(45), "PT45S");
    }

    #[test]
    fn format_zero_is_pt0s() {
        assert_eq!(format_duration(0), "PT0S");
    }

    #[test]
    fn round_trip_holds_for_all_inputs() {
        for n in [0, 1, 59, 60, 61, 3599, 3600, 3661, 86_399] {
            assert_eq!(
                parse_duration_seconds(&format_duration(n)),
                n,
                "round trip failed for {n}"
            );
        }
    }
}
