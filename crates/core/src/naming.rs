//! Filename normalization: strips hash-like, date-like and hex noise tokens
//! so destination names stay legible.

/// Derives a clean base name from a raw one.
///
/// Splits on whitespace after mapping `_` and `-` to spaces, drops noise
/// tokens, lowercases the survivors and joins them with `_`. When every token
/// is noise, falls back to the first non-empty underscore-delimited segment
/// of the raw name (case preserved) so the result is never empty.
pub fn normalize(raw: &str) -> String {
    let spaced = raw.replace(['_', '-'], " ");
    let kept: Vec<String> = spaced
        .split_whitespace()
        .filter(|t| !is_noise(t))
        .map(|t| t.to_lowercase())
        .collect();

    if kept.is_empty() {
        return raw
            .split('_')
            .find(|s| !s.is_empty())
            .unwrap_or(raw)
            .to_string();
    }
    kept.join("_")
}

fn is_noise(token: &str) -> bool {
    // Hash/UUID-like: long alphanumeric runs carrying digits. Pure-alpha
    // words of any length are meaningful and stay.
    let all_alnum = token.chars().all(|c| c.is_ascii_alphanumeric());
    let has_digit = token.chars().any(|c| c.is_ascii_digit());
    if token.len() >= 8 && all_alnum && has_digit {
        return true;
    }

    // Date/numeric noise.
    let digits_only: String = token.chars().filter(|c| *c != '_').collect();
    if !digits_only.is_empty() && digits_only.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    // Short hex runs.
    if token.len() >= 4 && token.chars().all(|c| c.is_ascii_hexdigit()) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_hash_like_tokens() {
        assert_eq!(normalize("vacation_IMG_a1b2c3d4"), "vacation_img");
    }

    #[test]
    fn keeps_long_plain_words() {
        assert_eq!(normalize("vacation"), "vacation");
        assert_eq!(normalize("quarterly-presentation"), "quarterly_presentation");
    }

    #[test]
    fn drops_numeric_and_date_fragments() {
        assert_eq!(normalize("report_20240101"), "report");
        assert_eq!(normalize("scan 001 final"), "scan_final");
    }

    #[test]
    fn drops_hex_runs() {
        assert_eq!(normalize("notes_deadbeef"), "notes");
        assert_eq!(normalize("cafe_menu"), "menu");
    }

    #[test]
    fn short_tokens_survive() {
        assert_eq!(normalize("img_01_abc"), "img_abc");
    }

    #[test]
    fn falls_back_to_first_segment_when_all_noise() {
        assert_eq!(normalize("a1b2c3d4_20240101"), "a1b2c3d4");
        assert_eq!(normalize("DEADBEEF"), "DEADBEEF");
        assert_eq!(normalize("_1234_x999999999"), "1234");
    }

    #[test]
    fn never_empty_for_non_empty_input() {
        for raw in ["x", "1234", "____", "a-b-c", "ABCDEF123456"] {
            assert!(!normalize(raw).is_empty(), "empty output for {raw:?}");
        }
    }

    #[test]
    fn idempotent() {
        for raw in [
            "vacation_IMG_a1b2c3d4",
            "report_20240101",
            "DEADBEEF",
            "quarterly presentation v2",
            "a1b2c3d4_9f",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
