//! Human-readable time and number formatting

/// Format a duration in seconds as a compact string such as `"1h 5m 3s"`.
///
/// Below one minute the seconds are rounded (ties to even); above that every
/// component is floored and zero components are omitted.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_duration(seconds: f32) -> String {
    if seconds < 60.0 {
        return format!("{}s", seconds.round_ties_even() as i64);
    }

    let whole = seconds.floor() as u64;
    if seconds < 3600.0 {
        let minutes = whole / 60;
        let secs = whole % 60;
        return if secs == 0 {
            format!("{minutes}m")
        } else {
            format!("{minutes}m {secs}s")
        };
    }

    let hours = whole / 3600;
    let remaining = whole % 3600;
    let minutes = remaining / 60;
    let secs = remaining % 60;
    match (minutes, secs) {
        (0, 0) => format!("{hours}h"),
        (0, s) => format!("{hours}h {s}s"),
        (m, 0) => format!("{hours}h {m}m"),
        (m, s) => format!("{hours}h {m}m {s}s"),
    }
}

/// English ordinal suffix for `n` ("st", "nd", "rd" or "th").
///
/// Follows the full English rules: 11-13 take "th" while 21, 22, 23 and so on
/// take "st", "nd", "rd". Helpers that only special-case 1, 2 and 3 return
/// "th" for 21; this one returns "st".
pub const fn ordinal_suffix(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
