use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DURATION_RE: Regex = Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap();
}

/// Parse a `PT[nH][nM][nS]` duration (as returned by the Data API) into seconds.
///
/// Lenient: input without a `PT` section yields 0 instead of an error, and
/// day/week components are not recognised.
pub fn parse_duration(encoded: &str) -> u64 {
    let Some(caps) = DURATION_RE.captures(encoded) else {
        return 0;
    };

    let component = |idx: usize| -> u64 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    component(1)
        .saturating_mul(3600)
        .saturating_add(component(2).saturating_mul(60))
        .saturating_add(component(3))
}

/// Format seconds as zero-padded `HH:MM:SS`.
pub fn format_hhmmss(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
