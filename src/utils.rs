use std::fmt;

use rand::{Rng, distr::Alphanumeric};

pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Normalizes a client-supplied page size. Out-of-range and garbage input
/// falls back to 20, the upstream API caps at 50.
pub fn clamp_limit(raw: Option<&str>) -> u32 {
    match raw.and_then(|value| value.parse::<i64>().ok()) {
        Some(limit) if limit > 50 => 50,
        Some(limit) if limit > 0 => limit as u32,
        _ => 20,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Short,
    #[default]
    Medium,
    Long,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        }
    }

    /// Lenient form used by the proxy: anything unrecognized becomes the
    /// upstream default instead of leaking through to the API.
    pub fn normalize(raw: Option<&str>) -> TimeRange {
        match raw {
            Some("short_term") => TimeRange::Short,
            Some("long_term") => TimeRange::Long,
            _ => TimeRange::Medium,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strict parser for the `--time-range` CLI flag.
pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    match s.trim().to_lowercase().as_str() {
        "short" | "short_term" | "short-term" => Ok(TimeRange::Short),
        "medium" | "medium_term" | "medium-term" => Ok(TimeRange::Medium),
        "long" | "long_term" | "long-term" => Ok(TimeRange::Long),
        other => Err(format!(
            "invalid value '{}' (expected short_term, medium_term or long_term)",
            other
        )),
    }
}
