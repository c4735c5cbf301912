use chrono::Duration;

pub const DEFAULT_MAX_GAP_MINUTES: f64 = 5.0;
pub const MIN_MAX_GAP_MINUTES: f64 = 1.0;

const HELP_TOKENS: &[&str] = &["h", "-h", "help", "-help"];

#[derive(Debug, Clone, PartialEq)]
pub enum GapArg {
    Default,
    Override(f64),
    Help,
    TooSmall(f64),
    Invalid(String),
}

pub fn resolve_gap_arg(first: Option<&str>) -> GapArg {
    let Some(raw) = first else {
        return GapArg::Default;
    };

    if HELP_TOKENS
        .iter()
        .any(|token| raw.eq_ignore_ascii_case(token))
    {
        return GapArg::Help;
    }

    match raw.parse::<f64>() {
        Ok(minutes) if minutes >= MIN_MAX_GAP_MINUTES => GapArg::Override(minutes),
        Ok(minutes) => GapArg::TooSmall(minutes),
        Err(_) => GapArg::Invalid(raw.to_string()),
    }
}

pub fn max_gap_duration(minutes: f64) -> Duration {
    Duration::milliseconds((minutes * 60_000.0).round() as i64)
}
