use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CAPTURE_NAME_PATTERN: &str =
    r"^([A-Za-z0-9]+) (\d{4})-(\d{2})-(\d{2}) (\d{2})-(\d{2})-(\d{2})-(\d{2})\.avi$";

pub fn capture_name_regex() -> Result<Regex> {
    Regex::new(CAPTURE_NAME_PATTERN).context("capture filename pattern failed to compile")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureFile {
    pub file_name: String,
    pub source_id: String,
    pub timestamp: NaiveDateTime,
}

impl CaptureFile {
    pub fn base_name(&self) -> String {
        let date = self.timestamp.date();
        let time = self.timestamp.time();
        format!(
            "{} {}-{}-{} {}-{}-{}",
            self.source_id,
            date.year(),
            date.month(),
            date.day(),
            time.hour(),
            time.minute(),
            time.second()
        )
    }
}

pub fn parse_capture_name(pattern: &Regex, file_name: &str) -> Result<Option<CaptureFile>> {
    let Some(caps) = pattern.captures(file_name) else {
        return Ok(None);
    };

    let source_id = caps[1].to_string();
    let fields: Vec<u32> = caps
        .iter()
        .skip(2)
        .flatten()
        .map(|field| field.as_str().parse::<u32>())
        .collect::<Result<_, _>>()
        .with_context(|| format!("numeric field out of range in: {file_name}"))?;

    // fields: year, month, day, hour, minute, second, hundredth.
    // The hundredths field is matched but not folded into the second-precision timestamp.
    let timestamp = NaiveDate::from_ymd_opt(fields[0] as i32, fields[1], fields[2])
        .and_then(|date| date.and_hms_opt(fields[3], fields[4], fields[5]))
        .with_context(|| format!("timestamp fields out of calendar range in: {file_name}"))?;

    Ok(Some(CaptureFile {
        file_name: file_name.to_string(),
        source_id,
        timestamp,
    }))
}
