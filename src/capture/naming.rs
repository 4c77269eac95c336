//! File name grammars for captures and reports.
//!
//! Two unrelated conventions live in the same directory:
//!
//! - daily reports: `traffic_YYYY-MM-DD_HH-MM-SS_(<tag>)_(<in>_input)_(<out>_output).csv`
//! - captures carrying a recording length: `...(<minutes>_minutes)....pcap`
//!
//! Every function here is total: malformed names yield `None`, never an error.

use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Extension of raw capture files
pub const CAPTURE_EXTENSION: &str = ".pcap";

/// Extension of generated reports
pub const REPORT_EXTENSION: &str = ".csv";

lazy_static! {
    static ref REPORT_NAME: Regex = Regex::new(
        r"^traffic_(\d{4}-\d{2}-\d{2})_(\d{2}-\d{2}-\d{2})_\(([^()]*)\)_\((\d+(?:\.\d+)?)_input\)_\((\d+(?:\.\d+)?)_output\)\.csv$"
    )
    .expect("report name pattern is valid");
    static ref CAPTURE_MINUTES: Regex =
        Regex::new(r"\((\d+(?:\.\d+)?)_minutes\)").expect("minutes pattern is valid");
}

/// Fields recovered from a daily report file name
#[derive(Debug, Clone, PartialEq)]
pub struct ReportName {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub tag: String,
    pub input: f64,
    pub output: f64,
}

/// Parse a daily report file name.
///
/// The whole name must match, and the date and time must be real calendar values.
pub fn parse_report_name(name: &str) -> Option<ReportName> {
    let caps = REPORT_NAME.captures(name)?;

    let date = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(&caps[2], "%H-%M-%S").ok()?;
    let input = caps[4].parse::<f64>().ok()?;
    let output = caps[5].parse::<f64>().ok()?;

    trace!("Parsed report name {}: date={} input={} output={}", name, date, input, output);

    Some(ReportName {
        date,
        time,
        tag: caps[3].to_string(),
        input,
        output,
    })
}

/// Recording length in minutes embedded in a capture name, if present
pub fn parse_capture_minutes(name: &str) -> Option<f64> {
    CAPTURE_MINUTES
        .captures(name)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Capture name without its `.pcap` extension; reports for it start with this prefix
pub fn capture_base_name(name: &str) -> &str {
    name.strip_suffix(CAPTURE_EXTENSION).unwrap_or(name)
}

pub fn is_capture_name(name: &str) -> bool {
    name.ends_with(CAPTURE_EXTENSION)
}

pub fn is_report_name(name: &str) -> bool {
    name.ends_with(REPORT_EXTENSION)
}
