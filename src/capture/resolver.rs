use chrono::{DateTime, Duration, Utc};
use log::{debug, trace};
use std::fs;
use std::path::Path;

use crate::capture::naming::{capture_base_name, is_report_name, parse_capture_minutes};
use crate::models::capture::CaptureStatus;
use crate::utils::error::{AppError, AppResult};

/// A capture gets this many times its recorded length to be converted before it is failed
pub const DEADLINE_FACTOR: f64 = 3.0;

/// Report file names found in a directory at one point in time.
///
/// Listing once and resolving every capture against the same snapshot avoids
/// re-reading the directory per capture.
#[derive(Debug, Clone, Default)]
pub struct ReportListing {
    reports: Vec<String>,
}

impl ReportListing {
    /// List `dir` and keep every entry carrying the report extension
    pub fn scan(dir: &Path) -> AppResult<Self> {
        if !dir.is_dir() {
            return Err(AppError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut reports = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_report_name(&name) {
                reports.push(name);
            }
        }

        debug!("Found {} report files in {}", reports.len(), dir.display());
        Ok(Self { reports })
    }

    /// Build a listing from names that are already known
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reports: names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| is_report_name(name))
                .collect(),
        }
    }

    /// First report whose name starts with the capture's base name
    pub fn find_report(&self, capture_name: &str) -> Option<&str> {
        let base = capture_base_name(capture_name);
        self.reports
            .iter()
            .find(|report| report.starts_with(base))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Latest instant at which a capture may still be waiting for its report.
///
/// `None` when the name carries no usable duration; such captures wait indefinitely.
pub fn conversion_deadline(capture_name: &str, last_modified: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let minutes = parse_capture_minutes(capture_name).filter(|m| *m > 0.0)?;
    let allowance_ms = (minutes * DEADLINE_FACTOR * 60_000.0) as i64;
    last_modified.checked_add_signed(Duration::milliseconds(allowance_ms))
}

/// Status of one capture against an existing listing
pub fn resolve_status(
    capture_name: &str,
    last_modified: DateTime<Utc>,
    listing: &ReportListing,
    now: DateTime<Utc>,
) -> CaptureStatus {
    if let Some(report) = listing.find_report(capture_name) {
        trace!("Capture {} completed by {}", capture_name, report);
        return CaptureStatus::Completed;
    }

    match conversion_deadline(capture_name, last_modified) {
        Some(deadline) if now > deadline => {
            trace!("Capture {} missed its deadline {}", capture_name, deadline);
            CaptureStatus::Failed
        }
        _ => CaptureStatus::Pending,
    }
}

/// Status of one capture, listing `dir` for this call only
pub fn resolve_status_in_dir(
    capture_name: &str,
    last_modified: DateTime<Utc>,
    dir: &Path,
    now: DateTime<Utc>,
) -> AppResult<CaptureStatus> {
    let listing = ReportListing::scan(dir)?;
    Ok(resolve_status(capture_name, last_modified, &listing, now))
}
