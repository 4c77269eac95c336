use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::fs::{self, DirEntry};
use std::path::Path;

use crate::capture::naming::{is_capture_name, parse_capture_minutes};
use crate::capture::resolver::{resolve_status, ReportListing};
use crate::models::capture::CaptureInfo;
use crate::utils::error::{AppError, AppResult};

/// List every capture in `dir` with its status as of `now`, newest first.
///
/// The directory is read once; captures and reports are both taken from that listing.
pub fn list_captures(dir: &Path, now: DateTime<Utc>) -> AppResult<Vec<CaptureInfo>> {
    if !dir.is_dir() {
        return Err(AppError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut report_names = Vec::new();
    let mut capture_entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_capture_name(&name) {
            capture_entries.push((name, entry));
        } else {
            report_names.push(name);
        }
    }

    let listing = ReportListing::from_names(report_names);

    let mut captures: Vec<CaptureInfo> = capture_entries
        .into_iter()
        .filter_map(|(name, entry)| match describe(&name, &entry, &listing, now) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Skipping capture {}: {}", name, e);
                None
            }
        })
        .collect();

    captures.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

    info!(
        "Listed {} captures ({} reports) in {}",
        captures.len(),
        listing.len(),
        dir.display()
    );

    Ok(captures)
}

fn describe(
    name: &str,
    entry: &DirEntry,
    listing: &ReportListing,
    now: DateTime<Utc>,
) -> AppResult<CaptureInfo> {
    let metadata = entry.metadata()?;
    let last_modified = DateTime::<Utc>::from(metadata.modified()?);
    let status = resolve_status(name, last_modified, listing, now);

    debug!("Capture {} is {:?}", name, status);

    Ok(CaptureInfo {
        name: name.to_string(),
        last_modified,
        size_bytes: metadata.len(),
        duration_minutes: parse_capture_minutes(name),
        status,
        report: listing.find_report(name).map(str::to_string),
    })
}
