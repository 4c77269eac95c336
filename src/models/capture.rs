use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing state of a capture, derived from the directory contents and the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    /// A correlated report exists
    Completed,

    /// No report yet, still inside the conversion window (or no known duration)
    Pending,

    /// No report and the conversion window has elapsed
    Failed,
}

/// A capture file as seen in the traffic directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureInfo {
    /// File name, including the extension
    pub name: String,

    /// Last modification time on disk
    pub last_modified: DateTime<Utc>,

    /// Size of the file in bytes
    pub size_bytes: u64,

    /// Recording length encoded in the file name, if any
    pub duration_minutes: Option<f64>,

    /// Status at the time the listing was taken
    pub status: CaptureStatus,

    /// Name of the correlated report
    pub report: Option<String>,
}
