use chrono::{DateTime, NaiveDate, Utc};
use log::{error, info};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::models::stats::DailyTrafficStats;
use crate::traffic::index::TrafficIndex;
use crate::utils::error::{AppError, AppResult};

/// A built index together with the moment its directory scan finished
#[derive(Debug)]
pub struct IndexSnapshot {
    pub index: TrafficIndex,
    pub built_at: DateTime<Utc>,
}

/// Owns the traffic index for the lifetime of the server.
///
/// Starts out empty; queries fail with `NotInitialized` until the first successful
/// `rebuild`. A rebuild scans into a fresh index and swaps it in whole, so readers
/// only ever see a complete snapshot.
pub struct TrafficService {
    traffic_dir: PathBuf,
    current: RwLock<Option<Arc<IndexSnapshot>>>,
}

impl TrafficService {
    pub fn new(traffic_dir: impl Into<PathBuf>) -> Self {
        Self {
            traffic_dir: traffic_dir.into(),
            current: RwLock::new(None),
        }
    }

    pub fn traffic_dir(&self) -> &Path {
        &self.traffic_dir
    }

    /// Rescan the traffic directory and replace the current index.
    ///
    /// On failure the previous snapshot, if any, stays in place.
    pub fn rebuild(&self) -> AppResult<Arc<IndexSnapshot>> {
        let index = TrafficIndex::build(&self.traffic_dir).map_err(|e| {
            error!("Failed to build traffic index from {}: {}", self.traffic_dir.display(), e);
            e
        })?;

        let snapshot = Arc::new(IndexSnapshot {
            index,
            built_at: Utc::now(),
        });
        *self.current.write() = Some(snapshot.clone());

        info!("Traffic index ready with {} days", snapshot.index.len());
        Ok(snapshot)
    }

    pub fn is_initialized(&self) -> bool {
        self.current.read().is_some()
    }

    /// Current snapshot, or `NotInitialized` if no build has succeeded yet
    pub fn snapshot(&self) -> AppResult<Arc<IndexSnapshot>> {
        self.current.read().clone().ok_or(AppError::NotInitialized)
    }

    pub fn last_days(&self, days: u32) -> AppResult<Vec<DailyTrafficStats>> {
        Ok(self.snapshot()?.index.last_days(days))
    }

    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<DailyTrafficStats>> {
        Ok(self.snapshot()?.index.between(from, to))
    }

    pub fn top_days(&self, limit: usize) -> AppResult<Vec<DailyTrafficStats>> {
        Ok(self.snapshot()?.index.top_days(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    const DAY_ONE_A: &str = "traffic_2024-01-01_00-00-00_(tag)_(5.0_input)_(2.0_output).csv";
    const DAY_ONE_B: &str = "traffic_2024-01-01_08-00-00_(tag)_(3.0_input)_(1.0_output).csv";

    #[test]
    fn test_queries_before_build_are_not_initialized() {
        let service = TrafficService::new("/nonexistent");
        assert!(!service.is_initialized());
        assert!(matches!(service.last_days(7), Err(AppError::NotInitialized)));
        assert!(matches!(service.top_days(5), Err(AppError::NotInitialized)));
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(service.between(day, day), Err(AppError::NotInitialized)));
    }

    #[test]
    fn test_empty_directory_is_initialized_but_empty() {
        let dir = TempDir::new().unwrap();
        let service = TrafficService::new(dir.path());
        service.rebuild().unwrap();

        assert!(service.is_initialized());
        assert!(service.last_days(7).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_ignores_later_files_until_rebuild() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(DAY_ONE_A)).unwrap();

        let service = TrafficService::new(dir.path());
        service.rebuild().unwrap();
        assert_eq!(service.last_days(1).unwrap()[0].capture_count, 1);

        File::create(dir.path().join(DAY_ONE_B)).unwrap();
        assert_eq!(service.last_days(1).unwrap()[0].capture_count, 1);

        service.rebuild().unwrap();
        let day = &service.last_days(1).unwrap()[0];
        assert_eq!(day.capture_count, 2);
        assert_eq!(day.total_input, 8.0);
        assert_eq!(day.total_output, 3.0);
    }

    #[test]
    fn test_repeated_rebuild_does_not_double_count() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(DAY_ONE_A)).unwrap();
        File::create(dir.path().join(DAY_ONE_B)).unwrap();

        let service = TrafficService::new(dir.path());
        for _ in 0..3 {
            service.rebuild().unwrap();
        }
        assert_eq!(service.top_days(1).unwrap()[0].capture_count, 2);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let traffic = dir.path().join("traffic");
        fs::create_dir(&traffic).unwrap();
        File::create(traffic.join(DAY_ONE_A)).unwrap();

        let service = TrafficService::new(&traffic);
        let first = service.rebuild().unwrap();

        fs::remove_dir_all(&traffic).unwrap();
        assert!(matches!(service.rebuild(), Err(AppError::DirectoryNotFound(_))));

        let current = service.snapshot().unwrap();
        assert!(Arc::ptr_eq(&first, &current));
        assert_eq!(current.index.len(), 1);
    }

    #[test]
    fn test_initial_build_failure_stays_uninitialized() {
        let dir = TempDir::new().unwrap();
        let service = TrafficService::new(dir.path().join("missing"));
        assert!(service.rebuild().is_err());
        assert!(matches!(service.snapshot(), Err(AppError::NotInitialized)));
    }
}
