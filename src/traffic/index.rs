use chrono::{Days, NaiveDate};
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::capture::naming::{is_report_name, parse_report_name};
use crate::models::stats::DailyTrafficStats;
use crate::utils::error::{AppError, AppResult};

/// Per-day traffic totals folded from daily report file names
#[derive(Debug, Clone, Default)]
pub struct TrafficIndex {
    days: BTreeMap<NaiveDate, DailyTrafficStats>,
}

impl TrafficIndex {
    /// Scan `dir` once and aggregate every daily report it contains.
    ///
    /// Any I/O error aborts the build; no partial index is returned.
    pub fn build(dir: &Path) -> AppResult<Self> {
        if !dir.is_dir() {
            return Err(AppError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if is_report_name(&name) {
                names.push(name);
            }
        }

        let index = Self::from_report_names(&names);
        info!(
            "Indexed {} days from {} report files in {}",
            index.len(),
            names.len(),
            dir.display()
        );

        Ok(index)
    }

    /// Aggregate report names that are already known. Names that do not follow the
    /// daily report convention are ignored.
    pub fn from_report_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();

        for name in names {
            let name = name.as_ref();
            match parse_report_name(name) {
                Some(report) => index.fold(report.date, report.input, report.output),
                None => debug!("Skipping {}: not a daily report name", name),
            }
        }

        index
    }

    fn fold(&mut self, date: NaiveDate, input: f64, output: f64) {
        self.days
            .entry(date)
            .and_modify(|stats| stats.add(input, output))
            .or_insert_with(|| DailyTrafficStats::new(date, input, output));
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyTrafficStats> {
        self.days.get(&date)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    /// Entries for the `days`-day window ending at the newest indexed date.
    ///
    /// Days without reports are absent, so fewer than `days` entries may come back.
    pub fn last_days(&self, days: u32) -> Vec<DailyTrafficStats> {
        let to = match self.last_date() {
            Some(date) if days > 0 => date,
            _ => return Vec::new(),
        };
        let from = to
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .unwrap_or(NaiveDate::MIN);

        self.between(from, to)
    }

    /// Entries with a date in `[from, to]`, oldest first
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<DailyTrafficStats> {
        if from > to {
            return Vec::new();
        }

        self.days.range(from..=to).map(|(_, stats)| stats.clone()).collect()
    }

    /// The `limit` days with the highest combined volume, largest first.
    ///
    /// Order among equal totals is not specified.
    pub fn top_days(&self, limit: usize) -> Vec<DailyTrafficStats> {
        let mut ranked: Vec<DailyTrafficStats> = self.days.values().cloned().collect();
        ranked.sort_unstable_by(|a, b| b.total().total_cmp(&a.total()));
        ranked.truncate(limit);
        ranked
    }
}
