use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated traffic for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrafficStats {
    /// Day the totals belong to
    pub date: NaiveDate,

    /// Sum of the input volume of every report for this day
    pub total_input: f64,

    /// Sum of the output volume of every report for this day
    pub total_output: f64,

    /// Number of reports folded into this entry
    pub capture_count: u32,
}

impl DailyTrafficStats {
    /// Start a new entry from a single report
    pub fn new(date: NaiveDate, input: f64, output: f64) -> Self {
        Self {
            date,
            total_input: input,
            total_output: output,
            capture_count: 1,
        }
    }

    /// Fold one more report into this entry
    pub fn add(&mut self, input: f64, output: f64) {
        self.total_input += input;
        self.total_output += output;
        self.capture_count += 1;
    }

    /// Combined input and output volume, used for ranking
    pub fn total(&self) -> f64 {
        self.total_input + self.total_output
    }
}
