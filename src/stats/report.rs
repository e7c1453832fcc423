use serde::Serialize;

use crate::filter::{FilterConfig, FilterOutcome, StageCount};
use crate::models::AuctionRecord;
use crate::stats::statistics::{Statistics, calculate_stats};

/// Answer to one query over one batch, ready to be emitted as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub source: String,
    pub total_records: usize,
    pub filtered_records: usize,
    /// Share of the batch that matched, in percent.
    pub filtered_percent: f64,
    pub statistics: Statistics,
    /// Effective filters, with the preset expanded.
    pub applied_filters: FilterConfig,
    pub stages: Vec<StageCount>,
    pub records: Vec<AuctionRecord>,
}

impl QueryReport {
    pub fn build(
        source: &str,
        total_records: usize,
        outcome: FilterOutcome,
        applied_filters: &FilterConfig,
    ) -> Self {
        let filtered_records = outcome.records.len();
        let filtered_percent = if total_records > 0 {
            filtered_records as f64 / total_records as f64 * 100.0
        } else {
            0.0
        };

        Self {
            source: source.to_string(),
            total_records,
            filtered_records,
            filtered_percent,
            statistics: calculate_stats(&outcome.records),
            applied_filters: applied_filters.resolved(),
            stages: outcome.stages,
            records: outcome.records,
        }
    }
}
