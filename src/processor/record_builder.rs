use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{AuctionError, Result};
use crate::models::{AuctionRecord, ColumnLayout, NOTICE_COLUMNS, RawRow, ScheduledDateTime};
use crate::processor::field_normalizer::{
    normalize_count, normalize_number, split_attributes_and_discount,
    split_property_type_and_character,
};

/// Marker of the per-page summary line ("Razem" = total).
pub const AGGREGATE_ROW_TOKEN: &str = "Razem";

/// Header text of the price column, repeated on every extracted page.
pub const PRICE_HEADER_TOKEN: &str = "Cena wywoławcza";

/// Why a raw row did not become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    Aggregate,
    Header,
    TooNarrow,
    MissingRequired,
}

/// Per-batch diagnostics. Not part of the processing contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub total_rows: usize,
    pub aggregate_rows: usize,
    pub header_rows: usize,
    pub narrow_rows: usize,
    pub invalid_rows: usize,
    pub records: usize,
}

impl BatchStats {
    pub fn dropped(&self) -> usize {
        self.total_rows - self.records
    }

    fn count(&mut self, rejection: RowRejection) {
        match rejection {
            RowRejection::Aggregate => self.aggregate_rows += 1,
            RowRejection::Header => self.header_rows += 1,
            RowRejection::TooNarrow => self.narrow_rows += 1,
            RowRejection::MissingRequired => self.invalid_rows += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub records: Vec<AuctionRecord>,
    pub stats: BatchStats,
}

/// Turns raw extracted table rows into validated auction records.
pub struct RecordBatchProcessor {
    layout: ColumnLayout,
}

impl RecordBatchProcessor {
    pub fn new() -> Self {
        Self::with_layout(NOTICE_COLUMNS)
    }

    pub fn with_layout(layout: ColumnLayout) -> Self {
        Self { layout }
    }

    /// Process a whole batch, keeping the surviving records in row order.
    pub fn process(&self, rows: &[RawRow]) -> BatchOutcome {
        let mut records = Vec::with_capacity(rows.len());
        let mut stats = BatchStats {
            total_rows: rows.len(),
            ..BatchStats::default()
        };

        for (index, row) in rows.iter().enumerate() {
            match self.build_record(row) {
                Ok(record) => records.push(record),
                Err(rejection) => {
                    debug!("Dropped row {} ({:?}): {:?}", index, rejection, row);
                    stats.count(rejection);
                }
            }
        }

        stats.records = records.len();
        info!(
            "Batch processing completed: {} records from {} rows ({} aggregate, {} header, {} too narrow, {} invalid)",
            stats.records,
            stats.total_rows,
            stats.aggregate_rows,
            stats.header_rows,
            stats.narrow_rows,
            stats.invalid_rows
        );

        BatchOutcome { records, stats }
    }

    /// Build one record, or report why the row is not one.
    pub fn build_record(&self, row: &RawRow) -> std::result::Result<AuctionRecord, RowRejection> {
        if is_aggregate_row(row) {
            return Err(RowRejection::Aggregate);
        }
        if self.is_header_row(row) {
            return Err(RowRejection::Header);
        }
        if row.len() < self.layout.min_width {
            return Err(RowRejection::TooNarrow);
        }

        let layout = &self.layout;
        let cell = |index: usize| {
            row.get(index)
                .and_then(|c| c.as_deref())
                .filter(|c| !c.trim().is_empty())
        };

        let sequence_number = cell(layout.sequence_number)
            .and_then(|text| normalize_count(text, None))
            .filter(|n| *n > 0)
            .ok_or(RowRejection::MissingRequired)?;
        let scheduled = cell(layout.scheduled_date_time).ok_or(RowRejection::MissingRequired)?;
        let venue_name = cell(layout.venue_name).ok_or(RowRejection::MissingRequired)?;

        let (property_type, property_character) =
            split_property_type_and_character(cell(layout.property).unwrap_or(""));
        let (attribute_text, discount_text) =
            split_attributes_and_discount(cell(layout.attributes).unwrap_or(""));

        Ok(AuctionRecord {
            sequence_number,
            scheduled_date_time: ScheduledDateTime::new(scheduled),
            venue_name: venue_name.to_string(),
            location_path: cell(layout.location_path).map(str::to_string),
            sale_form: cell(layout.sale_form).map(str::to_string),
            auction_kind: cell(layout.auction_kind).map(str::to_string),
            property_type,
            property_character,
            attribute_text,
            discount_text,
            total_area: cell(layout.total_area).and_then(|t| normalize_number(t, None)),
            arable_area: cell(layout.arable_area).and_then(|t| normalize_number(t, None)),
            starting_price: cell(layout.starting_price).and_then(|t| normalize_number(t, None)),
            next_auction_number: cell(layout.next_auction_number)
                .and_then(|t| normalize_count(t, None)),
            remarks: cell(layout.remarks).map(str::to_string),
        })
    }

    fn is_header_row(&self, row: &RawRow) -> bool {
        row.get(self.layout.starting_price)
            .and_then(|c| c.as_deref())
            .is_some_and(|c| c.contains(PRICE_HEADER_TOKEN))
    }
}

impl Default for RecordBatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_aggregate_row(row: &RawRow) -> bool {
    row.iter()
        .flatten()
        .any(|cell| cell.contains(AGGREGATE_ROW_TOKEN))
}

/// Records of a batch with the default column layout.
pub fn process_rows(rows: &[RawRow]) -> Vec<AuctionRecord> {
    RecordBatchProcessor::new().process(rows).records
}

/// Decode a raw batch (JSON array of rows, each an array of strings or nulls).
///
/// Numbers and booleans in cells are accepted and kept as their text. Any
/// other shape fails the whole batch.
pub fn parse_raw_batch(json: &str) -> Result<Vec<RawRow>> {
    let value: Value = serde_json::from_str(json)?;

    let rows = value
        .as_array()
        .ok_or_else(|| AuctionError::InvalidBatch("expected a JSON array of rows".to_string()))?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| -> Result<RawRow> {
            let cells = row.as_array().ok_or_else(|| {
                AuctionError::InvalidBatch(format!("row {} is not an array of cells", index))
            })?;
            cells
                .iter()
                .map(|cell| match cell {
                    Value::Null => Ok(None),
                    Value::String(s) => Ok(Some(s.clone())),
                    Value::Number(n) => Ok(Some(n.to_string())),
                    Value::Bool(b) => Ok(Some(b.to_string())),
                    other => Err(AuctionError::InvalidBatch(format!(
                        "row {} contains a nested value: {}",
                        index, other
                    ))),
                })
                .collect::<Result<RawRow>>()
        })
        .collect()
}
