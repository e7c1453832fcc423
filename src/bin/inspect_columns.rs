use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::fs;

use auction_notices::models::NOTICE_COLUMNS;
use auction_notices::processor::{RecordBatchProcessor, parse_raw_batch};

const SAMPLES_PER_COLUMN: usize = 3;

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("Usage: inspect_columns <input.json>")?;

    let json = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let rows = parse_raw_batch(&json)?;

    println!("=== COLUMN INSPECTION: {} ===\n", path);
    println!("Rows: {}", rows.len());

    let mut widths: BTreeMap<usize, usize> = BTreeMap::new();
    for row in &rows {
        *widths.entry(row.len()).or_default() += 1;
    }
    println!("\nRow widths:");
    for (width, count) in &widths {
        let note = if *width < NOTICE_COLUMNS.min_width {
            " (too narrow)"
        } else {
            ""
        };
        println!("   {:>3} cells: {} rows{}", width, count, note);
    }

    let max_width = widths.keys().max().copied().unwrap_or(0);
    println!("\nColumn samples:");
    for index in 0..max_width {
        let samples: Vec<&str> = rows
            .iter()
            .filter_map(|row| row.get(index).and_then(|c| c.as_deref()))
            .filter(|c| !c.trim().is_empty())
            .take(SAMPLES_PER_COLUMN)
            .collect();
        let empty = rows
            .iter()
            .filter(|row| {
                row.get(index)
                    .and_then(|c| c.as_deref())
                    .is_none_or(|c| c.trim().is_empty())
            })
            .count();

        println!(
            "   [{:>2}] {:<24} empty: {:>4}  samples: {:?}",
            index,
            NOTICE_COLUMNS.column_name(index),
            empty,
            samples
        );
    }

    let batch = RecordBatchProcessor::new().process(&rows);
    println!("\nBatch result:");
    println!("   Records:        {}", batch.stats.records);
    println!("   Aggregate rows: {}", batch.stats.aggregate_rows);
    println!("   Header rows:    {}", batch.stats.header_rows);
    println!("   Too narrow:     {}", batch.stats.narrow_rows);
    println!("   Invalid:        {}", batch.stats.invalid_rows);

    Ok(())
}
