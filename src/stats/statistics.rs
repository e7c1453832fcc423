use serde::{Deserialize, Serialize};

use crate::models::AuctionRecord;

/// Summary of a record collection. Every average or bound is 0 when no
/// record carries the underlying value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub count: usize,
    pub avg_area: f64,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price_per_hectare: f64,
}

pub fn calculate_stats(records: &[AuctionRecord]) -> Statistics {
    if records.is_empty() {
        return Statistics::default();
    }

    let areas: Vec<f64> = records.iter().filter_map(|r| r.total_area).collect();
    let prices: Vec<f64> = records.iter().filter_map(|r| r.starting_price).collect();
    let per_hectare: Vec<f64> = records.iter().filter_map(|r| r.price_per_hectare()).collect();

    Statistics {
        count: records.len(),
        avg_area: mean(&areas),
        avg_price: mean(&prices),
        min_price: prices.iter().copied().reduce(f64::min).unwrap_or(0.0),
        max_price: prices.iter().copied().reduce(f64::max).unwrap_or(0.0),
        avg_price_per_hectare: mean(&per_hectare),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filters::tests::record;

    #[test]
    fn test_empty_collection() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.avg_price_per_hectare, 0.0);
    }

    #[test]
    fn test_summary_values() {
        let mut a = record(1);
        a.total_area = Some(0.5);
        a.starting_price = Some(10_000.0);
        let mut b = record(2);
        b.total_area = Some(1.5);
        b.starting_price = Some(30_000.0);
        let mut no_price = record(3);
        no_price.total_area = Some(1.0);
        no_price.starting_price = None;
        let mut zero_area = record(4);
        zero_area.total_area = Some(0.0);
        zero_area.starting_price = Some(5_000.0);

        let stats = calculate_stats(&[a, b, no_price, zero_area]);
        assert_eq!(stats.count, 4);
        assert!((stats.avg_area - 0.75).abs() < 1e-9);
        assert!((stats.avg_price - 15_000.0).abs() < 1e-9);
        assert_eq!(stats.min_price, 5_000.0);
        assert_eq!(stats.max_price, 30_000.0);
        // only a and b have a positive area and a price: (20000 + 20000) / 2
        assert!((stats.avg_price_per_hectare - 20_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_records_without_numbers() {
        let mut bare = record(1);
        bare.total_area = None;
        bare.starting_price = None;

        let stats = calculate_stats(&[bare]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.avg_area, 0.0);
        assert_eq!(stats.min_price, 0.0);
        assert_eq!(stats.max_price, 0.0);
    }
}
