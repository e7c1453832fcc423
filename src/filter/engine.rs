use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::filter::config::FilterConfig;
use crate::filter::filters;
use crate::filter::presets::{DEFAULT_MIN_DAYS_FROM_NOW, DEFAULT_SALE_FORM};
use crate::models::AuctionRecord;

/// Filter stages, in the order the engine runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterStage {
    Location,
    Regions,
    Form,
    Area,
    Price,
    DateWindow,
    PropertyTypes,
    Discount,
}

/// Collection size around one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: FilterStage,
    pub before: usize,
    pub after: usize,
}

#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub records: Vec<AuctionRecord>,
    /// Only the stages that actually ran.
    pub stages: Vec<StageCount>,
}

/// Applies a `FilterConfig` to a record collection.
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        FilterEngine
    }

    /// Filter relative to today's local date.
    pub fn apply(&self, records: &[AuctionRecord], config: &FilterConfig) -> Vec<AuctionRecord> {
        self.apply_on(records, config, Local::now().date_naive())
    }

    pub fn apply_on(
        &self,
        records: &[AuctionRecord],
        config: &FilterConfig,
        today: NaiveDate,
    ) -> Vec<AuctionRecord> {
        self.apply_traced(records, config, today).records
    }

    /// Records matching the "best offers" preset.
    pub fn best_offers(&self, records: &[AuctionRecord]) -> Vec<AuctionRecord> {
        self.apply(records, &FilterConfig::best_offers())
    }

    /// Run every applicable stage, recording the collection size around each.
    pub fn apply_traced(
        &self,
        records: &[AuctionRecord],
        config: &FilterConfig,
        today: NaiveDate,
    ) -> FilterOutcome {
        let mut stages = Vec::new();
        if records.is_empty() {
            return FilterOutcome {
                records: Vec::new(),
                stages,
            };
        }

        let config = config.resolved();
        let mut current = records.to_vec();

        let mut run = |stage: FilterStage,
                       current: Vec<AuctionRecord>,
                       filter: &dyn Fn(&[AuctionRecord]) -> Vec<AuctionRecord>| {
            let before = current.len();
            let next = filter(&current);
            debug!("Filter stage {:?}: {} -> {} records", stage, before, next.len());
            stages.push(StageCount {
                stage,
                before,
                after: next.len(),
            });
            next
        };

        if let Some(location) = config.location.as_deref().filter(|l| !l.is_empty()) {
            current = run(FilterStage::Location, current, &|r: &[AuctionRecord]| {
                filters::by_location(r, location)
            });
        }

        if !config.regions.is_empty() {
            current = run(FilterStage::Regions, current, &|r: &[AuctionRecord]| {
                filters::by_regions(r, &config.regions)
            });
        }

        let form = config.form.as_deref().unwrap_or(DEFAULT_SALE_FORM);
        current = run(FilterStage::Form, current, &|r: &[AuctionRecord]| filters::by_form(r, form));

        if let Some(min_area) = config.min_area {
            current = run(FilterStage::Area, current, &|r: &[AuctionRecord]| {
                filters::by_area(r, min_area, config.max_area)
            });
        }

        if config.min_price.is_some() || config.max_price.is_some() {
            current = run(FilterStage::Price, current, &|r: &[AuctionRecord]| {
                filters::by_price(r, config.min_price, config.max_price)
            });
        }

        let min_days = config.min_days_from_now.unwrap_or(DEFAULT_MIN_DAYS_FROM_NOW);
        current = run(FilterStage::DateWindow, current, &|r: &[AuctionRecord]| {
            filters::by_date_window(r, today, min_days, config.max_days_from_now)
        });

        if !config.property_types.is_empty() {
            current = run(FilterStage::PropertyTypes, current, &|r: &[AuctionRecord]| {
                filters::by_property_types(r, &config.property_types)
            });
        }

        if config.min_discount.is_some() {
            current = run(FilterStage::Discount, current, &|r: &[AuctionRecord]| {
                filters::by_discount(r, config.min_discount)
            });
        }

        FilterOutcome {
            records: current,
            stages,
        }
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
