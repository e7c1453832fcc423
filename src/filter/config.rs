use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::presets::*;

/// Query options understood by the filter engine. Every option is optional;
/// see `FilterEngine::apply` for how absent options are defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(alias = "counties", skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_days_from_now: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_days_from_now: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_discount: Option<u32>,
    pub best_offers_only: bool,
}

impl FilterConfig {
    /// Load a filter configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FilterConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn best_offers() -> Self {
        Self {
            best_offers_only: true,
            ..Self::default()
        }
    }

    /// The configuration actually evaluated: with `best_offers_only` set,
    /// the preset overwrites the options it owns. Other options are kept.
    pub fn resolved(&self) -> Self {
        if !self.best_offers_only {
            return self.clone();
        }

        Self {
            location: Some(BEST_OFFERS_LOCATION.to_string()),
            regions: BEST_OFFERS_REGIONS.iter().map(|r| r.to_string()).collect(),
            form: Some(BEST_OFFERS_FORM.to_string()),
            min_area: Some(BEST_OFFERS_MIN_AREA),
            max_price: Some(BEST_OFFERS_MAX_PRICE),
            min_days_from_now: Some(BEST_OFFERS_MIN_DAYS_FROM_NOW),
            ..self.clone()
        }
    }

    /// Layer `overrides` on top of `self`; options set in `overrides` win.
    pub fn merged_with(&self, overrides: &FilterConfig) -> Self {
        Self {
            location: overrides.location.clone().or_else(|| self.location.clone()),
            regions: if overrides.regions.is_empty() {
                self.regions.clone()
            } else {
                overrides.regions.clone()
            },
            form: overrides.form.clone().or_else(|| self.form.clone()),
            min_area: overrides.min_area.or(self.min_area),
            max_area: overrides.max_area.or(self.max_area),
            min_price: overrides.min_price.or(self.min_price),
            max_price: overrides.max_price.or(self.max_price),
            min_days_from_now: overrides.min_days_from_now.or(self.min_days_from_now),
            max_days_from_now: overrides.max_days_from_now.or(self.max_days_from_now),
            property_types: if overrides.property_types.is_empty() {
                self.property_types.clone()
            } else {
                overrides.property_types.clone()
            },
            min_discount: overrides.min_discount.or(self.min_discount),
            best_offers_only: overrides.best_offers_only || self.best_offers_only,
        }
    }
}

/// Split a comma separated option value ("łańcucki, rzeszowski").
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
