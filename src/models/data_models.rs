use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::processor::field_normalizer::parse_scheduled_date;

/// One row as handed over by the table extractor: ordered, possibly empty cells.
pub type RawRow = Vec<Option<String>>;

/// Auction date cell, kept verbatim ("15.04.2025\n9:00").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduledDateTime(String);

impl ScheduledDateTime {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Calendar date of the auction; the time of day is not considered.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_scheduled_date(&self.0)
    }

    /// Display time, the second line of the cell when present.
    pub fn time(&self) -> Option<&str> {
        self.0
            .trim()
            .split_once('\n')
            .map(|(_, time)| time.trim())
            .filter(|time| !time.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionRecord {
    pub sequence_number: u32,
    pub scheduled_date_time: ScheduledDateTime,
    pub venue_name: String,
    pub location_path: Option<String>,
    pub sale_form: Option<String>,
    pub auction_kind: Option<String>,
    pub property_type: String,
    pub property_character: String,
    pub attribute_text: String,
    pub discount_text: String,
    /// Hectares.
    pub total_area: Option<f64>,
    /// Hectares.
    pub arable_area: Option<f64>,
    pub starting_price: Option<f64>,
    pub next_auction_number: Option<u32>,
    pub remarks: Option<String>,
}

impl AuctionRecord {
    pub fn scheduled_date(&self) -> Option<NaiveDate> {
        self.scheduled_date_time.date()
    }

    /// Starting price per hectare, defined only for a positive area.
    pub fn price_per_hectare(&self) -> Option<f64> {
        match (self.starting_price, self.total_area) {
            (Some(price), Some(area)) if area > 0.0 => Some(price / area),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_date_time_parts() {
        let scheduled = ScheduledDateTime::new("15.04.2025\n9:00");
        assert_eq!(scheduled.date(), NaiveDate::from_ymd_opt(2025, 4, 15));
        assert_eq!(scheduled.time(), Some("9:00"));

        let date_only = ScheduledDateTime::new("15.04.2025");
        assert_eq!(date_only.time(), None);
    }

    #[test]
    fn test_serializes_with_raw_date_text() {
        let record = AuctionRecord {
            sequence_number: 3,
            scheduled_date_time: ScheduledDateTime::new("15.04.2025\n9:00"),
            venue_name: "Rzeszów".to_string(),
            location_path: None,
            sale_form: Some("sprzedaż".to_string()),
            auction_kind: None,
            property_type: "rolna".to_string(),
            property_character: String::new(),
            attribute_text: String::new(),
            discount_text: String::new(),
            total_area: Some(0.5),
            arable_area: None,
            starting_price: None,
            next_auction_number: None,
            remarks: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["scheduled_date_time"], "15.04.2025\n9:00");
        assert_eq!(json["total_area"], 0.5);
        assert!(json["starting_price"].is_null());
        assert_eq!(record.price_per_hectare(), None);
    }
}
