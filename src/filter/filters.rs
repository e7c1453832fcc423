//! Independent record filters. Each one returns the matching records in
//! their original order.

use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::models::AuctionRecord;
use crate::processor::location::extract_region;

static FIRST_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("Invalid number regex"));

fn select(records: &[AuctionRecord], keep: impl Fn(&AuctionRecord) -> bool) -> Vec<AuctionRecord> {
    records.iter().filter(|r| keep(r)).cloned().collect()
}

/// Venue name or location path contains `target` (case-sensitive).
pub fn by_location(records: &[AuctionRecord], target: &str) -> Vec<AuctionRecord> {
    select(records, |record| {
        record.venue_name.contains(target)
            || record
                .location_path
                .as_deref()
                .is_some_and(|path| path.contains(target))
    })
}

/// Resolved county contains, case-insensitively, one of `regions`.
pub fn by_regions(records: &[AuctionRecord], regions: &[String]) -> Vec<AuctionRecord> {
    let targets: Vec<String> = regions.iter().map(|r| r.to_lowercase()).collect();

    select(records, |record| {
        let Some(region) = record.location_path.as_deref().and_then(extract_region) else {
            return false;
        };
        let region = region.to_lowercase();
        targets.iter().any(|target| region.contains(target.as_str()))
    })
}

/// Sale form equals `form`, ignoring case.
pub fn by_form(records: &[AuctionRecord], form: &str) -> Vec<AuctionRecord> {
    let form = form.to_lowercase();
    select(records, |record| {
        record
            .sale_form
            .as_deref()
            .is_some_and(|f| f.to_lowercase() == form)
    })
}

/// Total area within `[min_area, max_area]`; records without an area fail.
pub fn by_area(
    records: &[AuctionRecord],
    min_area: f64,
    max_area: Option<f64>,
) -> Vec<AuctionRecord> {
    select(records, |record| match record.total_area {
        Some(area) => area >= min_area && max_area.is_none_or(|max| area <= max),
        None => false,
    })
}

/// Starting price within whichever bounds are given.
pub fn by_price(
    records: &[AuctionRecord],
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Vec<AuctionRecord> {
    if min_price.is_none() && max_price.is_none() {
        return records.to_vec();
    }

    select(records, |record| match record.starting_price {
        Some(price) => {
            min_price.is_none_or(|min| price >= min) && max_price.is_none_or(|max| price <= max)
        }
        None => false,
    })
}

/// Auction date within `[today + min_days, today + max_days]`, inclusive.
/// Records whose date cannot be parsed never match.
pub fn by_date_window(
    records: &[AuctionRecord],
    today: NaiveDate,
    min_days_from_now: i64,
    max_days_from_now: Option<i64>,
) -> Vec<AuctionRecord> {
    let lower = offset_date(today, min_days_from_now);
    let upper = max_days_from_now.map(|days| offset_date(today, days));

    select(records, |record| match record.scheduled_date() {
        Some(date) => date >= lower && upper.is_none_or(|upper| date <= upper),
        None => false,
    })
}

fn offset_date(today: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        today.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    match shifted {
        Some(date) => date,
        None if days >= 0 => NaiveDate::MAX,
        None => NaiveDate::MIN,
    }
}

/// Property type contains, case-insensitively, one of `property_types`.
pub fn by_property_types(
    records: &[AuctionRecord],
    property_types: &[String],
) -> Vec<AuctionRecord> {
    let targets: Vec<String> = property_types.iter().map(|t| t.to_lowercase()).collect();

    select(records, |record| {
        if record.property_type.is_empty() {
            return false;
        }
        let property_type = record.property_type.to_lowercase();
        targets.iter().any(|target| property_type.contains(target.as_str()))
    })
}

/// Discount percentage of at least `min_discount`.
///
/// A record without any discount text passes only a zero threshold; no
/// threshold passes everything.
pub fn by_discount(records: &[AuctionRecord], min_discount: Option<u32>) -> Vec<AuctionRecord> {
    let Some(threshold) = min_discount else {
        return records.to_vec();
    };

    select(records, |record| {
        if record.discount_text.is_empty() {
            return threshold == 0;
        }
        discount_percent(&record.discount_text).is_some_and(|percent| percent >= threshold)
    })
}

/// First integer of a discount text ("obniżka 30%" -> 30).
pub fn discount_percent(discount_text: &str) -> Option<u32> {
    FIRST_NUMBER_RE
        .captures(discount_text)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::ScheduledDateTime;

    pub(crate) fn record(sequence_number: u32) -> AuctionRecord {
        AuctionRecord {
            sequence_number,
            scheduled_date_time: ScheduledDateTime::new("20.05.2025\n10:00"),
            venue_name: "Starostwo Powiatowe w Rzeszowie".to_string(),
            location_path: Some("podkarpackie/rzeszowski/Trzebownisko/Trzebownica/123".to_string()),
            sale_form: Some("sprzedaż".to_string()),
            auction_kind: Some("ustny nieograniczony".to_string()),
            property_type: "rolna".to_string(),
            property_character: "niezabudowana".to_string(),
            attribute_text: String::new(),
            discount_text: String::new(),
            total_area: Some(0.1),
            arable_area: Some(0.1),
            starting_price: Some(15_000.0),
            next_auction_number: None,
            remarks: None,
        }
    }

    fn numbers(records: &[AuctionRecord]) -> Vec<u32> {
        records.iter().map(|r| r.sequence_number).collect()
    }

    #[test]
    fn test_location_is_case_sensitive_substring() {
        let mut other = record(2);
        other.venue_name = "Łańcut".to_string();
        other.location_path = Some("podkarpackie/łańcucki/Łańcut/Albigowa/1".to_string());

        let records = vec![record(1), other];
        assert_eq!(numbers(&by_location(&records, "Trzebownisko")), vec![1]);
        assert_eq!(numbers(&by_location(&records, "Łańcut")), vec![2]);
        assert!(by_location(&records, "trzebownisko").is_empty());
    }

    #[test]
    fn test_regions() {
        let mut lancut = record(2);
        lancut.location_path = Some("podkarpackie/łańcucki/Łańcut/Albigowa/1".to_string());
        let mut unresolved = record(3);
        unresolved.location_path = None;

        let records = vec![record(1), lancut, unresolved];
        let regions = vec!["ŁAŃCUCKI".to_string(), "dębicki".to_string()];
        assert_eq!(numbers(&by_regions(&records, &regions)), vec![2]);

        // target must be contained in the resolved county, not the reverse
        let longer = vec!["rzeszowski ziemski".to_string()];
        assert!(by_regions(&records, &longer).is_empty());
    }

    #[test]
    fn test_form_is_exact_ignoring_case() {
        let mut lease = record(2);
        lease.sale_form = Some("dzierżawa".to_string());
        let mut missing = record(3);
        missing.sale_form = None;
        let mut upper = record(4);
        upper.sale_form = Some("SPRZEDAŻ".to_string());

        let records = vec![record(1), lease, missing, upper];
        assert_eq!(numbers(&by_form(&records, "sprzedaż")), vec![1, 4]);
        assert!(by_form(&records, "sprzedaż z ratami").is_empty());
    }

    #[test]
    fn test_area_bounds() {
        let mut small = record(2);
        small.total_area = Some(0.05);
        let mut unknown = record(3);
        unknown.total_area = None;
        let mut large = record(4);
        large.total_area = Some(3.0);

        let records = vec![record(1), small, unknown, large];
        assert_eq!(numbers(&by_area(&records, 0.08, None)), vec![1, 4]);
        assert_eq!(numbers(&by_area(&records, 0.08, Some(1.0))), vec![1]);
        assert_eq!(numbers(&by_area(&records, 0.1, Some(0.1))), vec![1]);
    }

    #[test]
    fn test_price_bounds() {
        let mut cheap = record(2);
        cheap.starting_price = Some(900.0);
        let mut unknown = record(3);
        unknown.starting_price = None;

        let records = vec![record(1), cheap, unknown];
        assert_eq!(numbers(&by_price(&records, None, None)), vec![1, 2, 3]);
        assert_eq!(numbers(&by_price(&records, Some(1_000.0), None)), vec![1]);
        assert_eq!(numbers(&by_price(&records, None, Some(1_000.0))), vec![2]);
        assert_eq!(numbers(&by_price(&records, Some(900.0), Some(15_000.0))), vec![1, 2]);
    }

    #[test]
    fn test_date_window_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let on_lower = record(1); // 20.05.2025
        let mut too_soon = record(2);
        too_soon.scheduled_date_time = ScheduledDateTime::new("05.05.2025\n9:00");
        let mut garbage = record(3);
        garbage.scheduled_date_time = ScheduledDateTime::new("termin do ustalenia");
        let mut later = record(4);
        later.scheduled_date_time = ScheduledDateTime::new("30.06.2025");

        let records = vec![on_lower, too_soon, garbage, later];
        assert_eq!(numbers(&by_date_window(&records, today, 19, None)), vec![1, 4]);
        assert_eq!(numbers(&by_date_window(&records, today, 7, Some(19))), vec![1]);
        assert_eq!(numbers(&by_date_window(&records, today, 20, Some(60))), vec![4]);
        assert_eq!(numbers(&by_date_window(&records, today, -30, Some(0))), Vec::<u32>::new());
    }

    #[test]
    fn test_property_types() {
        let mut building = record(2);
        building.property_type = "Budowlana".to_string();
        let mut blank = record(3);
        blank.property_type = String::new();

        let records = vec![record(1), building, blank];
        let wanted = vec!["budowl".to_string()];
        assert_eq!(numbers(&by_property_types(&records, &wanted)), vec![2]);
        let both = vec!["ROLNA".to_string(), "budowlana".to_string()];
        assert_eq!(numbers(&by_property_types(&records, &both)), vec![1, 2]);
    }

    #[test]
    fn test_discount_threshold() {
        let mut thirty = record(2);
        thirty.discount_text = "obniżka 30%".to_string();
        let mut fifty = record(3);
        fifty.discount_text = "obniżka 50%".to_string();

        let records = vec![record(1), thirty, fifty];
        assert_eq!(numbers(&by_discount(&records, None)), vec![1, 2, 3]);
        assert_eq!(numbers(&by_discount(&records, Some(0))), vec![1, 2, 3]);
        assert_eq!(numbers(&by_discount(&records, Some(30))), vec![2, 3]);
        assert_eq!(numbers(&by_discount(&records, Some(31))), vec![3]);
    }

    #[test]
    fn test_missing_discount_text_needs_zero_threshold() {
        let records = vec![record(1)];
        assert_eq!(by_discount(&records, Some(0)).len(), 1);
        assert!(by_discount(&records, Some(1)).is_empty());
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent("obniżka 45%"), Some(45));
        assert_eq!(discount_percent("obniżka"), None);
    }
}
