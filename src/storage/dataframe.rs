use polars::prelude::*;

use crate::error::Result;
use crate::models::AuctionRecord;
use crate::processor::location::extract_region;

/// Tabular view of the records, one column per field plus the parsed
/// auction date and resolved county.
pub fn records_to_dataframe(records: &[AuctionRecord]) -> Result<DataFrame> {
    fn text<F>(records: &[AuctionRecord], f: F) -> Vec<Option<String>>
    where
        F: Fn(&AuctionRecord) -> Option<String>,
    {
        records.iter().map(f).collect()
    }

    fn number<F>(records: &[AuctionRecord], f: F) -> Vec<Option<f64>>
    where
        F: Fn(&AuctionRecord) -> Option<f64>,
    {
        records.iter().map(f).collect()
    }

    let columns: Vec<Column> = vec![
        Series::new(
            "sequence_number".into(),
            records.iter().map(|r| r.sequence_number).collect::<Vec<u32>>(),
        )
        .into(),
        Series::new(
            "scheduled_date_time".into(),
            text(records, |r| Some(r.scheduled_date_time.raw().to_string())),
        )
        .into(),
        Series::new(
            "scheduled_date".into(),
            text(records, |r| r.scheduled_date().map(|d| d.format("%Y-%m-%d").to_string())),
        )
        .into(),
        Series::new("venue_name".into(), text(records, |r| Some(r.venue_name.clone()))).into(),
        Series::new("location_path".into(), text(records, |r| r.location_path.clone())).into(),
        Series::new(
            "region".into(),
            text(records, |r| r.location_path.as_deref().and_then(extract_region)),
        )
        .into(),
        Series::new("sale_form".into(), text(records, |r| r.sale_form.clone())).into(),
        Series::new("auction_kind".into(), text(records, |r| r.auction_kind.clone())).into(),
        Series::new("property_type".into(), text(records, |r| Some(r.property_type.clone()))).into(),
        Series::new(
            "property_character".into(),
            text(records, |r| Some(r.property_character.clone())),
        )
        .into(),
        Series::new("attribute_text".into(), text(records, |r| Some(r.attribute_text.clone()))).into(),
        Series::new("discount_text".into(), text(records, |r| Some(r.discount_text.clone()))).into(),
        Series::new("total_area".into(), number(records, |r| r.total_area)).into(),
        Series::new("arable_area".into(), number(records, |r| r.arable_area)).into(),
        Series::new("starting_price".into(), number(records, |r| r.starting_price)).into(),
        Series::new(
            "next_auction_number".into(),
            records.iter().map(|r| r.next_auction_number).collect::<Vec<Option<u32>>>(),
        )
        .into(),
        Series::new("remarks".into(), text(records, |r| r.remarks.clone())).into(),
    ];

    Ok(DataFrame::new(columns)?)
}

/// Parquet encoding of the records.
pub fn records_to_parquet(records: &[AuctionRecord]) -> Result<Vec<u8>> {
    let mut df = records_to_dataframe(records)?;

    let mut buf = Vec::new();
    {
        let writer = ParquetWriter::new(&mut buf);
        writer.finish(&mut df)?;
    }

    Ok(buf)
}
