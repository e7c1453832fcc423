/// Fixed positional layout of an auction-notice table row.
///
/// The extracted tables carry no header we can rely on, so every field is
/// addressed by its column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub sequence_number: usize,
    pub scheduled_date_time: usize,
    pub venue_name: usize,
    pub location_path: usize,
    pub sale_form: usize,
    pub auction_kind: usize,
    pub property: usize,
    pub attributes: usize,
    pub total_area: usize,
    pub arable_area: usize,
    pub starting_price: usize,
    pub next_auction_number: usize,
    pub remarks: usize,
    /// Rows narrower than this cannot populate a record.
    pub min_width: usize,
}

pub const NOTICE_COLUMNS: ColumnLayout = ColumnLayout {
    sequence_number: 0,
    scheduled_date_time: 2,
    venue_name: 3,
    location_path: 4,
    sale_form: 5,
    auction_kind: 6,
    property: 7,
    attributes: 8,
    total_area: 9,
    arable_area: 10,
    starting_price: 11,
    next_auction_number: 12,
    remarks: 13,
    min_width: 12,
};

impl ColumnLayout {
    /// Human readable name of a column index, used by diagnostics.
    pub fn column_name(&self, index: usize) -> &'static str {
        match index {
            i if i == self.sequence_number => "sequence_number",
            i if i == self.scheduled_date_time => "scheduled_date_time",
            i if i == self.venue_name => "venue_name",
            i if i == self.location_path => "location_path",
            i if i == self.sale_form => "sale_form",
            i if i == self.auction_kind => "auction_kind",
            i if i == self.property => "property_type/character",
            i if i == self.attributes => "attributes/discount",
            i if i == self.total_area => "total_area",
            i if i == self.arable_area => "arable_area",
            i if i == self.starting_price => "starting_price",
            i if i == self.next_auction_number => "next_auction_number",
            i if i == self.remarks => "remarks",
            _ => "unmapped",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_column_fits_min_width() {
        assert!(NOTICE_COLUMNS.starting_price < NOTICE_COLUMNS.min_width);
        assert!(NOTICE_COLUMNS.next_auction_number >= NOTICE_COLUMNS.min_width);
    }

    #[test]
    fn test_column_names() {
        assert_eq!(NOTICE_COLUMNS.column_name(0), "sequence_number");
        assert_eq!(NOTICE_COLUMNS.column_name(1), "unmapped");
        assert_eq!(NOTICE_COLUMNS.column_name(11), "starting_price");
    }
}
