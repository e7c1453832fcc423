//! Named defaults and the "best offers" preset of the filter engine.

/// Sale form matched when a query does not name one.
pub const DEFAULT_SALE_FORM: &str = "sprzedaż";

/// Lower bound of the date window, in days from today, when unspecified.
pub const DEFAULT_MIN_DAYS_FROM_NOW: i64 = 7;

pub const BEST_OFFERS_LOCATION: &str = "Trzebownisko";
pub const BEST_OFFERS_REGIONS: [&str; 3] = ["łańcucki", "ropczycko sędziszowski", "rzeszowski"];
pub const BEST_OFFERS_FORM: &str = DEFAULT_SALE_FORM;
/// Hectares.
pub const BEST_OFFERS_MIN_AREA: f64 = 0.08;
pub const BEST_OFFERS_MAX_PRICE: f64 = 20_000.0;
pub const BEST_OFFERS_MIN_DAYS_FROM_NOW: i64 = 7;
