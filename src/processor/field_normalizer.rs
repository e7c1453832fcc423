use chrono::NaiveDate;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

// "obniżka 30%", "Obnizka 30 %", ...
static DISCOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*obni[żz]ka\s+(\d+)\s*%").expect("Invalid discount regex")
});

static LEADING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+").expect("Invalid leading digits regex"));

/// Parse a loosely formatted decimal ("1,2345 ha", "15 000,00 zł").
///
/// Commas are read as decimal points and everything except digits, `.` and
/// `-` is dropped before parsing. Returns `fallback` when nothing numeric is
/// left or the remainder is not a valid number.
pub fn normalize_number(text: &str, fallback: Option<f64>) -> Option<f64> {
    let cleaned: String = text
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return fallback;
    }

    f64::from_str(&cleaned).ok().or(fallback)
}

/// Leading run of digits of the trimmed text ("12." -> 12, "a12" -> fallback).
pub fn normalize_count(text: &str, fallback: Option<u32>) -> Option<u32> {
    LEADING_DIGITS_RE
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .or(fallback)
}

/// Split the attributes cell into (attributes, discount).
///
/// The discount phrase is cut out of the text and returned in canonical form
/// ("obniżka 30%"); without one the discount part is empty.
pub fn split_attributes_and_discount(text: &str) -> (String, String) {
    if text.trim().is_empty() {
        return (String::new(), String::new());
    }

    match DISCOUNT_RE.captures(text) {
        Some(captures) => {
            let percent = captures.get(1).map_or("", |m| m.as_str());
            let discount = format!("obniżka {}%", percent);
            let attributes = DISCOUNT_RE.replace_all(text, "").trim().to_string();
            (attributes, discount)
        }
        None => (text.trim().to_string(), String::new()),
    }
}

/// Split the two-line property cell into (type, character).
pub fn split_property_type_and_character(text: &str) -> (String, String) {
    let text = text.trim();
    match text.split_once('\n') {
        Some((kind, character)) => (kind.trim().to_string(), character.trim().to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// Calendar date from a "dd.mm.yyyy\nhh:mm" cell. Time of day is discarded.
pub fn parse_scheduled_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().split('\n').next()?.trim();

    let parts: Vec<&str> = date_part.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let day = parts[0].trim().parse::<u32>().ok()?;
    let month = parts[1].trim().parse::<u32>().ok()?;
    let year = parts[2].trim().parse::<i32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_normalization() {
        assert_eq!(normalize_number("1,2345", None), Some(1.2345));
        assert_eq!(normalize_number("15 000,00 zł", None), Some(15000.0));
        assert_eq!(normalize_number("0.08 ha", None), Some(0.08));
        assert_eq!(normalize_number("-3", None), Some(-3.0));

        assert_eq!(normalize_number("N/A", None), None);
        assert_eq!(normalize_number("", Some(1.0)), Some(1.0));
        assert_eq!(normalize_number("1.2.3", Some(7.0)), Some(7.0));
        assert_eq!(normalize_number("-", None), None);
    }

    #[test]
    fn test_count_normalization() {
        assert_eq!(normalize_count("12", None), Some(12));
        assert_eq!(normalize_count("  7.", None), Some(7));
        assert_eq!(normalize_count("3 (II)", None), Some(3));
        assert_eq!(normalize_count("nr 5", None), None);
        assert_eq!(normalize_count("", Some(1)), Some(1));
        assert_eq!(normalize_count("99999999999", None), None);
    }

    #[test]
    fn test_discount_split() {
        assert_eq!(
            split_attributes_and_discount("duża działka obniżka 30% narożna"),
            ("duża działka narożna".to_string(), "obniżka 30%".to_string())
        );
        assert_eq!(
            split_attributes_and_discount("Obnizka 50 % dojazd"),
            ("dojazd".to_string(), "obniżka 50%".to_string())
        );
        assert_eq!(
            split_attributes_and_discount("  dojazd asfaltowy "),
            ("dojazd asfaltowy".to_string(), String::new())
        );
        assert_eq!(split_attributes_and_discount(""), (String::new(), String::new()));
    }

    #[test]
    fn test_property_split() {
        assert_eq!(
            split_property_type_and_character("rolna\nzabudowana"),
            ("rolna".to_string(), "zabudowana".to_string())
        );
        assert_eq!(
            split_property_type_and_character("budowlana"),
            ("budowlana".to_string(), String::new())
        );
        assert_eq!(split_property_type_and_character(""), (String::new(), String::new()));
    }

    #[test]
    fn test_scheduled_date_parsing() {
        assert_eq!(
            parse_scheduled_date("15.04.2025\n9:00"),
            NaiveDate::from_ymd_opt(2025, 4, 15)
        );
        assert_eq!(parse_scheduled_date("01.12.2024"), NaiveDate::from_ymd_opt(2024, 12, 1));

        assert_eq!(parse_scheduled_date("not-a-date"), None);
        assert_eq!(parse_scheduled_date("15.04"), None);
        assert_eq!(parse_scheduled_date("31.02.2025"), None);
        assert_eq!(parse_scheduled_date("aa.04.2025"), None);
        assert_eq!(parse_scheduled_date(""), None);
    }
}
