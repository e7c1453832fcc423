use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::processor::location::extract_region;

// Trailing "123", "123/4", "12/1 i 12/2", optionally marked "(kompleks)"
static PLOT_NUMBERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:/\d+)*(?:\s*i\s*\d+(?:/\d+)*)*)\s*(?:\(kompleks\))?$")
        .expect("Invalid plot number regex")
});

/// Components of a `voivodeship/county/commune/precinct/plot` location path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlotAddress {
    pub voivodeship: Option<String>,
    pub county: Option<String>,
    pub commune: Option<String>,
    pub precinct: Option<String>,
    pub plot_numbers: Option<String>,
}

impl PlotAddress {
    pub fn parse(location_path: &str) -> Self {
        let segments: Vec<&str> = location_path.split('/').map(str::trim).collect();
        if location_path.trim().is_empty() || segments.len() < 2 {
            return Self::default();
        }

        let mut address = PlotAddress {
            voivodeship: Some(segments[0])
                .filter(|s| !s.is_empty() && s.chars().all(char::is_alphanumeric))
                .map(str::to_string),
            county: extract_region(location_path),
            plot_numbers: PLOT_NUMBERS_RE
                .captures(location_path.trim())
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().trim().to_string()),
            ..Self::default()
        };

        if address.county.is_none() {
            return address;
        }

        let non_empty = |s: &&str| !s.is_empty();
        address.commune = segments.get(2).copied().filter(non_empty).map(str::to_string);
        address.precinct = segments
            .get(3)
            .map(|s| s.split('(').next().unwrap_or("").trim())
            .filter(|s| s.chars().any(char::is_alphabetic))
            .map(str::to_string);

        address
    }
}
