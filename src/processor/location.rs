use regex::Regex;
use std::sync::LazyLock;

/// Top-level region every location path in the notices starts from.
pub const REGION_ANCHOR: &str = "podkarpackie";

static REGION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}/\s*(\w+(?:[-\s]+\w+)*)", REGION_ANCHOR))
        .expect("Invalid region regex")
});

/// County ("powiat") token of a location path such as
/// `podkarpackie/rzeszowski/Trzebownisko/Trzebownica/123`.
///
/// Returns `None` for an empty path or a path without the region anchor.
pub fn extract_region(location_path: &str) -> Option<String> {
    if location_path.is_empty() {
        return None;
    }

    REGION_RE
        .captures(location_path)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|region| !region.is_empty())
}
