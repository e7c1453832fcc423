use chrono::Utc;
use uuid::Uuid;

/// Object keys for everything the export store writes.
pub struct StorageManager;

impl StorageManager {
    pub fn generate_raw_path(source: &str) -> String {
        let now = Utc::now();
        format!(
            "raw/{}/{}/{}-{}.json",
            Self::sanitize(source),
            now.format("%Y/%m/%d"),
            now.format("%H%M%S"),
            Uuid::new_v4()
        )
    }

    pub fn generate_report_path(source: &str) -> String {
        let now = Utc::now();
        format!(
            "reports/{}/{}/{}-{}.json",
            Self::sanitize(source),
            now.format("%Y/%m/%d"),
            now.format("%H%M%S"),
            Uuid::new_v4()
        )
    }

    pub fn generate_clean_path(source: &str) -> String {
        let date = Utc::now().format("%Y/%m/%d").to_string();
        format!("clean/{}/{}/data.parquet", Self::sanitize(source), date)
    }

    pub fn raw_prefix(source: &str) -> String {
        format!("raw/{}/", Self::sanitize(source))
    }

    /// Keep keys to one path segment of safe characters.
    pub fn sanitize(source: &str) -> String {
        let cleaned: String = source
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();

        if cleaned.is_empty() { "unnamed".to_string() } else { cleaned }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        let raw = StorageManager::generate_raw_path("przetargi 2025");
        assert!(raw.starts_with("raw/przetargi_2025/"));
        assert!(raw.ends_with(".json"));

        let clean = StorageManager::generate_clean_path("przetargi");
        assert!(clean.starts_with("clean/przetargi/"));
        assert!(clean.ends_with("/data.parquet"));

        assert!(StorageManager::generate_report_path("a").starts_with("reports/a/"));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(StorageManager::sanitize("../etc"), "___etc");
        assert_eq!(StorageManager::sanitize("  "), "unnamed");
        assert_eq!(StorageManager::sanitize("rzeszów_04"), "rzeszów_04");
    }
}
