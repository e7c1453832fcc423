use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::{AuctionRecord, RawRow};
use crate::processor::record_builder::parse_raw_batch;
use crate::stats::QueryReport;
use crate::storage::dataframe::records_to_parquet;
use crate::storage::storage_manager::StorageManager;

/// Where a query's batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOrigin {
    /// Read from an input file.
    Input,
    /// Loaded back from the store.
    Stored,
}

/// What to write for one query besides its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportPlan {
    pub raw: bool,
    pub parquet: bool,
}

impl ExportPlan {
    /// Stored batches are never written back as raw batches.
    pub fn new(store_raw: bool, write_parquet: bool, origin: BatchOrigin) -> Self {
        Self {
            raw: store_raw && origin == BatchOrigin::Input,
            parquet: write_parquet,
        }
    }
}

/// Filesystem store for raw batches, reports and Parquet exports.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).with_context(|| {
                format!("Failed to create storage directory: {}", self.root.display())
            })?;
            info!("Created storage directory: {}", self.root.display());
        }
        Ok(())
    }

    /// Write the report plus whatever the plan asks for. Returns the keys
    /// written.
    pub fn export(
        &self,
        source: &str,
        rows: &[RawRow],
        report: &QueryReport,
        plan: ExportPlan,
    ) -> Result<Vec<String>> {
        self.ensure_root()?;

        let mut keys = Vec::new();
        if plan.raw {
            keys.push(self.store_raw_rows(source, rows)?);
        }
        keys.push(self.store_report(source, report)?);
        if plan.parquet {
            if report.records.is_empty() {
                warn!("No matching records, skipping Parquet export");
            } else {
                keys.push(self.store_parquet(source, &report.records)?);
            }
        }
        Ok(keys)
    }

    pub fn store_raw_rows(&self, source: &str, rows: &[RawRow]) -> Result<String> {
        let key = StorageManager::generate_raw_path(source);
        let data = serde_json::to_vec(rows)?;
        self.put_object(&key, &data)?;
        info!("Stored raw batch ({} rows): {}", rows.len(), key);
        Ok(key)
    }

    pub fn store_report(&self, source: &str, report: &QueryReport) -> Result<String> {
        let key = StorageManager::generate_report_path(source);
        let data = serde_json::to_vec_pretty(report)?;
        self.put_object(&key, &data)?;
        info!("Stored report ({} records): {}", report.filtered_records, key);
        Ok(key)
    }

    pub fn store_parquet(&self, source: &str, records: &[AuctionRecord]) -> Result<String> {
        let key = StorageManager::generate_clean_path(source);
        let data = records_to_parquet(records)?;
        self.put_object(&key, &data)?;
        info!("Stored Parquet file ({} records): {}", records.len(), key);
        Ok(key)
    }

    pub fn get_object(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.root.join(key);
        fs::read(&path).with_context(|| format!("Failed to read object: {}", path.display()))
    }

    /// Raw batch keys of a source, most recent first.
    pub fn list_raw_files(&self, source: &str) -> Result<Vec<String>> {
        let prefix = StorageManager::raw_prefix(source);
        let dir = self.root.join(&prefix);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut raw_files = Vec::new();
        collect_files(&dir, &mut raw_files)?;

        let mut keys: Vec<String> = raw_files
            .into_iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| {
                path.strip_prefix(&self.root)
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();

        keys.sort_by(|a, b| b.cmp(a));
        Ok(keys)
    }

    pub fn load_latest_raw_rows(&self, source: &str) -> Result<Vec<RawRow>> {
        let latest = self
            .list_raw_files(source)?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No raw batches found for source: {}", source))?;

        info!("Loading raw batch from: {}", latest);
        let bytes = self.get_object(&latest)?;
        let json = String::from_utf8(bytes)
            .map_err(|e| anyhow!("Failed to parse raw batch as UTF-8: {}", e))?;

        Ok(parse_raw_batch(&json)?)
    }

    fn put_object(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, data).with_context(|| format!("Failed to write object: {}", path.display()))
    }
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
