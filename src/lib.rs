//! Land auction notices: turns raw notice table rows into typed records,
//! filters them and summarizes the result.

pub mod error;
pub mod filter;
pub mod geoportal;
pub mod logging;
pub mod models;
pub mod processor;
pub mod settings;
pub mod stats;
pub mod storage;

pub use error::{AuctionError, Result};
pub use filter::{FilterConfig, FilterEngine};
pub use models::{AuctionRecord, RawRow};
pub use processor::{RecordBatchProcessor, parse_raw_batch};
pub use stats::{QueryReport, Statistics, calculate_stats};
