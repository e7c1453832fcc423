use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuctionError {
    #[error("Raw batch is structurally unusable: {0}")]
    InvalidBatch(String),

    #[error("JSON (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, AuctionError>;
