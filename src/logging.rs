use tracing_subscriber::EnvFilter;

/// Console logging on stderr, leaving stdout to reports. `RUST_LOG` wins
/// over the configured level.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("auction_notices={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
