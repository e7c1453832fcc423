pub mod config;
pub mod engine;
pub mod filters;
pub mod presets;

pub use config::{FilterConfig, split_list};
pub use engine::{FilterEngine, FilterOutcome, FilterStage, StageCount};
