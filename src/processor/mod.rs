pub mod field_normalizer;
pub mod location;
pub mod record_builder;

pub use field_normalizer::*;
pub use location::*;
pub use record_builder::*;
