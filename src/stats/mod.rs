pub mod report;
pub mod statistics;

pub use report::*;
pub use statistics::*;
