pub mod column_layout;
pub mod data_models;

pub use column_layout::*;
pub use data_models::*;
