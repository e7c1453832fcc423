pub mod dataframe;
pub mod local_storage;
pub mod storage_manager;

pub use dataframe::*;
pub use local_storage::{BatchOrigin, ExportPlan, LocalStorage};
pub use storage_manager::StorageManager;
