//! File locations for input data and dashboard state

/// Where the loaders look for input data by default
pub struct DataPersistenceConfig {
    /// Metadata index (one row per test, all sites)
    pub metadata_path: &'static str,
    /// Directory holding the detailed per-test sensor logs
    pub log_directory: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub data: DataPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    data: DataPersistenceConfig {
        metadata_path: "metadata.csv",
        log_directory: "data_sample",
    },
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
};
