//! Data directory path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the data directory.
pub const DATA_DIR_ENV_VAR: &str = "FEDIP_DATA_DIR";

/// Get the reference data directory.
///
/// Resolution order:
/// 1. `FEDIP_DATA_DIR` environment variable
/// 2. `data/` directory relative to workspace root
pub fn data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}
