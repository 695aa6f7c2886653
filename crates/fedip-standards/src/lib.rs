//! Reference-table loading.
//!
//! The recommender's tables are supplied as a data directory described by a
//! `manifest.toml`:
//!
//! ```text
//! data/
//! ├── manifest.toml
//! ├── base_categories.csv    # "Category","Professional Body"
//! ├── job_families.json      # { family: [titles] | { bucket: [titles] } }
//! ├── fedip_levels.csv       # "Role","FEDIP Level"
//! ├── family_bodies.csv      # optional
//! ├── sub_bucket_bodies.csv  # optional
//! └── role_bodies.csv        # optional, one row per (role, body)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let (tables, summary) = fedip_standards::load_reference_tables(&fedip_standards::data_root())?;
//! println!("{} families", summary.family_count);
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod families;
pub mod hash;
pub mod loader;
pub mod manifest;
pub mod paths;
pub mod tables;

pub use error::{Result, StandardsError};
pub use families::parse_job_families;
pub use loader::{
    DanglingOverride, LoadSummary, dangling_overrides, load_default_reference_tables,
    load_reference_tables,
};
pub use manifest::{Manifest, ManifestFile, TableRole};
pub use paths::{DATA_DIR_ENV_VAR, data_root};
