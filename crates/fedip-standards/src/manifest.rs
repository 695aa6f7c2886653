use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StandardsError};

pub const MANIFEST_FILE: &str = "manifest.toml";
pub const MANIFEST_SCHEMA: &str = "fedip.reference-manifest";
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub role: TableRole,
    pub path: String,
    pub kind: FileKind,
    #[serde(default)]
    pub sha256: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Which reference table a manifest entry supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableRole {
    BaseCategories,
    JobFamilies,
    FedipLevels,
    FamilyBodies,
    SubBucketBodies,
    RoleBodies,
}

impl TableRole {
    pub const REQUIRED: [TableRole; 3] = [
        TableRole::BaseCategories,
        TableRole::JobFamilies,
        TableRole::FedipLevels,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BaseCategories => "base_categories",
            Self::JobFamilies => "job_families",
            Self::FedipLevels => "fedip_levels",
            Self::FamilyBodies => "family_bodies",
            Self::SubBucketBodies => "sub_bucket_bodies",
            Self::RoleBodies => "role_bodies",
        }
    }

    /// File kind the role must be supplied as.
    pub fn expected_kind(self) -> FileKind {
        match self {
            Self::JobFamilies => FileKind::Json,
            _ => FileKind::Csv,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Csv,
    Json,
}

pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn validate_manifest(manifest: &Manifest) -> Result<()> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<TableRole> = BTreeSet::new();
    for file in &manifest.files {
        if !roles.insert(file.role) {
            return Err(StandardsError::DuplicateRole {
                role: file.role.as_str().to_string(),
            });
        }
        if file.kind != file.role.expected_kind() {
            return Err(StandardsError::InvalidManifest {
                message: format!(
                    "{} must be supplied as {:?}, got {:?} ({})",
                    file.role.as_str(),
                    file.role.expected_kind(),
                    file.kind,
                    file.path
                ),
            });
        }
        if let Some(sha) = &file.sha256 {
            validate_sha(sha, &file.path)?;
        }
        validate_path(&file.path)?;
    }

    for role in TableRole::REQUIRED {
        if !roles.contains(&role) {
            return Err(StandardsError::MissingRole {
                role: role.as_str().to_string(),
            });
        }
    }

    Ok(())
}

fn validate_sha(sha: &str, path: &str) -> Result<()> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidSha256 {
            path: PathBuf::from(path),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<PathBuf> {
    if path.contains('\\') {
        return Err(StandardsError::InvalidPath {
            path: PathBuf::from(path),
            message: "manifest path must use '/' separators".to_string(),
        });
    }

    let p = PathBuf::from(path);
    if p.is_absolute() {
        return Err(StandardsError::InvalidPath {
            path: p,
            message: "manifest path must be relative".to_string(),
        });
    }

    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(StandardsError::InvalidPath {
            path: p,
            message: "manifest path must not traverse out of the data directory".to_string(),
        });
    }

    Ok(p)
}
