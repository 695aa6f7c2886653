use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use fedip_model::{CanonicalFamily, ReferenceTables};
use fedip_taxonomy::canonicalize;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, StandardsError};
use crate::families::parse_job_families;
use crate::hash::sha256_hex;
use crate::manifest::{MANIFEST_FILE, ManifestFile, TableRole, load_manifest, validate_manifest};
use crate::paths::data_root;
use crate::tables::{
    BASE_CATEGORY_COLUMNS, FAMILY_BODY_COLUMNS, FEDIP_LEVEL_COLUMNS, ROLE_BODY_COLUMNS,
    SUB_BUCKET_BODY_COLUMNS, parse_pairs_csv,
};

/// Counts reported after a successful load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub data_dir: PathBuf,
    pub file_count: usize,
    /// Files whose manifest entry carried a sha256 that matched.
    pub verified_count: usize,
    pub category_count: usize,
    pub family_count: usize,
    pub nested_family_count: usize,
    pub role_title_count: usize,
    pub fedip_level_count: usize,
    pub override_count: usize,
    /// Override keys that name no family, sub-bucket or role.
    pub dangling_overrides: Vec<DanglingOverride>,
}

/// An override row whose key is absent from the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "table", content = "key", rename_all = "snake_case")]
pub enum DanglingOverride {
    Family(String),
    SubBucket(String),
    Role(String),
}

/// Loads the tables from the directory named by [`data_root`].
pub fn load_default_reference_tables() -> Result<(ReferenceTables, LoadSummary)> {
    load_reference_tables(&data_root())
}

/// Reads, verifies and parses every table listed in the directory's manifest.
pub fn load_reference_tables(data_dir: &Path) -> Result<(ReferenceTables, LoadSummary)> {
    let manifest = load_manifest(&data_dir.join(MANIFEST_FILE))?;
    validate_manifest(&manifest)?;

    let mut files = manifest.files.clone();
    files.sort_by_key(|f| f.role);

    let mut tables = ReferenceTables::new();
    let mut verified_count = 0;
    for file in &files {
        let full_path = data_dir.join(&file.path);
        let bytes = read_file(&full_path)?;
        if verify_file(&full_path, &bytes, file)? {
            verified_count += 1;
        }
        debug!(role = file.role.as_str(), path = %full_path.display(), "loading table");
        apply_table(&mut tables, file.role, &bytes, &full_path)?;
    }

    let dangling = dangling_overrides(&tables);
    for entry in &dangling {
        match entry {
            DanglingOverride::Family(family) => {
                warn!(%family, "family body override names an unknown family");
            }
            DanglingOverride::SubBucket(bucket) => {
                warn!(%bucket, "sub-bucket body override names an unknown sub-bucket");
            }
            DanglingOverride::Role(role) => {
                warn!(%role, "role body override names an unknown role");
            }
        }
    }

    let summary = LoadSummary {
        data_dir: data_dir.to_path_buf(),
        file_count: files.len(),
        verified_count,
        category_count: tables.base_categories.len(),
        family_count: tables.job_families.len(),
        nested_family_count: tables
            .job_families
            .iter()
            .filter(|(_, family)| family.is_nested())
            .count(),
        role_title_count: tables
            .job_families
            .iter()
            .map(|(_, family)| family.title_count())
            .sum(),
        fedip_level_count: tables.fedip_levels.len(),
        override_count: tables.family_bodies.len()
            + tables.sub_bucket_bodies.len()
            + tables.role_bodies.values().map(Vec::len).sum::<usize>(),
        dangling_overrides: dangling,
    };
    Ok((tables, summary))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            StandardsError::io(path, e)
        }
    })
}

/// Checks the digest when the manifest lists one; returns whether it did.
fn verify_file(path: &Path, bytes: &[u8], file: &ManifestFile) -> Result<bool> {
    let Some(expected) = &file.sha256 else {
        return Ok(false);
    };
    let actual = sha256_hex(bytes);
    let expected = expected.to_ascii_lowercase();
    if actual != expected {
        return Err(StandardsError::Sha256Mismatch {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(true)
}

fn apply_table(
    tables: &mut ReferenceTables,
    role: TableRole,
    bytes: &[u8],
    path: &Path,
) -> Result<()> {
    match role {
        TableRole::JobFamilies => {
            tables.job_families = parse_job_families(bytes, path)?;
        }
        TableRole::BaseCategories => {
            for (category, body) in parse_pairs_csv(bytes, path, BASE_CATEGORY_COLUMNS)? {
                if tables.base_body(&category).is_some() {
                    warn!(%category, "duplicate base category, keeping the last body");
                }
                *tables = std::mem::take(tables).with_base_category(&category, &body);
            }
        }
        TableRole::FedipLevels => {
            for (title, level) in parse_pairs_csv(bytes, path, FEDIP_LEVEL_COLUMNS)? {
                if let Some(previous) = tables.fedip_levels.insert(title.clone(), level) {
                    warn!(
                        role = %title,
                        %previous,
                        "duplicate FEDIP level mapping, keeping the last"
                    );
                }
            }
        }
        TableRole::FamilyBodies => {
            tables
                .family_bodies
                .extend(parse_pairs_csv(bytes, path, FAMILY_BODY_COLUMNS)?);
        }
        TableRole::SubBucketBodies => {
            tables
                .sub_bucket_bodies
                .extend(parse_pairs_csv(bytes, path, SUB_BUCKET_BODY_COLUMNS)?);
        }
        TableRole::RoleBodies => {
            // Repeated rows for one role accumulate into a list of bodies.
            for (title, body) in parse_pairs_csv(bytes, path, ROLE_BODY_COLUMNS)? {
                *tables = std::mem::take(tables).with_role_body(&title, &body);
            }
        }
    }
    Ok(())
}

/// Override keys that name nothing in the taxonomy.
///
/// Such rows are harmless but usually typos. Sub-bucket keys are checked
/// against the grouped bucket names of every family, role keys against every
/// title.
pub fn dangling_overrides(tables: &ReferenceTables) -> Vec<DanglingOverride> {
    let families: BTreeSet<&str> = tables.family_names().into_iter().collect();
    let canonical: Vec<CanonicalFamily> = tables
        .job_families
        .iter()
        .map(|(_, family)| canonicalize(family))
        .collect();
    let titles: BTreeSet<&str> = canonical
        .iter()
        .flat_map(|family| &family.buckets)
        .flat_map(|bucket| &bucket.roles)
        .map(String::as_str)
        .collect();

    let mut dangling: Vec<DanglingOverride> = tables
        .family_bodies
        .keys()
        .filter(|family| !families.contains(family.as_str()))
        .map(|family| DanglingOverride::Family(family.clone()))
        .collect();
    dangling.extend(
        tables
            .sub_bucket_bodies
            .keys()
            .filter(|bucket| !canonical.iter().any(|family| family.contains_bucket(bucket)))
            .map(|bucket| DanglingOverride::SubBucket(bucket.clone())),
    );
    dangling.extend(
        tables
            .role_bodies
            .keys()
            .filter(|role| !titles.contains(role.as_str()))
            .map(|role| DanglingOverride::Role(role.clone())),
    );
    dangling
}

#[cfg(test)]
mod tests {
    use fedip_model::JobFamily;

    use super::*;

    #[test]
    fn reports_keys_missing_from_the_taxonomy() {
        let tables = ReferenceTables::new()
            .with_family(
                "Data",
                JobFamily::Flat(vec![
                    "Data Analyst".to_string(),
                    "Senior Data Analyst".to_string(),
                ]),
            )
            .with_family(
                "Clinical",
                JobFamily::Nested(vec![(
                    "Safety".to_string(),
                    vec!["Clinical Safety Officer".to_string()],
                )]),
            )
            .with_family_body("Clinical", "Faculty of Clinical Informatics")
            .with_family_body("Clinicial", "Faculty of Clinical Informatics")
            .with_sub_bucket_body("Safety", "BCS")
            .with_sub_bucket_body("Data Analyst", "BCS")
            .with_sub_bucket_body("Nursing", "Royal College of Nursing")
            .with_role_body("Senior Data Analyst", "BCS")
            .with_role_body("Data Astronaut", "BCS");

        assert_eq!(
            dangling_overrides(&tables),
            vec![
                DanglingOverride::Family("Clinicial".to_string()),
                DanglingOverride::SubBucket("Nursing".to_string()),
                DanglingOverride::Role("Data Astronaut".to_string()),
            ]
        );
    }

    #[test]
    fn consistent_tables_have_no_dangling_keys() {
        let tables = ReferenceTables::new()
            .with_family("Data", JobFamily::Flat(vec!["Data Analyst".to_string()]))
            .with_family_body("Data", "BCS")
            .with_sub_bucket_body("Data Analyst", "BCS")
            .with_role_body("Data Analyst", "BCS");
        assert!(dangling_overrides(&tables).is_empty());
    }
}
