//! Command implementations.
//!
//! Each command returns plain data; printing lives in [`crate::summary`].

use std::path::Path;

use anyhow::{Context, Result, bail};
use fedip_core::WizardEngine;
use fedip_model::{CanonicalFamily, ParsedRole, ReferenceTables, Step, WizardState};
use fedip_standards::{LoadSummary, data_root, load_reference_tables};
use fedip_taxonomy::{RoleOrder, RoleParser, order_roles};
use tracing::info_span;

/// Loads the reference tables from `data_dir`, or the default location.
pub fn load_tables(data_dir: Option<&Path>) -> Result<(ReferenceTables, LoadSummary)> {
    let dir = data_dir.map_or_else(data_root, Path::to_path_buf);
    load_reference_tables(&dir)
        .with_context(|| format!("load reference tables from {}", dir.display()))
}

/// One row of `fedip families`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyOverview {
    pub name: String,
    pub nested: bool,
    pub sub_buckets: usize,
    pub roles: usize,
    pub body: Option<String>,
}

pub fn family_overview(engine: &WizardEngine) -> Vec<FamilyOverview> {
    let tables = engine.tables();
    tables
        .job_families
        .iter()
        .map(|(name, family)| {
            let canonical = engine.canonical_family(name);
            FamilyOverview {
                name: name.clone(),
                nested: family.is_nested(),
                sub_buckets: canonical.map_or(0, CanonicalFamily::len),
                roles: canonical.map_or(0, CanonicalFamily::role_count),
                body: tables.family_body(name).map(str::to_string),
            }
        })
        .collect()
}

/// A family's buckets with each bucket's roles in the requested order.
pub fn family_detail(
    engine: &WizardEngine,
    name: &str,
    order: RoleOrder,
) -> Result<Vec<(String, Vec<String>)>> {
    let Some(family) = engine.canonical_family(name) else {
        bail!(
            "unknown job family '{name}' (known: {})",
            engine.list_families().join(", ")
        );
    };
    Ok(family
        .buckets
        .iter()
        .map(|bucket| {
            (
                bucket.name.clone(),
                order_roles(&bucket.roles, order, engine.tables()),
            )
        })
        .collect())
}

pub fn parse_titles(titles: &[String]) -> Vec<(String, ParsedRole)> {
    let parser = RoleParser::new();
    titles
        .iter()
        .map(|title| (title.clone(), parser.parse(title)))
        .collect()
}

/// The four wizard answers as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RecommendRequest {
    pub category: String,
    pub family: String,
    pub sub_bucket: Option<String>,
    pub role: String,
}

/// Drives the wizard through its steps and returns the completed state.
pub fn recommend(engine: &WizardEngine, request: &RecommendRequest) -> Result<WizardState> {
    let span = info_span!("recommend", family = %request.family, role = %request.role);
    let _guard = span.enter();

    let state = engine.select(&WizardState::initial(), Step::Category, &request.category)?;
    let state = engine.select(&state, Step::Family, &request.family)?;
    let state = match (state.step, request.sub_bucket.as_deref()) {
        (Step::SubBucket, Some(bucket)) => engine.select(&state, Step::SubBucket, bucket)?,
        (Step::SubBucket, None) => bail!(
            "job family '{}' needs --sub-bucket (one of: {})",
            request.family,
            engine.options(&state).join(", ")
        ),
        (_, Some(bucket)) if state.answers.sub_bucket() != Some(bucket) => bail!(
            "job family '{}' only has the sub-bucket '{}'",
            request.family,
            state.answers.sub_bucket().unwrap_or_default()
        ),
        _ => state,
    };
    let state = engine
        .select(&state, Step::Role, &request.role)
        .with_context(|| {
            format!(
                "role not found in '{}' (options: {})",
                state.answers.sub_bucket().unwrap_or_default(),
                engine.options(&state).join(", ")
            )
        })?;
    Ok(state)
}
