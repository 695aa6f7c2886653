//! Job-family taxonomy parsing.
//!
//! Each family in `job_families.json` is either an array of role titles or
//! an object mapping sub-bucket name to an array of titles. Anything else is
//! a configuration defect and fails the load.

use std::path::Path;

use fedip_model::JobFamily;
use serde_json::Value;

use crate::error::{Result, StandardsError};

/// Parses the taxonomy, keeping families in file order.
pub fn parse_job_families(bytes: &[u8], path: &Path) -> Result<Vec<(String, JobFamily)>> {
    let root: Value = serde_json::from_slice(bytes).map_err(|e| StandardsError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    let Value::Object(families) = root else {
        return Err(StandardsError::InvalidTaxonomy {
            path: path.to_path_buf(),
            family: String::new(),
            message: "taxonomy root must be an object of families".to_string(),
        });
    };

    families
        .into_iter()
        .map(|(name, value)| {
            let family = parse_family(value).map_err(|message| StandardsError::InvalidTaxonomy {
                path: path.to_path_buf(),
                family: name.clone(),
                message,
            })?;
            Ok((name, family))
        })
        .collect()
}

fn parse_family(value: Value) -> std::result::Result<JobFamily, String> {
    match value {
        Value::Array(items) => titles(items).map(JobFamily::Flat),
        Value::Object(buckets) => buckets
            .into_iter()
            .map(|(bucket, roles)| match roles {
                Value::Array(items) => titles(items)
                    .map(|roles| (bucket.clone(), roles))
                    .map_err(|message| format!("bucket '{bucket}': {message}")),
                other => Err(format!(
                    "bucket '{bucket}' must be a list of titles, got {}",
                    kind_of(&other)
                )),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(JobFamily::Nested),
        other => Err(format!(
            "must be a list of titles or a map of sub-buckets, got {}",
            kind_of(&other)
        )),
    }
}

fn titles(items: Vec<Value>) -> std::result::Result<Vec<String>, String> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(title) => Ok(title),
            other => Err(format!("role titles must be strings, got {}", kind_of(&other))),
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
