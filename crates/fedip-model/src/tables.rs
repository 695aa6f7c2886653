//! Externally supplied reference tables.
//!
//! The tables are immutable for the lifetime of a session. Lookups return
//! `Option`; substituting the fallback constants is the aggregator's job.

use std::collections::BTreeMap;

use crate::family::JobFamily;

/// Body recommended when no table yields one.
pub const FALLBACK_PROFESSIONAL_BODY: &str = "FEDIP - General Membership";

/// FEDIP level reported when the role has no mapping.
pub const FALLBACK_FEDIP_LEVEL: &str = "FEDIP Level not determined";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTables {
    /// Base category → body, in presentation order.
    pub base_categories: Vec<(String, String)>,
    /// Family name → family, in presentation order.
    pub job_families: Vec<(String, JobFamily)>,
    /// Role title → FEDIP level.
    pub fedip_levels: BTreeMap<String, String>,
    /// Optional family → body overrides.
    pub family_bodies: BTreeMap<String, String>,
    /// Optional sub-bucket → body overrides.
    pub sub_bucket_bodies: BTreeMap<String, String>,
    /// Optional role → bodies overrides (one role may name several bodies).
    pub role_bodies: BTreeMap<String, Vec<String>>,
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a base category, replacing the body if the category exists.
    #[must_use]
    pub fn with_base_category(mut self, category: &str, body: &str) -> Self {
        match self.base_categories.iter_mut().find(|(c, _)| c == category) {
            Some(entry) => entry.1 = body.to_string(),
            None => self
                .base_categories
                .push((category.to_string(), body.to_string())),
        }
        self
    }

    #[must_use]
    pub fn with_family(mut self, name: &str, family: JobFamily) -> Self {
        match self.job_families.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = family,
            None => self.job_families.push((name.to_string(), family)),
        }
        self
    }

    #[must_use]
    pub fn with_fedip_level(mut self, role: &str, level: &str) -> Self {
        self.fedip_levels
            .insert(role.to_string(), level.to_string());
        self
    }

    #[must_use]
    pub fn with_family_body(mut self, family: &str, body: &str) -> Self {
        self.family_bodies
            .insert(family.to_string(), body.to_string());
        self
    }

    #[must_use]
    pub fn with_sub_bucket_body(mut self, bucket: &str, body: &str) -> Self {
        self.sub_bucket_bodies
            .insert(bucket.to_string(), body.to_string());
        self
    }

    /// Appends a body for a role; repeated calls accumulate.
    #[must_use]
    pub fn with_role_body(mut self, role: &str, body: &str) -> Self {
        let bodies = self.role_bodies.entry(role.to_string()).or_default();
        if !bodies.iter().any(|b| b == body) {
            bodies.push(body.to_string());
        }
        self
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.base_categories.iter().map(|(c, _)| c.as_str()).collect()
    }

    pub fn family_names(&self) -> Vec<&str> {
        self.job_families.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn base_body(&self, category: &str) -> Option<&str> {
        self.base_categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, body)| body.as_str())
    }

    pub fn family(&self, name: &str) -> Option<&JobFamily> {
        self.job_families
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, family)| family)
    }

    pub fn fedip_level(&self, role: &str) -> Option<&str> {
        self.fedip_levels.get(role).map(String::as_str)
    }

    pub fn family_body(&self, family: &str) -> Option<&str> {
        self.family_bodies.get(family).map(String::as_str)
    }

    pub fn sub_bucket_body(&self, bucket: &str) -> Option<&str> {
        self.sub_bucket_bodies.get(bucket).map(String::as_str)
    }

    /// Bodies for a role; empty when the role has no override.
    pub fn role_bodies(&self, role: &str) -> &[String] {
        self.role_bodies
            .get(role)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
