//! Recommendation aggregation.
//!
//! Under the union policy bodies are collected from every table that knows
//! one of the answers (role, sub-bucket, family, base category) and
//! de-duplicated. The base-category-only policy consults the base table
//! alone. Either way an empty result falls back to general membership, and
//! the FEDIP level is a single lookup on the chosen role.

use std::collections::BTreeSet;

use fedip_model::{
    Answers, FALLBACK_FEDIP_LEVEL, FALLBACK_PROFESSIONAL_BODY, Recommendation, ReferenceTables,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which sources contribute professional bodies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationPolicy {
    /// Role, sub-bucket, family and base-category bodies, de-duplicated.
    #[default]
    Union,
    /// The base category's body only.
    BaseCategoryOnly,
}

impl AggregationPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::BaseCategoryOnly => "base_category_only",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendationAggregator<'a> {
    tables: &'a ReferenceTables,
    policy: AggregationPolicy,
}

impl<'a> RecommendationAggregator<'a> {
    pub fn new(tables: &'a ReferenceTables, policy: AggregationPolicy) -> Self {
        Self { tables, policy }
    }

    /// Computes the recommendation for a set of answers.
    ///
    /// Missing answers skip their lookup. Never fails: absent mappings are
    /// replaced by [`FALLBACK_PROFESSIONAL_BODY`] and [`FALLBACK_FEDIP_LEVEL`].
    pub fn aggregate(&self, answers: &Answers) -> Recommendation {
        let mut bodies = match self.policy {
            AggregationPolicy::Union => self.union_bodies(answers),
            AggregationPolicy::BaseCategoryOnly => self.base_body(answers).into_iter().collect(),
        };
        if bodies.is_empty() {
            bodies.insert(FALLBACK_PROFESSIONAL_BODY.to_string());
        }

        let fedip_level = answers
            .role()
            .and_then(|role| self.tables.fedip_level(role))
            .unwrap_or(FALLBACK_FEDIP_LEVEL)
            .to_string();

        debug!(
            policy = self.policy.as_str(),
            bodies = bodies.len(),
            %fedip_level,
            "aggregated recommendation"
        );
        Recommendation {
            professional_body: bodies,
            fedip_level,
        }
    }

    fn union_bodies(&self, answers: &Answers) -> BTreeSet<String> {
        let mut bodies = BTreeSet::new();
        if let Some(role) = answers.role() {
            bodies.extend(self.tables.role_bodies(role).iter().cloned());
        }
        if let Some(body) = answers
            .sub_bucket()
            .and_then(|bucket| self.tables.sub_bucket_body(bucket))
        {
            bodies.insert(body.to_string());
        }
        if let Some(body) = answers
            .family()
            .and_then(|family| self.tables.family_body(family))
        {
            bodies.insert(body.to_string());
        }
        bodies.extend(self.base_body(answers));
        bodies
    }

    fn base_body(&self, answers: &Answers) -> Option<String> {
        answers
            .category()
            .and_then(|category| self.tables.base_body(category))
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use fedip_model::Step;

    use super::*;

    fn tables() -> ReferenceTables {
        ReferenceTables::new()
            .with_base_category("Clinician", "Faculty of Clinical Informatics")
            .with_family_body("Clinical Informatics", "Faculty of Clinical Informatics")
            .with_sub_bucket_body("Nursing", "Royal College of Nursing")
            .with_role_body("Chief Nursing Information Officer", "BCS")
            .with_fedip_level("Chief Nursing Information Officer", "Leading Practitioner")
    }

    fn answers() -> Answers {
        Answers::new()
            .with(Step::Category, "Clinician")
            .with(Step::Family, "Clinical Informatics")
            .with(Step::SubBucket, "Nursing")
            .with(Step::Role, "Chief Nursing Information Officer")
    }

    #[test]
    fn union_collects_every_source() {
        let tables = tables();
        let result = RecommendationAggregator::new(&tables, AggregationPolicy::Union)
            .aggregate(&answers());

        assert_eq!(
            result.professional_body.iter().collect::<Vec<_>>(),
            vec!["BCS", "Faculty of Clinical Informatics", "Royal College of Nursing"]
        );
        assert_eq!(result.fedip_level, "Leading Practitioner");
    }

    #[test]
    fn base_only_ignores_overrides() {
        let tables = tables();
        let result = RecommendationAggregator::new(&tables, AggregationPolicy::BaseCategoryOnly)
            .aggregate(&answers());

        assert_eq!(
            result.professional_body.iter().collect::<Vec<_>>(),
            vec!["Faculty of Clinical Informatics"]
        );
        assert_eq!(result.fedip_level, "Leading Practitioner");
    }

    #[test]
    fn missing_answers_skip_lookups() {
        let tables = tables();
        let answers = Answers::new().with(Step::Family, "Clinical Informatics");
        let result =
            RecommendationAggregator::new(&tables, AggregationPolicy::Union).aggregate(&answers);

        assert_eq!(result.bodies_display(), "Faculty of Clinical Informatics");
        assert_eq!(result.fedip_level, FALLBACK_FEDIP_LEVEL);
    }
}
