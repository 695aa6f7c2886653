//! Wizard state values.
//!
//! Every transition in `fedip-core` takes a `&WizardState` and returns a new
//! one; nothing here is mutated behind the caller's back.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One question of the wizard.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Base category ("what best describes you").
    #[default]
    Category,
    Family,
    /// Sub-bucket within the family; skipped when the family has only one.
    SubBucket,
    Role,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Category, Step::Family, Step::SubBucket, Step::Role];

    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Category => Some(Self::Family),
            Self::Family => Some(Self::SubBucket),
            Self::SubBucket => Some(Self::Role),
            Self::Role => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Category => None,
            Self::Family => Some(Self::Category),
            Self::SubBucket => Some(Self::Family),
            Self::Role => Some(Self::SubBucket),
        }
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::Role
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Family => "family",
            Self::SubBucket => "sub-bucket",
            Self::Role => "role",
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(ModelError::InvalidStep(value))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.label())
    }
}

/// Answers recorded so far, keyed by step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    by_step: BTreeMap<Step, String>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, step: Step) -> Option<&str> {
        self.by_step.get(&step).map(String::as_str)
    }

    pub fn contains(&self, step: Step) -> bool {
        self.by_step.contains_key(&step)
    }

    /// Stores an answer, replacing any previous answer for the step.
    pub fn record(&mut self, step: Step, answer: impl Into<String>) {
        self.by_step.insert(step, answer.into());
    }

    /// Builder form of [`Answers::record`].
    #[must_use]
    pub fn with(mut self, step: Step, answer: impl Into<String>) -> Self {
        self.record(step, answer);
        self
    }

    /// Removes every answer recorded after `step`, returning how many went.
    pub fn invalidate_after(&mut self, step: Step) -> usize {
        let before = self.by_step.len();
        self.by_step.retain(|recorded, _| *recorded <= step);
        before - self.by_step.len()
    }

    pub fn category(&self) -> Option<&str> {
        self.get(Step::Category)
    }

    pub fn family(&self) -> Option<&str> {
        self.get(Step::Family)
    }

    pub fn sub_bucket(&self) -> Option<&str> {
        self.get(Step::SubBucket)
    }

    pub fn role(&self) -> Option<&str> {
        self.get(Step::Role)
    }

    pub fn len(&self) -> usize {
        self.by_step.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_step.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Step, &str)> {
        self.by_step.iter().map(|(step, answer)| (*step, answer.as_str()))
    }
}

/// The recommended affiliation and tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// De-duplicated professional bodies; never empty.
    pub professional_body: BTreeSet<String>,
    pub fedip_level: String,
}

impl Recommendation {
    /// Separator for single-line display. Body names may contain commas.
    pub const BODY_SEPARATOR: &'static str = "; ";

    /// Bodies joined with [`Self::BODY_SEPARATOR`].
    pub fn bodies_display(&self) -> String {
        self.professional_body
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(Self::BODY_SEPARATOR)
    }
}

/// Full wizard state: current step, answers, and the result once computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: Step,
    pub answers: Answers,
    pub result: Option<Recommendation>,
}

impl WizardState {
    /// Step 0, no answers, no result.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    pub fn current_result(&self) -> Option<&Recommendation> {
        self.result.as_ref()
    }

    /// The answer recorded for the current step, if any.
    pub fn current_answer(&self) -> Option<&str> {
        self.answers.get(self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_after_drops_downstream_only() {
        let mut answers = Answers::new()
            .with(Step::Category, "Student")
            .with(Step::Family, "Data")
            .with(Step::SubBucket, "Data Analyst")
            .with(Step::Role, "Senior Data Analyst");

        assert_eq!(answers.invalidate_after(Step::Family), 2);
        assert_eq!(answers.family(), Some("Data"));
        assert!(!answers.contains(Step::SubBucket));
        assert!(!answers.contains(Step::Role));
        assert_eq!(answers.invalidate_after(Step::Role), 0);
    }

    #[test]
    fn step_conversions() {
        assert_eq!(Step::try_from(2).unwrap(), Step::SubBucket);
        assert_eq!(Step::try_from(4), Err(ModelError::InvalidStep(4)));
        assert_eq!(Step::Category.previous(), None);
        assert_eq!(Step::Role.next(), None);
        assert_eq!(Step::Family.next(), Some(Step::SubBucket));
    }
}
