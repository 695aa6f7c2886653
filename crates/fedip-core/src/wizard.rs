//! The four-step wizard.
//!
//! Steps: base category, job family, sub-bucket, role. Every transition
//! takes the current [`WizardState`] and returns a new one, so the caller
//! owns the state and the engine holds only the session's tables.
//!
//! Answers always form a prefix of the steps: recording an answer discards
//! everything after it, and a family with a single sub-bucket fills that
//! step in and jumps straight to the role.

use std::collections::BTreeMap;

use fedip_model::{CanonicalFamily, Recommendation, ReferenceTables, Step, WizardState};
use fedip_taxonomy::{canonicalize, order_roles};
use tracing::{debug, info};

use crate::aggregate::RecommendationAggregator;
use crate::error::{Result, WizardError};
use crate::options::WizardOptions;
use crate::prompt::{StepPrompt, advance_label, step_title};

#[derive(Debug, Clone)]
pub struct WizardEngine {
    tables: ReferenceTables,
    /// Canonical shape of every family, computed once per session.
    families: BTreeMap<String, CanonicalFamily>,
    options: WizardOptions,
}

impl WizardEngine {
    pub fn new(tables: ReferenceTables, options: WizardOptions) -> Self {
        let families = tables
            .job_families
            .iter()
            .map(|(name, family)| (name.clone(), canonicalize(family)))
            .collect();
        Self {
            tables,
            families,
            options,
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn aggregator(&self) -> RecommendationAggregator<'_> {
        RecommendationAggregator::new(&self.tables, self.options.policy)
    }

    /// Base categories in table order.
    pub fn list_categories(&self) -> Vec<&str> {
        self.tables.category_names()
    }

    /// Job families in table order.
    pub fn list_families(&self) -> Vec<&str> {
        self.tables.family_names()
    }

    pub fn canonical_family(&self, family: &str) -> Option<&CanonicalFamily> {
        self.families.get(family)
    }

    /// Choices offered at the state's current step.
    pub fn options(&self, state: &WizardState) -> Vec<String> {
        self.options_for(state.step, state)
    }

    fn options_for(&self, step: Step, state: &WizardState) -> Vec<String> {
        let answers = &state.answers;
        match step {
            Step::Category => owned(self.list_categories()),
            Step::Family => owned(self.list_families()),
            Step::SubBucket => answers
                .family()
                .and_then(|family| self.canonical_family(family))
                .map(|family| owned(family.bucket_names()))
                .unwrap_or_default(),
            Step::Role => {
                let (Some(family), Some(bucket)) = (answers.family(), answers.sub_bucket()) else {
                    return Vec::new();
                };
                let roles = self
                    .canonical_family(family)
                    .map(|family| family.roles(bucket))
                    .unwrap_or_default();
                order_roles(roles, self.options.role_order, &self.tables)
            }
        }
    }

    /// Records `answer` for the current step and advances.
    ///
    /// Selecting at the role step computes the result. The state passed in
    /// is never modified; on error the caller keeps it as is.
    pub fn select(&self, state: &WizardState, step: Step, answer: &str) -> Result<WizardState> {
        if state.is_complete() {
            return Err(WizardError::Completed);
        }
        if step != state.step {
            return Err(WizardError::StepMismatch {
                expected: state.step,
                got: step,
            });
        }
        if !self.options_for(step, state).iter().any(|o| o == answer) {
            return Err(WizardError::UnknownOption {
                step,
                answer: answer.to_string(),
            });
        }

        let mut answers = state.answers.clone();
        answers.record(step, answer);
        let dropped = answers.invalidate_after(step);
        if dropped > 0 {
            debug!(%step, dropped, "discarded downstream answers");
        }

        let mut next = WizardState {
            step,
            answers,
            result: None,
        };
        match step {
            Step::Category | Step::SubBucket => {
                next.step = step.next().unwrap_or(step);
            }
            Step::Family => {
                let sole = self
                    .canonical_family(answer)
                    .and_then(CanonicalFamily::sole_bucket);
                if let Some(bucket) = sole {
                    debug!(family = answer, bucket, "single sub-bucket, skipping to role");
                    next.answers.record(Step::SubBucket, bucket);
                    next.step = Step::Role;
                } else {
                    next.step = Step::SubBucket;
                }
            }
            Step::Role => {
                next.result = Some(self.compute_result(&next));
            }
        }
        Ok(next)
    }

    /// The explicit "Next" / "See Result" action.
    ///
    /// Moves forward one step without auto-skipping, or computes the result
    /// at the role step. Rejected when the current step has no answer.
    pub fn next(&self, state: &WizardState) -> Result<WizardState> {
        if state.is_complete() {
            return Err(WizardError::Completed);
        }
        if state.current_answer().is_none() {
            return Err(WizardError::NoSelection { step: state.step });
        }

        let mut next = state.clone();
        match state.step.next() {
            Some(step) => next.step = step,
            None => next.result = Some(self.compute_result(state)),
        }
        Ok(next)
    }

    /// One step back, keeping every answer. No-op at the first step and
    /// once the result has been computed.
    pub fn back(&self, state: &WizardState) -> WizardState {
        if state.is_complete() {
            return state.clone();
        }
        WizardState {
            step: state.step.previous().unwrap_or(state.step),
            ..state.clone()
        }
    }

    pub fn restart(&self) -> WizardState {
        WizardState::initial()
    }

    pub fn current_result<'s>(&self, state: &'s WizardState) -> Option<&'s Recommendation> {
        state.current_result()
    }

    pub fn prompt(&self, state: &WizardState) -> StepPrompt {
        StepPrompt {
            step: state.step,
            title: step_title(state.step),
            options: self.options(state),
            selected: state.current_answer().map(str::to_string),
            advance_label: advance_label(state.step),
            can_go_back: !state.is_complete() && state.step.previous().is_some(),
        }
    }

    fn compute_result(&self, state: &WizardState) -> Recommendation {
        let result = self.aggregator().aggregate(&state.answers);
        info!(
            role = state.answers.role().unwrap_or_default(),
            bodies = %result.bodies_display(),
            fedip_level = %result.fedip_level,
            "recommendation computed"
        );
        result
    }
}

fn owned(items: Vec<&str>) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}
