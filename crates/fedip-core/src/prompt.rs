//! What a presentation layer needs to render one wizard step.

use fedip_model::Step;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepPrompt {
    pub step: Step,
    pub title: &'static str,
    /// Choices in presentation order.
    pub options: Vec<String>,
    /// The answer currently recorded for this step, highlighted when shown.
    pub selected: Option<String>,
    pub advance_label: &'static str,
    pub can_go_back: bool,
}

pub fn step_title(step: Step) -> &'static str {
    match step {
        Step::Category => "What Best Describes You?",
        Step::Family => "Which job family are you in?",
        Step::SubBucket => "Select your role category",
        Step::Role => "Select your specific role",
    }
}

/// Label of the explicit advance action.
pub fn advance_label(step: Step) -> &'static str {
    if step.is_last() { "See Result" } else { "Next" }
}
