//! Wizard transition errors.
//!
//! None of these are fatal: the caller keeps the state it passed in.

use fedip_model::Step;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// "Next" was pressed before choosing anything at this step.
    #[error("please select an option first (step {step})")]
    NoSelection { step: Step },

    #[error("selection is for step {got} but the wizard is at step {expected}")]
    StepMismatch { expected: Step, got: Step },

    #[error("'{answer}' is not an option at step {step}")]
    UnknownOption { step: Step, answer: String },

    #[error("the wizard is complete; restart to answer again")]
    Completed,
}

pub type Result<T> = std::result::Result<T, WizardError>;
