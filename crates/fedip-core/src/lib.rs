//! Wizard engine and recommendation aggregation.
//!
//! [`WizardEngine`] owns the reference tables for a session and turns
//! [`WizardState`](fedip_model::WizardState) values into new ones:
//!
//! ```rust,ignore
//! let engine = WizardEngine::new(tables, WizardOptions::default());
//! let state = engine.select(&WizardState::initial(), Step::Category, "I work in data")?;
//! let state = engine.select(&state, Step::Family, "Software Development")?;
//! assert_eq!(state.step, Step::Role); // single bucket, sub-bucket step skipped
//! ```

#![deny(unsafe_code)]

pub mod aggregate;
pub mod error;
pub mod options;
pub mod prompt;
pub mod wizard;

pub use aggregate::{AggregationPolicy, RecommendationAggregator};
pub use error::{Result, WizardError};
pub use options::WizardOptions;
pub use prompt::{StepPrompt, advance_label, step_title};
pub use wizard::WizardEngine;
