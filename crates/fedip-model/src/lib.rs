//! Data model for the FEDIP membership recommender.
//!
//! Everything here is plain data: the level vocabulary, parsed roles, job
//! families in their supplied and canonical shapes, the wizard state, the
//! recommendation, and the externally supplied reference tables. Behaviour
//! lives in `fedip-taxonomy` and `fedip-core`.

#![deny(unsafe_code)]

pub mod error;
pub mod family;
pub mod level;
pub mod role;
pub mod tables;
pub mod wizard;

pub use error::{ModelError, Result};
pub use family::{CanonicalFamily, JobFamily, SubBucket};
pub use level::Level;
pub use role::ParsedRole;
pub use tables::{FALLBACK_FEDIP_LEVEL, FALLBACK_PROFESSIONAL_BODY, ReferenceTables};
pub use wizard::{Answers, Recommendation, Step, WizardState};
