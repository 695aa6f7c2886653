//! Role-title classification and job-family grouping.
//!
//! - [`parser`]: splits a title into level and base using ordered rules
//! - [`rank`]: display rank of a level token
//! - [`collate`]: locale-style string ordering used for every sort here
//! - [`grouping`]: builds a [`CanonicalFamily`](fedip_model::CanonicalFamily)
//!   from a flat or pre-nested family
//! - [`seniority`]: optional presentation-time ordering by FEDIP level

#![deny(unsafe_code)]

pub mod collate;
pub mod grouping;
pub mod parser;
pub mod rank;
pub mod seniority;

pub use collate::locale_cmp;
pub use grouping::canonicalize;
pub use parser::{RoleParser, parse_role, strip_management_suffix};
pub use rank::{level_rank, rank_token};
pub use seniority::{
    FEDIP_SENIORITY, RoleOrder, fedip_seniority, order_roles, sort_by_fedip_seniority,
};
