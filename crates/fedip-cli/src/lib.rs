//! CLI library components for the FEDIP recommender.

pub mod commands;
pub mod logging;
pub mod summary;
