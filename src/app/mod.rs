//! Composition: builds triggers from configuration and feeds them ticks.

pub mod builder;
pub mod runner;

pub use builder::{build_back_office, build_triggers};
pub use runner::{ReplaySummary, Runner};
