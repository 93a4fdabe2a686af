//! Application services built on the domain and ports.

pub mod trigger;

pub use trigger::{PriceThresholdTrigger, TickOutcome};
