//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`executor`] — [`ScriptedExecutor`](executor::ScriptedExecutor), a back
//!   office that records calls and answers with a fixed result.
//! - [`observer`] — [`RecordingObserver`](observer::RecordingObserver), which
//!   collects notices in delivery order.

pub mod executor;
pub mod observer;
