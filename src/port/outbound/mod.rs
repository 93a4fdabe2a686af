//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe what a trigger depends on: a back office to
//! place orders with, and observers to report outcomes to.

pub mod executor;
pub mod notifier;
