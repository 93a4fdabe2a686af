//! Observer adapters for trigger notices.

mod json;
mod log;

pub use json::JsonLinesObserver;
pub use log::LogObserver;
