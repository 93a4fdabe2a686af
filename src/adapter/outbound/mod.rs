//! Outbound adapters: concrete back offices and observers.

pub mod back_office;
pub mod observer;

pub use back_office::PaperBackOffice;
pub use observer::{JsonLinesObserver, LogObserver};
