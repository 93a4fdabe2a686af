//! Inbound (driving) ports consumed by inbound adapters.
//!
//! A market-data source drives a trigger through [`PriceConsumer`]; wiring
//! code attaches observers through [`TradingComponent`].

mod component;

pub use component::{PriceConsumer, TradingComponent};
