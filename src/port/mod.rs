//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points of a trigger:
//!
//! ```text
//!   market data ──► PriceConsumer ──► [ trigger ] ──► OrderExecutor ──► back office
//!                                         │
//!                                         └──► ObserverRegistry ──► observers
//! ```
//!
//! # Available Ports
//!
//! - [`PriceConsumer`], [`TradingComponent`] - Driving side
//! - [`OrderExecutor`] - Order placement
//! - [`Observer`], [`ObserverRegistry`] - Outcome notifications

pub mod inbound;
pub mod outbound;

pub use inbound::{PriceConsumer, TradingComponent};
pub use outbound::executor::OrderExecutor;
pub use outbound::notifier::{NullObserver, Observer, ObserverRegistry, SubscriptionId};
