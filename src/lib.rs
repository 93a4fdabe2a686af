//! Pricebot - price-threshold purchase triggers.
//!
//! A trigger watches the price of one instrument. When a tick arrives
//! strictly below its threshold, it asks a back office to buy a fixed
//! quantity at that price and reports the outcome to its observers.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Instruments, prices, ticks and outcome notices
//! - [`port`] - Traits at the seams: [`port::OrderExecutor`] for the back
//!   office, [`port::Observer`] for notices, [`port::PriceConsumer`] for ticks
//! - [`application`] - [`PriceThresholdTrigger`](application::PriceThresholdTrigger)
//! - [`adapter`] - Paper back office and log / JSON observers
//! - [`infrastructure`] - TOML configuration and logging setup
//! - [`app`] - Builds triggers from configuration and replays ticks
//! - [`cli`] - The `pricebot` command line
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pricebot::adapter::outbound::PaperBackOffice;
//! use pricebot::application::{PriceThresholdTrigger, TickOutcome};
//! use pricebot::domain::{CompletionNotice, InstrumentId};
//! use rust_decimal_macros::dec;
//!
//! let office = Arc::new(PaperBackOffice::new([("FB", 1_000)]));
//! let trigger = PriceThresholdTrigger::new("FB", 100, dec!(200.0)).with_executor(office);
//! trigger.subscribe_completion(|notice: &CompletionNotice| {
//!     println!("bought {} {} at {}", notice.quantity, notice.instrument, notice.execution_price);
//! });
//!
//! let outcome = trigger.on_price_update(&InstrumentId::from("FB"), dec!(199.9));
//! assert_eq!(outcome, TickOutcome::Completed);
//! ```

pub mod adapter;
pub mod app;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
