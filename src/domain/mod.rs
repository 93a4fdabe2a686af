//! Exchange-agnostic domain types.
//!
//! - [`InstrumentId`] - the instrument a trigger watches
//! - [`Price`], [`Quantity`] - order terms
//! - [`PriceTick`] - one inbound price update
//! - [`CompletionNotice`], [`FailureNotice`] - outbound outcomes

pub mod id;
pub mod money;
pub mod notice;
pub mod tick;

pub use id::InstrumentId;
pub use money::{Price, Quantity};
pub use notice::{
    CompletionNotice, FailureKind, FailureNotice, Notice, BACK_OFFICE_NOT_INITIALIZED,
};
pub use tick::PriceTick;
