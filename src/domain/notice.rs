//! Outcome notices emitted by a trigger.
//!
//! A qualifying tick produces exactly one of:
//!
//! - [`CompletionNotice`] - the back office accepted the buy
//! - [`FailureNotice`] - the buy could not be placed
//!
//! # Examples
//!
//! ```
//! use pricebot::domain::{FailureKind, FailureNotice, InstrumentId};
//! use rust_decimal_macros::dec;
//!
//! let notice = FailureNotice::unconfigured(InstrumentId::from("GOOG"), 200, dec!(159.9));
//! assert_eq!(notice.kind, FailureKind::Unconfigured);
//! assert_eq!(notice.error, "BackOffice is not initialized");
//! ```

use serde::Serialize;

use super::id::InstrumentId;
use super::money::{Price, Quantity};

/// Message reported when a tick qualifies but no back office is attached.
pub const BACK_OFFICE_NOT_INITIALIZED: &str = "BackOffice is not initialized";

/// A buy order was placed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionNotice {
    pub instrument: InstrumentId,
    pub quantity: Quantity,
    /// The tick price the order was placed at.
    pub execution_price: Price,
}

impl CompletionNotice {
    #[must_use]
    pub const fn new(instrument: InstrumentId, quantity: Quantity, execution_price: Price) -> Self {
        Self {
            instrument,
            quantity,
            execution_price,
        }
    }
}

/// Why a qualifying tick did not produce an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No back office was attached when the tick arrived.
    Unconfigured,
    /// The back office rejected the order.
    Execution,
}

/// A buy order could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureNotice {
    pub instrument: InstrumentId,
    pub quantity: Quantity,
    /// The tick price the order was attempted at.
    pub attempted_price: Price,
    /// Human-readable reason, taken verbatim from the back office.
    pub error: String,
    pub kind: FailureKind,
}

impl FailureNotice {
    /// Failure for a tick that arrived before a back office was attached.
    #[must_use]
    pub fn unconfigured(instrument: InstrumentId, quantity: Quantity, attempted_price: Price) -> Self {
        Self {
            instrument,
            quantity,
            attempted_price,
            error: BACK_OFFICE_NOT_INITIALIZED.to_string(),
            kind: FailureKind::Unconfigured,
        }
    }

    /// Failure reported by the back office.
    pub fn execution(
        instrument: InstrumentId,
        quantity: Quantity,
        attempted_price: Price,
        error: impl Into<String>,
    ) -> Self {
        Self {
            instrument,
            quantity,
            attempted_price,
            error: error.into(),
            kind: FailureKind::Execution,
        }
    }
}

/// Either outcome, for consumers that handle both in one stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notice {
    Completion(CompletionNotice),
    Failure(FailureNotice),
}

impl Notice {
    #[must_use]
    pub fn instrument(&self) -> &InstrumentId {
        match self {
            Self::Completion(c) => &c.instrument,
            Self::Failure(f) => &f.instrument,
        }
    }
}

impl From<CompletionNotice> for Notice {
    fn from(notice: CompletionNotice) -> Self {
        Self::Completion(notice)
    }
}

impl From<FailureNotice> for Notice {
    fn from(notice: FailureNotice) -> Self {
        Self::Failure(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn execution_failure_keeps_message_verbatim() {
        let notice = FailureNotice::execution(
            InstrumentId::from("GOOG"),
            200,
            dec!(159.9),
            "No enough stock available",
        );
        assert_eq!(notice.error, "No enough stock available");
        assert_eq!(notice.kind, FailureKind::Execution);
    }

    #[test]
    fn failure_kind_serializes_snake_case() {
        let notice = FailureNotice::unconfigured(InstrumentId::from("GOOG"), 200, dec!(159.9));
        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(value["kind"], "unconfigured");
        assert_eq!(value["instrument"], "GOOG");
    }

    #[test]
    fn notice_is_tagged_by_event() {
        let notice = Notice::from(CompletionNotice::new(InstrumentId::from("FB"), 100, dec!(199.9)));
        let value = serde_json::to_value(&notice).unwrap();
        assert_eq!(value["event"], "completion");
        assert_eq!(value["quantity"], 100);
        assert_eq!(notice.instrument().as_str(), "FB");
    }
}
