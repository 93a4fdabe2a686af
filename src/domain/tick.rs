//! Price tick input type.

use serde::{Deserialize, Serialize};

use super::id::InstrumentId;
use super::money::Price;

/// One price update for an instrument.
///
/// Ticks are transient: a trigger inspects them and discards them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTick {
    /// Instrument the price belongs to.
    pub instrument: InstrumentId,
    /// Observed market price.
    pub price: Price,
}

impl PriceTick {
    /// Create a new tick.
    pub fn new(instrument: impl Into<InstrumentId>, price: Price) -> Self {
        Self {
            instrument: instrument.into(),
            price,
        }
    }
}
