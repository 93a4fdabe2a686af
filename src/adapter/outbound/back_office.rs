//! Simulated back office backed by an in-memory inventory.
//!
//! Each instrument has a number of shares available. A buy succeeds when
//! enough shares remain and takes them out of the inventory; it never
//! partially fills.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::{InstrumentId, Price, Quantity};
use crate::error::ExecutionError;
use crate::port::outbound::executor::OrderExecutor;

/// Paper-trading back office.
pub struct PaperBackOffice {
    inventory: Mutex<HashMap<InstrumentId, Quantity>>,
}

impl PaperBackOffice {
    /// Create a back office offering the given inventory.
    pub fn new<I, K>(inventory: I) -> Self
    where
        I: IntoIterator<Item = (K, Quantity)>,
        K: Into<InstrumentId>,
    {
        Self {
            inventory: Mutex::new(
                inventory
                    .into_iter()
                    .map(|(instrument, available)| (instrument.into(), available))
                    .collect(),
            ),
        }
    }

    /// Shares still available for `instrument`, or `None` if it is not offered.
    #[must_use]
    pub fn remaining(&self, instrument: &InstrumentId) -> Option<Quantity> {
        self.inventory.lock().get(instrument).copied()
    }
}

impl OrderExecutor for PaperBackOffice {
    fn buy(
        &self,
        instrument: &InstrumentId,
        quantity: Quantity,
        price: Price,
    ) -> Result<(), ExecutionError> {
        let mut inventory = self.inventory.lock();
        let available = inventory
            .get_mut(instrument)
            .ok_or_else(|| ExecutionError::UnknownInstrument(instrument.clone()))?;

        if quantity > *available {
            debug!(
                instrument = %instrument,
                requested = quantity,
                available = *available,
                "Insufficient paper inventory"
            );
            return Err(ExecutionError::InsufficientStock {
                instrument: instrument.clone(),
                requested: quantity,
                available: *available,
            });
        }

        *available -= quantity;
        info!(
            instrument = %instrument,
            quantity,
            price = %price,
            remaining = *available,
            "Paper order filled"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "paper"
    }
}
