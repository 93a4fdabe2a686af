//! Scripted back office for tests.

use parking_lot::Mutex;

use crate::domain::{InstrumentId, Price, Quantity};
use crate::error::ExecutionError;
use crate::port::outbound::executor::OrderExecutor;

/// One recorded `buy` call.
pub type BuyCall = (InstrumentId, Quantity, Price);

/// Back office that records every `buy` call and answers with a fixed result.
pub struct ScriptedExecutor {
    response: Result<(), ExecutionError>,
    calls: Mutex<Vec<BuyCall>>,
}

impl ScriptedExecutor {
    /// Accept every order.
    pub fn accepting() -> Self {
        Self::answering(Ok(()))
    }

    /// Reject every order with `message` as the error text.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self::failing(ExecutionError::Rejected(message.into()))
    }

    /// Fail every order with `error`.
    pub fn failing(error: ExecutionError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(response: Result<(), ExecutionError>) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<BuyCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl OrderExecutor for ScriptedExecutor {
    fn buy(
        &self,
        instrument: &InstrumentId,
        quantity: Quantity,
        price: Price,
    ) -> Result<(), ExecutionError> {
        self.calls.lock().push((instrument.clone(), quantity, price));
        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
