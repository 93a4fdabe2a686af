//! Back office port for order execution.
//!
//! The back office is the only side-effecting dependency of a trigger. It
//! is consumed synchronously and treated as opaque: the trigger never
//! inspects the error variant, only its message.

use crate::domain::{InstrumentId, Price, Quantity};
use crate::error::ExecutionError;

/// Executor for placing buy orders with a back office.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`); triggers hold them
///   behind an `Arc` and several triggers may share one back office
/// - `buy` runs on the caller's thread and should return promptly
pub trait OrderExecutor: Send + Sync {
    /// Place a buy order for `quantity` shares of `instrument` at `price`.
    fn buy(
        &self,
        instrument: &InstrumentId,
        quantity: Quantity,
        price: Price,
    ) -> Result<(), ExecutionError>;

    /// Get the back office name for logging/debugging.
    fn name(&self) -> &'static str {
        "back-office"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct AlwaysRejects;

    impl OrderExecutor for AlwaysRejects {
        fn buy(&self, _: &InstrumentId, _: Quantity, _: Price) -> Result<(), ExecutionError> {
            Err(ExecutionError::Unavailable("market closed".into()))
        }
    }

    #[test]
    fn default_name_and_trait_object_dispatch() {
        let executor: Box<dyn OrderExecutor> = Box::new(AlwaysRejects);
        assert_eq!(executor.name(), "back-office");

        let err = executor
            .buy(&InstrumentId::from("FB"), 1, dec!(1))
            .unwrap_err();
        assert_eq!(err.to_string(), "back office unavailable: market closed");
    }
}
