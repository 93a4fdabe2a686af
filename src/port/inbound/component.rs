//! Driving-side contracts of a trading component.

use crate::domain::{CompletionNotice, FailureNotice, InstrumentId, Price, PriceTick};
use crate::port::outbound::notifier::ObserverRegistry;

/// Receives every price tick from a market-data source.
///
/// Sources call this for all instruments; consumers filter for themselves.
pub trait PriceConsumer {
    /// Handle one price update.
    fn receive_price_tick(&self, instrument: &InstrumentId, price: Price);

    /// Handle one price update given as a [`PriceTick`].
    fn receive(&self, tick: &PriceTick) {
        self.receive_price_tick(&tick.instrument, tick.price);
    }
}

/// Exposes the two outcome subscription points of a trading component.
pub trait TradingComponent {
    /// Observers of successfully placed orders.
    fn completions(&self) -> &ObserverRegistry<CompletionNotice>;

    /// Observers of orders that could not be placed.
    fn failures(&self) -> &ObserverRegistry<FailureNotice>;
}
