//! Price-threshold purchase trigger.
//!
//! A [`PriceThresholdTrigger`] watches one instrument. When a tick for that
//! instrument arrives strictly below the threshold, it asks its back office
//! to buy a fixed quantity at the tick price and reports the outcome to its
//! observers. Every tick is handled independently: there is no memory of
//! earlier purchases, so each qualifying tick is a fresh attempt.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{CompletionNotice, FailureNotice, InstrumentId, Price, PriceTick, Quantity};
use crate::port::inbound::{PriceConsumer, TradingComponent};
use crate::port::outbound::executor::OrderExecutor;
use crate::port::outbound::notifier::{Observer, ObserverRegistry, SubscriptionId};

/// Which path a tick took through the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Other instrument, or price at or above the threshold.
    Ignored,
    /// A completion notice was emitted.
    Completed,
    /// A failure notice was emitted.
    Failed,
}

/// Buys a fixed quantity of one instrument whenever its price drops below
/// a threshold.
pub struct PriceThresholdTrigger {
    instrument: InstrumentId,
    quantity: Quantity,
    threshold: Price,
    executor: Option<Arc<dyn OrderExecutor>>,
    completions: ObserverRegistry<CompletionNotice>,
    failures: ObserverRegistry<FailureNotice>,
}

impl PriceThresholdTrigger {
    /// Create a trigger with no back office attached.
    ///
    /// `quantity` is not validated.
    pub fn new(instrument: impl Into<InstrumentId>, quantity: Quantity, threshold: Price) -> Self {
        Self {
            instrument: instrument.into(),
            quantity,
            threshold,
            executor: None,
            completions: ObserverRegistry::new(),
            failures: ObserverRegistry::new(),
        }
    }

    /// Attach a back office while building the trigger.
    #[must_use]
    pub fn with_executor(mut self, executor: Arc<dyn OrderExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Attach or replace the back office.
    pub fn set_executor(&mut self, executor: Arc<dyn OrderExecutor>) {
        debug!(
            instrument = %self.instrument,
            back_office = executor.name(),
            "Back office attached"
        );
        self.executor = Some(executor);
    }

    /// Detach the back office, returning it if one was attached.
    ///
    /// Later qualifying ticks report the unconfigured failure again.
    pub fn release_executor(&mut self) -> Option<Arc<dyn OrderExecutor>> {
        self.executor.take()
    }

    #[must_use]
    pub fn has_executor(&self) -> bool {
        self.executor.is_some()
    }

    #[must_use]
    pub fn instrument(&self) -> &InstrumentId {
        &self.instrument
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub const fn threshold(&self) -> Price {
        self.threshold
    }

    /// Subscribe to completion notices.
    pub fn subscribe_completion<O>(&self, observer: O) -> SubscriptionId
    where
        O: Observer<CompletionNotice> + 'static,
    {
        self.completions.subscribe(observer)
    }

    /// Subscribe to failure notices.
    pub fn subscribe_failure<O>(&self, observer: O) -> SubscriptionId
    where
        O: Observer<FailureNotice> + 'static,
    {
        self.failures.subscribe(observer)
    }

    pub fn unsubscribe_completion(&self, id: SubscriptionId) -> bool {
        self.completions.unsubscribe(id)
    }

    pub fn unsubscribe_failure(&self, id: SubscriptionId) -> bool {
        self.failures.unsubscribe(id)
    }

    /// Handle one price update.
    ///
    /// Emits at most one notice and calls the back office at most once.
    /// Never fails: back office errors are reported as failure notices.
    pub fn on_price_update(&self, instrument: &InstrumentId, price: Price) -> TickOutcome {
        if *instrument != self.instrument || price >= self.threshold {
            return TickOutcome::Ignored;
        }

        debug!(
            instrument = %self.instrument,
            price = %price,
            threshold = %self.threshold,
            "Price below threshold"
        );

        let Some(executor) = &self.executor else {
            warn!(instrument = %self.instrument, price = %price, "No back office attached");
            self.failures.notify_all(&FailureNotice::unconfigured(
                self.instrument.clone(),
                self.quantity,
                price,
            ));
            return TickOutcome::Failed;
        };

        match executor.buy(&self.instrument, self.quantity, price) {
            Ok(()) => {
                info!(
                    instrument = %self.instrument,
                    quantity = self.quantity,
                    price = %price,
                    back_office = executor.name(),
                    "Buy order placed"
                );
                self.completions.notify_all(&CompletionNotice::new(
                    self.instrument.clone(),
                    self.quantity,
                    price,
                ));
                TickOutcome::Completed
            }
            Err(e) => {
                warn!(
                    instrument = %self.instrument,
                    quantity = self.quantity,
                    price = %price,
                    error = %e,
                    "Buy order failed"
                );
                self.failures.notify_all(&FailureNotice::execution(
                    self.instrument.clone(),
                    self.quantity,
                    price,
                    e.to_string(),
                ));
                TickOutcome::Failed
            }
        }
    }

    /// Handle one price update given as a [`PriceTick`].
    pub fn on_tick(&self, tick: &PriceTick) -> TickOutcome {
        self.on_price_update(&tick.instrument, tick.price)
    }
}

impl PriceConsumer for PriceThresholdTrigger {
    fn receive_price_tick(&self, instrument: &InstrumentId, price: Price) {
        self.on_price_update(instrument, price);
    }
}

impl TradingComponent for PriceThresholdTrigger {
    fn completions(&self) -> &ObserverRegistry<CompletionNotice> {
        &self.completions
    }

    fn failures(&self) -> &ObserverRegistry<FailureNotice> {
        &self.failures
    }
}

impl fmt::Debug for PriceThresholdTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceThresholdTrigger")
            .field("instrument", &self.instrument)
            .field("quantity", &self.quantity)
            .field("threshold", &self.threshold)
            .field("executor", &self.executor.as_ref().map(|e| e.name()))
            .field("completions", &self.completions)
            .field("failures", &self.failures)
            .finish()
    }
}
