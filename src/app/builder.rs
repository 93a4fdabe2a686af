//! Trigger and back office initialization.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapter::outbound::PaperBackOffice;
use crate::application::PriceThresholdTrigger;
use crate::infrastructure::config::{BackOfficeConfig, Config};
use crate::port::outbound::executor::OrderExecutor;

/// Build the paper back office, if enabled.
pub fn build_back_office(config: &BackOfficeConfig) -> Option<Arc<PaperBackOffice>> {
    if !config.enabled {
        warn!("Back office disabled; qualifying ticks will be reported as failures");
        return None;
    }

    info!(instruments = config.inventory.len(), "Paper back office enabled");
    Some(Arc::new(PaperBackOffice::new(
        config
            .inventory
            .iter()
            .map(|(instrument, available)| (instrument.clone(), *available)),
    )))
}

/// Build one trigger per `[[triggers]]` entry, in configuration order.
///
/// All triggers share `executor` when one is given.
pub fn build_triggers(
    config: &Config,
    executor: Option<Arc<dyn OrderExecutor>>,
) -> Vec<PriceThresholdTrigger> {
    config
        .triggers
        .iter()
        .map(|entry| {
            let mut trigger =
                PriceThresholdTrigger::new(entry.instrument.clone(), entry.quantity, entry.threshold);
            if let Some(executor) = &executor {
                trigger.set_executor(Arc::clone(executor));
            }
            info!(
                instrument = %entry.instrument,
                quantity = entry.quantity,
                threshold = %entry.threshold,
                "Trigger configured"
            );
            trigger
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enabled: bool) -> Config {
        Config::parse_toml(&format!(
            r#"
[back_office]
enabled = {enabled}

[back_office.inventory]
FB = 500

[[triggers]]
instrument = "FB"
quantity = 100
threshold = "200.0"

[[triggers]]
instrument = "MSFT"
quantity = 300
threshold = "100.0"
"#
        ))
        .unwrap()
    }

    #[test]
    fn builds_triggers_in_order_with_shared_back_office() {
        let config = config(true);
        let office: Arc<dyn OrderExecutor> = build_back_office(&config.back_office).unwrap();
        let triggers = build_triggers(&config, Some(office));

        let instruments: Vec<_> = triggers.iter().map(|t| t.instrument().as_str()).collect();
        assert_eq!(instruments, vec!["FB", "MSFT"]);
        assert!(triggers.iter().all(PriceThresholdTrigger::has_executor));
    }

    #[test]
    fn disabled_back_office_leaves_triggers_unconfigured() {
        let config = config(false);
        assert!(build_back_office(&config.back_office).is_none());

        let triggers = build_triggers(&config, None);
        assert_eq!(triggers.len(), 2);
        assert!(!triggers[0].has_executor());
    }
}
