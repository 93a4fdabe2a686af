//! Observer that logs notices via tracing.

use tracing::{info, warn};

use crate::domain::{CompletionNotice, FailureKind, FailureNotice};
use crate::port::outbound::notifier::Observer;

/// A logging observer for both outcome channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer<CompletionNotice> for LogObserver {
    fn notify(&self, notice: &CompletionNotice) {
        info!(
            instrument = %notice.instrument,
            quantity = notice.quantity,
            price = %notice.execution_price,
            "Purchase completed"
        );
    }
}

impl Observer<FailureNotice> for LogObserver {
    fn notify(&self, notice: &FailureNotice) {
        let kind = match notice.kind {
            FailureKind::Unconfigured => "unconfigured",
            FailureKind::Execution => "execution",
        };
        warn!(
            instrument = %notice.instrument,
            quantity = notice.quantity,
            price = %notice.attempted_price,
            kind,
            error = %notice.error,
            "Purchase failed"
        );
    }
}
