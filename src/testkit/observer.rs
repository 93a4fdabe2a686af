//! Notice collector for assertions in tests.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{CompletionNotice, FailureNotice, Notice};
use crate::port::inbound::TradingComponent;
use crate::port::outbound::notifier::Observer;

/// Thread-safe notice collector.
///
/// Clones share one log, so a single recorder can observe many triggers and
/// keep their notices in delivery order.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to both outcome channels of `component`.
    pub fn attach<C: TradingComponent + ?Sized>(&self, component: &C) {
        component.completions().subscribe(self.clone());
        component.failures().subscribe(self.clone());
    }

    /// Every notice received, in delivery order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn completions(&self) -> Vec<CompletionNotice> {
        self.notices
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notice::Completion(c) => Some(c.clone()),
                Notice::Failure(_) => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<FailureNotice> {
        self.notices
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notice::Failure(f) => Some(f.clone()),
                Notice::Completion(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }
}

impl Observer<CompletionNotice> for RecordingObserver {
    fn notify(&self, notice: &CompletionNotice) {
        self.notices.lock().push(Notice::Completion(notice.clone()));
    }
}

impl Observer<FailureNotice> for RecordingObserver {
    fn notify(&self, notice: &FailureNotice) {
        self.notices.lock().push(Notice::Failure(notice.clone()));
    }
}
