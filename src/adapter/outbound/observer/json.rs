//! Observer that writes notices as JSON lines.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::error;

use crate::domain::{CompletionNotice, FailureNotice, Notice};
use crate::port::outbound::notifier::Observer;

/// Writes one JSON object per notice, tagged with `"event"`.
///
/// Clones share one writer, so a single observer can be subscribed to many
/// triggers without interleaving partial lines. Write errors are logged and
/// otherwise ignored; delivery to other observers continues.
pub struct JsonLinesObserver<W> {
    writer: Arc<Mutex<W>>,
}

impl<W: Write + Send> JsonLinesObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    fn write(&self, notice: &Notice) {
        let mut writer = self.writer.lock();
        if let Err(e) = write_line(&mut *writer, notice) {
            error!(instrument = %notice.instrument(), error = %e, "Failed to write notice");
        }
    }
}

impl<W> Clone for JsonLinesObserver<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
        }
    }
}

fn write_line<W: Write>(writer: &mut W, notice: &Notice) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, notice)?;
    writeln!(writer)?;
    writer.flush()
}

impl<W: Write + Send> Observer<CompletionNotice> for JsonLinesObserver<W> {
    fn notify(&self, notice: &CompletionNotice) {
        self.write(&Notice::Completion(notice.clone()));
    }
}

impl<W: Write + Send> Observer<FailureNotice> for JsonLinesObserver<W> {
    fn notify(&self, notice: &FailureNotice) {
        self.write(&Notice::Failure(notice.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InstrumentId;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_one_tagged_object_per_line() {
        let observer = JsonLinesObserver::new(Vec::new());
        let shared = observer.clone();

        shared.notify(&CompletionNotice::new(InstrumentId::from("FB"), 100, dec!(199.9)));
        observer.notify(&FailureNotice::unconfigured(
            InstrumentId::from("GOOG"),
            200,
            dec!(159.9),
        ));

        let output = String::from_utf8(observer.writer.lock().clone()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "completion");
        assert_eq!(lines[0]["execution_price"], "199.9");
        assert_eq!(lines[1]["event"], "failure");
        assert_eq!(lines[1]["error"], "BackOffice is not initialized");
    }
}
