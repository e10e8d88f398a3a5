use crate::SourceRecord;

/// Diagnostic hook fed each source record during payload assembly.
///
/// Observers must never alter the payload; swapping or disabling one
/// has no effect on correctness.
pub trait SourceObserver: Send + Sync {
    fn observe(&self, index: usize, record: &SourceRecord);
}

/// Default observer: logs each source document's file, page and full
/// content at info level.
pub struct TracingObserver;

impl SourceObserver for TracingObserver {
    fn observe(&self, index: usize, record: &SourceRecord) {
        tracing::info!(
            source = index + 1,
            source_file = %record.source_file,
            page = %record.page,
            content = %record.content,
            "source document"
        );
    }
}
