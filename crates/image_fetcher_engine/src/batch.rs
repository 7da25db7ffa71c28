use fetch_logging::{fetch_debug, fetch_info};
use image_fetcher_core::{DedupSet, Outcome, RunSummary};

use crate::{ensure_output_dir, fetch_and_store, AtomicFileWriter, Fetcher, PersistError};

/// Receives each outcome as soon as its URL has been processed.
pub trait OutcomeSink: Send + Sync {
    fn emit(&self, outcome: &Outcome);
}

/// Processes `urls` one after another with a fresh deduplication set.
///
/// Only a missing or unwritable output directory aborts the run; per-URL
/// failures are reported through `sink` and counted in the summary.
pub async fn run_batch(
    fetcher: &dyn Fetcher,
    writer: &AtomicFileWriter,
    urls: &[String],
    sink: &dyn OutcomeSink,
) -> Result<RunSummary, PersistError> {
    ensure_output_dir(writer.dir())?;

    let mut seen = DedupSet::new();
    let mut summary = RunSummary::default();
    for url in urls {
        let outcome = fetch_and_store(fetcher, writer, url, &mut seen).await;
        if outcome.is_failure() {
            fetch_debug!("Continuing after failure for {}", outcome.url());
        }
        sink.emit(&outcome);
        summary.record(&outcome);
    }

    fetch_info!(
        "Run finished: {} URL(s), {} saved, {} duplicate, {} failed ({} bytes, {} unique)",
        summary.processed(),
        summary.saved,
        summary.duplicates,
        summary.failed,
        summary.bytes_written,
        seen.stored_count()
    );
    Ok(summary)
}
