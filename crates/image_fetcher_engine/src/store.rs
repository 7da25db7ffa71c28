use fetch_logging::{fetch_debug, fetch_info, fetch_warn};
use image_fetcher_core::{resolve_filename, ContentHash, DedupSet, FailureClass, Outcome};
use thiserror::Error;

use crate::{AtomicFileWriter, FetchError, Fetcher, PersistError};

/// Why a single URL could not be stored.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl StoreError {
    pub fn class(&self) -> FailureClass {
        match self {
            StoreError::Fetch(_) => FailureClass::Connection,
            StoreError::Persist(_) => FailureClass::Other,
        }
    }
}

/// Downloads `url` and writes it to `writer`'s directory unless an identical
/// body was already stored this run.
///
/// Never fails: every error is folded into [`Outcome::Failed`] so the caller
/// can move on to the next URL.
pub async fn fetch_and_store(
    fetcher: &dyn Fetcher,
    writer: &AtomicFileWriter,
    url: &str,
    seen: &mut DedupSet,
) -> Outcome {
    match try_fetch_and_store(fetcher, writer, url, seen).await {
        Ok(outcome) => outcome,
        Err(err) => {
            fetch_warn!("Failed to store {}: {}", url, err);
            Outcome::Failed {
                url: url.to_string(),
                class: err.class(),
                message: err.to_string(),
            }
        }
    }
}

async fn try_fetch_and_store(
    fetcher: &dyn Fetcher,
    writer: &AtomicFileWriter,
    url: &str,
    seen: &mut DedupSet,
) -> Result<Outcome, StoreError> {
    let output = fetcher.fetch(url).await?;
    let hash = ContentHash::of(&output.bytes);

    if seen.contains(&hash) {
        fetch_info!("Skipping {}: content {} already stored", url, hash);
        return Ok(Outcome::Duplicate {
            url: url.to_string(),
            hash,
        });
    }

    let filename = resolve_filename(url, output.metadata.content_type.as_deref());
    let path = writer.write(&filename, &output.bytes)?;
    fetch_debug!("Wrote {} bytes to {:?}", output.metadata.byte_len, path);
    seen.record(hash);

    Ok(Outcome::Saved {
        url: url.to_string(),
        filename,
        path,
        bytes: output.metadata.byte_len,
    })
}
