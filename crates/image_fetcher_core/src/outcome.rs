use std::path::PathBuf;

use crate::ContentHash;

/// Which console wording a failed URL gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Request could not be made or returned a non-success status.
    Connection,
    /// Anything else, e.g. the file could not be written.
    Other,
}

/// Result of processing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved {
        url: String,
        filename: String,
        path: PathBuf,
        bytes: u64,
    },
    Duplicate {
        url: String,
        hash: ContentHash,
    },
    Failed {
        url: String,
        class: FailureClass,
        message: String,
    },
}

impl Outcome {
    pub fn url(&self) -> &str {
        match self {
            Outcome::Saved { url, .. }
            | Outcome::Duplicate { url, .. }
            | Outcome::Failed { url, .. } => url,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}

/// Tally of outcomes for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub saved: usize,
    pub duplicates: usize,
    pub failed: usize,
    pub bytes_written: u64,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Saved { bytes, .. } => {
                self.saved += 1;
                self.bytes_written += bytes;
            }
            Outcome::Duplicate { .. } => self.duplicates += 1,
            Outcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn processed(&self) -> usize {
        self.saved + self.duplicates + self.failed
    }
}
