//! Image fetcher core: pure input parsing, naming, hashing and reporting.
mod dedup;
mod digest;
mod filename;
mod input;
mod outcome;
mod report;

pub use dedup::DedupSet;
pub use digest::ContentHash;
pub use filename::{resolve_filename, DEFAULT_EXTENSION};
pub use input::parse_url_list;
pub use outcome::{FailureClass, Outcome, RunSummary};
pub use report::{outcome_lines, CLOSING_MESSAGE, PROMPT, WELCOME_LINES};
