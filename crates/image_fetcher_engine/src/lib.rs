//! Image fetcher engine: HTTP fetching, persistence and the batch driver.
mod batch;
mod engine;
mod fetch;
mod persist;
mod store;
mod types;

pub use batch::{run_batch, OutcomeSink};
pub use engine::{EngineConfig, EngineHandle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use store::{fetch_and_store, StoreError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
