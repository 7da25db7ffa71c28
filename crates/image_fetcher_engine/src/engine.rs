use std::io;
use std::path::PathBuf;

use image_fetcher_core::RunSummary;
use tokio::runtime::{Builder, Runtime};

use crate::batch::{run_batch, OutcomeSink};
use crate::fetch::{FetchSettings, ReqwestFetcher};
use crate::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub output_dir: PathBuf,
    pub fetch: FetchSettings,
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            fetch: FetchSettings::default(),
        }
    }
}

/// Blocking front end over the async fetch pipeline.
///
/// Owns a current-thread runtime so a whole run stays on the caller's thread.
pub struct EngineHandle {
    runtime: Runtime,
    fetcher: ReqwestFetcher,
    writer: AtomicFileWriter,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            runtime,
            fetcher: ReqwestFetcher::new(config.fetch),
            writer: AtomicFileWriter::new(config.output_dir),
        })
    }

    pub fn output_dir(&self) -> &std::path::Path {
        self.writer.dir()
    }

    /// Must not be called from inside another tokio runtime.
    pub fn run(&self, urls: &[String], sink: &dyn OutcomeSink) -> Result<RunSummary, PersistError> {
        self.runtime
            .block_on(run_batch(&self.fetcher, &self.writer, urls, sink))
    }
}
