use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;

const PART_PREFIX: &str = ".image_fetcher-";
const PART_SUFFIX: &str = ".part";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Creates `dir` if needed and checks that files can be created in it.
///
/// Safe to call repeatedly; run once per batch, not once per image.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    let output_dir_err =
        |err: io::Error| PersistError::OutputDir(format!("{}: {err}", dir.display()));

    fs::create_dir_all(dir).map_err(output_dir_err)?;
    if !fs::metadata(dir).map_err(output_dir_err)?.is_dir() {
        return Err(PersistError::OutputDir(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    part_file(dir).map_err(output_dir_err)?;
    Ok(())
}

/// Writes image bytes under one directory, never leaving a half-written
/// file at the final name.
///
/// The directory must already exist (see [`ensure_output_dir`]).
#[derive(Debug, Clone)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stores `content` as `{dir}/{filename}`, replacing any previous file of
    /// that name, and returns the final path.
    pub fn write(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        let target = self.dir.join(filename);

        let mut part = part_file(&self.dir)?;
        part.write_all(content)?;
        part.as_file_mut().sync_all()?;
        part.persist(&target).map_err(|err| PersistError::Io(err.error))?;
        Ok(target)
    }
}

fn part_file(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new()
        .prefix(PART_PREFIX)
        .suffix(PART_SUFFIX)
        .tempfile_in(dir)
}
