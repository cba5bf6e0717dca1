//! Structured error types for the burst engine.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
  /// Writing the temporary sibling file failed; the target artifact, if one
  /// already exists, is untouched.
  #[error("write {}: {}", .path.display(), .source)]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Renaming the temporary file over the target failed.
  #[error("persist {}: {}", .path.display(), .source)]
  Persist {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}
