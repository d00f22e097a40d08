use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("opcode table not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed opcode table: {0}")]
    Malformed(#[from] serde_json::Error),
}
