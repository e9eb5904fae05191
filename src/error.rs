use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    /// Two source recordings map to the same corpus file, or a previous run left it behind.
    #[error("duplicated file {}: clear the previous output before re-running", .path.display())]
    Collision { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start `{tool}`: {source}")]
    ToolSpawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("`{tool}` exited with {status}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
    },
}

pub type CorpusResult<T> = Result<T, CorpusError>;

/// Attaches the offending path to an I/O error.
pub(crate) fn io_at(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> CorpusError {
    let path = path.into();
    move |source| CorpusError::Io { path, source }
}
