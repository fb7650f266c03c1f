use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("no such file: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode JSON report: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl CompareError {
    /// Error for a failed read of an input document.
    pub fn read<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            CompareError::NotFound { path }
        } else {
            CompareError::Io { path, source }
        }
    }

    /// Error for a failed write of the report file.
    pub fn write<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        CompareError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse<P: AsRef<Path>>(path: P, source: serde_json::Error) -> Self {
        CompareError::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
