use crate::series::SeriesError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to open access log {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read access log {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("failed to render series: {0}")]
    Render(#[source] std::io::Error),
}

impl RunError {
    pub fn file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Message shown to whoever typed the path.
    pub fn user_hint(&self) -> Option<&'static str> {
        match self {
            RunError::FileUnreadable { .. } => Some(
                "The file path you entered is incorrect. Please check it and try again.",
            ),
            RunError::Series(SeriesError::NoRecords { .. }) => Some(
                "None of the lines look like an Nginx access log entry.\n\
                 \n\
                 Expected layout:\n\
                 \n\
                 127.0.0.1 - - [10/Oct/2023:13:55:36 +0000] \"GET /path HTTP/1.1\" 200 512",
            ),
            _ => None,
        }
    }
}
