//! Error types for template and session stores.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from fetching a mapping template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template store {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("mapping template not found: {id}")]
    NotFound { id: String },

    #[error("mapping template {id} is malformed: {source}")]
    InvalidTemplate {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from reading or writing persisted session state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access session store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode session state {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
