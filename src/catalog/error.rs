use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("title already exists: {name}")]
    DuplicateName { name: String },

    #[error("invalid title {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("title not found: {name}")]
    NotFound { name: String },

    /// The search index knows the title but no status list holds it.
    #[error("data inconsistency: {name} is indexed but missing from every list")]
    Inconsistency { name: String },

    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
