//! Local mirror of the Node.js documentation
//!
//! This module decides whether the mirror on disk is fresh enough to serve or
//! must be pulled again from nodejs.org. A small freshness record holds the
//! time of the last complete refresh; the two corpora (API tree and longform
//! documents) live next to it. A refresh only bumps the record once every
//! fetch and write has succeeded, so a failed run leaves the previous mirror
//! in place for the next one.

mod manager;
mod record;
mod store;

pub use manager::{CorpusSource, RefreshManager, ResolvedCorpus};
pub use record::{load_or_bootstrap, CacheRecord, LoadedRecord};
pub use store::LocalStore;

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::FetchError;

/// Errors that can occur while resolving the mirror
#[derive(Debug, Error)]
pub enum CacheError {
    /// A required local file is absent; recoverable by bootstrapping or refetching
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other local read/write failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A remote fetch failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A local file exists but cannot be interpreted
    #[error("Malformed content in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl CacheError {
    /// Maps an I/O error on `path`, keeping "not found" distinct from everything else
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            CacheError::NotFound(path.to_path_buf())
        } else {
            CacheError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound(_))
    }
}
