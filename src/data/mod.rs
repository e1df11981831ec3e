//! Documentation corpora and the clients that fetch them
//!
//! This module contains the two corpora mirrored from nodejs.org (the JSON API
//! tree and the set of longform markdown documents) together with the HTTP
//! clients that pull them from the remote source.

pub mod api_docs;
pub mod fetcher;
pub mod html;
pub mod longform;

pub use api_docs::{ApiDocsClient, StructuredDocTree};
pub use fetcher::{FetchError, Fetcher};
pub use longform::LongformClient;

use serde::{Deserialize, Serialize};

/// A single longform document, identified by its file name (e.g. `fs.md`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongformDoc {
    /// Stable name, also the file name on disk
    pub name: String,
    /// Raw document text
    pub content: String,
}

/// Ordered collection of longform documents
///
/// The order is the order in which the remote index lists them and is
/// preserved through a write and read of the local store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongformDocSet {
    docs: Vec<LongformDoc>,
}

impl LongformDocSet {
    pub fn new(docs: Vec<LongformDoc>) -> Self {
        Self { docs }
    }

    pub fn docs(&self) -> &[LongformDoc] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Names in order
    pub fn names(&self) -> Vec<&str> {
        self.docs.iter().map(|doc| doc.name.as_str()).collect()
    }

    /// Looks up a document by name, with or without the `.md` suffix
    pub fn get(&self, name: &str) -> Option<&LongformDoc> {
        let wanted = name.strip_suffix(".md").unwrap_or(name);
        self.docs
            .iter()
            .find(|doc| doc.name.strip_suffix(".md").unwrap_or(&doc.name) == wanted)
    }
}
