//! Client for the longform markdown documents
//!
//! The index page lists every document; each one is then fetched on its own.
//! All document requests run concurrently and the set only resolves once every
//! request has succeeded.

use futures::future::try_join_all;
use tracing::{debug, info};

use super::{html, FetchError, Fetcher, LongformDoc, LongformDocSet};

/// Client for fetching the full longform document set
#[derive(Debug, Clone)]
pub struct LongformClient {
    fetcher: Fetcher,
    index_url: String,
    base_url: String,
}

impl LongformClient {
    pub fn new(fetcher: Fetcher, index_url: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            index_url: index_url.into(),
            base_url: base_url.into(),
        }
    }

    /// URL of a single document
    pub fn document_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }

    /// Fetches the index page, then every document it lists
    ///
    /// # Returns
    /// * `Ok(LongformDocSet)` - Every listed document, in index order
    /// * `Err(FetchError)` - The first failure; nothing partial is returned
    pub async fn fetch_all(&self) -> Result<LongformDocSet, FetchError> {
        let index = self.fetcher.get_text(&self.index_url).await?;
        let names = html::document_names(&index);
        info!(count = names.len(), "fetching longform documents");

        let requests = names.iter().map(|name| async move {
            let url = self.document_url(name);
            let content = self.fetcher.get_text(&url).await?;
            debug!(name = name.as_str(), bytes = content.len(), "fetched document");
            Ok::<_, FetchError>(LongformDoc {
                name: name.clone(),
                content,
            })
        });

        let docs = try_join_all(requests).await?;
        Ok(LongformDocSet::new(docs))
    }
}
