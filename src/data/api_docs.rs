//! Client for the structured Node.js API tree (`all.json`)

use serde_json::Value;

use super::{FetchError, Fetcher};

/// The remote API description
///
/// Kept as the exact text the remote returned so it can be written back
/// byte-for-byte, alongside its parsed form for searching and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredDocTree {
    raw: String,
    root: Value,
}

impl StructuredDocTree {
    /// Parses `raw` as JSON, keeping the original text
    pub fn parse(raw: String) -> Result<Self, serde_json::Error> {
        let root = serde_json::from_str(&raw)?;
        Ok(Self { raw, root })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn root(&self) -> &Value {
        &self.root
    }
}

/// Client for fetching the structured API tree
#[derive(Debug, Clone)]
pub struct ApiDocsClient {
    fetcher: Fetcher,
    url: String,
}

impl ApiDocsClient {
    pub fn new(fetcher: Fetcher, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }

    /// Fetches and parses the API tree
    ///
    /// A payload that is not valid JSON is reported as `FetchError::Malformed`
    /// so it never reaches the local store.
    pub async fn fetch(&self) -> Result<StructuredDocTree, FetchError> {
        let raw = self.fetcher.get_text(&self.url).await?;
        StructuredDocTree::parse(raw).map_err(|e| FetchError::Malformed {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }
}
