//! Refresh manager: serve the mirror from disk or pull it again
//!
//! Both corpora go through the same routine. Each corpus is either read from
//! disk (fresh) or fetched (stale, or missing locally). Every fetch finishes
//! before anything is written, so a transport failure anywhere leaves the
//! previous mirror and the freshness record untouched.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::record::{load_or_bootstrap, CacheRecord};
use super::{CacheError, LocalStore};
use crate::config::MirrorConfig;
use crate::data::{
    ApiDocsClient, Fetcher, LongformClient, LongformDocSet, StructuredDocTree,
};

/// A corpus the manager can serve locally or refresh remotely
#[allow(async_fn_in_trait)]
pub trait CorpusSource {
    type Data;

    /// Short name used in log output
    fn label(&self) -> &'static str;

    /// Reads the local copy; `CacheError::NotFound` triggers a refetch
    fn read_local(&self) -> Result<Self::Data, CacheError>;

    /// Pulls a complete copy from the remote source
    async fn fetch_remote(&self) -> Result<Self::Data, CacheError>;

    /// Replaces the local copy
    fn write_local(&self, data: &Self::Data) -> Result<(), CacheError>;
}

/// The structured API tree (`all.json`)
#[derive(Debug, Clone)]
pub struct ApiDocsCorpus {
    store: LocalStore,
    client: ApiDocsClient,
}

impl CorpusSource for ApiDocsCorpus {
    type Data = StructuredDocTree;

    fn label(&self) -> &'static str {
        "api"
    }

    fn read_local(&self) -> Result<StructuredDocTree, CacheError> {
        self.store.read_tree()
    }

    async fn fetch_remote(&self) -> Result<StructuredDocTree, CacheError> {
        Ok(self.client.fetch().await?)
    }

    fn write_local(&self, data: &StructuredDocTree) -> Result<(), CacheError> {
        self.store.write_tree(data)
    }
}

/// The longform markdown documents
#[derive(Debug, Clone)]
pub struct LongformCorpus {
    store: LocalStore,
    client: LongformClient,
}

impl CorpusSource for LongformCorpus {
    type Data = LongformDocSet;

    fn label(&self) -> &'static str {
        "longform"
    }

    fn read_local(&self) -> Result<LongformDocSet, CacheError> {
        self.store.read_longform()
    }

    async fn fetch_remote(&self) -> Result<LongformDocSet, CacheError> {
        Ok(self.client.fetch_all().await?)
    }

    fn write_local(&self, data: &LongformDocSet) -> Result<(), CacheError> {
        self.store.write_longform(data)
    }
}

/// Where a corpus came from during this run
#[derive(Debug)]
enum Obtained<T> {
    Local(T),
    Fetched(T),
}

/// Reads the corpus when fresh, falling back to a fetch when it is stale or missing
async fn obtain<C: CorpusSource>(corpus: &C, stale: bool) -> Result<Obtained<C::Data>, CacheError> {
    if !stale {
        match corpus.read_local() {
            Ok(data) => return Ok(Obtained::Local(data)),
            Err(CacheError::NotFound(path)) => {
                debug!(
                    corpus = corpus.label(),
                    path = %path.display(),
                    "local copy missing, fetching"
                );
            }
            Err(e) => return Err(e),
        }
    }

    corpus.fetch_remote().await.map(Obtained::Fetched)
}

/// Writes a fetched corpus; returns the data and whether it was refreshed
fn commit<C: CorpusSource>(corpus: &C, obtained: Obtained<C::Data>) -> Result<(C::Data, bool), CacheError> {
    match obtained {
        Obtained::Local(data) => Ok((data, false)),
        Obtained::Fetched(data) => {
            corpus.write_local(&data)?;
            info!(corpus = corpus.label(), "local copy updated");
            Ok((data, true))
        }
    }
}

/// Everything a run needs: both corpora and the record now on disk
#[derive(Debug, Clone)]
pub struct ResolvedCorpus {
    pub tree: StructuredDocTree,
    pub longform: LongformDocSet,
    pub record: CacheRecord,
    /// The API tree was fetched during this run
    pub api_refreshed: bool,
    /// The longform set was fetched during this run
    pub longform_refreshed: bool,
}

/// Decides between the local mirror and the remote source
#[derive(Debug, Clone)]
pub struct RefreshManager {
    config: MirrorConfig,
    api: ApiDocsCorpus,
    longform: LongformCorpus,
}

impl RefreshManager {
    /// Creates a manager with a default HTTP client
    pub fn new(config: MirrorConfig) -> Self {
        Self::with_fetcher(config, Fetcher::new())
    }

    /// Creates a manager sharing `fetcher` between both corpora
    pub fn with_fetcher(config: MirrorConfig, fetcher: Fetcher) -> Self {
        let store = LocalStore::new(config.api_docs_path(), config.longform_dir());
        let api = ApiDocsCorpus {
            store: store.clone(),
            client: ApiDocsClient::new(fetcher.clone(), config.api_url.clone()),
        };
        let longform = LongformCorpus {
            store,
            client: LongformClient::new(
                fetcher,
                config.longform_index_url.clone(),
                config.longform_base_url.clone(),
            ),
        };
        Self {
            config,
            api,
            longform,
        }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Loads (or bootstraps) the freshness record, then resolves both corpora
    ///
    /// `force_refresh` behaves like a first run.
    pub async fn run(&self, force_refresh: bool) -> Result<ResolvedCorpus, CacheError> {
        self.run_at(Utc::now(), force_refresh).await
    }

    /// Same as [`run`](Self::run) with an explicit clock
    pub async fn run_at(
        &self,
        now: DateTime<Utc>,
        force_refresh: bool,
    ) -> Result<ResolvedCorpus, CacheError> {
        let loaded = load_or_bootstrap(&self.config.record_path(), now)?;
        self.resolve_corpus_at(loaded.record, loaded.is_first_run || force_refresh, now)
            .await
    }

    /// Resolves both corpora against `record` using the current time
    pub async fn resolve_corpus(
        &self,
        record: CacheRecord,
        is_first_run: bool,
    ) -> Result<ResolvedCorpus, CacheError> {
        self.resolve_corpus_at(record, is_first_run, Utc::now()).await
    }

    /// Resolves both corpora against `record` as of `now`
    ///
    /// # Behavior
    /// - Fresh: both corpora are read from disk; a corpus missing locally is
    ///   fetched and written on its own, without touching the record
    /// - Stale: both corpora are fetched concurrently, then written, then the
    ///   record is stamped with `now` and persisted
    /// - Any error aborts the run; the record on disk is left as it was
    pub async fn resolve_corpus_at(
        &self,
        record: CacheRecord,
        is_first_run: bool,
        now: DateTime<Utc>,
    ) -> Result<ResolvedCorpus, CacheError> {
        let stale = record.is_stale(now, self.config.freshness_window, is_first_run);
        if stale {
            info!(
                first_run = is_first_run,
                age_hours = record.age(now).num_hours(),
                "mirror is stale, refreshing"
            );
        }

        let (tree, longform) =
            tokio::try_join!(obtain(&self.api, stale), obtain(&self.longform, stale))?;
        let (tree, api_refreshed) = commit(&self.api, tree)?;
        let (longform, longform_refreshed) = commit(&self.longform, longform)?;

        let record = if stale {
            let updated = CacheRecord::at(now);
            updated.save(&self.config.record_path())?;
            info!(documents = longform.len(), "mirror refreshed");
            updated
        } else {
            record
        };

        Ok(ResolvedCorpus {
            tree,
            longform,
            record,
            api_refreshed,
            longform_refreshed,
        })
    }
}
