//! Mirror configuration
//!
//! Holds the endpoints, freshness window and on-disk locations used by the
//! refresh manager. Everything the manager touches comes from here so tests
//! can point it at a temporary directory and a fake server.

use chrono::Duration;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Remote JSON description of the whole Node.js API
pub const DEFAULT_API_URL: &str = "https://nodejs.org/api/all.json";

/// Page listing every longform document
pub const DEFAULT_LONGFORM_INDEX_URL: &str = "https://nodejs.org/api/";

/// Prefix each longform document name is appended to
pub const DEFAULT_LONGFORM_BASE_URL: &str = "https://nodejs.org/api";

/// Default freshness window in days
pub const DEFAULT_MAX_AGE_DAYS: u32 = 7;

/// Configuration for the local documentation mirror
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Endpoint returning the structured API tree
    pub api_url: String,
    /// Endpoint returning the longform index page
    pub longform_index_url: String,
    /// Base URL for individual longform documents
    pub longform_base_url: String,
    /// How old the mirror may get before it is refreshed
    pub freshness_window: Duration,
    /// Root directory for every persisted file
    pub data_dir: PathBuf,
}

impl MirrorConfig {
    /// Creates a config rooted at the XDG data directory (`~/.local/share/node-help/` on Linux)
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn default_location() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "node-help")?;
        Some(Self::with_data_dir(project_dirs.data_dir().to_path_buf()))
    }

    /// Creates a config with the default endpoints rooted at `data_dir`
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            longform_index_url: DEFAULT_LONGFORM_INDEX_URL.to_string(),
            longform_base_url: DEFAULT_LONGFORM_BASE_URL.to_string(),
            freshness_window: Duration::days(DEFAULT_MAX_AGE_DAYS as i64),
            data_dir,
        }
    }

    /// Points every endpoint at `base` (a fake server in tests)
    pub fn with_remote_base(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.api_url = format!("{}/all.json", base);
        self.longform_index_url = format!("{}/", base);
        self.longform_base_url = base.to_string();
        self
    }

    pub fn with_max_age_days(mut self, days: u32) -> Self {
        self.freshness_window = Duration::days(days as i64);
        self
    }

    /// Path of the persisted freshness record
    pub fn record_path(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Path of the structured API tree file
    pub fn api_docs_path(&self) -> PathBuf {
        self.data_dir.join("docs").join("node-all.json")
    }

    /// Directory holding one file per longform document
    pub fn longform_dir(&self) -> PathBuf {
        self.data_dir.join("docs").join("md")
    }
}
