//! Persisted freshness record (`config.json`)

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use super::{store::write_atomic, CacheError};

/// Time of the last complete refresh, in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    #[serde(rename = "lastUpdatedMS")]
    pub last_updated_ms: i64,
}

/// A record together with whether it was just created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedRecord {
    pub record: CacheRecord,
    /// True when no record existed and this one was synthesized
    pub is_first_run: bool,
}

impl CacheRecord {
    /// Creates a record stamped with `now`
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            last_updated_ms: now.timestamp_millis(),
        }
    }

    /// When the mirror was last refreshed, if the stamp is representable
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_updated_ms)
    }

    /// Time elapsed between the last refresh and `now`
    ///
    /// Saturates at `Duration::MAX` / `Duration::MIN` for stamps too far from
    /// `now` to represent.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.timestamp_millis()
            .checked_sub(self.last_updated_ms)
            .and_then(Duration::try_milliseconds)
            .unwrap_or(if self.last_updated_ms < 0 {
                Duration::MAX
            } else {
                Duration::MIN
            })
    }

    /// Whether the mirror must be refreshed
    ///
    /// A first run is always stale, whatever the stamp says.
    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration, is_first_run: bool) -> bool {
        is_first_run || self.age(now) > window
    }

    /// Reads the record at `path`
    ///
    /// # Returns
    /// * `Err(CacheError::NotFound)` if the file does not exist
    /// * `Err(CacheError::Malformed)` if it is not a valid record or its stamp
    ///   is outside the representable date range
    /// * `Err(CacheError::Io)` for any other read failure
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        let content = fs::read_to_string(path).map_err(|e| CacheError::from_io(path, e))?;
        let record: Self = serde_json::from_str(&content).map_err(|e| CacheError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if record.last_updated().is_none() {
            return Err(CacheError::Malformed {
                path: path.to_path_buf(),
                reason: format!("lastUpdatedMS {} is out of range", record.last_updated_ms),
            });
        }
        Ok(record)
    }

    /// Writes the record to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| CacheError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        write_atomic(path, json.as_bytes())
    }
}

/// Loads the record, creating and persisting a fresh one when none exists
///
/// Only a missing file triggers the bootstrap; any other failure is returned.
pub fn load_or_bootstrap(path: &Path, now: DateTime<Utc>) -> Result<LoadedRecord, CacheError> {
    match CacheRecord::load(path) {
        Ok(record) => Ok(LoadedRecord {
            record,
            is_first_run: false,
        }),
        Err(CacheError::NotFound(_)) => {
            info!(path = %path.display(), "no freshness record, treating as first run");
            let record = CacheRecord::at(now);
            record.save(path)?;
            Ok(LoadedRecord {
                record,
                is_first_run: true,
            })
        }
        Err(e) => Err(e),
    }
}
