//! On-disk copies of the two corpora
//!
//! The API tree is a single file. Longform documents are one file each in a
//! directory, plus a `manifest.json` recording their order. Both are replaced
//! whole: the tree through a temp file and rename, the directory through a
//! staging directory swapped into place.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::CacheError;
use crate::data::{LongformDoc, LongformDocSet, StructuredDocTree};

const MANIFEST_FILE: &str = "manifest.json";

/// Writes `contents` to `path` through a sibling temp file and a rename
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CacheError::from_io(parent, e))?;
    }

    let tmp = sibling(path, "tmp");
    fs::write(&tmp, contents).map_err(|e| CacheError::from_io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| CacheError::from_io(path, e))
}

/// `dir/name` -> `dir/name.<suffix>`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Reads and writes the local copies of both corpora
#[derive(Debug, Clone)]
pub struct LocalStore {
    tree_path: PathBuf,
    longform_dir: PathBuf,
}

impl LocalStore {
    pub fn new(tree_path: PathBuf, longform_dir: PathBuf) -> Self {
        Self {
            tree_path,
            longform_dir,
        }
    }

    pub fn tree_path(&self) -> &Path {
        &self.tree_path
    }

    pub fn longform_dir(&self) -> &Path {
        &self.longform_dir
    }

    /// Reads the API tree
    ///
    /// # Returns
    /// * `Err(CacheError::NotFound)` if the file is absent
    /// * `Err(CacheError::Malformed)` if it is not valid JSON
    pub fn read_tree(&self) -> Result<StructuredDocTree, CacheError> {
        let raw = fs::read_to_string(&self.tree_path)
            .map_err(|e| CacheError::from_io(&self.tree_path, e))?;
        StructuredDocTree::parse(raw).map_err(|e| CacheError::Malformed {
            path: self.tree_path.clone(),
            reason: e.to_string(),
        })
    }

    /// Replaces the API tree with the exact text the remote returned
    pub fn write_tree(&self, tree: &StructuredDocTree) -> Result<(), CacheError> {
        write_atomic(&self.tree_path, tree.raw().as_bytes())?;
        debug!(path = %self.tree_path.display(), "wrote API tree");
        Ok(())
    }

    /// Reads every longform document listed in the manifest, in manifest order
    ///
    /// A missing manifest or a missing listed document is `NotFound`.
    pub fn read_longform(&self) -> Result<LongformDocSet, CacheError> {
        let manifest_path = self.longform_dir.join(MANIFEST_FILE);
        let manifest = fs::read_to_string(&manifest_path)
            .map_err(|e| CacheError::from_io(&manifest_path, e))?;
        let names: Vec<String> =
            serde_json::from_str(&manifest).map_err(|e| CacheError::Malformed {
                path: manifest_path.clone(),
                reason: e.to_string(),
            })?;

        let mut docs = Vec::with_capacity(names.len());
        for name in names {
            let path = self.document_path(&self.longform_dir, &name)?;
            let content = fs::read_to_string(&path).map_err(|e| CacheError::from_io(&path, e))?;
            docs.push(LongformDoc { name, content });
        }

        Ok(LongformDocSet::new(docs))
    }

    /// Replaces the whole longform directory with `set`
    ///
    /// Documents are written into a staging directory first; the live
    /// directory is only swapped out once every write has succeeded.
    pub fn write_longform(&self, set: &LongformDocSet) -> Result<(), CacheError> {
        let staging = sibling(&self.longform_dir, "staging");
        if staging.exists() {
            fs::remove_dir_all(&staging).map_err(|e| CacheError::from_io(&staging, e))?;
        }
        fs::create_dir_all(&staging).map_err(|e| CacheError::from_io(&staging, e))?;

        for doc in set.docs() {
            let path = self.document_path(&staging, &doc.name)?;
            fs::write(&path, &doc.content).map_err(|e| CacheError::from_io(&path, e))?;
        }

        let manifest_path = staging.join(MANIFEST_FILE);
        let manifest = serde_json::to_string_pretty(&set.names()).map_err(|e| {
            CacheError::Malformed {
                path: manifest_path.clone(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&manifest_path, manifest).map_err(|e| CacheError::from_io(&manifest_path, e))?;

        let retired = sibling(&self.longform_dir, "old");
        if retired.exists() {
            fs::remove_dir_all(&retired).map_err(|e| CacheError::from_io(&retired, e))?;
        }
        if self.longform_dir.exists() {
            fs::rename(&self.longform_dir, &retired)
                .map_err(|e| CacheError::from_io(&self.longform_dir, e))?;
        }
        fs::rename(&staging, &self.longform_dir)
            .map_err(|e| CacheError::from_io(&self.longform_dir, e))?;
        if retired.exists() {
            fs::remove_dir_all(&retired).map_err(|e| CacheError::from_io(&retired, e))?;
        }

        debug!(dir = %self.longform_dir.display(), count = set.len(), "wrote longform documents");
        Ok(())
    }

    /// Path of a document inside `dir`; names must be plain file names
    fn document_path(&self, dir: &Path, name: &str) -> Result<PathBuf, CacheError> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && name != MANIFEST_FILE;
        if !plain {
            return Err(CacheError::Malformed {
                path: dir.to_path_buf(),
                reason: format!("invalid document name '{}'", name),
            });
        }
        Ok(dir.join(name))
    }
}
