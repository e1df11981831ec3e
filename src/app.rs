//! Application flow for a single invocation
//!
//! Resolves the mirror (unless the action needs none), selects what to show
//! and renders it to a string for the caller to print.

use thiserror::Error;
use tracing::warn;

use crate::cache::{CacheError, RefreshManager, ResolvedCorpus};
use crate::cli::{Action, StartupConfig};
use crate::search::find_nodes;
use crate::ui::{
    columnize, columns::DEFAULT_WIDTH, prog_info, render, summary, DocNode, Palette, ProgInfo,
    RenderContext, RenderError,
};

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// `--doc` named a document the mirror does not have
    #[error("No longform document named '{0}'. Use --list-docs to see what is available")]
    UnknownDoc(String),
}

/// A configured run of the tool
#[derive(Debug, Clone)]
pub struct App {
    startup: StartupConfig,
    manager: RefreshManager,
    width: usize,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        let manager = RefreshManager::new(startup.mirror.clone());
        Self {
            startup,
            manager,
            width: DEFAULT_WIDTH,
        }
    }

    /// Sets the line width used for column lists
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    fn palette(&self) -> Palette {
        if self.startup.color {
            Palette::colored()
        } else {
            Palette::plain()
        }
    }

    /// Runs the requested action and returns the text to print
    pub async fn execute(&self) -> Result<String, AppError> {
        if self.startup.action == Action::Info {
            return Ok(prog_info(&ProgInfo::current(), self.palette()));
        }

        let corpus = self.manager.run(self.startup.force_refresh).await?;
        self.present(&corpus)
    }

    /// Renders the requested action against an already resolved mirror
    pub fn present(&self, corpus: &ResolvedCorpus) -> Result<String, AppError> {
        let palette = self.palette();

        match &self.startup.action {
            Action::Info => Ok(prog_info(&ProgInfo::current(), palette)),
            Action::ListDocs => Ok(columnize(&corpus.longform.names(), self.width)),
            Action::Doc(name) => corpus
                .longform
                .get(name)
                .map(|doc| doc.content.clone())
                .ok_or_else(|| AppError::UnknownDoc(name.clone())),
            Action::Query { query, inspect } => {
                let matches = find_nodes(corpus.tree.root(), query);
                if matches.is_empty() {
                    warn!(query = query.as_str(), "no matching entries");
                }

                let ctx = RenderContext::new(query.as_str())
                    .with_palette(palette)
                    .with_width(self.width);

                let mut blocks = Vec::with_capacity(matches.len() + 1);
                for value in &matches {
                    let node = if *inspect {
                        DocNode::runtime(value)
                    } else {
                        DocNode::structured(value)?
                    };
                    blocks.push(render(&node, &ctx));
                }
                if matches.len() != 1 {
                    blocks.push(summary(matches.len(), palette));
                }

                Ok(blocks.join("\n\n"))
            }
        }
    }
}
