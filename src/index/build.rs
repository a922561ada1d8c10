use crate::error::{IndexError, Result};
use crate::index::types::{Index, RecordOrder};
use crate::utils::progress::{document_spinner, ProgressBar};
use crate::utils::{fold_case, tokenize_words};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Options for a build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Record ordering inside each entry
    pub record_order: RecordOrder,
    /// Descend into symlinked directories and index symlinked files
    pub follow_links: bool,
    /// Show a spinner while documents are indexed
    pub show_progress: bool,
}

/// Outcome counters for a finished build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub documents: usize,
    pub skipped: usize,
}

/// Accumulates documents from a file or directory tree into an [`Index`].
pub struct IndexBuilder {
    options: BuildOptions,
    index: Index,
    stats: BuildStats,
    progress: Option<ProgressBar>,
}

impl IndexBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            index: Index::new(options.record_order),
            options,
            stats: BuildStats::default(),
            progress: None,
        }
    }

    /// Index `root`, which may be a directory (walked recursively) or a
    /// single regular file.
    ///
    /// Fails without an index if the root itself cannot be read or is some
    /// other kind of file. Unreadable entries found during a directory walk
    /// are logged and skipped.
    pub fn build(mut self, root: &Path) -> Result<(Index, BuildStats)> {
        let metadata = fs::metadata(root).map_err(|e| IndexError::io(root, e))?;

        self.progress = document_spinner(self.options.show_progress);

        if metadata.is_dir() {
            // The walker reports an unreadable root as just another entry
            fs::read_dir(root).map_err(|e| IndexError::io(root, e))?;
            self.walk(root);
        } else if metadata.is_file() {
            let content = fs::read(root).map_err(|e| IndexError::io(root, e))?;
            self.add_document(&root.display().to_string(), &content);
        } else {
            return Err(IndexError::NotIndexable {
                path: root.to_path_buf(),
            });
        }

        if let Some(spinner) = self.progress.take() {
            spinner.finish_with_message("done");
        }

        info!(
            root = %root.display(),
            documents = self.stats.documents,
            skipped = self.stats.skipped,
            tokens = self.index.len(),
            "built index"
        );

        Ok((self.index, self.stats))
    }

    fn walk(&mut self, root: &Path) {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(self.options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    self.stats.skipped += 1;
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            // Directories are descended by the walker; links (unless
            // followed), sockets and devices are not documents.
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            match fs::read(path) {
                Ok(content) => self.add_document(&path.display().to_string(), &content),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable document");
                    self.stats.skipped += 1;
                }
            }
        }
    }

    fn add_document(&mut self, path: &str, content: &[u8]) {
        let folded = fold_case(content);
        let tokens = tokenize_words(&folded);
        debug!(path, tokens = tokens.len(), "indexing document");

        for token in &tokens {
            self.index.add_occurrence(token, path);
        }

        self.stats.documents += 1;
        if let Some(ref spinner) = self.progress {
            spinner.inc(1);
        }
    }
}

/// Build an index from `root` with `options`.
pub fn build_index(root: &Path, options: &BuildOptions) -> Result<Index> {
    IndexBuilder::new(options.clone())
        .build(root)
        .map(|(index, _)| index)
}
