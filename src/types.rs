//! Shared report types.
//!
//! These types describe the outcome of a run. They are accumulated in memory,
//! rendered by [`crate::output`], and optionally serialized to JSON via
//! `--report`, so they must stay stable across modules.

use serde::{Deserialize, Serialize};

/// One attempted URL substitution, successful or not.
///
/// A record is produced for every `<img>` occurrence in the fragment, in
/// document order. `new_url` is always the expected local filename for the
/// occurrence's position, even when that file is absent on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// 1-based position of the `<img>` occurrence within the fragment
    pub index: usize,
    /// URL found in the document
    pub old_url: String,
    /// Expected local filename for this position
    pub new_url: String,
    /// Whether the expected file was present in the folder's inventory
    pub exists: bool,
}

/// Outcome of processing one article folder.
///
/// Errors are collected, not raised: a result is returned even when the
/// article could not be rewritten, so one folder never halts the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResult {
    /// Folder name (last path component)
    pub folder: String,
    /// Full folder path
    pub path: String,
    /// One record per `<img>` occurrence, in document order
    pub changes: Vec<ChangeRecord>,
    /// Collected error strings (missing fragment, missing files)
    pub errors: Vec<String>,
    /// Number of `<img>` occurrences found in the fragment
    pub images_in_html: usize,
    /// Number of local image files available in the folder
    pub images_available: usize,
}

impl ArticleResult {
    /// Empty result for a folder, before any processing happened.
    pub fn new(folder: String, path: String) -> Self {
        Self {
            folder,
            path,
            changes: Vec::new(),
            errors: Vec::new(),
            images_in_html: 0,
            images_available: 0,
        }
    }
}

/// Full run report, written as pretty JSON when `--report` is given.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// Base directory that was scanned
    pub base: String,
    /// Whether this was a preview run
    pub dry_run: bool,
    /// Number of article folders processed
    pub folders_processed: usize,
    /// Total change records across all articles
    pub total_changes: usize,
    /// Total collected error strings across all articles
    pub total_errors: usize,
    /// Per-article outcomes, in processing order
    pub articles: Vec<ArticleResult>,
}
