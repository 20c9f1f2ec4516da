//! Per-article processing.
//!
//! Orchestrates one folder end to end: read the HTML, snapshot the image
//! inventory, extract the `.content` fragment, run the rewrite engine, and
//! splice the result back into the document when applying.
//!
//! Two failure kinds are designed into the flow and collected on the
//! [`ArticleResult`] instead of raised: a document without a `.content`
//! fragment, and references whose expected file is missing. Everything else
//! (unreadable file, malformed inventory name) propagates as a
//! [`ProcessError`] and aborts the run.

use crate::config::RelinkConfig;
use crate::extract;
use crate::rewrite;
use crate::scan::{self, ScanError};
use crate::types::ArticleResult;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Process one article folder, optionally persisting the rewritten HTML.
///
/// With `dry_run` set, every step runs except the final write. The file is
/// only rewritten when at least one change record exists; untouched
/// documents are never rewritten byte-for-byte.
pub fn process_article(
    folder: &Path,
    config: &RelinkConfig,
    dry_run: bool,
) -> Result<ArticleResult, ProcessError> {
    let folder_name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mut result = ArticleResult::new(folder_name, folder.display().to_string());

    let article_path = folder.join(&config.article_file);
    let html = fs::read_to_string(&article_path)?;

    let inventory = scan::available_images(folder, config)?;
    result.images_available = inventory.len();

    let Some(fragment) = extract::extract_content(&html) else {
        result.errors.push("Sezione .content non trovata".to_string());
        return Ok(result);
    };

    let (new_body, changes) = rewrite::rewrite_images(&fragment.body, &inventory, config);
    result.images_in_html = changes.len();

    let missing: Vec<&str> = changes
        .iter()
        .filter(|c| !c.exists)
        .map(|c| c.new_url.as_str())
        .collect();
    if !missing.is_empty() {
        result
            .errors
            .push(format!("{} immagini mancanti: {}", missing.len(), quoted_list(&missing)));
    }

    if !dry_run && !changes.is_empty() {
        let mut new_html = String::with_capacity(html.len() + new_body.len());
        new_html.push_str(&html[..fragment.start]);
        new_html.push_str(&new_body);
        new_html.push_str(&html[fragment.end..]);
        fs::write(&article_path, new_html)?;
    }

    result.changes = changes;
    Ok(result)
}

/// Format names as a quoted, bracketed list: `['a.webp', 'b.webp']`.
fn quoted_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", quoted.join(", "))
}
