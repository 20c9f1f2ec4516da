//! CLI output formatting.
//!
//! The report keeps the voice of the publishing workflow it belongs to:
//! user-facing strings are Italian, status markers are `✓`/`✗`, and folders
//! lead with a `📁` header. Layout:
//!
//! ```text
//! Elaborazione articoli in: /path/to/content
//! ================================================================================
//! Trovate 2 cartelle con article.html
//!
//! 📁 first-post
//!    Immagini nell'HTML: 5, File disponibili: 4
//!    ✓ [1] ...cdn.example.com/2024/photo-one.jpg → image-2.webp
//!    ✓ [2] ...cdn.example.com/2024/photo-two.jpg → image-3.webp
//!    ✗ [3] ...cdn.example.com/2024/photo-three.jpg → image-4.webp
//!    ... e altre 2 sostituzioni
//!    ⚠️  1 immagini mancanti: ['image-4.webp']
//!
//! ================================================================================
//! Riepilogo:
//!   - Cartelle elaborate: 2
//!   - Sostituzioni effettuate: 5
//!   - Avvisi: 1
//! ```
//!
//! Only folders with changes or errors get a block; clean folders stay
//! silent. At most 3 change lines are shown per folder, with a truncation
//! note for the rest, and long source URLs are cut to their last 40
//! characters.
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::types::ArticleResult;
use std::path::Path;

/// Horizontal rule width used by the header and summary blocks.
const RULE_WIDTH: usize = 80;

/// Maximum change lines shown per folder before truncating.
const MAX_SHOWN_CHANGES: usize = 3;

/// Displayed length of the source URL tail.
const URL_TAIL_CHARS: usize = 40;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn mode_prefix(dry_run: bool) -> &'static str {
    if dry_run { "[DRY-RUN] " } else { "" }
}

/// Last `max` characters of a URL, on char boundaries.
fn url_tail(url: &str, max: usize) -> &str {
    let count = url.chars().count();
    if count <= max {
        return url;
    }
    let skip = count - max;
    match url.char_indices().nth(skip) {
        Some((idx, _)) => &url[idx..],
        None => url,
    }
}

// ============================================================================
// Header
// ============================================================================

/// Format the run header: base directory, rule, folder count.
pub fn format_header(base: &Path, folder_count: usize, dry_run: bool) -> Vec<String> {
    vec![
        format!(
            "{}Elaborazione articoli in: {}",
            mode_prefix(dry_run),
            base.display()
        ),
        rule(),
        format!("Trovate {} cartelle con article.html", folder_count),
        String::new(),
    ]
}

/// Print the run header to stdout.
pub fn print_header(base: &Path, folder_count: usize, dry_run: bool) {
    for line in format_header(base, folder_count, dry_run) {
        println!("{}", line);
    }
}

// ============================================================================
// Per-folder blocks
// ============================================================================

/// Format one folder's block. Empty when the folder had neither changes nor
/// errors; such folders are not reported at all.
pub fn format_article_result(result: &ArticleResult) -> Vec<String> {
    if result.changes.is_empty() && result.errors.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(format!("📁 {}", result.folder));
    lines.push(format!(
        "   Immagini nell'HTML: {}, File disponibili: {}",
        result.images_in_html, result.images_available
    ));

    for change in result.changes.iter().take(MAX_SHOWN_CHANGES) {
        let status = if change.exists { "✓" } else { "✗" };
        lines.push(format!(
            "   {} [{}] ...{} → {}",
            status,
            change.index,
            url_tail(&change.old_url, URL_TAIL_CHARS),
            change.new_url
        ));
    }

    if result.changes.len() > MAX_SHOWN_CHANGES {
        lines.push(format!(
            "   ... e altre {} sostituzioni",
            result.changes.len() - MAX_SHOWN_CHANGES
        ));
    }

    for error in &result.errors {
        lines.push(format!("   ⚠️  {}", error));
    }

    lines
}

/// Print one folder's block to stdout.
pub fn print_article_result(result: &ArticleResult) {
    for line in format_article_result(result) {
        println!("{}", line);
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Format the closing summary block with run totals.
pub fn format_summary(
    folder_count: usize,
    total_changes: usize,
    total_errors: usize,
    dry_run: bool,
) -> Vec<String> {
    let verb = if dry_run {
        "da effettuare"
    } else {
        "effettuate"
    };

    let mut lines = vec![
        String::new(),
        rule(),
        format!("{}Riepilogo:", mode_prefix(dry_run)),
        format!("  - Cartelle elaborate: {}", folder_count),
        format!("  - Sostituzioni {}: {}", verb, total_changes),
        format!("  - Avvisi: {}", total_errors),
    ];

    if dry_run && total_changes > 0 {
        lines.push(String::new());
        lines.push("Per applicare le modifiche, esegui di nuovo senza --dry-run".to_string());
    }

    lines
}

/// Print the summary block to stdout.
pub fn print_summary(folder_count: usize, total_changes: usize, total_errors: usize, dry_run: bool) {
    for line in format_summary(folder_count, total_changes, total_errors, dry_run) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
