//! The positional URL rewrite engine.
//!
//! Pairs each `<img src="...">` occurrence in a fragment, in document order,
//! with the expected local filename for its position: the i-th occurrence
//! (0-based) maps to `image-(i+2).webp` under the default config. Pairing is
//! positional on purpose: images appear in the HTML in the same order the
//! numbered files were saved, with image 1 reserved for the cover. The
//! convention is enforced by the surrounding publishing workflow, not
//! verified here.
//!
//! Replacements of differing lengths shift every later span, so a running
//! byte offset is carried across substitutions. A URL that already equals
//! the expected filename is replaced like any other; the swap is a no-op,
//! which is what makes a second run over rewritten content idempotent.

use crate::config::RelinkConfig;
use crate::types::ChangeRecord;
use regex::Regex;
use std::sync::LazyLock;

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img\s+src="([^"]+)""#).expect("img src pattern"));

/// Rewrite image URLs in a fragment against the folder's inventory.
///
/// Returns the (possibly partially) rewritten fragment and one
/// [`ChangeRecord`] per occurrence, in scan order. Occurrences whose
/// expected file is missing from the inventory are recorded but left
/// unmodified in the output.
pub fn rewrite_images(
    content: &str,
    inventory: &[String],
    config: &RelinkConfig,
) -> (String, Vec<ChangeRecord>) {
    let spans: Vec<(usize, usize, &str)> = IMG_SRC_RE
        .captures_iter(content)
        .filter_map(|captures| captures.get(1))
        .map(|url| (url.start(), url.end(), url.as_str()))
        .collect();

    if spans.is_empty() {
        return (content.to_string(), Vec::new());
    }

    let mut new_content = content.to_string();
    let mut offset: isize = 0;
    let mut changes = Vec::with_capacity(spans.len());

    for (i, &(start, end, old_url)) in spans.iter().enumerate() {
        let expected = config.expected_filename(i);

        if inventory.iter().any(|name| name == &expected) {
            // Spans were captured on the original text; earlier swaps may
            // have changed its length, so shift by the accumulated delta.
            let start = (start as isize + offset) as usize;
            let end = (end as isize + offset) as usize;
            offset += expected.len() as isize - old_url.len() as isize;
            new_content.replace_range(start..end, &expected);

            changes.push(ChangeRecord {
                index: i + 1,
                old_url: old_url.to_string(),
                new_url: expected,
                exists: true,
            });
        } else {
            changes.push(ChangeRecord {
                index: i + 1,
                old_url: old_url.to_string(),
                new_url: expected,
                exists: false,
            });
        }
    }

    (new_content, changes)
}
