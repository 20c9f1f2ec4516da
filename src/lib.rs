//! # Article Relink
//!
//! Rewrites `<img src="...">` references inside article HTML so that remote
//! image URLs point at the sequential local files already sitting next to the
//! document (`image-2.webp`, `image-3.webp`, …). The tool walks a content
//! tree of article folders, rewrites each `article.html` in place, and prints
//! a per-folder report.
//!
//! # Architecture: One Pass Per Article
//!
//! Each folder goes through the same short pipeline:
//!
//! ```text
//! 1. Scan      base/        →  article folders + image inventory
//! 2. Extract   article.html →  the .content fragment (byte span + text)
//! 3. Rewrite   fragment     →  new fragment + change records
//! 4. Persist   document     →  fragment spliced back at its original span
//! ```
//!
//! The rewrite itself is a pure function from (fragment, inventory) to
//! (new fragment, change list); everything around it is filesystem glue and
//! console reporting.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Finds article folders under the section directories, snapshots each folder's numbered image inventory |
//! | [`extract`] | Locates the `.content` fragment and its byte span in the document |
//! | [`rewrite`] | Pairs `<img>` occurrences with expected filenames by position and swaps URLs in place |
//! | [`process`] | Per-folder orchestration: read, rewrite, splice, write |
//! | [`config`] | Optional `relink.toml` loading and validation |
//! | [`types`] | Report types shared across modules and serialized via `--report` |
//! | [`output`] | CLI report formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Regex Boundary, Not a DOM
//!
//! The rewritten region is delimited by a single non-greedy pattern
//! (`<div class="content">` … the first `</div>` before `</body>`) instead of
//! an HTML parser. Articles are machine-generated with a fixed layout, so the
//! boundary is stable, and staying at the string level guarantees that every
//! byte outside the fragment passes through untouched. An HTML parser would
//! re-serialize the whole document and reformat markup it has no business
//! changing.
//!
//! ## Positional Pairing
//!
//! The i-th `<img>` occurrence maps to `image-(i+2).webp` by position alone;
//! nothing correlates filenames with URL content. Images are saved in
//! document order when an article is pulled down, with `image-1` reserved for
//! the cover, so position is the one piece of information both sides share.
//! The convention is enforced by the publishing workflow, not verified here.
//!
//! ## Offset-Tracked Substitution
//!
//! Replacements change the fragment's length, so match spans from the
//! original text are shifted by a running byte delta as swaps are applied
//! left to right. Occurrences whose expected file is missing are recorded
//! but skipped, leaving the original URL in place.
//!
//! ## Report Language
//!
//! User-facing report strings are Italian: the tool belongs to an Italian
//! publishing workflow and its operators read `immagini mancanti`, not
//! "missing images". Code, docs, and identifiers stay English.

pub mod config;
pub mod extract;
pub mod output;
pub mod process;
pub mod rewrite;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
