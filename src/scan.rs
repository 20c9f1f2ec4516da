//! Folder discovery and image inventory.
//!
//! The content tree has a fixed, shallow layout: article folders live one
//! level below the section directories, never deeper.
//!
//! ```text
//! base/
//! ├── relink.toml                  # Run configuration (optional)
//! ├── articles/
//! │   ├── first-post/
//! │   │   ├── article.html
//! │   │   ├── image-1.webp         # Cover image, managed elsewhere
//! │   │   ├── image-2.webp         # In-content images, numbered from 2
//! │   │   └── image-3.webp
//! │   └── second-post/
//! │       └── article.html
//! └── feedback-friday/
//!     └── week-12/
//!         ├── article.html
//!         └── image-2.webp
//! ```
//!
//! A folder qualifies as an article folder when it directly contains the
//! configured article file. Section directories that don't exist are skipped
//! silently; a tree with only `articles/` is fine.
//!
//! The inventory for a folder is the set of direct child files following the
//! `<prefix><N>.<ext>` convention, sorted ascending by `N`. Numeric sorting
//! matters: `image-10.webp` comes after `image-2.webp`, which lexicographic
//! order would get wrong.

use crate::config::RelinkConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image filename without a parseable index: {0} in {1}")]
    BadImageIndex(String, PathBuf),
}

/// Find all article folders under the configured sections of `base`.
///
/// Enumerates the immediate children of each section directory and keeps
/// those containing the article file. Results from all sections are merged
/// and sorted by path.
pub fn find_article_folders(
    base: &Path,
    config: &RelinkConfig,
) -> Result<Vec<PathBuf>, ScanError> {
    let mut folders = Vec::new();

    for section in &config.sections {
        let section_path = base.join(section);
        if !section_path.is_dir() {
            continue;
        }
        for entry in fs::read_dir(&section_path)? {
            let path = entry?.path();
            if path.is_dir() && path.join(&config.article_file).is_file() {
                folders.push(path);
            }
        }
    }

    folders.sort();
    Ok(folders)
}

/// List the local image filenames available in an article folder.
///
/// Returns names matching `<prefix><N>.<ext>`, sorted ascending by `N`.
/// A filename that matches the prefix and extension but has no digits
/// between them is an error.
pub fn available_images(
    folder: &Path,
    config: &RelinkConfig,
) -> Result<Vec<String>, ScanError> {
    let suffix = format!(".{}", config.image_ext);
    let mut images = Vec::new();

    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        let name = name.to_string_lossy();
        if name.starts_with(&config.image_prefix) && name.ends_with(&suffix) {
            let index = image_index(&name, &config.image_prefix)
                .ok_or_else(|| ScanError::BadImageIndex(name.to_string(), folder.to_path_buf()))?;
            images.push((index, name.to_string()));
        }
    }

    images.sort();
    Ok(images.into_iter().map(|(_, name)| name).collect())
}

/// Parse the numeric index from an image filename: the digit run immediately
/// after the prefix. `image-12.webp` → Some(12), `image-x.webp` → None.
fn image_index(name: &str, prefix: &str) -> Option<u32> {
    let rest = name.strip_prefix(prefix)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
