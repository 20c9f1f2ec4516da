//! Shared test utilities for the article-relink test suite.
//!
//! Builders for throwaway content trees: a section/folder layout under a
//! `TempDir`, an `article.html` with a `.content` div, and numbered image
//! files. Tests get an isolated tree they can mutate freely.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let folder = make_article(tmp.path(), "articles", "alpha",
//!     &article_html(&["https://cdn.x/a.jpg"]));
//! make_images(&folder, &[2]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

/// Create an article folder under `base/section/name` containing the given
/// HTML as `article.html`. Returns the folder path.
pub fn make_article(base: &Path, section: &str, name: &str, html: &str) -> PathBuf {
    let folder = base.join(section).join(name);
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("article.html"), html).unwrap();
    folder
}

/// Create `image-<N>.webp` placeholder files in a folder.
pub fn make_images(folder: &Path, indices: &[u32]) {
    for index in indices {
        fs::write(folder.join(format!("image-{index}.webp")), "webp bytes").unwrap();
    }
}

/// Build a full article document with one `<img>` per URL inside the
/// `.content` div.
pub fn article_html(img_urls: &[&str]) -> String {
    let mut body = String::new();
    for url in img_urls {
        body.push_str(&format!("<p><img src=\"{url}\"></p>\n"));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Article</title></head>\n<body>\n\
         <header><img src=\"image-1.webp\" class=\"cover\"></header>\n\
         <div class=\"content\">\n{body}</div>\n</body>\n</html>\n"
    )
}
