//! Content fragment extraction.
//!
//! Articles are full HTML documents, but only the body of the
//! `<div class="content">` element is ever rewritten. Rather than parse the
//! document into a DOM, the fragment is located with a single non-greedy
//! pattern: the opening marker, anything up to the first `</div>` that is
//! immediately followed by `</body>` (optionally separated by whitespace).
//!
//! The returned byte offsets point into the original document, so the caller
//! can splice a rewritten fragment back in and leave every other byte of the
//! file untouched.

use regex::Regex;
use std::sync::LazyLock;

static CONTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div class="content">(.*?)</div>\s*</body>"#).expect("content pattern")
});

/// The `.content` fragment of an article, with its location in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Byte offset of the fragment body within the document
    pub start: usize,
    /// Byte offset one past the end of the fragment body
    pub end: usize,
    /// The fragment body text
    pub body: String,
}

/// Extract the first `.content` fragment from an HTML document.
///
/// Returns `None` when the document has no such fragment; the caller records
/// that as a per-article error. Only the first match is used even if the
/// document somehow contains several.
pub fn extract_content(html: &str) -> Option<Fragment> {
    let captures = CONTENT_RE.captures(html)?;
    let body = captures.get(1)?;
    Some(Fragment {
        start: body.start(),
        end: body.end(),
        body: body.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_fragment_body() {
        let html = r#"<html><body><div class="content"><p>hello</p></div></body></html>"#;
        let fragment = extract_content(html).unwrap();

        assert_eq!(fragment.body, "<p>hello</p>");
        assert_eq!(&html[fragment.start..fragment.end], "<p>hello</p>");
    }

    #[test]
    fn fragment_spans_newlines() {
        let html = "<html><body><div class=\"content\">\n<p>a</p>\n<p>b</p>\n</div>\n</body></html>";
        let fragment = extract_content(html).unwrap();

        assert_eq!(fragment.body, "\n<p>a</p>\n<p>b</p>\n");
    }

    #[test]
    fn whitespace_between_div_and_body_close() {
        let html = "<body><div class=\"content\">x</div>   \n\t </body>";
        let fragment = extract_content(html).unwrap();

        assert_eq!(fragment.body, "x");
    }

    #[test]
    fn none_when_marker_absent() {
        let html = r#"<html><body><div class="main">x</div></body></html>"#;
        assert!(extract_content(html).is_none());
    }

    #[test]
    fn none_when_closing_boundary_absent() {
        let html = r#"<div class="content">never closed"#;
        assert!(extract_content(html).is_none());
    }

    #[test]
    fn first_closing_boundary_wins() {
        // Inner div closes first; the non-greedy match stops at the first
        // </div> followed by </body>, so the fragment ends there.
        let html = r#"<body><div class="content">a</div></body><div class="content">b</div></body>"#;
        let fragment = extract_content(html).unwrap();

        assert_eq!(fragment.body, "a");
    }

    #[test]
    fn nested_divs_truncate_at_first_boundary() {
        // A nested div whose close precedes </body> ends the match early.
        // Known limit of the regex boundary; documents are expected to keep
        // the content div flat at its end.
        let html = r#"<body><p>x</p><div class="content"><div>inner</div></body>"#;
        let fragment = extract_content(html).unwrap();

        assert_eq!(fragment.body, "<div>inner");
    }
}
