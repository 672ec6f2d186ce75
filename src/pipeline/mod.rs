//! Content-filter entry point: wires the heading scanner and the outline
//! renderer into a single pass over one rendered document.
//!
//! The flow is one-way. `prepare_content` runs the scanner once and returns
//! the mutated markup together with the collected items; `expand_shortcodes`
//! renders those items into every `[outline]` marker. The item list is owned
//! by the caller and handed to the renderer by reference, so there is no
//! shared state between documents.

use kuchikikiki::NodeRef;
use tendril::TendrilSink;

use crate::shortcode::{self, SHORTCODE_PREFIX, SHORTCODE_REGEX};
use crate::toc::{render_outline, scan_headings, TocItem, TocOptions};
use crate::utils::error::BoxResult;

/// Result of one scan pass over one document
#[derive(Debug)]
pub struct PreparedContent {
    /// The document markup, with heading ids assigned when any were found
    pub html: String,
    /// Headings collected by the scan, in document order
    pub items: Vec<TocItem>,
}

/// Result of a full process pass (scan + marker expansion)
#[derive(Debug)]
pub struct Processed {
    pub html: String,
    pub items: Vec<TocItem>,
    /// Number of markers that were expanded
    pub expanded: usize,
}

/// Scan a document for headings and assign anchor ids.
///
/// Short-circuits, returning the input unchanged with no items, unless this
/// is the primary document render and the content contains the `[outline`
/// marker substring. When no headings are found the original string is also
/// returned byte-for-byte, skipping the serialization round-trip.
pub fn prepare_content(content: &str, is_primary: bool) -> BoxResult<PreparedContent> {
    if !is_primary || !content.contains(SHORTCODE_PREFIX) {
        return Ok(PreparedContent {
            html: content.to_string(),
            items: Vec::new(),
        });
    }

    let document = kuchikikiki::parse_html().one(content);
    let items = scan_headings(&document);

    if items.is_empty() {
        return Ok(PreparedContent {
            html: content.to_string(),
            items,
        });
    }

    let html = serialize_content(&document, has_document_wrapper(content))?;
    Ok(PreparedContent { html, items })
}

/// Replace every `[outline]` marker with a rendered outline. Each marker's
/// attributes are layered over `defaults`, and all markers render against the
/// same item list (one scan, any number of renders).
pub fn expand_shortcodes(content: &str, items: &[TocItem], defaults: &TocOptions) -> String {
    SHORTCODE_REGEX
        .replace_all(content, |caps: &regex::Captures| {
            let raw = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let options = shortcode::parse_attributes(raw).into_options(defaults);
            render_outline(items, &options)
        })
        .into_owned()
}

/// Full pass over one document: scan, then expand all markers.
pub fn process(content: &str, is_primary: bool, defaults: &TocOptions) -> BoxResult<Processed> {
    let prepared = prepare_content(content, is_primary)?;

    if !is_primary || !content.contains(SHORTCODE_PREFIX) {
        return Ok(Processed {
            html: prepared.html,
            items: prepared.items,
            expanded: 0,
        });
    }

    let expanded = SHORTCODE_REGEX.find_iter(&prepared.html).count();
    log::debug!(
        "Expanding {} outline marker(s) against {} heading(s)",
        expanded,
        prepared.items.len()
    );

    let html = expand_shortcodes(&prepared.html, &prepared.items, defaults);
    Ok(Processed {
        html,
        items: prepared.items,
        expanded,
    })
}

/// True when the input carries its own `<html>` or `<body>` wrapper, as
/// opposed to fragment input where only the parser implies one.
fn has_document_wrapper(content: &str) -> bool {
    let lower = content.to_ascii_lowercase();
    lower.contains("<html") || lower.contains("<body")
}

/// Serialize the mutated tree back to a string. The parser implies
/// `<html><head><body>` wrappers around fragment input; those are stripped
/// again by serializing only the body's children, so fragments round-trip
/// cleanly. Input that brought its own wrapper keeps it, head and all.
fn serialize_content(document: &NodeRef, keep_wrapper: bool) -> BoxResult<String> {
    let mut buf = Vec::new();

    if keep_wrapper {
        document.serialize(&mut buf)?;
        return Ok(String::from_utf8(buf)?);
    }

    match document.select_first("body") {
        Ok(body) => {
            for child in body.as_node().children() {
                child.serialize(&mut buf)?;
            }
        }
        Err(()) => document.serialize(&mut buf)?,
    }

    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_primary_render_is_untouched() {
        let content = "<h2>Alpha</h2>[outline]";
        let prepared = prepare_content(content, false).unwrap();
        assert_eq!(prepared.html, content);
        assert!(prepared.items.is_empty());

        let processed = process(content, false, &TocOptions::default()).unwrap();
        assert_eq!(processed.html, content);
        assert_eq!(processed.expanded, 0);
    }

    #[test]
    fn test_content_without_marker_is_untouched() {
        let content = "<h2>Alpha</h2><p>No marker</p>";
        let prepared = prepare_content(content, true).unwrap();
        assert_eq!(prepared.html, content);
        assert!(prepared.items.is_empty());
    }

    #[test]
    fn test_marker_without_headings_expands_to_nothing() {
        let content = "[outline]<p>Body text</p>";
        let processed = process(content, true, &TocOptions::default()).unwrap();
        assert_eq!(processed.html, "<p>Body text</p>");
        assert!(processed.items.is_empty());
        assert_eq!(processed.expanded, 1);
    }

    #[test]
    fn test_full_pass_assigns_ids_and_expands_marker() {
        let content = "[outline]<h2>Alpha</h2><p>Text</p><h3>Beta</h3>";
        let processed = process(content, true, &TocOptions::default()).unwrap();

        assert!(processed.html.contains("<h2 id=\"alpha\">Alpha</h2>"));
        assert!(processed.html.contains("<h3 id=\"beta\">Beta</h3>"));
        assert!(processed.html.contains("<div class=\"outline-container\">"));
        assert!(processed.html.contains("<a href=\"#alpha\">Alpha</a>"));
        assert!(processed.html.contains("<a href=\"#beta\">Beta</a>"));
        assert!(!processed.html.contains("[outline]"));
        assert_eq!(processed.items.len(), 2);
    }

    #[test]
    fn test_fragment_round_trip_has_no_wrapper_tags() {
        let content = "[outline]<h2>Alpha</h2>";
        let processed = process(content, true, &TocOptions::default()).unwrap();
        assert!(!processed.html.contains("<html"));
        assert!(!processed.html.contains("<head"));
        assert!(!processed.html.contains("<body"));
    }

    #[test]
    fn test_full_document_keeps_its_own_head() {
        let content = "<html><head><title>My Page</title><meta charset=\"utf-8\">\
                       </head><body>[outline]<h2>Alpha</h2></body></html>";
        let processed = process(content, true, &TocOptions::default()).unwrap();

        assert!(processed.html.contains("<html>"));
        assert!(processed.html.contains("<title>My Page</title>"));
        assert!(processed.html.contains("<meta charset=\"utf-8\">"));
        assert!(processed.html.contains("</head>"));
        assert!(processed.html.contains("<h2 id=\"alpha\">Alpha</h2>"));
        assert!(processed.html.contains("<a href=\"#alpha\">Alpha</a>"));
    }

    #[test]
    fn test_body_only_input_keeps_wrapper() {
        let content = "<body>[outline]<h2>Alpha</h2></body>";
        let processed = process(content, true, &TocOptions::default()).unwrap();

        assert!(processed.html.contains("<body>"));
        assert!(processed.html.contains("<h2 id=\"alpha\">Alpha</h2>"));
    }

    #[test]
    fn test_multiple_markers_share_one_scan() {
        // Both headings slugify to "notes"; the h3 keeps the -2 suffix even
        // in a marker that filters the h2 away, because ids are assigned per
        // full scan, before filtering.
        let content = concat!(
            "[outline tags=\"h2\" title=\"\"]",
            "[outline tags=\"h3\" title=\"\"]",
            "<h2>Notes</h2><h3>Notes</h3>",
        );
        let processed = process(content, true, &TocOptions::default()).unwrap();

        assert!(processed.html.contains("<a href=\"#notes\">Notes</a>"));
        assert!(processed.html.contains("<a href=\"#notes-2\">Notes</a>"));
        assert_eq!(processed.expanded, 2);
    }

    #[test]
    fn test_marker_attributes_override_defaults() {
        let content = "[outline tags=\"h3\" title=\"On this page\"]<h2>Alpha</h2><h3>Beta</h3>";
        let processed = process(content, true, &TocOptions::default()).unwrap();

        assert!(processed.html.contains("<div class=\"outline-title\">On this page</div>"));
        assert!(processed.html.contains("<a href=\"#beta\">Beta</a>"));
        assert!(!processed.html.contains("<a href=\"#alpha\">"));
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        // Unclosed tags must not fail; the parser recovers a best-effort tree
        let content = "[outline]<h2>Alpha<p>oops<h3>Beta</h3>";
        let processed = process(content, true, &TocOptions::default()).unwrap();
        assert!(!processed.items.is_empty());
    }
}
