use std::collections::HashSet;

use kuchikikiki::NodeRef;

use crate::toc::types::{HeadingTag, TocItem};

/// Scan a parsed document for headings (h1-h6), assign each a unique anchor
/// id, and return the collected items in document order.
///
/// The id is written back onto the heading element, so the mutated tree and
/// the returned list always agree on identifiers. Uniqueness is scoped to one
/// scan pass: duplicate heading texts get `-2`, `-3`, ... suffixes, and ids
/// are assigned over the full document before any tag filtering happens.
pub fn scan_headings(document: &NodeRef) -> Vec<TocItem> {
    let mut items = Vec::new();
    let mut used_ids: HashSet<String> = HashSet::new();

    for node in document.inclusive_descendants() {
        let element = match node.as_element() {
            Some(element) => element,
            None => continue,
        };

        let tag = match HeadingTag::from_name(&element.name.local) {
            Some(tag) => tag,
            None => continue,
        };

        // Flattened text content: all descendant text, no markup
        let text = node.text_contents();

        let mut id = slug::slugify(&text);
        if id.is_empty() {
            id = "section".to_string();
        }
        let id = resolve_unique_id(id, &used_ids);
        used_ids.insert(id.clone());

        // Set the id attribute on the heading element
        element.attributes.borrow_mut().insert("id", id.clone());

        items.push(TocItem::new(tag, text, id));
    }

    log::debug!("Heading scan collected {} items", items.len());
    items
}

/// Resolve a candidate id against the ids already used in this scan.
/// The first occurrence of a slug keeps it unchanged; later occurrences try
/// `-2`, `-3`, ... until a free id is found.
fn resolve_unique_id(candidate: String, used_ids: &HashSet<String>) -> String {
    if !used_ids.contains(&candidate) {
        return candidate;
    }

    let mut suffix = 2usize;
    loop {
        let attempt = format!("{}-{}", candidate, suffix);
        if !used_ids.contains(&attempt) {
            return attempt;
        }
        suffix += 1;
    }
}
