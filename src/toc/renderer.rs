use crate::toc::types::{TocItem, TocOptions};

/// Render the collected headings as a nested HTML outline.
///
/// The nesting is driven by a single scalar level tracker, which matches the
/// established output contract rather than a fully balanced tree:
///
/// - a level increase opens exactly one nested `<ul>`, no matter how many
///   levels were skipped (2 -> 5 opens one list, not three);
/// - a level decrease closes one `</ul></li>` pair per level;
/// - after the loop exactly one `</li></ul>` pair is closed unconditionally.
///
/// Outlines that end several levels deep therefore close unbalanced. That is
/// a known quirk of the contract; consumers rely on the exact byte output, so
/// it is reproduced here rather than fixed with a per-level stack.
pub fn render_outline(items: &[TocItem], options: &TocOptions) -> String {
    if items.is_empty() {
        return String::new();
    }

    let filtered: Vec<&TocItem> = items
        .iter()
        .filter(|item| options.allowed_tags.contains(&item.tag))
        .collect();

    if filtered.is_empty() {
        return String::new();
    }

    let mut output = String::from("<div class=\"outline-container\">");

    if !options.title.is_empty() {
        output.push_str(&format!(
            "<div class=\"outline-title\">{}</div>",
            html_escape::encode_text(&options.title)
        ));
    }

    output.push_str("<ul class=\"outline-list\">");

    let mut current_level = 0;
    let mut first = true;

    for item in filtered {
        let level = item.level;

        if first {
            // current_level is seeded by the assignment at the loop tail
            first = false;
        } else if level > current_level {
            // Start nested list
            output.push_str("\n<ul>");
        } else if level < current_level {
            // Close lists
            let diff = current_level - level;
            output.push_str(&"</ul></li>".repeat(diff));
        } else {
            // Same level, close previous list item
            output.push_str("</li>\n");
        }

        output.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            html_escape::encode_double_quoted_attribute(&item.id),
            html_escape::encode_text(&item.text)
        ));

        current_level = level;
    }

    // Close any remaining open tags
    output.push_str("</li></ul>");
    output.push_str("</div>");

    output
}
