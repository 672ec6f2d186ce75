//! Static presentational rules for the rendered outline, injected once per
//! document head.

/// Default look for the outline block, namespaced under the `outline-*`
/// classes the renderer emits.
pub const OUTLINE_STYLES: &str = "<style>
.outline-container {
    background: #f9f9f9;
    border: 1px solid #e1e1e1;
    padding: 15px;
    margin: 20px 0;
    display: inline-block;
    min-width: 250px;
    border-radius: 4px;
}
.outline-title {
    font-weight: bold;
    margin-bottom: 10px;
    font-size: 1.1em;
}
.outline-list, .outline-list ul {
    list-style: none;
    padding-left: 0;
    margin: 0;
}
.outline-list ul {
    padding-left: 20px;
}
.outline-list li {
    margin-bottom: 5px;
    line-height: 1.4;
}
.outline-list a {
    text-decoration: none;
    color: inherit;
    border-bottom: 1px solid transparent;
}
.outline-list a:hover {
    border-bottom-color: currentColor;
    opacity: 0.8;
}
</style>
";

/// Insert the style block into the document head. Falls back to prepending
/// when the markup has no `</head>` (fragment input).
pub fn inject_styles(html: &str) -> String {
    if let Some(pos) = html.find("</head>") {
        let mut output = String::with_capacity(html.len() + OUTLINE_STYLES.len());
        output.push_str(&html[..pos]);
        output.push_str(OUTLINE_STYLES);
        output.push_str(&html[pos..]);
        return output;
    }

    format!("{}{}", OUTLINE_STYLES, html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_land_before_head_close() {
        let html = "<html><head><title>T</title></head><body></body></html>";
        let injected = inject_styles(html);

        let style = injected.find(".outline-container").unwrap();
        let head_close = injected.find("</head>").unwrap();
        assert!(style < head_close);
    }

    #[test]
    fn test_fragment_gets_styles_prepended() {
        let injected = inject_styles("<p>fragment</p>");
        assert!(injected.starts_with("<style>"));
        assert!(injected.ends_with("<p>fragment</p>"));
    }

    #[test]
    fn test_styles_are_injected_once() {
        let injected = inject_styles("<head></head>");
        assert_eq!(injected.matches("<style>").count(), 1);
    }
}
