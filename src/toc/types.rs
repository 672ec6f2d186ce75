use serde::{Deserialize, Serialize};

/// The six heading kinds recognized by the scanner.
///
/// The numeric level is fixed by the variant rather than re-derived from the
/// tag name at runtime, so a `TocItem` can never carry a tag/level mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// Get the heading level (h1 = 1, h2 = 2, etc.)
    pub fn level(&self) -> usize {
        match self {
            HeadingTag::H1 => 1,
            HeadingTag::H2 => 2,
            HeadingTag::H3 => 3,
            HeadingTag::H4 => 4,
            HeadingTag::H5 => 5,
            HeadingTag::H6 => 6,
        }
    }

    /// Get the lower-case tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }

    /// Create a heading tag from a lower-case element name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "h1" => Some(HeadingTag::H1),
            "h2" => Some(HeadingTag::H2),
            "h3" => Some(HeadingTag::H3),
            "h4" => Some(HeadingTag::H4),
            "h5" => Some(HeadingTag::H5),
            "h6" => Some(HeadingTag::H6),
            _ => None,
        }
    }
}

/// Represents a single heading collected by one scan pass, in document order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocItem {
    pub tag: HeadingTag,
    /// Flattened text content of the heading (no markup)
    pub text: String,
    /// Unique anchor id, also written onto the heading element
    pub id: String,
    pub level: usize,
}

impl TocItem {
    pub fn new(tag: HeadingTag, text: String, id: String) -> Self {
        Self {
            tag,
            text,
            id,
            level: tag.level(),
        }
    }
}

/// Options for outline rendering
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Heading tags to include in the outline
    pub allowed_tags: Vec<HeadingTag>,
    /// Title shown above the list; an empty string suppresses the title block
    pub title: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            allowed_tags: vec![HeadingTag::H2, HeadingTag::H3],
            title: "Table of Contents".to_string(),
        }
    }
}

/// Parse a comma-separated tag list (e.g. "h2, h3,H4") into heading tags.
/// Entries are trimmed and lower-cased; names that are not h1-h6 are dropped.
pub fn parse_tag_list(tags: &str) -> Vec<HeadingTag> {
    tags.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter_map(|t| {
            let tag = HeadingTag::from_name(&t);
            if tag.is_none() {
                log::warn!("Ignoring unknown heading tag '{}' in tag list", t);
            }
            tag
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_match_tag_names() {
        let tags = [
            HeadingTag::H1,
            HeadingTag::H2,
            HeadingTag::H3,
            HeadingTag::H4,
            HeadingTag::H5,
            HeadingTag::H6,
        ];

        for (i, tag) in tags.iter().enumerate() {
            assert_eq!(tag.level(), i + 1);
            assert_eq!(HeadingTag::from_name(tag.as_str()), Some(*tag));
        }
    }

    #[test]
    fn test_from_name_rejects_non_headings() {
        assert_eq!(HeadingTag::from_name("div"), None);
        assert_eq!(HeadingTag::from_name("h7"), None);
        assert_eq!(HeadingTag::from_name(""), None);
    }

    #[test]
    fn test_parse_tag_list() {
        assert_eq!(
            parse_tag_list("h2,h3"),
            vec![HeadingTag::H2, HeadingTag::H3]
        );
        // Whitespace and case are normalized
        assert_eq!(
            parse_tag_list(" H2 , h4 "),
            vec![HeadingTag::H2, HeadingTag::H4]
        );
        // Unknown names are dropped, not errors
        assert_eq!(parse_tag_list("h2,nav,h9"), vec![HeadingTag::H2]);
        assert_eq!(parse_tag_list(""), Vec::<HeadingTag>::new());
    }

    #[test]
    fn test_item_level_derived_from_tag() {
        let item = TocItem::new(HeadingTag::H4, "Text".to_string(), "text".to_string());
        assert_eq!(item.level, 4);
        assert_eq!(item.tag, HeadingTag::H4);
    }

    #[test]
    fn test_item_serializes_with_lowercase_tag() {
        let item = TocItem::new(HeadingTag::H2, "Intro".to_string(), "intro".to_string());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"tag\":\"h2\""));
        assert!(json.contains("\"level\":2"));
    }
}
