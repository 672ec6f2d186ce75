use lazy_static::lazy_static;
use regex::Regex;

use crate::toc::types::{parse_tag_list, TocOptions};

lazy_static! {
    /// Matches an `[outline]` marker, with or without attributes
    pub static ref SHORTCODE_REGEX: Regex =
        Regex::new(r"\[outline(\s+[^\]]*)?\]").unwrap();

    /// Matches one key="value" / key='value' / key=value attribute
    static ref ATTR_REGEX: Regex =
        Regex::new(r#"(\w+)\s*=\s*(?:"([^"]*)"|'([^']*)'|(\S+))"#).unwrap();
}

/// The substring that gates the slow path: content without it is never parsed
pub const SHORTCODE_PREFIX: &str = "[outline";

/// Attributes parsed from a single marker occurrence. `None` fields fall back
/// to the caller-supplied defaults.
#[derive(Debug, Clone, Default)]
pub struct ShortcodeAttrs {
    pub tags: Option<String>,
    pub title: Option<String>,
}

impl ShortcodeAttrs {
    /// Layer these attributes over a set of default options
    pub fn into_options(self, defaults: &TocOptions) -> TocOptions {
        TocOptions {
            allowed_tags: match self.tags {
                Some(tags) => parse_tag_list(&tags),
                None => defaults.allowed_tags.clone(),
            },
            title: self.title.unwrap_or_else(|| defaults.title.clone()),
        }
    }
}

/// Parse the attribute section of a marker (the text between `[outline` and
/// `]`). Unknown attribute names are ignored.
pub fn parse_attributes(raw: &str) -> ShortcodeAttrs {
    let mut attrs = ShortcodeAttrs::default();

    for cap in ATTR_REGEX.captures_iter(raw) {
        let value = cap
            .get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        match &cap[1] {
            "tags" => attrs.tags = Some(value),
            "title" => attrs.title = Some(value),
            other => log::debug!("Ignoring unknown outline attribute '{}'", other),
        }
    }

    attrs
}
