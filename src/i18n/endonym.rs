//! Endonym resolution and the `tag,endonym` hand-off list.

use crate::error::ListParseError;
use crate::i18n::registry::ReferenceData;
use crate::i18n::tag::LocaleIdentity;
use std::collections::BTreeSet;

/// A language tag paired with the language's name written in itself.
///
/// Ordered by tag first, so a `BTreeSet` of these iterates in tag order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaggedEndonym {
    pub tag: String,
    pub endonym: String,
}

impl TaggedEndonym {
    pub fn new(tag: impl Into<String>, endonym: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            endonym: endonym.into(),
        }
    }

    /// The `tag,endonym` line for this entry.
    pub fn to_line(&self) -> String {
        format!("{},{}", self.tag, self.endonym)
    }
}

/// Resolve a single tag to its endonym.
pub fn endonym_for<R: ReferenceData + ?Sized>(data: &R, tag: &str) -> TaggedEndonym {
    let identity = LocaleIdentity::parse(tag);
    TaggedEndonym::new(tag, data.display_name(&identity, &identity))
}

/// Resolve every valid tag, collapsing duplicates.
pub fn resolve_endonyms<R, I, S>(data: &R, tags: I) -> BTreeSet<TaggedEndonym>
where
    R: ReferenceData + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| endonym_for(data, tag.as_ref()))
        .collect()
}

/// Render the hand-off list, one `tag,endonym` per line, no trailing newline.
pub fn render_list<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a TaggedEndonym>,
{
    entries
        .into_iter()
        .map(TaggedEndonym::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a hand-off list back into entries.
///
/// Lines split on the first comma; tags never contain one, so endonyms may.
/// Blank lines are skipped.
pub fn parse_list(content: &str) -> Result<BTreeSet<TaggedEndonym>, ListParseError> {
    let mut entries = BTreeSet::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (tag, endonym) = line
            .split_once(',')
            .ok_or_else(|| ListParseError::MalformedLine {
                line: index + 1,
                content: line.to_string(),
            })?;

        if tag.trim().is_empty() {
            return Err(ListParseError::EmptyTag { line: index + 1 });
        }

        entries.insert(TaggedEndonym::new(tag.trim(), endonym));
    }

    Ok(entries)
}
