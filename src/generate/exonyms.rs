//! The all-pairs name matrix behind `SupportedLocales`.

use crate::error::TagNotFound;
use crate::i18n::{LocaleIdentity, ReferenceData, TaggedEndonym};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Names of every supported language as written in every supported language.
///
/// `row(i)[j]` is the name of `j` written in `i`; the diagonal holds the
/// endonyms. Tags are kept in ascending order everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExonymMatrix {
    tags: Vec<String>,
    endonyms: BTreeMap<String, String>,
    rows: BTreeMap<String, BTreeMap<String, String>>,
}

impl ExonymMatrix {
    /// Build the matrix for the resolved tag set.
    ///
    /// Each tag is parsed once up front; the N x N cells reuse those identities.
    ///
    /// # Arguments
    /// * `data` - Reference data that renders the display names
    /// * `entries` - The resolved tags; their endonyms fill the diagonal
    pub fn build<R: ReferenceData + ?Sized>(data: &R, entries: &BTreeSet<TaggedEndonym>) -> Self {
        let endonyms: BTreeMap<String, String> = entries
            .iter()
            .map(|entry| (entry.tag.clone(), entry.endonym.clone()))
            .collect();

        let identities: Vec<(String, LocaleIdentity)> = endonyms
            .keys()
            .map(|tag| (tag.clone(), LocaleIdentity::parse(tag)))
            .collect();

        let rows: BTreeMap<String, BTreeMap<String, String>> = identities
            .iter()
            .map(|(in_tag, in_locale)| {
                let row: BTreeMap<String, String> = identities
                    .iter()
                    .map(|(tag, target)| (tag.clone(), data.display_name(target, in_locale)))
                    .collect();
                (in_tag.clone(), row)
            })
            .collect();

        debug!("Built {0}x{0} exonym matrix", identities.len());

        Self {
            tags: endonyms.keys().cloned().collect(),
            endonyms,
            rows,
        }
    }

    /// All supported tags, ascending.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Tag to endonym.
    pub fn endonyms(&self) -> &BTreeMap<String, String> {
        &self.endonyms
    }

    /// Every row, keyed by the tag whose language the names are written in.
    pub fn rows(&self) -> &BTreeMap<String, BTreeMap<String, String>> {
        &self.rows
    }

    /// Names of all supported languages written in `tag`'s language.
    ///
    /// # Arguments
    /// * `tag` - A supported tag, matched exactly (e.g. "fr-FR")
    ///
    /// # Returns
    /// * `Ok(&row)` mapping every supported tag to its name in `tag`'s language
    /// * `Err(TagNotFound)` if `tag` is not supported
    pub fn row(&self, tag: &str) -> Result<&BTreeMap<String, String>, TagNotFound> {
        self.rows.get(tag).ok_or(TagNotFound)
    }

    /// Same as [`row`](Self::row), deriving the tag from a locale identity.
    pub fn row_for_locale(
        &self,
        locale: &LocaleIdentity,
    ) -> Result<&BTreeMap<String, String>, TagNotFound> {
        self.row(&locale.to_string())
    }

    /// Number of supported tags, which is both the row and column count.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no tag survived validation
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TAG_NOT_FOUND_MESSAGE;
    use crate::i18n::{resolve_endonyms, sample_registry, LocaleRegistry};

    fn fixture() -> LocaleRegistry {
        LocaleRegistry::new()
            .with_language_name("en", "en", "English")
            .with_language_name("en", "xx", "Exxish")
            .with_language_name("xx", "en", "inglexx")
            .with_language_name("xx", "xx", "exxo")
    }

    fn matrix_for(data: &LocaleRegistry, tags: &[&str]) -> ExonymMatrix {
        ExonymMatrix::build(data, &resolve_endonyms(data, tags))
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_matrix_is_square_and_dense() {
        let data = sample_registry();
        let matrix = matrix_for(&data, &["de-DE", "en-US", "fr-FR", "ja-JP", "en-XA"]);

        assert_eq!(matrix.len(), 5);
        assert_eq!(matrix.rows().len(), 5);
        for row in matrix.rows().values() {
            assert_eq!(row.len(), 5);
            assert!(row.values().all(|name| !name.is_empty()));
        }
    }

    #[test]
    fn test_diagonal_matches_endonyms() {
        let data = sample_registry();
        let matrix = matrix_for(&data, &["en-US", "fr-FR", "sr-Latn-RS", "zh-Hant-TW"]);

        for (tag, endonym) in matrix.endonyms() {
            assert_eq!(&matrix.row(tag).unwrap()[tag], endonym);
        }
    }

    #[test]
    fn test_tags_are_sorted() {
        let data = fixture();
        let matrix = matrix_for(&data, &["xx", "en"]);
        assert_eq!(matrix.tags().to_vec(), vec!["en", "xx"]);
    }

    #[test]
    fn test_empty_matrix() {
        let data = fixture();
        let matrix = matrix_for(&data, &[]);
        assert!(matrix.is_empty());
        assert!(matrix.rows().is_empty());
        assert_eq!(matrix.row("en"), Err(TagNotFound));
    }

    // ==================== Content Tests ====================

    #[test]
    fn test_cells_are_written_in_row_language() {
        let data = fixture();
        let matrix = matrix_for(&data, &["en", "xx"]);

        assert_eq!(matrix.row("en").unwrap()["xx"], "Exxish");
        assert_eq!(matrix.row("xx").unwrap()["en"], "inglexx");
        assert_eq!(matrix.endonyms()["xx"], "exxo");
    }

    #[test]
    fn test_rows_are_written_in_their_own_language() {
        let data = sample_registry();
        let matrix = matrix_for(&data, &["de-DE", "en-US", "fr-FR"]);

        assert_eq!(matrix.row("en-US").unwrap()["fr-FR"], "French (France)");
        assert_eq!(matrix.row("fr-FR").unwrap()["en-US"], "anglais (États-Unis)");
        assert_eq!(matrix.row("de-DE").unwrap()["fr-FR"], "Französisch (Frankreich)");
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_missing_tag_returns_sentinel() {
        let data = fixture();
        let matrix = matrix_for(&data, &["en"]);
        let err = matrix.row("de").unwrap_err();
        assert_eq!(err, TagNotFound);
        assert_eq!(err.to_string(), TAG_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_row_for_locale() {
        let data = fixture();
        let matrix = matrix_for(&data, &["en", "xx"]);
        let row = matrix.row_for_locale(&LocaleIdentity::parse("xx")).unwrap();
        assert_eq!(row["xx"], "exxo");
        assert!(matrix.row_for_locale(&LocaleIdentity::parse("xx-QQ")).is_err());
    }
}
