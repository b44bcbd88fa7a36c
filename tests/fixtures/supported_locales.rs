// Generated by locale-resource-generator. Do not edit.
//
// Tags are sorted, so lookups binary-search.

/// Returned when a language tag is not one of the supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagNotFound;

impl TagNotFound {
    pub const MESSAGE: &'static str = "The supplied language tag was not found in your supported locales. Did you add it to the 'resourceConfigurations' property of your gradle build settings?";
}

impl ::core::fmt::Display for TagNotFound {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl ::std::error::Error for TagNotFound {}

const TAGS: &[&str] = &[
    "de-DE",
    "en-US",
    "fr-FR",
];

const ENDONYMS: &[(&str, &str)] = &[
    ("de-DE", "Deutsch (Deutschland)"),
    ("en-US", "English (United States)"),
    ("fr-FR", "français (France)"),
];

const EXONYMS: &[(&str, &[(&str, &str)])] = &[
    (
        "de-DE",
        &[
            ("de-DE", "Deutsch (Deutschland)"),
            ("en-US", "Englisch (Vereinigte Staaten)"),
            ("fr-FR", "Französisch (Frankreich)"),
        ],
    ),
    (
        "en-US",
        &[
            ("de-DE", "German (Germany)"),
            ("en-US", "English (United States)"),
            ("fr-FR", "French (France)"),
        ],
    ),
    (
        "fr-FR",
        &[
            ("de-DE", "allemand (Allemagne)"),
            ("en-US", "anglais (États-Unis)"),
            ("fr-FR", "français (France)"),
        ],
    ),
];

/// The locales supported by this project, with their endonyms and exonyms.
pub struct SupportedLocales;

impl SupportedLocales {
    /// Language tags supported by this project.
    pub fn tags() -> &'static [&'static str] {
        TAGS
    }

    /// Language tags paired with their endonyms (the language's name in itself).
    pub fn endonyms() -> &'static [(&'static str, &'static str)] {
        ENDONYMS
    }

    /// Language tags paired with their names as written in `language_tag`'s language.
    pub fn exonyms(
        language_tag: &str,
    ) -> Result<&'static [(&'static str, &'static str)], TagNotFound> {
        EXONYMS
            .binary_search_by(|(tag, _)| (*tag).cmp(language_tag))
            .map(|index| EXONYMS[index].1)
            .map_err(|_| TagNotFound)
    }

    /// Same as [`exonyms`](Self::exonyms) for any locale that displays as a language tag.
    pub fn exonyms_for_locale<L: ::core::fmt::Display + ?Sized>(
        locale: &L,
    ) -> Result<&'static [(&'static str, &'static str)], TagNotFound> {
        Self::exonyms(&locale.to_string())
    }
}
