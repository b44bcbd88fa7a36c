//! Language tags: normalization of raw resource qualifiers and structured
//! locale identities.
//!
//! Resource qualifiers arrive in platform form (`fr-rFR`, `b+sr+Latn+RS`,
//! `sw320dp`, ...). [`normalize_qualifier`] rewrites them into hyphenated
//! BCP-47 style candidates; nothing is filtered here.

use icu_locale_core::LanguageIdentifier;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Pseudo-locales that bypass code-set validation.
///
/// `en-XA` stretches text with accented characters, `ar-XB` forces
/// right-to-left layout.
pub const PSEUDO_LOCALES: [&str; 2] = ["en-XA", "ar-XB"];

/// Prefix marking a qualifier written in BCP-47 form (`b+en+US`).
const BCP47_PREFIX: &str = "b+";

static REGION_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Check whether a normalized tag is one of the pseudo-locales.
pub fn is_pseudo_locale(tag: &str) -> bool {
    PSEUDO_LOCALES.contains(&tag)
}

/// Rewrite a raw resource qualifier into a candidate language tag.
///
/// - strips the `b+` prefix
/// - joins `+`-separated subtags with `-`
/// - drops the `r` region marker in front of a region code (`fr-rFR` -> `fr-FR`)
///
/// Anything else passes through untouched, so canonical tags and non-locale
/// qualifiers such as `sw320dp` come back unchanged.
pub fn normalize_qualifier(raw: &str) -> String {
    let regex = REGION_MARKER_REGEX
        .get_or_init(|| Regex::new(r"-r([A-Za-z]{2}|[0-9]{3})\b").unwrap());

    let joined = raw.strip_prefix(BCP47_PREFIX).unwrap_or(raw).replace('+', "-");

    regex.replace_all(&joined, "-$1").into_owned()
}

/// Normalize every raw qualifier, one candidate per input.
pub fn normalize_qualifiers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|qualifier| normalize_qualifier(qualifier.as_ref()))
        .collect()
}

/// A language tag split into its subtags.
///
/// Parsed once per tag and reused wherever names are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleIdentity {
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
    /// Subtags after the ones above; kept verbatim, never validated.
    pub extra: Vec<String>,
}

impl LocaleIdentity {
    /// Split a tag into language, script, region and trailing subtags.
    ///
    /// Well-formed BCP-47 tags go through the ICU parser. Tags it refuses
    /// (trailing subtags are never validated, so `en-US-FR` can get here)
    /// are split on `-`: the second subtag is a script when it is four
    /// characters long, otherwise a region.
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_resource_generator::i18n::LocaleIdentity;
    ///
    /// let id = LocaleIdentity::parse("sr-Latn-RS");
    /// assert_eq!(id.script.as_deref(), Some("Latn"));
    /// assert_eq!(id.region.as_deref(), Some("RS"));
    /// ```
    pub fn parse(tag: &str) -> Self {
        match LanguageIdentifier::try_from_str(tag) {
            Ok(langid) => Self::from(&langid),
            Err(_) => Self::split(tag),
        }
    }

    fn split(tag: &str) -> Self {
        let mut parts = tag.split('-');
        let language = parts.next().unwrap_or_default().to_string();
        let mut script = None;
        let mut region = None;

        if let Some(second) = parts.next() {
            if second.len() == 4 {
                script = Some(second.to_string());
                region = parts.next().map(str::to_string);
            } else {
                region = Some(second.to_string());
            }
        }

        let extra = parts.map(str::to_string).collect();

        Self {
            language,
            script,
            region,
            extra,
        }
    }

    /// Tags to try, most specific first, when looking up data for this locale.
    ///
    /// `sr-Latn-RS` yields `sr-Latn-RS`, `sr-Latn`, `sr`.
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = Vec::with_capacity(3);
        let mut base = self.language.clone();
        if let Some(script) = &self.script {
            base = format!("{}-{}", base, script);
        }
        if let Some(region) = &self.region {
            chain.push(format!("{}-{}", base, region));
        }
        if self.script.is_some() {
            chain.push(base);
        }
        chain.push(self.language.clone());
        chain
    }
}

impl From<&LanguageIdentifier> for LocaleIdentity {
    fn from(langid: &LanguageIdentifier) -> Self {
        Self {
            language: langid.language.as_str().to_string(),
            script: langid.script.map(|script| script.as_str().to_string()),
            region: langid.region.map(|region| region.as_str().to_string()),
            extra: langid
                .variants
                .iter()
                .map(|variant| variant.as_str().to_string())
                .collect(),
        }
    }
}

impl fmt::Display for LocaleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        for subtag in self
            .script
            .iter()
            .chain(self.region.iter())
            .chain(self.extra.iter())
        {
            write!(f, "-{}", subtag)?;
        }
        Ok(())
    }
}
