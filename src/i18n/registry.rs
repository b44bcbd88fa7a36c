//! Locale registry: the reference data every pipeline stage consults.
//!
//! [`ReferenceData`] is the seam: validation asks it which codes exist and the
//! generators ask it for display names. Two implementations exist:
//!
//! - [`IcuRegistry`](crate::i18n::IcuRegistry): the default, backed by the
//!   platform ICU library
//! - [`LocaleRegistry`]: name tables loaded from a `cldr-json` checkout
//!   ([`LocaleRegistry::from_cldr_json`]) or filled by hand with the `with_*`
//!   builders for deterministic tests

use crate::error::RegistryError;
use crate::i18n::data::{LEGACY_LANGUAGE_ALIASES, REGION_CODES};
use crate::i18n::LocaleIdentity;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

const DEFAULT_LOCALE_PATTERN: &str = "{0} ({1})";
const DEFAULT_LOCALE_SEPARATOR: &str = "{0}, {1}";

/// Locale used when a display locale has no name for a code.
const ROOT_DISPLAY_LOCALE: &str = "en";

/// Code sets and display names consulted by validation and generation.
pub trait ReferenceData {
    /// Check whether `code` is a known ISO 639 language code.
    ///
    /// # Arguments
    /// * `code` - The language subtag exactly as written (e.g., "en", "fil")
    ///
    /// # Returns
    /// `true` on an exact, case-sensitive match, `false` otherwise.
    fn is_known_language(&self, code: &str) -> bool;

    /// Check whether `code` is an assigned ISO 3166-1 alpha-2 region code.
    ///
    /// Reserved and private-use codes (`EU`, `UN`, `ZZ`, `XA`, ...) are not known.
    fn is_known_region(&self, code: &str) -> bool;

    /// Check whether `code` is a known ISO 15924 script code (e.g., "Latn").
    fn is_known_script(&self, code: &str) -> bool;

    /// Get the name of `target` written the way `in_locale` writes it.
    ///
    /// # Arguments
    /// * `target` - The locale being named
    /// * `in_locale` - The locale whose language the name is written in
    ///
    /// # Returns
    /// A non-empty display name. Passing the same identity twice yields the
    /// endonym (e.g., "français (France)" for `fr-FR` in `fr-FR`).
    fn display_name(&self, target: &LocaleIdentity, in_locale: &LocaleIdentity) -> String;
}

/// Which name table a code is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameKind {
    Language,
    Region,
    Script,
}

/// Display names a single locale uses.
#[derive(Debug, Clone, Default)]
struct NameTable {
    languages: HashMap<String, String>,
    regions: HashMap<String, String>,
    scripts: HashMap<String, String>,
    /// `{0} ({1})`-style pattern wrapping the qualifiers.
    locale_pattern: Option<String>,
    /// `{0}, {1}`-style pattern joining script and region names.
    locale_separator: Option<String>,
}

impl NameTable {
    fn names(&self, kind: NameKind) -> &HashMap<String, String> {
        match kind {
            NameKind::Language => &self.languages,
            NameKind::Region => &self.regions,
            NameKind::Script => &self.scripts,
        }
    }

    fn names_mut(&mut self, kind: NameKind) -> &mut HashMap<String, String> {
        match kind {
            NameKind::Language => &mut self.languages,
            NameKind::Region => &mut self.regions,
            NameKind::Script => &mut self.scripts,
        }
    }
}

/// Known code sets plus per-locale name tables.
///
/// Names missing from a display locale fall back along its fallback chain,
/// then to English, then to the raw code.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    languages: BTreeSet<String>,
    regions: BTreeSet<String>,
    scripts: BTreeSet<String>,
    tables: HashMap<String, NameTable>,
    aliases: HashMap<String, String>,
}

impl LocaleRegistry {
    /// Create an empty registry that knows no codes and no names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load code sets and names from a `cldr-localenames-*` package root.
    ///
    /// # Arguments
    /// * `root` - The directory holding `main/<locale>/languages.json` and friends
    ///
    /// # Returns
    /// * `Ok(LocaleRegistry)` with one name table per locale directory. The
    ///   known code sets come from the English tables; regions are further
    ///   limited to assigned ISO 3166-1 codes.
    /// * `Err(RegistryError)` if a file cannot be read or parsed, or if there
    ///   is no English data
    pub fn from_cldr_json(root: &Path) -> Result<Self, RegistryError> {
        let main = root.join("main");
        let entries = fs::read_dir(&main).map_err(|source| RegistryError::Io {
            path: main.clone(),
            source,
        })?;

        let mut registry = Self::new();
        for entry in entries {
            let entry = entry.map_err(|source| RegistryError::Io {
                path: main.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(locale) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
            else {
                continue;
            };

            let table = load_cldr_locale(&path, &locale)?;
            registry.tables.insert(locale, table);
        }

        let english = registry
            .tables
            .get(ROOT_DISPLAY_LOCALE)
            .ok_or_else(|| RegistryError::MissingEnglish(root.to_path_buf()))?;

        let languages: BTreeSet<String> = english
            .languages
            .keys()
            .filter(|code| is_language_code(code))
            .cloned()
            .collect();
        // CLDR also names groupings (EU, UN) and private-use codes (XA, ZZ).
        let regions: BTreeSet<String> = english
            .regions
            .keys()
            .filter(|code| REGION_CODES.contains(&code.as_str()))
            .cloned()
            .collect();
        let scripts: BTreeSet<String> = english
            .scripts
            .keys()
            .filter(|code| code.len() == 4)
            .cloned()
            .collect();

        registry.languages = languages;
        registry.regions = regions;
        registry.scripts = scripts;
        for (legacy, current) in LEGACY_LANGUAGE_ALIASES {
            registry.add_alias(legacy, current);
        }

        debug!(
            "Loaded CLDR names for {} locales from {}",
            registry.tables.len(),
            root.display()
        );
        Ok(registry)
    }

    /// Mark language codes as known.
    pub fn with_languages<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Mark region codes as known.
    pub fn with_regions<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Mark script codes as known.
    pub fn with_scripts<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scripts.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Add the name `in_locale` uses for the language `code`.
    ///
    /// # Arguments
    /// * `in_locale` - Display locale tag (e.g., "fr", "sr-Latn")
    /// * `code` - Language code being named
    /// * `name` - The name as written in `in_locale`
    pub fn with_language_name(mut self, in_locale: &str, code: &str, name: &str) -> Self {
        self.add_name(in_locale, NameKind::Language, code, name);
        self
    }

    /// Add the name `in_locale` uses for the region `code`.
    pub fn with_region_name(mut self, in_locale: &str, code: &str, name: &str) -> Self {
        self.add_name(in_locale, NameKind::Region, code, name);
        self
    }

    /// Add the name `in_locale` uses for the script `code`.
    pub fn with_script_name(mut self, in_locale: &str, code: &str, name: &str) -> Self {
        self.add_name(in_locale, NameKind::Script, code, name);
        self
    }

    /// Override the qualifier pattern and separator for `in_locale`.
    ///
    /// # Arguments
    /// * `pattern` - Wraps the language name and qualifiers, e.g. `{0} ({1})`
    /// * `separator` - Joins qualifiers pairwise, e.g. `{0}, {1}`
    pub fn with_locale_pattern(mut self, in_locale: &str, pattern: &str, separator: &str) -> Self {
        let table = self.tables.entry(in_locale.to_string()).or_default();
        table.locale_pattern = Some(pattern.to_string());
        table.locale_separator = Some(separator.to_string());
        self
    }

    /// Number of display locales with a name table.
    pub fn display_locale_count(&self) -> usize {
        self.tables.len()
    }

    fn add_name(&mut self, in_locale: &str, kind: NameKind, code: &str, name: &str) {
        self.tables
            .entry(in_locale.to_string())
            .or_default()
            .names_mut(kind)
            .insert(code.to_string(), name.to_string());
    }

    fn add_alias(&mut self, legacy: &str, current: &str) {
        self.aliases.insert(legacy.to_string(), current.to_string());
    }

    /// Resolve a legacy language code (`iw`) to the one names are filed under (`he`).
    fn canonical_language<'a>(&'a self, code: &'a str) -> &'a str {
        self.aliases.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Display locales to consult for `in_locale`, most specific first, ending in English.
    fn lookup_chain(&self, in_locale: &LocaleIdentity) -> Vec<String> {
        let mut chain = in_locale.fallback_chain();
        let language = self.canonical_language(&in_locale.language).to_string();
        if language != in_locale.language {
            let mut aliased = in_locale.clone();
            aliased.language = language;
            chain.extend(aliased.fallback_chain());
        }
        if !chain.iter().any(|l| l == ROOT_DISPLAY_LOCALE) {
            chain.push(ROOT_DISPLAY_LOCALE.to_string());
        }
        chain
    }

    fn lookup_name(&self, chain: &[String], kind: NameKind, code: &str) -> String {
        let code = match kind {
            NameKind::Language => self.canonical_language(code),
            _ => code,
        };
        chain
            .iter()
            .filter_map(|locale| self.tables.get(locale))
            .find_map(|table| table.names(kind).get(code))
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    fn lookup_pattern(&self, chain: &[String]) -> (String, String) {
        chain
            .iter()
            .filter_map(|locale| self.tables.get(locale))
            .find_map(|table| {
                let pattern = table.locale_pattern.as_ref()?;
                let separator = table
                    .locale_separator
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LOCALE_SEPARATOR.to_string());
                Some((pattern.clone(), separator))
            })
            .unwrap_or_else(|| {
                (
                    DEFAULT_LOCALE_PATTERN.to_string(),
                    DEFAULT_LOCALE_SEPARATOR.to_string(),
                )
            })
    }
}

impl ReferenceData for LocaleRegistry {
    fn is_known_language(&self, code: &str) -> bool {
        self.languages.contains(code)
    }

    fn is_known_region(&self, code: &str) -> bool {
        self.regions.contains(code)
    }

    fn is_known_script(&self, code: &str) -> bool {
        self.scripts.contains(code)
    }

    fn display_name(&self, target: &LocaleIdentity, in_locale: &LocaleIdentity) -> String {
        let chain = self.lookup_chain(in_locale);
        let language = self.lookup_name(&chain, NameKind::Language, &target.language);

        let mut qualifiers = Vec::new();
        if let Some(script) = &target.script {
            qualifiers.push(self.lookup_name(&chain, NameKind::Script, script));
        }
        if let Some(region) = &target.region {
            qualifiers.push(self.lookup_name(&chain, NameKind::Region, region));
        }
        qualifiers.extend(target.extra.iter().cloned());

        if qualifiers.is_empty() {
            return language;
        }

        let (pattern, separator) = self.lookup_pattern(&chain);
        let joined = qualifiers
            .into_iter()
            .reduce(|acc, next| separator.replace("{0}", &acc).replace("{1}", &next))
            .unwrap_or_default();

        pattern.replace("{0}", &language).replace("{1}", &joined)
    }
}

fn is_language_code(code: &str) -> bool {
    (2..=3).contains(&code.len()) && code.chars().all(|c| c.is_ascii_lowercase())
}

// ==================== CLDR JSON ====================

#[derive(Debug, Deserialize)]
struct CldrFile {
    main: HashMap<String, CldrLocale>,
}

#[derive(Debug, Deserialize)]
struct CldrLocale {
    #[serde(rename = "localeDisplayNames", default)]
    display_names: CldrDisplayNames,
}

#[derive(Debug, Default, Deserialize)]
struct CldrDisplayNames {
    #[serde(default)]
    languages: HashMap<String, String>,
    #[serde(default)]
    territories: HashMap<String, String>,
    #[serde(default)]
    scripts: HashMap<String, String>,
    #[serde(rename = "localeDisplayPattern")]
    locale_display_pattern: Option<CldrPattern>,
}

#[derive(Debug, Deserialize)]
struct CldrPattern {
    #[serde(rename = "localePattern")]
    locale_pattern: String,
    #[serde(rename = "localeSeparator")]
    locale_separator: String,
}

const CLDR_FILES: [&str; 4] = [
    "languages.json",
    "territories.json",
    "scripts.json",
    "localeDisplayNames.json",
];

fn load_cldr_locale(dir: &Path, locale: &str) -> Result<NameTable, RegistryError> {
    let mut table = NameTable::default();

    for file in CLDR_FILES {
        let path = dir.join(file);
        if !path.exists() {
            continue;
        }
        let content = fs::read_to_string(&path).map_err(|source| RegistryError::Io {
            path: path.clone(),
            source,
        })?;
        let parsed: CldrFile = serde_json::from_str(&content)
            .map_err(|source| RegistryError::Json {
                path: path.clone(),
                source,
            })?;

        let Some(entry) = parsed.main.into_iter().find(|(key, _)| key == locale) else {
            continue;
        };
        let names = entry.1.display_names;

        // `en-alt-short` and friends are variant spellings, not codes.
        let keep = |(code, _): &(String, String)| !code.contains("-alt-");
        table.languages.extend(names.languages.into_iter().filter(keep));
        table.regions.extend(names.territories.into_iter().filter(keep));
        table.scripts.extend(names.scripts.into_iter().filter(keep));

        if let Some(pattern) = names.locale_display_pattern {
            table.locale_pattern = Some(pattern.locale_pattern);
            table.locale_separator = Some(pattern.locale_separator);
        }
    }

    Ok(table)
}

/// Small deterministic registry shared by unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_registry() -> LocaleRegistry {
    LocaleRegistry::new()
        .with_languages(["de", "en", "fr", "ja", "sr", "zh"])
        .with_regions(["DE", "FR", "JP", "RS", "TW", "US"])
        .with_scripts(["Hant", "Latn"])
        // English
        .with_language_name("en", "de", "German")
        .with_language_name("en", "en", "English")
        .with_language_name("en", "fr", "French")
        .with_language_name("en", "ja", "Japanese")
        .with_language_name("en", "sr", "Serbian")
        .with_language_name("en", "zh", "Chinese")
        .with_region_name("en", "DE", "Germany")
        .with_region_name("en", "FR", "France")
        .with_region_name("en", "JP", "Japan")
        .with_region_name("en", "RS", "Serbia")
        .with_region_name("en", "TW", "Taiwan")
        .with_region_name("en", "US", "United States")
        .with_region_name("en", "XA", "Pseudo-Accents")
        .with_script_name("en", "Hant", "Traditional")
        .with_script_name("en", "Latn", "Latin")
        // French
        .with_language_name("fr", "de", "allemand")
        .with_language_name("fr", "en", "anglais")
        .with_language_name("fr", "fr", "français")
        .with_language_name("fr", "ja", "japonais")
        .with_region_name("fr", "DE", "Allemagne")
        .with_region_name("fr", "FR", "France")
        .with_region_name("fr", "JP", "Japon")
        .with_region_name("fr", "US", "États-Unis")
        // German
        .with_language_name("de", "de", "Deutsch")
        .with_language_name("de", "en", "Englisch")
        .with_language_name("de", "fr", "Französisch")
        .with_language_name("de", "ja", "Japanisch")
        .with_region_name("de", "DE", "Deutschland")
        .with_region_name("de", "FR", "Frankreich")
        .with_region_name("de", "JP", "Japan")
        .with_region_name("de", "US", "Vereinigte Staaten")
        // Japanese
        .with_language_name("ja", "de", "ドイツ語")
        .with_language_name("ja", "en", "英語")
        .with_language_name("ja", "fr", "フランス語")
        .with_language_name("ja", "ja", "日本語")
        .with_region_name("ja", "DE", "ドイツ")
        .with_region_name("ja", "FR", "フランス")
        .with_region_name("ja", "JP", "日本")
        .with_region_name("ja", "US", "アメリカ合衆国")
        .with_locale_pattern("ja", "{0} ({1})", "{0}、{1}")
        // Serbian (Latin)
        .with_language_name("sr-Latn", "sr", "srpski")
        .with_region_name("sr-Latn", "RS", "Srbija")
        .with_script_name("sr-Latn", "Latn", "latinica")
        // Chinese (Traditional)
        .with_language_name("zh-Hant", "zh", "中文")
        .with_region_name("zh-Hant", "TW", "台灣")
        .with_script_name("zh-Hant", "Hant", "繁體")
        .with_locale_pattern("zh-Hant", "{0}（{1}）", "{0}，{1}")
}
