//! ICU-backed reference data, the default provider.
//!
//! Display names come from the platform ICU library (`uloc_getDisplayName`),
//! so every supported locale writes names in its own language using CLDR's
//! localized patterns. Code membership is checked against the ISO sets in
//! [`data`](super::data).

use crate::i18n::data::{LANGUAGE_CODES, REGION_CODES, SCRIPT_CODES};
use crate::i18n::registry::ReferenceData;
use crate::i18n::LocaleIdentity;
use rust_icu_uloc::ULoc;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::debug;

/// Reference data answered by ICU.
///
/// Holds no ICU state, only the code sets; each lookup builds its `ULoc`s.
#[derive(Debug, Clone)]
pub struct IcuRegistry {
    languages: BTreeSet<&'static str>,
    regions: BTreeSet<&'static str>,
    scripts: BTreeSet<&'static str>,
}

/// Global ICU registry instance (initialized lazily)
static ICU_REGISTRY: OnceLock<IcuRegistry> = OnceLock::new();

impl IcuRegistry {
    /// Get the global ICU registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn get() -> &'static IcuRegistry {
        ICU_REGISTRY.get_or_init(|| IcuRegistry {
            languages: LANGUAGE_CODES.iter().copied().collect(),
            regions: REGION_CODES.iter().copied().collect(),
            scripts: SCRIPT_CODES.iter().copied().collect(),
        })
    }
}

impl ReferenceData for IcuRegistry {
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
        let target = target.to_string();
        let in_locale = in_locale.to_string();

        match icu_display_name(&target, &in_locale) {
            Some(name) if !name.is_empty() => name,
            _ => {
                debug!("ICU has no name for {} in {}", target, in_locale);
                target
            }
        }
    }
}

/// Name of the locale `target` written in `in_locale`, as ICU renders it.
fn icu_display_name(target: &str, in_locale: &str) -> Option<String> {
    let target = ULoc::try_from(target).ok()?;
    let in_locale = ULoc::try_from(in_locale).ok()?;
    let name = target.display_name(&in_locale).ok()?;
    String::try_from(&name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(target: &str, in_locale: &str) -> String {
        IcuRegistry::get().display_name(
            &LocaleIdentity::parse(target),
            &LocaleIdentity::parse(in_locale),
        )
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_get_returns_singleton() {
        let registry1 = IcuRegistry::get();
        let registry2 = IcuRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    // ==================== Code Set Tests ====================

    #[test]
    fn test_code_sets() {
        let registry = IcuRegistry::get();
        assert!(registry.is_known_language("en"));
        assert!(registry.is_known_language("fil"));
        assert!(registry.is_known_language("iw"));
        assert!(!registry.is_known_language("sw320dp"));
        assert!(!registry.is_known_language("EN"));
        assert!(registry.is_known_region("US"));
        assert!(!registry.is_known_region("XA"));
        assert!(!registry.is_known_region("EU"));
        assert!(!registry.is_known_region("419"));
        assert!(registry.is_known_script("Latn"));
        assert!(!registry.is_known_script("latn"));
    }

    // ==================== Display Name Tests ====================

    #[test]
    fn test_exonyms_follow_display_locale() {
        assert_eq!(name("fr-FR", "en-US"), "French (France)");
        assert_eq!(name("en-US", "fr-FR"), "anglais (États-Unis)");
        assert_eq!(name("de-DE", "it-IT"), "tedesco (Germania)");
        assert_eq!(name("de-DE", "es-MX"), "alemán (Alemania)");
    }

    #[test]
    fn test_endonyms() {
        assert_eq!(name("fr-FR", "fr-FR"), "français (France)");
        assert_eq!(name("de-DE", "de-DE"), "Deutsch (Deutschland)");
        assert_eq!(name("de", "de"), "Deutsch");
        assert_eq!(name("en-US", "en-US"), "English (United States)");
    }

    #[test]
    fn test_pseudo_locale_names() {
        assert_eq!(name("en-XA", "en"), "English (Pseudo-Accents)");
        assert_eq!(name("ar-XB", "en"), "Arabic (Pseudo-Bidi)");
    }

    #[test]
    fn test_names_are_never_empty() {
        for (target, in_locale) in [("ms-MY", "ja-JP"), ("ne-NP", "ko-KR"), ("ig", "ig")] {
            assert!(!name(target, in_locale).is_empty());
        }
    }

    #[test]
    fn test_rows_are_not_english() {
        // Malay writes Japanese in Malay, not "Japanese".
        assert_ne!(name("ja-JP", "ms-MY"), "Japanese (Japan)");
        assert_ne!(name("fr-FR", "ru"), "French (France)");
        assert_ne!(name("ja-JP", "ko-KR"), "Japanese (Japan)");
    }

    #[test]
    fn test_endonyms_in_less_common_locales() {
        assert_eq!(name("ms-MY", "ms-MY"), "Melayu (Malaysia)");
        assert_eq!(name("ne-NP", "ne-NP"), "नेपाली (नेपाल)");
        assert_ne!(name("ig", "ig"), "ig");
    }
}
