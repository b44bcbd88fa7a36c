//! Language tag handling: everything between raw resource qualifiers and the
//! validated, named tag set the generators consume.
//!
//! # Architecture
//!
//! - `tag`: Qualifier normalization and the structured `LocaleIdentity`
//! - `registry`: The `ReferenceData` trait and the table-backed `LocaleRegistry`
//! - `icu`: The default `ReferenceData`, answered by the platform ICU library
//! - `data`: ISO code sets a tag's subtags are checked against
//! - `validator`: Drops candidates whose subtags are not known codes
//! - `endonym`: Pairs each tag with its self-name and reads/writes the `tag,endonym` list
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_resource_generator::i18n::{normalize_qualifiers, IcuRegistry, TagValidator};
//!
//! let candidates = normalize_qualifiers(["b+en+US", "fr-rFR", "sw320dp"]);
//! let report = TagValidator::new(IcuRegistry::get()).validate(&candidates);
//! assert_eq!(report.accepted, vec!["en-US", "fr-FR"]);
//! ```

mod data;
mod endonym;
mod icu;
mod registry;
mod tag;
mod validator;

pub use endonym::{endonym_for, parse_list, render_list, resolve_endonyms, TaggedEndonym};
pub use icu::IcuRegistry;
pub use registry::{LocaleRegistry, ReferenceData};
pub use tag::{
    is_pseudo_locale, normalize_qualifier, normalize_qualifiers, LocaleIdentity, PSEUDO_LOCALES,
};
pub use validator::{TagValidator, ValidationReport, ValidationSummary};

#[cfg(test)]
pub(crate) use registry::sample_registry;
