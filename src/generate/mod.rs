//! Output generation from the resolved tag set.
//!
//! - `locale_config`: the `locale_config.xml` resource
//! - `exonyms`: the N x N name matrix
//! - `source`: the `SupportedLocales` module built from that matrix

mod exonyms;
mod locale_config;
mod source;

pub use exonyms::ExonymMatrix;
pub use locale_config::{render_locale_config, ANDROID_NAMESPACE_PREFIX, ANDROID_NAMESPACE_URI};
pub use source::{
    render_supported_locales, GeneratedSource, SourceLanguage, DEFAULT_SOURCE_PACKAGE,
    OUTPUT_CLASS_NAME,
};
