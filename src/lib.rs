//! Build-time generator for Android per-app language resources.
//!
//! Turns a project's resource configurations into a `locale_config.xml`
//! resource and a `SupportedLocales` source module listing the supported
//! language tags with their endonyms and exonyms.

pub mod config;
pub mod error;
pub mod generate;
pub mod i18n;
pub mod pipeline;
