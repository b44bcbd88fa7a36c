use crate::error::ConfigError;
use crate::generate::{SourceLanguage, DEFAULT_SOURCE_PACKAGE};
use crate::pipeline::Variant;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Input
    pub resource_configurations: Vec<String>,

    // Variants
    pub variants: Vec<Variant>,

    // Output
    pub build_dir: PathBuf,
    pub source_package: String,
    pub source_language: SourceLanguage,
    pub write_intermediate: bool,

    // Reference data
    pub cldr_json_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resource_configurations = split_list(
            &lookup("RESOURCE_CONFIGURATIONS")
                .ok_or(ConfigError::Missing("RESOURCE_CONFIGURATIONS"))?,
        );

        let variant_names = split_list(
            &lookup("BUILD_VARIANTS").unwrap_or_else(|| "debug,release".to_string()),
        );
        if variant_names.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "BUILD_VARIANTS",
                value: String::new(),
            });
        }
        let pseudo_variants =
            split_list(&lookup("PSEUDO_LOCALE_VARIANTS").unwrap_or_else(|| "debug".to_string()));
        let variants = variant_names
            .into_iter()
            .map(|name| {
                let pseudo_locales_enabled = pseudo_variants.contains(&name);
                Variant::new(name, pseudo_locales_enabled)
            })
            .collect();

        let source_package = lookup("SOURCE_PACKAGE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE_PACKAGE.to_string());

        let source_language = match lookup("GENERATED_SOURCE_LANGUAGE") {
            Some(value) => value.parse()?,
            None => SourceLanguage::default(),
        };

        let write_intermediate = match lookup("WRITE_INTERMEDIATE") {
            Some(value) => parse_bool("WRITE_INTERMEDIATE", &value)?,
            None => true,
        };

        Ok(Self {
            resource_configurations,
            variants,
            build_dir: lookup("BUILD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("build")),
            source_package,
            source_language,
            write_intermediate,
            cldr_json_dir: lookup("CLDR_JSON_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

/// Split on commas and whitespace, dropping empty items.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
