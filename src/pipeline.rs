//! Per-variant generation pipeline.
//!
//! raw qualifiers -> normalize -> validate -> resolve endonyms, then the
//! resolved set feeds both the locale config and the `SupportedLocales`
//! module. Each variant writes only under its own directories, so variants
//! never see each other's files.

use crate::config::Config;
use crate::generate::{
    render_locale_config, render_supported_locales, ExonymMatrix, SourceLanguage,
};
use crate::i18n::{
    normalize_qualifier, is_pseudo_locale, parse_list, render_list, resolve_endonyms,
    ReferenceData, TagValidator, TaggedEndonym, ValidationReport, ValidationSummary,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// A build variant (e.g. `debug`, `release`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub pseudo_locales_enabled: bool,
}

impl Variant {
    /// Create a variant.
    ///
    /// # Arguments
    /// * `name` - Variant name, used as the output subdirectory (e.g. "debug")
    /// * `pseudo_locales_enabled` - Whether `en-XA` and `ar-XB` are kept
    pub fn new(name: impl Into<String>, pseudo_locales_enabled: bool) -> Self {
        Self {
            name: name.into(),
            pseudo_locales_enabled,
        }
    }
}

/// Where each variant's artifacts live under the build directory.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    build_dir: PathBuf,
}

impl OutputLayout {
    /// Lay out outputs under `build_dir`.
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
        }
    }

    /// The persisted `tag,endonym` list.
    pub fn soaked_list(&self, variant: &str) -> PathBuf {
        self.build_dir
            .join("intermediates")
            .join("locale-resource-generator")
            .join(variant)
            .join("soaked_locale_list.txt")
    }

    /// Resource root to register with the app for this variant.
    pub fn resource_root(&self, variant: &str) -> PathBuf {
        self.build_dir
            .join("generated")
            .join("res")
            .join("locale_resources")
            .join(variant)
    }

    /// `xml/locale_config.xml` under the variant's resource root.
    pub fn locale_config(&self, variant: &str) -> PathBuf {
        self.resource_root(variant)
            .join("xml")
            .join("locale_config.xml")
    }

    /// Source root to register with the app for this variant.
    pub fn source_root(&self, variant: &str) -> PathBuf {
        self.build_dir
            .join("generated")
            .join("source")
            .join("localeResources")
            .join(variant)
    }
}

/// Result of the soak stage.
#[derive(Debug, Clone, Default)]
pub struct SoakOutcome {
    pub entries: BTreeSet<TaggedEndonym>,
    pub report: ValidationReport,
}

/// Structured summary logged after each soak.
#[derive(Debug, Serialize)]
struct SoakReport<'a> {
    variant: &'a str,
    resolved: usize,
    validation: ValidationSummary,
}

/// Files written for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantArtifacts {
    pub variant: String,
    pub tags: Vec<String>,
    pub soaked_list: Option<PathBuf>,
    pub locale_config: PathBuf,
    pub supported_locales: PathBuf,
    pub resource_root: PathBuf,
    pub source_root: PathBuf,
}

/// The variant's qualifier set: pseudo-locales are dropped unless enabled.
pub fn variant_qualifiers(raw: &[String], variant: &Variant) -> Vec<String> {
    raw.iter()
        .filter(|qualifier| {
            variant.pseudo_locales_enabled || !is_pseudo_locale(&normalize_qualifier(qualifier))
        })
        .cloned()
        .collect()
}

/// Soak stage: normalize, validate and resolve endonyms.
///
/// # Arguments
/// * `data` - Reference data for validation and endonyms
/// * `qualifiers` - Raw resource qualifiers (e.g. "fr-rFR", "b+sr+Latn+RS")
///
/// # Returns
/// The resolved tag set, ordered by tag, and the validation report.
pub fn soak<R, I, S>(data: &R, qualifiers: I) -> SoakOutcome
where
    R: ReferenceData + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidates: Vec<String> = qualifiers
        .into_iter()
        .map(|q| normalize_qualifier(q.as_ref()))
        .collect();
    let report = TagValidator::new(data).validate(&candidates);
    let entries = resolve_endonyms(data, &report.accepted);

    SoakOutcome { entries, report }
}

/// Write the `tag,endonym` list.
pub fn write_soaked_list(entries: &BTreeSet<TaggedEndonym>, path: &Path) -> Result<()> {
    write_file(path, &render_list(entries))
}

/// Read a `tag,endonym` list written by [`write_soaked_list`].
pub fn read_soaked_list(path: &Path) -> Result<BTreeSet<TaggedEndonym>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale list {}", path.display()))?;
    parse_list(&content).with_context(|| format!("Invalid locale list {}", path.display()))
}

/// Generate-config stage.
pub fn generate_locale_config(entries: &BTreeSet<TaggedEndonym>, output: &Path) -> Result<()> {
    write_file(output, &render_locale_config(entries))?;
    info!("locale_config.xml output to {}", output.display());
    Ok(())
}

/// Generate-source stage.
///
/// # Arguments
/// * `data` - Reference data that renders the exonym matrix
/// * `entries` - The resolved tag set
/// * `source_root` - Directory the module is written under
/// * `language` - Kotlin or Rust
/// * `package` - Kotlin package; ignored for Rust
///
/// # Returns
/// The path of the written file.
pub fn generate_supported_locales<R: ReferenceData + ?Sized>(
    data: &R,
    entries: &BTreeSet<TaggedEndonym>,
    source_root: &Path,
    language: SourceLanguage,
    package: &str,
) -> Result<PathBuf> {
    let matrix = ExonymMatrix::build(data, entries);
    let source = render_supported_locales(&matrix, language, package);
    let path = source_root.join(&source.relative_path);

    write_file(&path, &source.content)?;
    info!("SupportedLocales ({}) output to {}", language, path.display());
    Ok(path)
}

/// Run all three stages for one variant.
///
/// # Arguments
/// * `config` - Qualifiers, build directory and output options
/// * `variant` - The variant to generate
/// * `data` - Reference data for validation and names
///
/// # Returns
/// The paths written, or the first stage error with the variant name attached.
pub fn run_variant<R: ReferenceData + ?Sized>(
    config: &Config,
    variant: &Variant,
    data: &R,
) -> Result<VariantArtifacts> {
    let layout = OutputLayout::new(&config.build_dir);
    let name = variant.name.as_str();

    let qualifiers = variant_qualifiers(&config.resource_configurations, variant);
    let outcome = soak(data, &qualifiers);

    info!(
        "[{}] {} of {} resource configurations are supported locales",
        name,
        outcome.entries.len(),
        qualifiers.len()
    );
    let soak_report = SoakReport {
        variant: name,
        resolved: outcome.entries.len(),
        validation: outcome.report.summary(),
    };
    match serde_json::to_string(&soak_report) {
        Ok(json) => debug!("Soak report: {}", json),
        Err(e) => debug!("Could not serialize soak report: {}", e),
    }

    let soaked_list = if config.write_intermediate {
        let path = layout.soaked_list(name);
        write_soaked_list(&outcome.entries, &path)
            .with_context(|| format!("[{}] soak stage failed", name))?;
        info!("Valid supported locales output to {}", path.display());
        Some(path)
    } else {
        None
    };

    let locale_config = layout.locale_config(name);
    generate_locale_config(&outcome.entries, &locale_config)
        .with_context(|| format!("[{}] locale config stage failed", name))?;

    let source_root = layout.source_root(name);
    let supported_locales = generate_supported_locales(
        data,
        &outcome.entries,
        &source_root,
        config.source_language,
        &config.source_package,
    )
    .with_context(|| format!("[{}] source generation stage failed", name))?;

    Ok(VariantArtifacts {
        variant: name.to_string(),
        tags: outcome.entries.iter().map(|e| e.tag.clone()).collect(),
        soaked_list,
        locale_config,
        supported_locales,
        resource_root: layout.resource_root(name),
        source_root,
    })
}

/// Run every configured variant. A failing variant is logged and does not
/// stop the others.
pub fn run_all<R: ReferenceData + ?Sized>(
    config: &Config,
    data: &R,
) -> Vec<(String, Result<VariantArtifacts>)> {
    config
        .variants
        .iter()
        .map(|variant| {
            let result = run_variant(config, variant, data);
            if let Err(e) = &result {
                error!("Variant '{}' failed: {:#}", variant.name, e);
            }
            (variant.name.clone(), result)
        })
        .collect()
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
