use anyhow::{bail, Context, Result};
use locale_resource_generator::config::Config;
use locale_resource_generator::i18n::{IcuRegistry, LocaleRegistry, ReferenceData};
use locale_resource_generator::pipeline;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_resource_generator=info".parse()?),
        )
        .init();

    info!("Starting locale resource generation");

    // Load configuration from environment
    let config = Config::from_env().context("Invalid configuration")?;

    // Reference data: CLDR checkout if configured, ICU otherwise
    let loaded: LocaleRegistry;
    let registry: &dyn ReferenceData = match &config.cldr_json_dir {
        Some(dir) => {
            info!("Loading CLDR display names from {}", dir.display());
            loaded = LocaleRegistry::from_cldr_json(dir)
                .with_context(|| format!("Failed to load CLDR data from {}", dir.display()))?;
            &loaded
        }
        None => IcuRegistry::get(),
    };

    let results = pipeline::run_all(&config, registry);

    let mut failed = Vec::new();
    for (variant, result) in &results {
        match result {
            Ok(artifacts) => {
                info!(
                    "✓ {}: {} locales; resource root {}, source root {}",
                    variant,
                    artifacts.tags.len(),
                    artifacts.resource_root.display(),
                    artifacts.source_root.display()
                );
            }
            Err(_) => failed.push(variant.as_str()),
        }
    }

    if !failed.is_empty() {
        bail!("Generation failed for variant(s): {}", failed.join(", "));
    }

    info!("Locale resources generated for {} variant(s)", results.len());
    Ok(())
}
