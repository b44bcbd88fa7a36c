//! Preview binary - shows what would be generated without writing any file
//!
//! Usage:
//!   cargo run --bin preview-locales -- b+en+US fr-rFR sw320dp en-rXA
//!   cargo run --bin preview-locales                # Uses RESOURCE_CONFIGURATIONS
//!
//! Optional:
//! - CLDR_JSON_DIR (use a cldr-json checkout instead of ICU)

use anyhow::{bail, Context, Result};
use locale_resource_generator::generate::ExonymMatrix;
use locale_resource_generator::i18n::{IcuRegistry, LocaleRegistry, ReferenceData};
use locale_resource_generator::pipeline;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("preview_locales=info".parse()?),
        )
        .init();

    let mut qualifiers: Vec<String> = std::env::args().skip(1).collect();
    if qualifiers.is_empty() {
        if let Ok(value) = std::env::var("RESOURCE_CONFIGURATIONS") {
            qualifiers = value
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
    if qualifiers.is_empty() {
        bail!("Pass resource qualifiers as arguments or set RESOURCE_CONFIGURATIONS");
    }

    let loaded: LocaleRegistry;
    let registry: &dyn ReferenceData = match std::env::var("CLDR_JSON_DIR") {
        Ok(dir) => {
            loaded = LocaleRegistry::from_cldr_json(Path::new(&dir))
                .with_context(|| format!("Failed to load CLDR data from {}", dir))?;
            &loaded
        }
        Err(_) => IcuRegistry::get(),
    };

    info!("Previewing {} resource qualifiers", qualifiers.len());

    let outcome = pipeline::soak(registry, &qualifiers);
    let matrix = ExonymMatrix::build(registry, &outcome.entries);

    println!("\n{}", "=".repeat(60));
    println!("REJECTED");
    println!("{}", "=".repeat(60));
    for rejection in &outcome.report.rejected {
        println!("  {}", rejection);
    }

    println!("\n{}", "=".repeat(60));
    println!("SUPPORTED LOCALES ({})", matrix.len());
    println!("{}", "=".repeat(60));
    for (tag, endonym) in matrix.endonyms() {
        println!("  {:<12} {}", tag, endonym);
    }

    for (in_tag, row) in matrix.rows() {
        println!("\n--- as written in {} ---", in_tag);
        for (tag, name) in row {
            println!("  {:<12} {}", tag, name);
        }
    }

    Ok(())
}
