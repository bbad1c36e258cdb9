//! Menu preview binary - resolves the content export for one language and
//! prints it the way the site would render it.
//!
//! Usage:
//!   cargo run                                # English preview
//!   DISPLAY_LANGUAGE=de cargo run            # German preview
//!
//! Required environment variables:
//! - TRANSLATOR_URL
//!
//! Optional:
//! - TRANSLATOR_API_KEY (bearer token for the translation service)
//! - TRANSLATOR_TIMEOUT_SECS (defaults to 30)
//! - MENU_FILE (defaults to data/menu.json)
//! - DISPLAY_LANGUAGE (defaults to en)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use speisekarte::cache::TranslationCache;
use speisekarte::config::Config;
use speisekarte::content::{LocalizedPrep, LocalizedRecipe, MenuExport};
use speisekarte::i18n::{Language, LanguageStrings};
use speisekarte::localizer::{fallback_prep, fallback_recipe, ContentLocalizer};
use speisekarte::translate::HttpTranslator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("speisekarte=info".parse()?),
        )
        .init();

    info!("Starting menu preview");

    // Load configuration from environment
    let config = Config::from_env()?;
    let language = Language::from_code(&config.display_language)?;

    info!("Loading content export from {}", config.menu_file);
    let menu = MenuExport::from_file(&config.menu_file)?;

    if menu.is_empty() {
        info!("Content export contains no recipes or preps, nothing to render");
        return Ok(());
    }

    info!(
        "Loaded {} recipes and {} preps, rendering in {}",
        menu.recipes.len(),
        menu.preps.len(),
        language.name()
    );

    let translator = HttpTranslator::new(
        config.translator_url.clone(),
        config.translator_api_key.clone(),
        Duration::from_secs(config.translator_timeout_secs),
    )?;
    let cache = Arc::new(TranslationCache::new(Arc::new(translator)));
    let localizer = ContentLocalizer::new(Arc::clone(&cache));

    let strings = language.strings();

    println!();
    println!("== {} ==", strings.menu_header);
    println!();
    for recipe in &menu.recipes {
        match localizer.localize_recipe(recipe, language).await {
            Ok(localized) => print_recipe(&localized, strings),
            Err(e) => {
                warn!("Could not localize '{}' into {}: {}", recipe.name, language.name(), e);
                print_recipe(&fallback_recipe(recipe), strings);
                if !strings.translation_failure_notice.is_empty() {
                    println!("    {}", strings.translation_failure_notice);
                }
            }
        }
    }

    if !menu.preps.is_empty() {
        println!();
        println!("== {} ==", strings.preps_header);
        println!();
        for prep in &menu.preps {
            match localizer.localize_prep(prep, language).await {
                Ok(localized) => print_prep(&localized, strings),
                Err(e) => {
                    warn!("Could not localize '{}' into {}: {}", prep.name, language.name(), e);
                    print_prep(&fallback_prep(prep), strings);
                    if !strings.translation_failure_notice.is_empty() {
                        println!("    {}", strings.translation_failure_notice);
                    }
                }
            }
        }
    }
    println!();

    let report = cache.metrics().report();
    info!(
        "Translation cache: {} hits, {} misses ({:.1}% hit rate), {} service calls, {} failures",
        report.cache_hits,
        report.cache_misses,
        report.cache_hit_rate,
        report.api_calls,
        report.api_failures
    );

    Ok(())
}

fn print_recipe(recipe: &LocalizedRecipe, strings: &LanguageStrings) {
    let badge = if recipe.is_machine_translated() {
        format!(" {}", strings.machine_translated_badge)
    } else {
        String::new()
    };

    match &recipe.category {
        Some(category) => println!("- {} [{}]{}", recipe.name.text, category, badge),
        None => println!("- {}{}", recipe.name.text, badge),
    }

    if let Some(description) = &recipe.description {
        println!("    {}", description.text);
    }
}

fn print_prep(prep: &LocalizedPrep, strings: &LanguageStrings) {
    let badge = if prep.is_machine_translated() {
        format!(" {}", strings.machine_translated_badge)
    } else {
        String::new()
    };

    println!("- {}{}", prep.name.text, badge);

    if let Some(instructions) = &prep.instructions {
        println!("    {}", instructions.text);
    }
}
