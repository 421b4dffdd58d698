//! Handlers for `collect` and `categories`.
//!
//! Categories run strictly one after another. A category whose search fails
//! part-way still contributes whatever it gathered; only configuration and
//! output errors abort the command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use placescout_core::{AppConfig, CategoriesFile, Category, CategoryResultSet};
use placescout_scraper::{
    Enricher, HttpSettings, PlacesClient, SearchDriver, SearchSettings, SummaryClient,
};

use crate::export::{export, OutputFormat};

/// Options for a `collect` run, as given on the command line.
#[derive(Debug)]
pub(crate) struct CollectOptions {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub category: Option<String>,
    pub descriptions: bool,
}

pub(crate) fn http_settings(config: &AppConfig) -> HttpSettings {
    HttpSettings {
        timeout_secs: config.request_timeout_secs,
        user_agent: config.user_agent.clone(),
        max_retries: config.max_retries,
        backoff_base_secs: config.retry_backoff_base_secs,
    }
}

/// Wires the Places and summary clients into a [`SearchDriver`].
///
/// # Errors
///
/// Returns an error if either HTTP client cannot be constructed or a base
/// URL does not parse.
pub(crate) fn build_search_driver(
    config: &AppConfig,
    descriptions: bool,
) -> anyhow::Result<SearchDriver> {
    let http = http_settings(config);

    let places = PlacesClient::with_base_url(
        &config.google_maps_api_key,
        &config.places_base_url,
        &http,
    )
    .context("failed to build Places client")?;

    let summaries = if descriptions {
        Some(
            SummaryClient::with_base_url(&config.summary_base_url, &http)
                .context("failed to build summary client")?,
        )
    } else {
        None
    };

    let settings = SearchSettings {
        detail_concurrency: config.detail_concurrency,
        page_delay: Duration::from_millis(config.page_delay_ms),
        ..SearchSettings::new(config.origin, config.radius_m)
    };

    Ok(SearchDriver::new(
        places.clone(),
        Enricher::new(places, summaries),
        settings,
    ))
}

/// Resolves the categories to run.
///
/// With a filter, the named category is returned even if disabled, and an
/// unknown name is an error. Without one, every enabled category is returned.
pub(crate) fn select_categories<'a>(
    file: &'a CategoriesFile,
    filter: Option<&'a str>,
) -> anyhow::Result<Vec<&'a Category>> {
    let selected: Vec<&Category> = file.selected(filter).collect();
    if let (Some(label), true) = (filter, selected.is_empty()) {
        anyhow::bail!("category '{label}' not found in categories file");
    }
    Ok(selected)
}

/// Runs every category through `driver` in order.
pub(crate) async fn collect_categories(
    driver: &SearchDriver,
    categories: &[&Category],
) -> CategoryResultSet {
    let mut results = CategoryResultSet::new();
    for category in categories {
        tracing::info!(
            category = %category.label,
            place_type = %category.place_type,
            "collecting category"
        );
        let places = driver.search_all(category).await;
        results.insert(category.label.clone(), places);
    }
    results
}

/// Collects every selected category and writes the result set to disk.
///
/// # Errors
///
/// Returns an error if the categories file cannot be loaded, the category
/// filter matches nothing, a client cannot be built, or the output cannot be
/// written. Search failures are logged and never surface here.
pub(crate) async fn run_collect(config: &AppConfig, opts: CollectOptions) -> anyhow::Result<()> {
    let file = placescout_core::load_categories(&config.categories_path)?;
    let categories = select_categories(&file, opts.category.as_deref())?;
    if categories.is_empty() {
        println!(
            "no enabled categories in {}; nothing to collect",
            config.categories_path.display()
        );
        return Ok(());
    }

    let driver = build_search_driver(config, opts.descriptions)?;
    let results = collect_categories(&driver, &categories).await;

    let path = opts
        .output
        .unwrap_or_else(|| opts.format.default_path(&config.output_dir));
    export(&results, opts.format, &path)?;

    println!(
        "collected {} places across {} categories → {}",
        results.total_places(),
        results.len(),
        path.display()
    );
    Ok(())
}

/// Prints every configured category and whether it runs by default.
///
/// # Errors
///
/// Returns an error if the categories file cannot be loaded.
pub(crate) fn run_categories(config: &AppConfig) -> anyhow::Result<()> {
    let file = placescout_core::load_categories(&config.categories_path)?;
    if file.categories.is_empty() {
        println!("no categories in {}", config.categories_path.display());
        return Ok(());
    }

    for category in &file.categories {
        let status = if category.enabled { "enabled" } else { "disabled" };
        println!(
            "{:<16} {:<24} {status}",
            category.label, category.place_type
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
