use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::places::Coordinates;
use crate::ConfigError;

/// Santiago del Estero, Argentina.
const DEFAULT_ORIGIN: &str = "-27.7833,-64.2667";

/// Upper bound the nearby-search endpoint accepts for `radius`.
const MAX_RADIUS_M: u32 = 50_000;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the real environment so tests
/// can drive them with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let google_maps_api_key = require("GOOGLE_MAPS_API_KEY")?;

    let origin = or_default("PLACESCOUT_ORIGIN", DEFAULT_ORIGIN)
        .parse::<Coordinates>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    let radius_m = parse_u32("PLACESCOUT_RADIUS_M", "5000")?;
    if radius_m == 0 || radius_m > MAX_RADIUS_M {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_RADIUS_M".to_string(),
            reason: format!("must be between 1 and {MAX_RADIUS_M} meters, got {radius_m}"),
        });
    }

    let categories_path = PathBuf::from(or_default(
        "PLACESCOUT_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));
    let output_dir = PathBuf::from(or_default("PLACESCOUT_OUTPUT_DIR", "./data"));
    let log_level = or_default("PLACESCOUT_LOG_LEVEL", "info");

    let detail_concurrency = parse_usize("PLACESCOUT_DETAIL_CONCURRENCY", "5")?;
    if detail_concurrency == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_DETAIL_CONCURRENCY".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let page_delay_ms = parse_u64("PLACESCOUT_PAGE_DELAY_MS", "2000")?;
    let request_timeout_secs = parse_u64("PLACESCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PLACESCOUT_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("PLACESCOUT_USER_AGENT", "placescout/0.1 (tourism-info)");
    let max_retries = parse_u32("PLACESCOUT_MAX_RETRIES", "0")?;
    let retry_backoff_base_secs = parse_u64("PLACESCOUT_RETRY_BACKOFF_BASE_SECS", "2")?;

    let places_base_url = or_default("PLACESCOUT_PLACES_BASE_URL", "https://maps.googleapis.com");
    let summary_base_url = or_default("PLACESCOUT_SUMMARY_BASE_URL", "https://en.wikipedia.org");

    Ok(AppConfig {
        google_maps_api_key,
        origin,
        radius_m,
        categories_path,
        output_dir,
        log_level,
        detail_concurrency,
        page_delay_ms,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        places_base_url,
        summary_base_url,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
