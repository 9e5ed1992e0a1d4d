//! CORS layer built from `[server.cors]`.
//!
//! Entries that do not parse as an origin, method, or header name are
//! skipped with a warning rather than failing startup. `Location` is exposed
//! so browser clients can follow the URL returned by a create.

use std::str::FromStr;
use std::time::Duration;

use axum::http::header::LOCATION;
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

use catalog_core::config::CorsConfig;

const WILDCARD: &str = "*";

/// Builds the CORS layer applied to every route.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.allowed_origins))
        .allow_methods(parse_entries::<Method>("method", &config.allowed_methods))
        .allow_headers(allowed_headers(&config.allowed_headers))
        .expose_headers([LOCATION])
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn allowed_origins(entries: &[String]) -> AllowOrigin {
    if is_wildcard(entries) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_entries::<HeaderValue>("origin", entries))
    }
}

fn allowed_headers(entries: &[String]) -> AllowHeaders {
    if is_wildcard(entries) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_entries::<HeaderName>("header", entries))
    }
}

fn is_wildcard(entries: &[String]) -> bool {
    entries.iter().any(|e| e.trim() == WILDCARD)
}

fn parse_entries<T: FromStr>(what: &'static str, entries: &[String]) -> Vec<T> {
    entries
        .iter()
        .filter_map(|entry| match entry.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(kind = what, entry = %entry, "Ignoring invalid CORS entry");
                None
            }
        })
        .collect()
}
