use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::league::League;

pub const CATALOG_ENDPOINT: &str = "/api/leagues";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("page origin unavailable")]
    NoOrigin,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend answered HTTP {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Payload(String),
}

/// Loads the league catalog once, in backend order.
///
/// Any failure is logged and yields an empty catalog; nothing is retried.
pub async fn fetch_catalog() -> Vec<League> {
    catalog_or_empty(try_fetch_catalog().await)
}

async fn try_fetch_catalog() -> Result<Vec<League>, CatalogError> {
    let url = endpoint_url(CATALOG_ENDPOINT)?;
    let response = reqwest::get(url).await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_catalog(&body)
}

// reqwest needs an absolute URL, even in the browser.
fn endpoint_url(path: &str) -> Result<String, CatalogError> {
    let origin = web_sys::window()
        .ok_or(CatalogError::NoOrigin)?
        .location()
        .origin()
        .map_err(|_| CatalogError::NoOrigin)?;
    Ok(format!("{origin}{path}"))
}

pub fn catalog_or_empty(result: Result<Vec<League>, CatalogError>) -> Vec<League> {
    match result {
        Ok(leagues) => {
            log::debug!("loaded {} leagues", leagues.len());
            leagues
        }
        Err(err) => {
            log::warn!("league catalog unavailable: {err}");
            Vec::new()
        }
    }
}

/// Parses a `{ "leagues": [...] }` payload.
///
/// Entries without a usable slug and name are skipped, as are repeated slugs
/// after their first occurrence.
pub fn parse_catalog(body: &str) -> Result<Vec<League>, CatalogError> {
    let payload: Value =
        serde_json::from_str(body).map_err(|e| CatalogError::Payload(e.to_string()))?;

    let entries = payload
        .get("leagues")
        .and_then(Value::as_array)
        .ok_or_else(|| CatalogError::Payload("missing `leagues` array".to_string()))?;

    let mut seen = HashSet::new();
    let mut leagues = Vec::with_capacity(entries.len());
    for entry in entries {
        let league = match League::deserialize(entry) {
            Ok(league) => league,
            Err(e) => {
                log::warn!("skipping catalog entry {entry}: {e}");
                continue;
            }
        };
        if !seen.insert(league.slug.clone()) {
            log::warn!("skipping duplicate league '{}'", league.slug);
            continue;
        }
        leagues.push(league);
    }

    Ok(leagues)
}
