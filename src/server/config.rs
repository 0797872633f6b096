use leptos::config::LeptosOptions;
use reqwest::Url;
use thiserror::Error;

pub const API_ORIGIN_VAR: &str = "LEAGUES_API_ORIGIN";
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:5000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load Leptos configuration: {0}")]
    Leptos(String),

    #[error("invalid LEAGUES_API_ORIGIN '{value}': {reason}")]
    InvalidOrigin { value: String, reason: String },
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub leptos: LeptosOptions,
    /// Backend origin without a trailing slash, e.g. `http://127.0.0.1:5000`.
    pub api_origin: String,
}

impl ServerConfig {
    /// Reads `Cargo.toml` metadata / `LEPTOS_*` variables and `LEAGUES_API_ORIGIN`.
    pub fn load() -> Result<Self, ConfigError> {
        let leptos = leptos::config::get_configuration(None)
            .map_err(|e| ConfigError::Leptos(e.to_string()))?
            .leptos_options;
        let api_origin = parse_api_origin(std::env::var(API_ORIGIN_VAR).ok().as_deref())?;

        Ok(Self { leptos, api_origin })
    }
}

pub fn parse_api_origin(value: Option<&str>) -> Result<String, ConfigError> {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => DEFAULT_API_ORIGIN,
    };
    let invalid = |reason: &str| ConfigError::InvalidOrigin {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(value).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query or fragment"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
