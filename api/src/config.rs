use std::env;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    /// Symbol of the asset every price and market cap is denominated in.
    /// It is expected to appear as one of the tracked rows.
    pub reference_symbol: String,
    /// Glyph appended to formatted reference-denominated values.
    pub reference_unit: String,
    pub frontend_origins: Vec<String>,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set for API server")?,
            db_max_connections: parse_u32("DB_MAX_CONNECTIONS", 5),
            reference_symbol: env::var("REFERENCE_SYMBOL").unwrap_or_else(|_| "ZEC".to_string()),
            reference_unit: env::var("REFERENCE_UNIT").unwrap_or_else(|_| "ⓩ".to_string()),
            frontend_origins: parse_origins(),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .context("PORT must be a valid u16")?,
        })
    }

    /// The CORS allow-list as header values. A malformed origin aborts
    /// startup instead of being silently skipped.
    pub fn allowed_origin_headers(&self) -> Result<Vec<HeaderValue>> {
        self.frontend_origins
            .iter()
            .map(|value| {
                HeaderValue::from_str(value)
                    .with_context(|| format!("FRONTEND_ORIGINS contains an invalid origin: {value}"))
            })
            .collect()
    }
}

fn parse_origins() -> Vec<String> {
    if let Ok(list) = env::var("FRONTEND_ORIGINS") {
        split_origins(&list)
    } else if let Ok(origin) = env::var("FRONTEND_ORIGIN") {
        split_origins(&origin)
    } else {
        vec!["http://localhost:3000".to_string()]
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|item| {
            let trimmed = item.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origins(origins: Vec<String>) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/unused".to_string(),
            db_max_connections: 1,
            reference_symbol: "ZEC".to_string(),
            reference_unit: "ⓩ".to_string(),
            frontend_origins: origins,
            port: 0,
        }
    }

    #[test]
    fn valid_origins_become_header_values() {
        let config = config_with_origins(vec![
            "http://localhost:3000".to_string(),
            "https://zmc.example.com".to_string(),
        ]);
        let headers = config.allowed_origin_headers().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0], HeaderValue::from_static("http://localhost:3000"));
    }

    #[test]
    fn malformed_origin_fails_startup() {
        let config = config_with_origins(vec!["http://bad\norigin".to_string()]);
        assert!(config.allowed_origin_headers().is_err());
    }
}
