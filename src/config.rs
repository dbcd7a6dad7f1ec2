//! Host configuration parsed from environment variables.

use std::path::PathBuf;

use leptos::prelude::LeptosOptions;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected 1-65535")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` holding the compiled `pkg/` assets.
    pub site_root: Option<PathBuf>,
    /// Backend base URL the deployment expects the client to talk to.
    pub api_url: Option<String>,
}

impl HostConfig {
    /// Build host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LAPAK_SITE_ROOT`: directory with `pkg/`, default from Leptos options
    /// - `LAPAK_API_URL`: checked against the URL compiled into the client
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_root = non_blank(lookup("LAPAK_SITE_ROOT")).map(PathBuf::from);
        let api_url = non_blank(lookup("LAPAK_API_URL"));
        Ok(Self { port, site_root, api_url })
    }

    pub fn site_root_or(&self, options: &LeptosOptions) -> PathBuf {
        self.site_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(options.site_root.as_ref()))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => match value.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::InvalidPort(value.to_owned())),
        },
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
