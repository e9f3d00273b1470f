use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API URL is blank")]
    Blank,
    #[error("API URL has no scheme: {0}")]
    MissingScheme(String),
    #[error("API URL uses unsupported scheme: {0}")]
    UnsupportedScheme(String),
    #[error("API URL has no host: {0}")]
    MissingHost(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Advisory sanity check. Resolution never depends on the outcome.
pub fn check_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(ConfigError::Blank);
    }

    let (scheme, rest) = url
        .split_once("://")
        .filter(|(scheme, _)| !scheme.is_empty())
        .ok_or_else(|| ConfigError::MissingScheme(url.to_string()))?;

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
    }

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.starts_with(':') {
        return Err(ConfigError::MissingHost(url.to_string()));
    }

    Ok(())
}
