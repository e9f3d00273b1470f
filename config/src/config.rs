use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use tracing::{debug, info, warn};

use crate::environment::{EnvSignals, EnvSource, Mode, ProcessEnv};
use crate::error::{check_url, Result};
use crate::resolver::{resolve, UrlSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub mode: Mode,
    pub api_base_url: String,
    pub source: UrlSource,
}

impl Config {
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self::from_signals(EnvSignals::read(env))
    }

    pub fn from_signals(signals: EnvSignals) -> Self {
        let EnvSignals { mode, override_url } = signals;
        let (api_base_url, source) = resolve(&mode, override_url.as_deref());

        match source {
            UrlSource::Cluster if override_url.as_deref().is_some_and(|u| !u.is_empty()) => {
                debug!(
                    override_url = ?override_url,
                    "Ignoring API URL override in production mode"
                );
            }
            UrlSource::Override => {
                if let Err(e) = check_url(&api_base_url) {
                    warn!("API URL override looks malformed, using it anyway: {}", e);
                }
            }
            _ => {}
        }

        info!(mode = %mode, source = ?source, url = %api_base_url, "Resolved API base URL");

        Self { mode, api_base_url, source }
    }

    /// Joins the base URL and a resource path with exactly one `/`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn check(&self) -> Result<()> {
        check_url(&self.api_base_url)
    }
}

/// Resolved once from the process environment on first access.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| Config::from_env(&ProcessEnv));

pub fn api_base_url() -> &'static str {
    CONFIG.api_base_url.as_str()
}
