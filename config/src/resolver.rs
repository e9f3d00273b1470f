use serde::{Serialize, Deserialize};
use crate::environment::Mode;

/// Internal service address inside the cluster.
pub const CLUSTER_API_URL: &str = "http://bookstore-api-service:5000/api";
/// Local development fallback.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Which precedence branch produced the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrlSource {
    Cluster,
    Override,
    Default,
}

/// Production wins over everything, then a non-empty override, then the
/// local default. Never fails; the override is passed through untouched.
pub fn resolve(mode: &Mode, override_url: Option<&str>) -> (String, UrlSource) {
    if mode.is_production() {
        return (CLUSTER_API_URL.to_string(), UrlSource::Cluster);
    }

    match override_url {
        Some(url) if !url.is_empty() => (url.to_string(), UrlSource::Override),
        _ => (DEFAULT_API_URL.to_string(), UrlSource::Default),
    }
}

pub fn resolve_api_base_url(mode: &Mode, override_url: Option<&str>) -> String {
    resolve(mode, override_url).0
}
