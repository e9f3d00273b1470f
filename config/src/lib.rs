pub mod environment;
pub mod resolver;
pub mod error;
pub mod config;

pub use environment::{
    EnvSignals, EnvSource, Mode, ProcessEnv, StaticEnv, MODE_VAR, OVERRIDE_VAR,
};
pub use resolver::{
    resolve, resolve_api_base_url, UrlSource, CLUSTER_API_URL, DEFAULT_API_URL,
};
pub use error::{check_url, ConfigError, Result};
pub use config::{api_base_url, Config, CONFIG};
