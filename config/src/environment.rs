use std::collections::HashMap;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Process-mode indicator set by the deployment manifests.
pub const MODE_VAR: &str = "NODE_ENV";
/// Optional API URL override for local development.
pub const OVERRIDE_VAR: &str = "REACT_APP_API_URL";

/// Serialized as the bare mode string, the same text `Display` renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Mode {
    Production,
    Development,
    Test,
    #[default]
    Unset,
    Other(String),
}

impl Mode {
    /// Exact, case-sensitive match. Only `"production"` selects production.
    pub fn parse(value: &str) -> Self {
        match value {
            "production" => Mode::Production,
            "development" => Mode::Development,
            "test" => Mode::Test,
            other => Mode::Other(other.to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Mode::Production)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Production => f.write_str("production"),
            Mode::Development => f.write_str("development"),
            Mode::Test => f.write_str("test"),
            Mode::Unset => f.write_str("unset"),
            Mode::Other(raw) => f.write_str(raw),
        }
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.to_string()
    }
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "unset" => Mode::Unset,
            other => Mode::parse(other),
        }
    }
}

/// Anything that can answer environment variable lookups.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment. Non-UTF-8 values are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Fixed set of variables, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv<'a> {
    vars: &'a [(&'a str, &'a str)],
}

impl<'a> StaticEnv<'a> {
    pub const fn new(vars: &'a [(&'a str, &'a str)]) -> Self {
        Self { vars }
    }
}

impl EnvSource for StaticEnv<'_> {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSignals {
    pub mode: Mode,
    pub override_url: Option<String>,
}

impl EnvSignals {
    pub fn read(env: &impl EnvSource) -> Self {
        Self {
            mode: env.var(MODE_VAR).map(|v| Mode::parse(&v)).unwrap_or_default(),
            override_url: env.var(OVERRIDE_VAR),
        }
    }
}
